use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A confirmed booking as persisted in the ledger.
///
/// The camelCase field names are the stored layout and must stay stable so
/// previously written ledgers keep deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub studio_id: u32,
    pub studio_name: String,
    pub date: String,
    pub time_slot: String,
    pub name: String,
    pub email: String,
}

impl BookingRecord {
    /// Whether this record occupies the given studio, date and slot.
    pub fn occupies(&self, studio_id: u32, date: &str, time_slot: &str) -> bool {
        self.studio_id == studio_id && self.date == date && self.time_slot == time_slot
    }

    /// Long-form date such as `"Sunday, June 1, 2025"`.
    ///
    /// Dates that are not `YYYY-MM-DD` come back untouched.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// A candidate booking submitted to the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub studio_id: u32,
    #[serde(default)]
    pub studio_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl BookingRequest {
    /// Names of required fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("date", &self.date),
            ("timeSlot", &self.time_slot),
            ("name", &self.name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn into_record(self) -> BookingRecord {
        BookingRecord {
            studio_id: self.studio_id,
            studio_name: self.studio_name,
            date: self.date,
            time_slot: self.time_slot,
            name: self.name,
            email: self.email,
        }
    }
}
