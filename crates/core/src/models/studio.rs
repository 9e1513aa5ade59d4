use serde::{Deserialize, Serialize};

use crate::{
    errors::StudioResult,
    models::slot::{Slot, TimeOfDay},
    slots::generate_slots,
};

/// A studio as it appears in the dataset file.
///
/// Field names follow the dataset's PascalCase layout so the file can be
/// served back to clients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Studio {
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub location: Location,
    pub contact: Contact,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub price_per_hour: f64,
    pub currency: String,
    pub availability: Availability,
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Studio {
    /// Bookable one-hour slots derived from the studio's opening hours.
    pub fn slots(&self) -> StudioResult<Vec<Slot>> {
        let open: TimeOfDay = self.availability.open.parse()?;
        let close: TimeOfDay = self.availability.close.parse()?;
        Ok(generate_slots(open, close))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub city: String,
    pub area: String,
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// Opening hours as literal strings, e.g. `"9:00"` or `"17"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Availability {
    pub open: String,
    pub close: String,
}
