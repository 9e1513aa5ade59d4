//! # Booking Ledger
//!
//! Append-only collection of confirmed bookings, persisted as a single JSON
//! array under one key of an injected [`KeyValueStore`].
//!
//! ## Submission flow
//!
//! 1. **Validating**: date, slot, name and email must be non-empty.
//! 2. **Checking conflict**: no stored record may hold the same studio, date
//!    and slot. Comparison is exact string equality.
//! 3. **Committed**: the record is appended and the whole collection written
//!    back.
//!
//! A submission rejected at step 1 or 2 never touches the store.
//!
//! The read-modify-write in step 3 takes no lock. Callers sharing a ledger
//! between tasks must serialize submissions themselves.

use tracing::{debug, info, warn};

use crate::{
    errors::{StudioError, StudioResult},
    models::booking::{BookingRecord, BookingRequest},
    storage::KeyValueStore,
};

/// Key the ledger uses unless configured otherwise.
pub const DEFAULT_BOOKINGS_KEY: &str = "bookings";

pub struct BookingLedger<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BookingLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_BOOKINGS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads every stored booking, oldest first.
    ///
    /// # Errors
    ///
    /// * `StudioError::CorruptStorage` - the stored blob is not a booking list
    /// * `StudioError::Storage` - the backing store failed
    pub async fn list_bookings(&self) -> StudioResult<Vec<BookingRecord>> {
        let Some(raw) = self.store.load(&self.key).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| {
            warn!("Stored bookings under '{}' are unreadable: {}", self.key, e);
            StudioError::CorruptStorage(format!(
                "bookings under '{}' could not be parsed: {}",
                self.key, e
            ))
        })
    }

    /// Validates and records a booking.
    ///
    /// # Errors
    ///
    /// * `StudioError::Validation` - a required field is empty
    /// * `StudioError::Conflict` - the studio slot is already booked for that date
    /// * `StudioError::CorruptStorage` / `StudioError::Storage` - the existing
    ///   collection could not be read or the new one written
    pub async fn submit_booking(&self, candidate: BookingRequest) -> StudioResult<BookingRecord> {
        debug!(
            "Validating booking: studio_id={}, date={}, slot={}",
            candidate.studio_id, candidate.date, candidate.time_slot
        );
        let missing = candidate.missing_fields();
        if !missing.is_empty() {
            warn!("Rejected booking with missing fields: {:?}", missing);
            return Err(StudioError::Validation(format!(
                "Please fill in all fields (missing: {})",
                missing.join(", ")
            )));
        }

        debug!("Checking for conflicting bookings");
        let mut bookings = self.list_bookings().await?;
        let taken = bookings
            .iter()
            .any(|b| b.occupies(candidate.studio_id, &candidate.date, &candidate.time_slot));
        if taken {
            warn!(
                "Rejected booking: studio {} is already booked on {} at {}",
                candidate.studio_id, candidate.date, candidate.time_slot
            );
            return Err(StudioError::Conflict(format!(
                "Studio {} is already booked on {} for {}",
                candidate.studio_id, candidate.date, candidate.time_slot
            )));
        }

        let record = candidate.into_record();
        bookings.push(record.clone());
        let serialized = serde_json::to_string(&bookings)
            .map_err(|e| StudioError::Internal(Box::new(e)))?;
        self.store.save(&self.key, &serialized).await?;

        info!(
            "Booking committed: studio_id={}, date={}, slot={}, total={}",
            record.studio_id,
            record.date,
            record.time_slot,
            bookings.len()
        );
        Ok(record)
    }

    /// Drops every booking. Clearing an empty ledger succeeds.
    pub async fn clear_all_bookings(&self) -> StudioResult<()> {
        self.store.remove(&self.key).await?;
        info!("Cleared all bookings under '{}'", self.key);
        Ok(())
    }
}
