//! # Studiobook Core
//!
//! Domain types and rules for the studio booking directory: the studio
//! catalog and its queries, the one-hour slot generator, and the booking
//! ledger that guards against double-booking a studio slot.
//!
//! Nothing in this crate performs I/O on its own except [`catalog::StudioCatalog::load`].
//! The ledger persists through whatever [`storage::KeyValueStore`] it is given.

pub mod catalog;
pub mod directory;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod slots;
pub mod storage;
