//! One-hour slot generation from opening hours.

use crate::models::slot::{Slot, TimeOfDay};

/// Generates the bookable slots between `open` and `close`.
///
/// Yields one slot per hour `h` with `open.hour() <= h < close.hour()`, in
/// ascending order. When `close` is not after `open` the result is empty.
pub fn generate_slots(open: TimeOfDay, close: TimeOfDay) -> Vec<Slot> {
    (open.hour()..close.hour()).map(Slot::starting_at).collect()
}

/// Display strings for [`generate_slots`], as offered to a booking form.
pub fn slot_labels(open: TimeOfDay, close: TimeOfDay) -> Vec<String> {
    generate_slots(open, close)
        .iter()
        .map(ToString::to_string)
        .collect()
}
