pub mod block;
pub mod cursor;
pub mod date;
pub mod hex;
pub mod list;
pub mod name;

pub use block::BlockNumRule;
pub use cursor::CursorRule;
pub use date::DateTimeRule;
pub use hex::{HexListRule, HexRule, TransactionIdRule};
pub use list::DelimitedListRule;
pub use name::{ExtendedNameRule, NameRule};

use crate::{errors::Violation, types::FieldValue};

/// A validation rule applied to one field's value.
///
/// Rules are pure: they never mutate their input and hold no state beyond
/// immutable configuration captured at construction.
pub trait Rule: Send + Sync {
    /// Checks `value` for the field named `field`, returning the violated
    /// constraint on failure.
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation>;
}
