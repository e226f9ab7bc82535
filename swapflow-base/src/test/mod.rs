mod test_object;
pub use test_object::{TestEntry, TestEntryId};
