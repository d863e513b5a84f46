//! Parser unit tests, split by the grammar feature under test.

mod call_and_array;
mod errors;
