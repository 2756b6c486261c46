//! Parser probes for message-formatting.
//!
//! Each fixture prints the segments of a handful of representative
//! assistant messages and checks the outcome. None needs network access.

pub mod helpers;
pub mod test_01_bold_spans;
pub mod test_02_list_lines;
pub mod test_03_database_attribution;
pub mod test_04_malformed_markup;
pub mod test_05_streaming;
pub mod test_06_options_validation;
