//! Message formatting for AI chat responses.
//!
//! Parses the markdown-like text a chat model returns (bold, italics,
//! numbered and bullet lists, "from our database" attributions) into an
//! ordered list of typed segments a UI can render directly.
//!
//! ```
//! use message_formatting::{parse, SegmentType};
//!
//! let msg = parse("**Bank of America** (from our database) has significant presence");
//! assert_eq!(msg.segments()[0].segment_type(), SegmentType::Bold);
//! assert_eq!(msg.database_business_names(), vec!["Bank of America"]);
//! ```

pub mod error;
pub mod options;
pub mod parser;
pub mod stream;
pub mod types;

// Primary exports
pub use error::{Error, Result};
pub use options::{FormatterOptions, FormatterOptionsBuilder};
pub use parser::{MessageFormatter, parse};
pub use stream::{MessageAccumulator, format_stream};
pub use types::*;
