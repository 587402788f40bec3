//! Quote pool loading and validation.
//!
//! Everything here runs before the engine sees a single quote: raw payloads
//! are validated into [`Quote`](crate::engine::Quote) records at this
//! boundary and malformed entries never reach a round.

mod error;
mod raw;
mod source;

pub use error::QuoteError;
pub use raw::{parse_quotes, validate_quotes, RawQuote, UNKNOWN_AUTHOR};
pub use source::{load_quotes, BuiltinQuoteSource, FileQuoteSource, HttpQuoteSource, QuoteSource};
