//! Knowledge-base wire codec for Incumbent.
//!
//! Converts the claim/snak encoding shared by the knowledge base and the
//! extraction backend into [`incumbent_core`] domain types, and resolves
//! ambiguous temporal qualifiers into canonical date ranges. Pure and
//! synchronous; no HTTP or storage dependencies — the caller that fetches
//! claims owns all I/O and concurrency concerns.
//!
//! # Quick start
//!
//! ```
//! use incumbent_wikidata::qualifier::{QualifierMap, START_DATE, TimeSnak};
//! use incumbent_wikidata::{parse_time, resolve_date_range};
//!
//! let date = parse_time("+1976-11-02T00:00:00Z", 11).unwrap();
//! assert_eq!(date.to_string(), "November 2, 1976");
//!
//! let mut qualifiers = QualifierMap::new();
//! qualifiers.insert(START_DATE.to_string(), vec![TimeSnak::new(
//!   "+1976-00-00T00:00:00Z",
//!   9,
//! )]);
//! let range = resolve_date_range(&qualifiers);
//! assert_eq!(range.display(), "1976 – present");
//! ```

pub mod claim;
pub mod error;
pub mod qualifier;
pub mod time;

pub use claim::{statement_from_claim, statements_from_claims};
pub use error::{Error, Result};
pub use qualifier::resolve_date_range;
pub use time::parse_time;
