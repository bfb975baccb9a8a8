//! Core types and the merge engine for the Incumbent review tool.
//!
//! Incumbent reconciles machine-extracted biographical claims about
//! politicians against the claims already recorded in a structured
//! knowledge base. This crate holds the domain model (partial-precision
//! dates, typed statements, derived identity keys) and the keyed merge
//! that produces the reviewer-facing comparison groups.
//!
//! Deliberately free of wire-format, HTTP, and storage dependencies.
//! Everything in here is a pure, synchronous computation over in-memory
//! values; the crate holds no state and is safe to call from any number of
//! concurrent call sites.

pub mod date;
pub mod merge;
pub mod statement;

pub use merge::{is_value_identical, merge};
