//! Partial-precision calendar dates.
//!
//! The knowledge base records dates at year, month, or day granularity. A
//! value's precision code decides which components are meaningful; display
//! rendering is driven by precision, never by which components happen to be
//! populated.

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

// ─── Precision ───────────────────────────────────────────────────────────────

/// Granularity of a date value; mirrors the knowledge base's precision
/// codes. Declared coarsest-first so that `Ord` ranks more specific values
/// higher.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
  Year  = 9,
  Month = 10,
  Day   = 11,
}

impl Precision {
  /// Map a raw precision code to a `Precision`. Codes outside 9..=11 fall
  /// back to `Year`, the coarsest defined rendering.
  pub fn from_code(code: u8) -> Self {
    match code {
      11 => Self::Day,
      10 => Self::Month,
      _ => Self::Year,
    }
  }

  /// The wire code for this precision.
  pub fn code(self) -> u8 { self as u8 }
}

// ─── ParsedDate ──────────────────────────────────────────────────────────────

/// A date known to some precision. `month`/`day` are `None` when the source
/// marks them unspecified.
///
/// Invariant (upheld by the wire parser): `Day` precision implies month and
/// day present; `Month` implies month present and day absent; `Year` implies
/// neither. Display degrades gracefully when a value claims more precision
/// than its populated components support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
  pub year:      i32,
  pub month:     Option<u32>,
  pub day:       Option<u32>,
  pub precision: Precision,
}

impl ParsedDate {
  /// A year-precision date.
  pub fn from_year(year: i32) -> Self {
    Self {
      year,
      month: None,
      day: None,
      precision: Precision::Year,
    }
  }

  /// A month-precision date.
  pub fn from_year_month(year: i32, month: u32) -> Self {
    Self {
      year,
      month: Some(month),
      day: None,
      precision: Precision::Month,
    }
  }

  /// A day-precision date.
  pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
    Self {
      year,
      month: Some(month),
      day: Some(day),
      precision: Precision::Day,
    }
  }

  /// Sort key for chronological comparison. Unspecified components sort
  /// before any specified one, so "1976" precedes "January 1976".
  pub fn chronological_key(&self) -> (i32, u32, u32) {
    (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
  }
}

/// English month name for a 1-based month number, `None` out of range.
fn month_name(month: u32) -> Option<&'static str> {
  u8::try_from(month)
    .ok()
    .and_then(|m| Month::try_from(m).ok())
    .map(|m| m.name())
}

impl fmt::Display for ParsedDate {
  /// Precision-driven rendering: a year-precision value never shows a month
  /// name even if a month component is populated. A value missing components
  /// at its claimed precision degrades to the coarser form.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let month = self.month.and_then(month_name);
    match (self.precision, month, self.day) {
      (Precision::Day, Some(m), Some(d)) => {
        write!(f, "{m} {d}, {}", self.year)
      }
      (Precision::Day | Precision::Month, Some(m), _) => {
        write!(f, "{m} {}", self.year)
      }
      _ => write!(f, "{}", self.year),
    }
  }
}

// ─── ResolvedDateRange ───────────────────────────────────────────────────────

/// Canonical start/end dates resolved from a statement's qualifiers.
///
/// Each side is resolved independently; all four presence combinations are
/// meaningful ("unknown start", "no end recorded", …). Recomputed whenever
/// the source qualifiers change; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDateRange {
  pub start: Option<ParsedDate>,
  pub end:   Option<ParsedDate>,
}

impl ResolvedDateRange {
  /// Reviewer-facing rendering of the range.
  pub fn display(&self) -> String {
    match (&self.start, &self.end) {
      (Some(start), Some(end)) => format!("{start} – {end}"),
      (Some(start), None) => format!("{start} – present"),
      (None, Some(end)) => format!("until {end}"),
      (None, None) => "dates not specified".to_string(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
