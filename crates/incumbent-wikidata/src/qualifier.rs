//! Qualifier resolution: one canonical start and end date per statement.
//!
//! A qualifier slot may carry several competing time snaks — a data-quality
//! condition in the knowledge base (one observed statement carries nine
//! start dates), not an error. Resolution is deterministic: the most
//! precise snak wins; among equally precise snaks the earliest wins for
//! start dates and the latest for end dates, on the assumption that the
//! union of recorded extremes best approximates the true tenure.

use std::{cmp::Ordering, collections::BTreeMap};

use incumbent_core::date::{ParsedDate, ResolvedDateRange};
use serde::{Deserialize, Serialize};

use crate::time::parse_time;

/// Qualifier property for the start of a tenure.
pub const START_DATE: &str = "P580";
/// Qualifier property for the end of a tenure.
pub const END_DATE: &str = "P582";

// ─── Snaks ───────────────────────────────────────────────────────────────────

/// One time-valued qualifier snak as it appears on the wire. Either half
/// may be missing ("somevalue"/"novalue" snaks); such snaks are skipped
/// during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnak {
  pub time:      Option<String>,
  pub precision: Option<u8>,
}

impl TimeSnak {
  pub fn new(time: &str, precision: u8) -> Self {
    Self {
      time:      Some(time.to_string()),
      precision: Some(precision),
    }
  }
}

/// Qualifier slots keyed by property identifier. Slots other than
/// [`START_DATE`] and [`END_DATE`] are ignored by resolution.
pub type QualifierMap = BTreeMap<String, Vec<TimeSnak>>;

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Which chronological extreme wins among equally precise snaks.
#[derive(Clone, Copy)]
enum TieBreak {
  Earliest,
  Latest,
}

/// Resolve the start/end qualifier slots of one statement.
///
/// Total: an empty map, empty slots, and all-malformed slots resolve to an
/// absent side — "no temporal information available", not a failure.
pub fn resolve_date_range(qualifiers: &QualifierMap) -> ResolvedDateRange {
  ResolvedDateRange {
    start: resolve_slot(qualifiers.get(START_DATE), TieBreak::Earliest),
    end:   resolve_slot(qualifiers.get(END_DATE), TieBreak::Latest),
  }
}

fn resolve_slot(
  snaks: Option<&Vec<TimeSnak>>,
  tie_break: TieBreak,
) -> Option<ParsedDate> {
  let mut best: Option<ParsedDate> = None;
  for snak in snaks.into_iter().flatten() {
    let (Some(time), Some(precision)) = (&snak.time, snak.precision) else {
      tracing::debug!(?snak, "skipping snak without a time/precision pair");
      continue;
    };
    let date = match parse_time(time, precision) {
      Ok(date) => date,
      Err(err) => {
        tracing::debug!(%err, "skipping unparseable time snak");
        continue;
      }
    };
    best = Some(match best.take() {
      None => date,
      Some(current) => pick(current, date, tie_break),
    });
  }
  best
}

/// Keep the winner between the current best and a later candidate. The
/// current best wins full ties, so resolution is stable in input order.
fn pick(
  current: ParsedDate,
  candidate: ParsedDate,
  tie_break: TieBreak,
) -> ParsedDate {
  match candidate.precision.cmp(&current.precision) {
    Ordering::Greater => candidate,
    Ordering::Less => current,
    Ordering::Equal => {
      let ord = candidate
        .chronological_key()
        .cmp(&current.chronological_key());
      let candidate_wins = match tie_break {
        TieBreak::Earliest => ord == Ordering::Less,
        TieBreak::Latest => ord == Ordering::Greater,
      };
      if candidate_wins { candidate } else { current }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
