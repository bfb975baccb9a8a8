//! The merge engine: joins existing and extracted statements into
//! reviewer-facing groups.
//!
//! The engine classifies presence only — which sides of a key are
//! populated. Whether two present sides actually agree is a separate
//! question answered by [`is_value_identical`], which the presentation
//! layer uses to decide whether a group needs a "current value" annotation;
//! it never suppresses or collapses groups.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::statement::{EvaluableStatement, StatementKey, StatementValue};

// ─── Groups ──────────────────────────────────────────────────────────────────

/// Presence classification of a merged group. Drives the review screen:
/// existing-only groups render read-only; the other two get accept/reject
/// controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupClass {
  ExistingOnly,
  ExtractedOnly,
  Conflicted,
}

/// One unit of reviewer-facing comparison. At least one side is always
/// present: a key exists only because some input statement produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedGroup {
  pub key:       StatementKey,
  pub existing:  Option<EvaluableStatement>,
  pub extracted: Option<EvaluableStatement>,
}

impl MergedGroup {
  /// Which of the three classes this group falls into.
  pub fn class(&self) -> GroupClass {
    match (&self.existing, &self.extracted) {
      (Some(_), Some(_)) => GroupClass::Conflicted,
      (Some(_), None) => GroupClass::ExistingOnly,
      (None, _) => GroupClass::ExtractedOnly,
    }
  }
}

// ─── Merge ───────────────────────────────────────────────────────────────────

/// Join existing and extracted statements into merge groups.
///
/// Each side is indexed by derived identity key; a later statement at the
/// same key within one side overwrites an earlier one (last-write-wins).
/// The output covers exactly the union of keys, in a deterministic order:
/// keys in order of first appearance among the existing statements, then
/// extraction-only keys in their input order.
pub fn merge(
  existing: &[EvaluableStatement],
  extracted: &[EvaluableStatement],
) -> Vec<MergedGroup> {
  let mut existing_by_key: HashMap<StatementKey, &EvaluableStatement> =
    HashMap::new();
  for statement in existing {
    existing_by_key.insert(statement.key(), statement);
  }
  let mut extracted_by_key: HashMap<StatementKey, &EvaluableStatement> =
    HashMap::new();
  for statement in extracted {
    extracted_by_key.insert(statement.key(), statement);
  }

  let mut ordered_keys: Vec<StatementKey> = Vec::new();
  let mut seen: HashSet<StatementKey> = HashSet::new();
  for statement in existing.iter().chain(extracted) {
    let key = statement.key();
    if seen.insert(key.clone()) {
      ordered_keys.push(key);
    }
  }

  ordered_keys
    .into_iter()
    .map(|key| MergedGroup {
      existing:  existing_by_key.get(&key).map(|s| (*s).clone()),
      extracted: extracted_by_key.get(&key).map(|s| (*s).clone()),
      key,
    })
    .collect()
}

// ─── Value comparison ────────────────────────────────────────────────────────

/// Returns true when both sides of a group are present and carry the same
/// information: equal scalar value, equal entity identifier (labels are
/// allowed to differ), or equal held office plus structurally equal tenure.
///
/// Absent-side groups are never identical — there is nothing to compare.
pub fn is_value_identical(group: &MergedGroup) -> bool {
  let (Some(existing), Some(extracted)) = (&group.existing, &group.extracted)
  else {
    return false;
  };
  use StatementValue::*;
  match (&existing.value, &extracted.value) {
    (BirthDate(a), BirthDate(b)) => a == b,
    (BirthPlace(a), BirthPlace(b)) | (Citizenship(a), Citizenship(b)) => {
      a.identity() == b.identity()
    }
    (Position(a), Position(b)) => {
      a.held.identity() == b.held.identity() && a.tenure == b.tenure
    }
    _ => false,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
