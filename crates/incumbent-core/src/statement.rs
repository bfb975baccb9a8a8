//! Statement types — the unit of review.
//!
//! A statement is one biographical claim about a politician: either already
//! recorded in the knowledge base ("existing", carrying the base's statement
//! GUID) or produced by automated extraction from a source document
//! ("extracted", carrying the evidence that supports it). Every statement is
//! owned by exactly one politician record; statements never span subjects.

use serde::{Deserialize, Serialize};

use crate::date::{ParsedDate, ResolvedDateRange};

// ─── Entity references ───────────────────────────────────────────────────────

/// A reference to another knowledge-base item (a place, a country, an
/// office). Extracted statements may carry a label without an item id when
/// the extractor could not link the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
  /// Item identifier in the knowledge base, when the item is known.
  pub id:    Option<String>,
  pub label: String,
}

impl EntityRef {
  /// The string used for identity keying: the item id when present (labels
  /// drift between sources), else the label.
  pub fn identity(&self) -> &str { self.id.as_deref().unwrap_or(&self.label) }
}

// ─── Value sub-types ─────────────────────────────────────────────────────────

/// A position held, with tenure dates resolved from the statement's
/// start/end qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValue {
  pub held:   EntityRef,
  pub tenure: ResolvedDateRange,
}

// ─── StatementValue ──────────────────────────────────────────────────────────

/// The typed payload of a statement. The variant name serves as the
/// statement-type discriminant in serialised form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StatementValue {
  /// Date of birth.
  BirthDate(ParsedDate),
  /// Place of birth.
  BirthPlace(EntityRef),
  /// Country of citizenship.
  Citizenship(EntityRef),
  /// Position held, with optional tenure.
  Position(PositionValue),
}

impl StatementValue {
  /// The discriminant string used in serialised form.
  /// Must match the `rename_all = "snake_case"` serde tags above.
  pub fn discriminant(&self) -> &'static str {
    match self {
      Self::BirthDate(_) => "birth_date",
      Self::BirthPlace(_) => "birth_place",
      Self::Citizenship(_) => "citizenship",
      Self::Position(_) => "position",
    }
  }
}

// ─── Provenance ──────────────────────────────────────────────────────────────

/// Evidence attached to an extracted statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
  /// Archived copy of the page the claim was extracted from.
  pub archive_url: String,
  /// The passage that supports the claim.
  pub quote:       String,
}

// ─── Identity keys ───────────────────────────────────────────────────────────

/// The derived identity under which existing and extracted statements are
/// joined.
///
/// Scalar and plain entity-reference statements key by type alone: a
/// politician gets one birth-date group, one birth-place group, one
/// citizenship group, so multiple recorded birthplaces collapse into a
/// single group. Positions key by the held office, so two different offices
/// never collide; two terms in the *same* office do share a key, and
/// showing both tenures is a display concern rather than a keying one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum StatementKey {
  BirthDate,
  BirthPlace,
  Citizenship,
  Position(String),
}

// ─── EvaluableStatement ──────────────────────────────────────────────────────

/// One reviewable claim about a politician.
///
/// `statement_id` is the knowledge-base GUID, present only for existing
/// statements; `provenance` is present only for extracted ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluableStatement {
  pub statement_id: Option<String>,
  pub value:        StatementValue,
  pub provenance:   Option<Provenance>,
}

impl EvaluableStatement {
  /// An existing statement fetched from the knowledge base.
  pub fn existing(statement_id: String, value: StatementValue) -> Self {
    Self {
      statement_id: Some(statement_id),
      value,
      provenance: None,
    }
  }

  /// An extracted candidate statement with its supporting evidence.
  pub fn extracted(value: StatementValue, provenance: Provenance) -> Self {
    Self {
      statement_id: None,
      value,
      provenance: Some(provenance),
    }
  }

  /// Derive the identity key under which this statement joins.
  pub fn key(&self) -> StatementKey {
    match &self.value {
      StatementValue::BirthDate(_) => StatementKey::BirthDate,
      StatementValue::BirthPlace(_) => StatementKey::BirthPlace,
      StatementValue::Citizenship(_) => StatementKey::Citizenship,
      StatementValue::Position(p) => {
        StatementKey::Position(p.held.identity().to_string())
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::date::{ParsedDate, ResolvedDateRange};

  fn place(id: Option<&str>, label: &str) -> EntityRef {
    EntityRef {
      id:    id.map(str::to_string),
      label: label.to_string(),
    }
  }

  // ── Identity keys
  // ────────────────────────────────────────────────────────

  #[test]
  fn scalar_statements_key_by_type_alone() {
    let a = EvaluableStatement::existing(
      "Q42$abc".to_string(),
      StatementValue::BirthDate(ParsedDate::from_ymd(1969, 12, 31)),
    );
    let b = EvaluableStatement::existing(
      "Q42$def".to_string(),
      StatementValue::BirthDate(ParsedDate::from_ymd(1970, 1, 1)),
    );
    assert_eq!(a.key(), StatementKey::BirthDate);
    assert_eq!(a.key(), b.key());
  }

  #[test]
  fn all_birthplaces_share_one_key() {
    let berlin = EvaluableStatement::existing(
      "Q42$a".to_string(),
      StatementValue::BirthPlace(place(Some("Q64"), "Berlin")),
    );
    let bonn = EvaluableStatement::existing(
      "Q42$b".to_string(),
      StatementValue::BirthPlace(place(Some("Q586"), "Bonn")),
    );
    assert_eq!(berlin.key(), bonn.key());
    assert_eq!(berlin.key(), StatementKey::BirthPlace);
  }

  #[test]
  fn positions_key_by_held_entity() {
    let mayor = EvaluableStatement::existing(
      "Q42$a".to_string(),
      StatementValue::Position(PositionValue {
        held:   place(Some("Q30185"), "mayor"),
        tenure: ResolvedDateRange::default(),
      }),
    );
    let mp = EvaluableStatement::existing(
      "Q42$b".to_string(),
      StatementValue::Position(PositionValue {
        held:   place(Some("Q486839"), "member of parliament"),
        tenure: ResolvedDateRange::default(),
      }),
    );
    assert_eq!(mayor.key(), StatementKey::Position("Q30185".to_string()));
    assert_ne!(mayor.key(), mp.key());
  }

  #[test]
  fn unlinked_position_keys_by_label() {
    let s = EvaluableStatement::extracted(
      StatementValue::Position(PositionValue {
        held:   place(None, "village elder"),
        tenure: ResolvedDateRange::default(),
      }),
      Provenance {
        archive_url: "https://archive.example/1".to_string(),
        quote:       "served as village elder".to_string(),
      },
    );
    assert_eq!(s.key(), StatementKey::Position("village elder".to_string()));
  }

  #[test]
  fn entity_identity_prefers_id_over_label() {
    assert_eq!(place(Some("Q64"), "Berlin").identity(), "Q64");
    assert_eq!(place(None, "Berlin").identity(), "Berlin");
  }

  // ── Serialised form
  // ──────────────────────────────────────────────────────

  #[test]
  fn discriminant_matches_serde_tag() {
    let value = StatementValue::BirthPlace(place(Some("Q64"), "Berlin"));
    assert_eq!(value.discriminant(), "birth_place");
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["type"], "birth_place");
    assert_eq!(json["data"]["id"], "Q64");
  }

  #[test]
  fn statement_round_trips_through_json() {
    let original = EvaluableStatement::extracted(
      StatementValue::Citizenship(place(Some("Q183"), "Germany")),
      Provenance {
        archive_url: "https://archive.example/2".to_string(),
        quote:       "a German politician".to_string(),
      },
    );
    let json = serde_json::to_string(&original).unwrap();
    let decoded: EvaluableStatement = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
  }
}
