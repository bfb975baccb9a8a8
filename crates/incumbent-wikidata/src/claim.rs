//! Decoding of the consumed subset of knowledge-base claim JSON.
//!
//! Both statement sources use the same claim shape: a statement GUID, a
//! main snak whose datavalue is either a timestamp or an item reference,
//! and a qualifier map of time snaks. Only the four reviewed properties
//! are mapped; claims on any other property are skipped, not errors.

use incumbent_core::statement::{
  EntityRef, EvaluableStatement, PositionValue, StatementValue,
};
use serde::Deserialize;

use crate::{
  error::{Error, Result},
  qualifier::{self, QualifierMap},
  time,
};

/// Date of birth.
pub const BIRTH_DATE: &str = "P569";
/// Place of birth.
pub const BIRTH_PLACE: &str = "P19";
/// Country of citizenship.
pub const CITIZENSHIP: &str = "P27";
/// Position held.
pub const POSITION_HELD: &str = "P39";

// ─── Wire types ──────────────────────────────────────────────────────────────

/// One claim as fetched from the knowledge base.
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
  /// Statement GUID.
  pub id:         String,
  pub mainsnak:   Snak,
  #[serde(default)]
  pub qualifiers: QualifierMap,
}

/// The main snak of a claim. `datavalue` is absent for
/// "somevalue"/"novalue" snaks.
#[derive(Debug, Clone, Deserialize)]
pub struct Snak {
  pub property:  String,
  #[serde(default)]
  pub datavalue: Option<DataValue>,
}

/// The payload of a value snak.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum DataValue {
  Time(TimeValue),
  #[serde(rename = "wikibase-entityid")]
  Item(ItemValue),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeValue {
  pub time:      String,
  pub precision: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemValue {
  pub id:    String,
  /// Resolved label, when the fetch layer joined it in.
  #[serde(default)]
  pub label: Option<String>,
}

impl Claim {
  fn time_value(&self) -> Result<&TimeValue> {
    match &self.mainsnak.datavalue {
      Some(DataValue::Time(time)) => Ok(time),
      _ => Err(Error::MissingDataValue(self.id.clone())),
    }
  }

  fn entity_ref(&self) -> Result<EntityRef> {
    match &self.mainsnak.datavalue {
      Some(DataValue::Item(item)) => Ok(EntityRef {
        id:    Some(item.id.clone()),
        label: item.label.clone().unwrap_or_else(|| item.id.clone()),
      }),
      _ => Err(Error::MissingDataValue(self.id.clone())),
    }
  }
}

// ─── Conversion ──────────────────────────────────────────────────────────────

/// Decode a JSON array of claims.
pub fn claims_from_json(input: &str) -> Result<Vec<Claim>> {
  Ok(serde_json::from_str(input)?)
}

/// Convert one claim into an evaluable statement.
///
/// Returns `Ok(None)` for claims on properties outside the reviewed set.
/// A claim on a reviewed property with a missing or malformed main value
/// is an `Err`, which batch call sites skip.
pub fn statement_from_claim(claim: &Claim) -> Result<Option<EvaluableStatement>> {
  let value = match claim.mainsnak.property.as_str() {
    BIRTH_DATE => {
      let time = claim.time_value()?;
      StatementValue::BirthDate(time::parse_time(&time.time, time.precision)?)
    }
    BIRTH_PLACE => StatementValue::BirthPlace(claim.entity_ref()?),
    CITIZENSHIP => StatementValue::Citizenship(claim.entity_ref()?),
    POSITION_HELD => StatementValue::Position(PositionValue {
      held:   claim.entity_ref()?,
      tenure: qualifier::resolve_date_range(&claim.qualifiers),
    }),
    other => {
      tracing::debug!(
        property = other,
        claim = %claim.id,
        "skipping claim on an unreviewed property"
      );
      return Ok(None);
    }
  };
  Ok(Some(EvaluableStatement {
    statement_id: Some(claim.id.clone()),
    value,
    provenance: None,
  }))
}

/// Convert a batch of claims, skipping unreviewed properties and claims
/// whose main value cannot be decoded.
pub fn statements_from_claims(claims: &[Claim]) -> Vec<EvaluableStatement> {
  claims
    .iter()
    .filter_map(|claim| match statement_from_claim(claim) {
      Ok(statement) => statement,
      Err(err) => {
        tracing::debug!(%err, claim = %claim.id, "skipping undecodable claim");
        None
      }
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
