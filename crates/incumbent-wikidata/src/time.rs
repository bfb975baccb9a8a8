//! Knowledge-base timestamp decoding.
//!
//! Timestamps arrive as `[+-]YYYY-MM-DDT00:00:00Z` with a separate
//! precision code; a `00` month or day token means "unspecified at this
//! precision". Decoding strips the leading sign and the fixed time suffix
//! and reads the three dash-separated components.

use incumbent_core::date::{ParsedDate, Precision};

use crate::error::{Error, Result};

/// Decode a raw timestamp and precision code into a [`ParsedDate`].
///
/// Total over the documented encoding: `00` components become `None`, and
/// precision codes outside 9..=11 fall back to year granularity. Input
/// without a parseable year returns `Err`; call sites that tolerate
/// malformed data skip the value.
pub fn parse_time(raw: &str, precision_code: u8) -> Result<ParsedDate> {
  let unsigned = raw.trim().trim_start_matches(['+', '-']);
  let date_part = unsigned.split('T').next().unwrap_or(unsigned);

  let mut components = date_part.splitn(3, '-');
  let year = components
    .next()
    .and_then(|token| token.parse::<i32>().ok())
    .ok_or_else(|| Error::InvalidTimestamp(raw.to_string()))?;
  let month = components.next().and_then(numeric_component);
  let day = components.next().and_then(numeric_component);

  Ok(ParsedDate {
    year,
    month,
    day,
    precision: Precision::from_code(precision_code),
  })
}

/// `00` is the sentinel for "unspecified"; a non-numeric token is treated
/// the same way.
fn numeric_component(token: &str) -> Option<u32> {
  match token.parse::<u32>() {
    Ok(0) => None,
    Ok(n) => Some(n),
    Err(_) => None,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn day_precision_timestamp() {
    let d = parse_time("+1976-11-02T00:00:00Z", 11).unwrap();
    assert_eq!(d.year, 1976);
    assert_eq!(d.month, Some(11));
    assert_eq!(d.day, Some(2));
    assert_eq!(d.precision, Precision::Day);
    assert_eq!(d.to_string(), "November 2, 1976");
  }

  #[test]
  fn month_precision_with_zero_day() {
    let d = parse_time("+1976-11-00T00:00:00Z", 10).unwrap();
    assert_eq!(d.month, Some(11));
    assert_eq!(d.day, None);
    assert_eq!(d.to_string(), "November 1976");
  }

  #[test]
  fn year_precision_with_zero_components() {
    let d = parse_time("+1976-00-00T00:00:00Z", 9).unwrap();
    assert_eq!(d.month, None);
    assert_eq!(d.day, None);
    assert_eq!(d.to_string(), "1976");
  }

  #[test]
  fn year_precision_hides_populated_components() {
    // Precision wins over whatever the tokens happen to carry.
    let d = parse_time("+1976-11-02T00:00:00Z", 9).unwrap();
    assert_eq!(d.precision, Precision::Year);
    assert_eq!(d.to_string(), "1976");
  }

  #[test]
  fn unknown_precision_code_renders_year_only() {
    let d = parse_time("+1976-11-02T00:00:00Z", 14).unwrap();
    assert_eq!(d.precision, Precision::Year);
    assert_eq!(d.to_string(), "1976");
  }

  #[test]
  fn missing_time_suffix_is_tolerated() {
    let d = parse_time("+1976-11-02", 11).unwrap();
    assert_eq!(d.to_string(), "November 2, 1976");
  }

  #[test]
  fn leading_sign_is_stripped() {
    let d = parse_time("-0044-03-15T00:00:00Z", 11).unwrap();
    assert_eq!(d.year, 44);
    assert_eq!(d.to_string(), "March 15, 44");
  }

  #[test]
  fn garbage_input_is_an_error() {
    let r = parse_time("not a timestamp", 11);
    assert!(matches!(r, Err(Error::InvalidTimestamp(_))));
  }

  #[test]
  fn empty_input_is_an_error() {
    assert!(matches!(parse_time("", 9), Err(Error::InvalidTimestamp(_))));
  }
}
