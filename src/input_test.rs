//! Tests for input parsing and bounds checks.

use crate::error::ConfigError;
use crate::input::{
  RawInput, check_sorted, optional_int, parse_bounded_values, parse_values, require_int,
};

#[test]
fn parses_commas_and_spaces() {
  assert_eq!(parse_values("4, 7,1  9").unwrap(), vec![4, 7, 1, 9]);
  assert_eq!(parse_values(" -3,5 ").unwrap(), vec![-3, 5]);
}

#[test]
fn rejects_non_numeric_token() {
  let err = parse_values("1, two, 3").unwrap_err();
  assert_eq!(
    err,
    ConfigError::InvalidFormat {
      token: "two".to_string(),
      expected: "integer",
    }
  );
}

#[test]
fn count_bounds_are_enforced() {
  let err = parse_bounded_values("5", 2..=12).unwrap_err();
  assert!(matches!(err, ConfigError::OutOfBounds { what: "values", .. }));
  let many = (0..13).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
  assert!(parse_bounded_values(&many, 2..=12).is_err());
  assert!(parse_bounded_values("1,2", 2..=12).is_ok());
}

#[test]
fn value_range_is_enforced() {
  let err = parse_bounded_values("1,1000", 2..=12).unwrap_err();
  assert!(matches!(err, ConfigError::OutOfBounds { what: "value", .. }));
}

#[test]
fn params_are_trimmed_and_required() {
  let raw = RawInput::new("1,2").with_param("target", " 9 ").with_param("blank", "  ");
  assert_eq!(require_int(&raw, "target").unwrap(), 9);
  assert_eq!(raw.param("blank"), None);
  assert_eq!(
    require_int(&raw, "window").unwrap_err(),
    ConfigError::MissingParameter("window")
  );
  assert_eq!(optional_int(&raw, "window").unwrap(), None);
}

#[test]
fn parse_param_splits_on_first_equals() {
  assert_eq!(
    RawInput::parse_param("pattern=a=b").unwrap(),
    ("pattern".to_string(), "a=b".to_string())
  );
  assert!(RawInput::parse_param("novalue").is_err());
  assert!(RawInput::parse_param("=3").is_err());
}

#[test]
fn sorted_check() {
  assert!(check_sorted(&[1, 2, 2, 5]).is_ok());
  assert_eq!(check_sorted(&[3, 1]).unwrap_err(), ConfigError::NotSorted);
}
