//! Field rules for exercise payloads.
//!
//! Each predicate looks at a raw JSON value and answers with a plain `bool`.
//! [`ExercisePayload::from_json`] combines them and is the only way request
//! bodies become typed payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{ExercisePayload, Unit};

/// Keys a payload must contain, and nothing else.
pub const PAYLOAD_FIELDS: [&str; 5] = ["name", "reps", "weight", "unit", "date"];

// `\d` in `regex` is Unicode-aware, so spell out the ASCII range.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("malformed request body: {0}")]
    Malformed(String),

    #[error("expected exactly 5 fields, got {0}")]
    FieldCount(usize),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("name must be a non-empty string")]
    InvalidName,

    #[error("reps must be an integer of at least 1")]
    InvalidReps,

    #[error("weight must be an integer of at least 1")]
    InvalidWeight,

    #[error("unit must be \"kgs\" or \"lbs\"")]
    InvalidUnit,

    #[error("date must have the form MM-DD-YY")]
    InvalidDate,
}

pub fn is_name_valid(value: &Value) -> bool {
    value.as_str().is_some_and(|name| !name.is_empty())
}

pub fn is_reps_valid(value: &Value) -> bool {
    as_integer(value).is_some_and(|reps| reps >= 1)
}

pub fn is_weight_valid(value: &Value) -> bool {
    as_integer(value).is_some_and(|weight| weight >= 1)
}

pub fn is_unit_valid(value: &Value) -> bool {
    value.as_str().and_then(Unit::parse).is_some()
}

/// `MM-DD-YY` with ASCII digits. No calendar check.
pub fn is_date_valid(value: &Value) -> bool {
    value.as_str().is_some_and(|date| DATE_PATTERN.is_match(date))
}

/// A JSON number with no fractional part that fits in an `i64`.
///
/// `5.0` counts as an integer; numeric strings do not.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let n = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn field<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, PayloadError> {
    object.get(key).ok_or(PayloadError::MissingField(key))
}

impl ExercisePayload {
    /// Validate a raw request body.
    ///
    /// The body must be an object holding exactly [`PAYLOAD_FIELDS`], each
    /// passing its predicate. The first violated rule is reported.
    pub fn from_json(body: &Value) -> Result<Self, PayloadError> {
        let object = body.as_object().ok_or(PayloadError::NotAnObject)?;

        if object.len() != PAYLOAD_FIELDS.len() {
            return Err(PayloadError::FieldCount(object.len()));
        }

        let name = field(object, "name")?;
        let reps = field(object, "reps")?;
        let weight = field(object, "weight")?;
        let unit = field(object, "unit")?;
        let date = field(object, "date")?;

        if !is_name_valid(name) {
            return Err(PayloadError::InvalidName);
        }
        if !is_reps_valid(reps) {
            return Err(PayloadError::InvalidReps);
        }
        if !is_weight_valid(weight) {
            return Err(PayloadError::InvalidWeight);
        }
        if !is_unit_valid(unit) {
            return Err(PayloadError::InvalidUnit);
        }
        if !is_date_valid(date) {
            return Err(PayloadError::InvalidDate);
        }

        Ok(Self {
            name: name.as_str().ok_or(PayloadError::InvalidName)?.to_string(),
            reps: as_integer(reps).ok_or(PayloadError::InvalidReps)?,
            weight: as_integer(weight).ok_or(PayloadError::InvalidWeight)?,
            unit: unit
                .as_str()
                .and_then(Unit::parse)
                .ok_or(PayloadError::InvalidUnit)?,
            date: date.as_str().ok_or(PayloadError::InvalidDate)?.to_string(),
        })
    }
}
