use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::Serialize;

use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kgs,
    Lbs,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kgs => "kgs",
            Unit::Lbs => "lbs",
        }
    }

    /// Exact, case-sensitive match on `kgs` or `lbs`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kgs" => Some(Unit::Kgs),
            "lbs" => Some(Unit::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Unit {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Unit {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Unit::parse(s).ok_or_else(|| FromSqlError::Other(format!("unknown unit {s:?}").into()))
    }
}

/// A stored exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub reps: i64,
    pub weight: i64,
    pub unit: Unit,
    pub date: String,
}

impl Exercise {
    pub fn from_payload(id: String, payload: ExercisePayload) -> Self {
        Self {
            id,
            name: payload.name,
            reps: payload.reps,
            weight: payload.weight,
            unit: payload.unit,
            date: payload.date,
        }
    }
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            unit: row.get("unit")?,
            date: row.get("date")?,
        })
    }
}

/// The five business fields of a create or update request.
///
/// Request handlers only obtain one through [`ExercisePayload::from_json`],
/// so anything reaching the repository has passed the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePayload {
    pub name: String,
    pub reps: i64,
    pub weight: i64,
    pub unit: Unit,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_as_str() {
        assert_eq!(Unit::Kgs.as_str(), "kgs");
        assert_eq!(Unit::Lbs.as_str(), "lbs");
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(Unit::parse("kgs"), Some(Unit::Kgs));
        assert_eq!(Unit::parse("lbs"), Some(Unit::Lbs));
        assert_eq!(Unit::parse("kg"), None);
        assert_eq!(Unit::parse("LBS"), None);
        assert_eq!(Unit::parse(""), None);
    }

    #[test]
    fn test_exercise_serializes_unit_lowercase() {
        let exercise = Exercise {
            id: "abc".to_string(),
            name: "Squat".to_string(),
            reps: 5,
            weight: 225,
            unit: Unit::Lbs,
            date: "03-14-24".to_string(),
        };

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "name": "Squat",
                "reps": 5,
                "weight": 225,
                "unit": "lbs",
                "date": "03-14-24"
            })
        );
    }
}
