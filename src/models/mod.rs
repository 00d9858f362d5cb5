pub mod exercise;
pub mod from_row;

pub use exercise::{Exercise, ExercisePayload, Unit};
pub use from_row::FromSqliteRow;
