use rusqlite::Row;

/// Map a result row selected by column name onto a model.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
