/// Database primary keys are SQLite `INTEGER PRIMARY KEY` (rowid) values.
pub type DbId = i64;
