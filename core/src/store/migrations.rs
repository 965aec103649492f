/// A schema migration.
#[derive(Debug)]
pub(crate) struct Migration {
    pub(crate) version: u32,
    pub(crate) name: &'static str,
    pub(crate) sql: &'static str,
}

const MIGRATION_001: &str = r#"
CREATE TABLE IF NOT EXISTS address_book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    name TEXT NOT NULL
);
"#;

pub(crate) const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_address_book",
    sql: MIGRATION_001,
}];
