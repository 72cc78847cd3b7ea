//! SQL DDL for initializing the activity store.
//! SQLite-first design; every statement is idempotent.

/// SQLite schema with:
/// - `activity.name` TEXT PRIMARY KEY
/// - `participant.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `participant.activity_name` referencing `activity(name)`
/// - No UNIQUE on (activity_name, email); duplicates are rejected before insert
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS activity (
    name TEXT PRIMARY KEY NOT NULL,
    description TEXT NOT NULL,
    schedule TEXT NOT NULL,
    max_participants INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS participant (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL,
    activity_name TEXT NOT NULL REFERENCES activity(name)
);

CREATE INDEX IF NOT EXISTS idx_participant_activity_name ON participant(activity_name);
"#;
