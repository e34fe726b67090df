//! Schema bootstrap for the `users` table.
//!
//! The schema version lives in `PRAGMA user_version`; version 0 means the
//! table has not been created by this crate yet.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::cmp::Ordering;

const SCHEMA_VERSION: u32 = 1;
const USERS_SCHEMA_SQL: &str = include_str!("0001_users.sql");

/// Returns the schema version written by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates the users schema when the database predates it.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Equal => Ok(()),
        Ordering::Greater => Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        }),
        Ordering::Less => {
            let tx = conn.transaction()?;
            tx.execute_batch(USERS_SCHEMA_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            info!("event=db_migrate module=db status=ok from_version={found} to_version={SCHEMA_VERSION}");
            Ok(())
        }
    }
}
