//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose `find_all` over the `users` table.
//! - Map each row to a `User`, stringifying whatever the key column holds.
//!
//! # Invariants
//! - A call returns every row or fails; rows are never dropped silently.
//! - Construction fails fast when the expected schema is absent.

use crate::db::DbError;
use crate::model::user::User;
use log::{debug, error};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const USERS_TABLE: &str = "users";
const USERS_COLUMNS: &[&str] = &["id", "name"];
const USER_SELECT_SQL: &str = "SELECT id, name FROM users ORDER BY id";

pub type RepoResult<T> = Result<T, DataAccessError>;

/// Failure to read users from storage.
#[derive(Debug)]
pub enum DataAccessError {
    /// Storage unreachable or the query itself failed.
    Db(DbError),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A stored value that has no text form for the entity.
    InvalidData(String),
}

impl Display for DataAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "data access failed: {err}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for DataAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for DataAccessError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DataAccessError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read access to users, independent of storage technology.
pub trait UserRepository {
    /// Returns every stored user. An empty table yields an empty vector.
    fn find_all(&self) -> RepoResult<Vec<User>>;
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn find_all(&self) -> RepoResult<Vec<User>> {
        (**self).find_all()
    }
}

/// SQLite-backed user repository borrowing a caller-owned connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Wraps `conn` after checking that the `users` schema is present.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `users` does not exist.
    /// - `MissingRequiredColumn` when `id` or `name` is absent.
    /// - `Db` when the schema lookup itself fails.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_users_schema(conn)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<User>> {
        let started_at = Instant::now();
        match query_users(self.conn) {
            Ok(users) => {
                debug!(
                    "event=users_find_all module=repo status=ok rows={} duration_ms={}",
                    users.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(users)
            }
            Err(err) => {
                error!(
                    "event=users_find_all module=repo status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

fn query_users(conn: &Connection) -> RepoResult<Vec<User>> {
    let mut stmt = conn.prepare(USER_SELECT_SQL)?;
    let mut rows = stmt.query([])?;
    let mut users = Vec::new();

    while let Some(row) = rows.next()? {
        users.push(parse_user_row(row)?);
    }

    Ok(users)
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: id_to_text(row.get_ref("id")?)?,
        name: row.get("name")?,
    })
}

// SQLite keys may be declared with any affinity; keep their text form exact.
fn id_to_text(value: ValueRef<'_>) -> RepoResult<String> {
    match value {
        ValueRef::Integer(id) => Ok(id.to_string()),
        ValueRef::Real(id) => Ok(id.to_string()),
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec()).map_err(|_| {
            DataAccessError::InvalidData("non UTF-8 text in users.id".to_string())
        }),
        ValueRef::Null => Err(DataAccessError::InvalidData(
            "null value in users.id".to_string(),
        )),
        ValueRef::Blob(_) => Err(DataAccessError::InvalidData(
            "blob value in users.id".to_string(),
        )),
    }
}

fn ensure_users_schema(conn: &Connection) -> RepoResult<()> {
    let table: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [USERS_TABLE],
            |row| row.get(0),
        )
        .optional()?;
    if table.is_none() {
        return Err(DataAccessError::MissingRequiredTable(USERS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([USERS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for &column in USERS_COLUMNS {
        if !present.iter().any(|name| name.as_str() == column) {
            return Err(DataAccessError::MissingRequiredColumn {
                table: USERS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
