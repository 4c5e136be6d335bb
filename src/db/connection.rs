use rusqlite::{Connection, ErrorCode};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;

// VM instructions between deadline checks.
const PROGRESS_CHECK_OPS: i32 = 100;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("query exceeded its deadline")]
    DeadlineExceeded,

    #[error("database connection unavailable")]
    ConnectionUnavailable,

    #[error("failed to read schema file {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// Thread-local connection slot, tagged with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

/// Handle to the rentals database.
///
/// Cloning is cheap. Each worker thread lazily opens its own connection on
/// first use and keeps it for the life of the thread.
#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().into_owned(),
        }
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    *slot = Some((self.path.clone(), open_connection(&self.path)?));
                }
                let Some((_, conn)) = slot.as_mut() else {
                    return Err(DbError::ConnectionUnavailable);
                };
                f(conn).map_err(DbError::from)
            })
            .map_err(|_| DbError::ConnectionUnavailable)?
    }

    /// Like [`Database::with_conn`], but interrupts the statement once
    /// `timeout` has elapsed. `None` waits indefinitely.
    pub fn with_deadline<F, T>(&self, timeout: Option<Duration>, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let Some(timeout) = timeout else {
            return self.with_conn(f);
        };
        let deadline = Instant::now() + timeout;

        self.with_conn(|conn| {
            conn.progress_handler(PROGRESS_CHECK_OPS, Some(move || Instant::now() >= deadline));
            let result = f(conn);
            conn.progress_handler(0, None::<fn() -> bool>);
            result
        })
        .map_err(|err| match err {
            DbError::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::OperationInterrupted =>
            {
                DbError::DeadlineExceeded
            }
            other => other,
        })
    }
}

fn open_connection(path: &str) -> Result<Connection, DbError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    // Registers `rarray()` for array-valued parameters.
    rusqlite::vtab::array::load_module(&conn)?;
    Ok(conn)
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: impl AsRef<Path>) -> Result<(), DbError> {
    let schema_path = schema_path.as_ref();
    let schema_sql = fs::read_to_string(schema_path).map_err(|source| DbError::Schema {
        path: schema_path.display().to_string(),
        source,
    })?;

    db.with_conn(|conn| conn.execute_batch(&schema_sql))?;

    tracing::info!(schema = %schema_path.display(), "Database initialized");
    Ok(())
}
