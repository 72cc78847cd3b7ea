use crate::db::models::{Activity, Participant};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for another writer's lock before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the connection pool; cheap to clone into request state.
#[derive(Clone)]
pub struct ActivityStorage {
    pool: Pool<Sqlite>,
}

impl ActivityStorage {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the SQLite file behind `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Begin a read session. Dropping it without `commit` rolls back.
    pub async fn session(&self) -> Result<Session, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Begin a session that will write. Takes the write lock up front
    /// (`BEGIN IMMEDIATE`); other writers wait up to `BUSY_TIMEOUT`.
    pub async fn write_session(&self) -> Result<Session, AppError> {
        let tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Session { tx })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One transaction bound to a single request or seeding step.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await?;
        Ok(())
    }

    pub async fn has_any_activity(&mut self) -> Result<bool, AppError> {
        let rec: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM activity)")
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(rec.0)
    }

    /// All activities in insertion order.
    pub async fn list_activities(&mut self) -> Result<Vec<Activity>, AppError> {
        let rows = sqlx::query_as::<_, Activity>(
            r#"SELECT name, description, schedule, max_participants
               FROM activity ORDER BY rowid"#,
        )
        .fetch_all(&mut *self.tx)
        .await?;
        Ok(rows)
    }

    pub async fn get_activity(&mut self, name: &str) -> Result<Option<Activity>, AppError> {
        let row = sqlx::query_as::<_, Activity>(
            r#"SELECT name, description, schedule, max_participants
               FROM activity WHERE name = ?"#,
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(row)
    }

    pub async fn insert_activity(&mut self, activity: &Activity) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO activity (name, description, schedule, max_participants)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(&activity.schedule)
        .bind(activity.max_participants)
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    /// Participants of one activity, oldest registration first.
    pub async fn participants_of(
        &mut self,
        activity_name: &str,
    ) -> Result<Vec<Participant>, AppError> {
        let rows = sqlx::query_as::<_, Participant>(
            r#"SELECT id, email, activity_name
               FROM participant WHERE activity_name = ? ORDER BY id"#,
        )
        .bind(activity_name)
        .fetch_all(&mut *self.tx)
        .await?;
        Ok(rows)
    }

    pub async fn find_participant(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<Option<Participant>, AppError> {
        let row = sqlx::query_as::<_, Participant>(
            r#"SELECT id, email, activity_name
               FROM participant WHERE activity_name = ? AND email = ?
               ORDER BY id LIMIT 1"#,
        )
        .bind(activity_name)
        .bind(email)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(row)
    }

    /// Insert a registration row. Returns the new row id.
    pub async fn insert_participant(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<i64, AppError> {
        let res = sqlx::query("INSERT INTO participant (email, activity_name) VALUES (?, ?)")
            .bind(email)
            .bind(activity_name)
            .execute(&mut *self.tx)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_participant(&mut self, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM participant WHERE id = ?")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(res.rows_affected())
    }
}
