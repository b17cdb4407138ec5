use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lagoon_booking::{BookingSession, BookingStep};
use parking_lot::RwLock;
use sqlx::{Row, SqlitePool};

pub trait BookingRepository: Send + Sync {
    async fn load_booking(&self, booking_id: &str) -> Result<Option<BookingSession>>;
    async fn upsert_booking(&self, session: &BookingSession) -> Result<()>;
    async fn purge_stale(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    bookings: Arc<RwLock<HashMap<String, BookingSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for MemoryStore {
    async fn load_booking(&self, booking_id: &str) -> Result<Option<BookingSession>> {
        Ok(self.bookings.read().get(booking_id).cloned())
    }

    async fn upsert_booking(&self, session: &BookingSession) -> Result<()> {
        self.bookings
            .write()
            .insert(session.booking_id.clone(), session.clone());
        Ok(())
    }

    async fn purge_stale(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let mut removed = 0_u64;
        self.bookings.write().retain(|_, session| {
            let keep = session.updated_at > cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });

        Ok(removed)
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("failed connecting to sqlite at {}", database_url))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
              booking_id TEXT PRIMARY KEY,
              step TEXT NOT NULL,
              data_json TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl BookingRepository for SqliteStore {
    async fn load_booking(&self, booking_id: &str) -> Result<Option<BookingSession>> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, step, data_json, updated_at
            FROM bookings
            WHERE booking_id = ?1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let step: String = row.get("step");
        let data_json: String = row.get("data_json");
        let data = serde_json::from_str(&data_json).unwrap_or_default();

        let session = BookingSession {
            booking_id: row.get("booking_id"),
            step: BookingStep::from_code(&step),
            data,
            updated_at: row
                .get::<String, _>("updated_at")
                .parse()
                .unwrap_or_else(|_| Utc::now()),
        };

        Ok(Some(session))
    }

    async fn upsert_booking(&self, session: &BookingSession) -> Result<()> {
        let data_json = serde_json::to_string(&session.data)?;

        sqlx::query(
            r#"
            INSERT INTO bookings (booking_id, step, data_json, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(booking_id) DO UPDATE SET
              step=excluded.step,
              data_json=excluded.data_json,
              updated_at=excluded.updated_at
            "#,
        )
        .bind(&session.booking_id)
        .bind(session.step.as_code())
        .bind(data_json)
        .bind(session.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn purge_stale(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM bookings WHERE updated_at < ?1")
            .bind(cutoff.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[derive(Clone)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let sqlite = SqliteStore::connect(database_url).await?;
        Ok(Self::Sqlite(sqlite))
    }
}

impl BookingRepository for Store {
    async fn load_booking(&self, booking_id: &str) -> Result<Option<BookingSession>> {
        match self {
            Store::Memory(store) => store.load_booking(booking_id).await,
            Store::Sqlite(store) => store.load_booking(booking_id).await,
        }
    }

    async fn upsert_booking(&self, session: &BookingSession) -> Result<()> {
        match self {
            Store::Memory(store) => store.upsert_booking(session).await,
            Store::Sqlite(store) => store.upsert_booking(session).await,
        }
    }

    async fn purge_stale(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        match self {
            Store::Memory(store) => store.purge_stale(cutoff).await,
            Store::Sqlite(store) => store.purge_stale(cutoff).await,
        }
    }
}
