//! SQLite scoop record store implementation.
//!
//! Provides persistent storage for scoop sales using SQLite and Diesel ORM.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::debug;

use super::database::connection::{
    create_pool_with, run_migrations, DbPool, PoolOptions,
};
use super::database::model::{ScoopChangeset, ScoopRow};
use super::database::schema::scoops;
use super::upgrade;
use crate::domain::{RecordId, ScoopFields, ScoopRecord};
use crate::error::{Error, Result};
use crate::port::outbound::store::ScoopStore;

type PooledConn =
    diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>;

/// SQLite-backed scoop store.
///
/// Implements the [`ScoopStore`] trait. Each operation checks a connection
/// out of the pool and returns it when done.
pub struct SqliteScoopStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteScoopStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a store on a database URL or file path.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be created.
    pub fn open(database_url: &str, options: PoolOptions) -> Result<Self> {
        Ok(Self::new(create_pool_with(database_url, options)?))
    }

    /// Open a store and run [`ScoopStore::initialize`] and
    /// [`ScoopStore::upgrade_schema`].
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or prepared.
    pub fn open_ready(database_url: &str, options: PoolOptions) -> Result<Self> {
        let store = Self::open(database_url, options)?;
        store.initialize()?;
        store.upgrade_schema()?;
        Ok(store)
    }

    /// Current `PRAGMA user_version` of the database.
    ///
    /// # Errors
    /// Returns an error if no connection is available.
    pub fn schema_version(&self) -> Result<i32> {
        let mut conn = self.conn()?;
        Ok(upgrade::user_version(&mut conn)?)
    }

    fn conn(&self) -> Result<PooledConn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl ScoopStore for SqliteScoopStore {
    fn initialize(&self) -> Result<()> {
        run_migrations(&self.pool)
    }

    fn upgrade_schema(&self) -> Result<()> {
        let mut conn = self.conn()?;
        let version = upgrade::upgrade(&mut conn)?;
        debug!(version, "schema up to date");
        Ok(())
    }

    fn insert(&self, fields: &ScoopFields) -> Result<RecordId> {
        let mut conn = self.conn()?;
        let changeset = ScoopChangeset::from(fields);

        let id = conn.transaction(|conn| {
            diesel::insert_into(scoops::table)
                .values(&changeset)
                .execute(conn)?;
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result::<i64>(conn)
        })?;

        debug!(id, branch = %fields.branch, product = %fields.product_name, "inserted scoop");
        Ok(RecordId::new(id))
    }

    fn list_all(&self) -> Result<Vec<ScoopRecord>> {
        let mut conn = self.conn()?;

        let rows: Vec<ScoopRow> = scoops::table
            .select(ScoopRow::as_select())
            .order((scoops::date.desc(), scoops::id.desc()))
            .load(&mut conn)?;

        Ok(rows.into_iter().map(ScoopRecord::from).collect())
    }

    fn get(&self, id: RecordId) -> Result<Option<ScoopRecord>> {
        let mut conn = self.conn()?;

        let row: Option<ScoopRow> = scoops::table
            .find(id.get())
            .select(ScoopRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(ScoopRecord::from))
    }

    fn delete(&self, id: RecordId) -> Result<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(scoops::table.find(id.get())).execute(&mut conn)?;

        debug!(%id, deleted, "delete scoop");
        Ok(())
    }

    fn update(&self, id: RecordId, fields: &ScoopFields) -> Result<()> {
        let mut conn = self.conn()?;

        let updated = diesel::update(scoops::table.find(id.get()))
            .set(&ScoopChangeset::from(fields))
            .execute(&mut conn)?;

        debug!(%id, updated, "update scoop");
        Ok(())
    }
}
