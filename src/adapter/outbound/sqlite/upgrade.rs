//! Additive schema upgrades for the `scoops` table.
//!
//! Older databases were created without `unit` and `price_iqd`. Each
//! [`SchemaStep`] adds one column; steps are ordered by version, and the
//! highest version applied is kept in `PRAGMA user_version`. Re-adding a
//! column that already exists counts as applied, so every step can be run
//! any number of times.

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use tracing::{debug, info};

/// One additive schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStep {
    /// Value stored in `user_version` once the step is in place.
    pub version: i32,
    pub column: &'static str,
    pub ddl: &'static str,
}

/// Ordered upgrade steps.
pub const SCHEMA_STEPS: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        column: "unit",
        ddl: "ALTER TABLE scoops ADD COLUMN unit TEXT NOT NULL DEFAULT ''",
    },
    SchemaStep {
        version: 2,
        column: "price_iqd",
        ddl: "ALTER TABLE scoops ADD COLUMN price_iqd INTEGER NOT NULL DEFAULT 0",
    },
];

/// Schema version after all steps.
#[must_use]
pub fn latest_version() -> i32 {
    SCHEMA_STEPS.iter().map(|step| step.version).max().unwrap_or(0)
}

/// Result of running a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The column was added.
    Applied,
    /// The column was already there; nothing changed.
    AlreadyApplied,
}

#[derive(QueryableByName)]
struct UserVersion {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    user_version: i32,
}

/// Read `PRAGMA user_version`.
///
/// # Errors
/// Returns the underlying query error.
pub fn user_version(conn: &mut SqliteConnection) -> QueryResult<i32> {
    let rows = diesel::sql_query("PRAGMA user_version").load::<UserVersion>(conn)?;
    Ok(rows.first().map_or(0, |row| row.user_version))
}

fn set_user_version(conn: &mut SqliteConnection, version: i32) -> QueryResult<()> {
    diesel::sql_query(format!("PRAGMA user_version = {version}")).execute(conn)?;
    Ok(())
}

fn is_duplicate_column(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(_, info) if info.message().contains("duplicate column name")
    )
}

/// Run one step and record its version, inside a single transaction.
///
/// # Errors
/// Returns any failure other than the column already existing.
pub fn apply_step(conn: &mut SqliteConnection, step: &SchemaStep) -> QueryResult<StepOutcome> {
    conn.transaction(|conn| {
        let outcome = match diesel::sql_query(step.ddl).execute(conn) {
            Ok(_) => StepOutcome::Applied,
            Err(err) if is_duplicate_column(&err) => StepOutcome::AlreadyApplied,
            Err(err) => return Err(err),
        };
        if user_version(conn)? < step.version {
            set_user_version(conn, step.version)?;
        }
        Ok(outcome)
    })
}

/// Bring the table up to [`latest_version`], skipping recorded steps.
///
/// Returns the schema version afterwards.
///
/// # Errors
/// Returns the first step failure that is not a duplicate column.
pub fn upgrade(conn: &mut SqliteConnection) -> QueryResult<i32> {
    let current = user_version(conn)?;
    for step in SCHEMA_STEPS.iter().filter(|step| step.version > current) {
        match apply_step(conn, step)? {
            StepOutcome::Applied => {
                info!(version = step.version, column = step.column, "added column");
            }
            StepOutcome::AlreadyApplied => {
                debug!(
                    version = step.version,
                    column = step.column,
                    "column already present"
                );
            }
        }
    }
    user_version(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(QueryableByName)]
    struct ColumnName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    fn columns(conn: &mut SqliteConnection) -> Vec<String> {
        diesel::sql_query("SELECT name FROM pragma_table_info('scoops')")
            .load::<ColumnName>(conn)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    fn legacy_connection() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        diesel::sql_query(
            "CREATE TABLE scoops (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                branch TEXT,
                product_name TEXT,
                quantity INTEGER
            )",
        )
        .execute(&mut conn)
        .unwrap();
        conn
    }

    #[test]
    fn steps_are_ordered_by_version() {
        let versions: Vec<i32> = SCHEMA_STEPS.iter().map(|s| s.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(versions, sorted);
        assert_eq!(latest_version(), 2);
    }

    #[test]
    fn unit_step_adds_column_to_legacy_table() {
        let mut conn = legacy_connection();
        let outcome = apply_step(&mut conn, &SCHEMA_STEPS[0]).unwrap();
        assert_eq!(outcome, StepOutcome::Applied);
        assert!(columns(&mut conn).contains(&"unit".to_string()));
        assert_eq!(user_version(&mut conn).unwrap(), 1);
    }

    #[test]
    fn repeated_step_is_already_applied() {
        let mut conn = legacy_connection();
        apply_step(&mut conn, &SCHEMA_STEPS[1]).unwrap();
        let outcome = apply_step(&mut conn, &SCHEMA_STEPS[1]).unwrap();
        assert_eq!(outcome, StepOutcome::AlreadyApplied);
    }

    #[test]
    fn upgrade_reaches_latest_version() {
        let mut conn = legacy_connection();
        assert_eq!(user_version(&mut conn).unwrap(), 0);
        assert_eq!(upgrade(&mut conn).unwrap(), latest_version());

        let cols = columns(&mut conn);
        assert!(cols.contains(&"unit".to_string()));
        assert!(cols.contains(&"price_iqd".to_string()));
    }

    #[test]
    fn upgrade_twice_is_a_no_op() {
        let mut conn = legacy_connection();
        upgrade(&mut conn).unwrap();
        let before = columns(&mut conn);
        assert_eq!(upgrade(&mut conn).unwrap(), latest_version());
        assert_eq!(columns(&mut conn), before);
    }

    #[test]
    fn upgrade_tolerates_columns_without_recorded_version() {
        // Full table but user_version still 0, as on a freshly created database.
        let mut conn = legacy_connection();
        diesel::sql_query("ALTER TABLE scoops ADD COLUMN unit TEXT NOT NULL DEFAULT ''")
            .execute(&mut conn)
            .unwrap();
        diesel::sql_query("ALTER TABLE scoops ADD COLUMN price_iqd INTEGER NOT NULL DEFAULT 0")
            .execute(&mut conn)
            .unwrap();

        assert_eq!(upgrade(&mut conn).unwrap(), latest_version());
    }

    #[test]
    fn other_ddl_errors_are_surfaced() {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        // No scoops table at all.
        assert!(apply_step(&mut conn, &SCHEMA_STEPS[0]).is_err());
    }
}
