use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Database connection manager
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    // Create a new database connection pool
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    // Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Create the tables if they do not exist yet
    pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        let tables = vec![
            "CREATE TABLE IF NOT EXISTS flights (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                flight_no TEXT NOT NULL UNIQUE,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL,
                departure TEXT NOT NULL,
                arrival TEXT NOT NULL,
                base_fare TEXT NOT NULL,
                total_seats INTEGER NOT NULL,
                seats_available INTEGER NOT NULL,
                airline_name TEXT NOT NULL,
                CHECK (seats_available >= 0 AND seats_available <= total_seats)
            )",
            "CREATE TABLE IF NOT EXISTS bookings (
                booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
                flight_id INTEGER NOT NULL,
                passenger_name TEXT NOT NULL,
                seat_no TEXT NULL,
                pnr TEXT NOT NULL UNIQUE,
                price TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Confirmed',
                created_at TEXT NOT NULL,
                CONSTRAINT bookings_flight_id_fk
                    FOREIGN KEY (flight_id) REFERENCES flights(id)
                    ON DELETE CASCADE
            )",
        ];

        for create_sql in tables {
            sqlx::query(create_sql).execute(pool).await?;
        }

        Ok(())
    }
}
