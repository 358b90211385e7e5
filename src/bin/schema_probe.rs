//! One-shot diagnostic: lists the columns of the timeline_events table and
//! checks that the ordering column exists, printing the DDL to add it if
//! not. Not part of the request-serving path; run directly:
//!
//! ```text
//! cargo run --bin schema-probe
//! ```

use chronicle_api::{AppConfig, RestStore, TableStore};

const TABLE: &str = "timeline_events";
const EXPECTED_COLUMN: &str = "sort_order";

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Could not read configuration: {e}");
            return;
        }
    };
    let store = RestStore::new(&config);

    println!("Columns of '{TABLE}':");
    match store.table_columns(TABLE).await {
        Ok(columns) => {
            for column in &columns {
                println!("  - {column}");
            }
            if columns.iter().any(|c| c == EXPECTED_COLUMN) {
                println!("Column '{EXPECTED_COLUMN}' is present.");
            } else {
                println!("Column '{EXPECTED_COLUMN}' is MISSING.");
                println!("Run this against the database to add it:");
                println!("  ALTER TABLE {TABLE} ADD COLUMN {EXPECTED_COLUMN} integer NOT NULL DEFAULT 0;");
            }
        }
        Err(e) => println!("Could not read schema metadata: {e}"),
    }
}
