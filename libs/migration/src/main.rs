//! Migration CLI for the catalog schema.
//!
//! Reads `DATABASE_URL`; run `migration up`, `migration down` or
//! `migration status`. The API applies pending migrations on startup, so
//! this is only needed for manual rollbacks and inspection.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
