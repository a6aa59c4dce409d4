//! Migration CLI for the catalog database.
//!
//! Reads `DATABASE_URL` and accepts the usual sea-orm-migration subcommands
//! (`up`, `down`, `status`, `fresh`, `refresh`, `reset`).

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
