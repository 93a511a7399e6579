use clap::{Args, Parser, Subcommand};
use envconfig::Envconfig;

use crate::{config, utils};

#[derive(Args, Debug, Clone)]
pub struct RunMigrationsArgs {
    /// File name relative to the `migrations/` directory
    #[arg(short, long)]
    file: String,
}

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// Delete every horse (and, by cascade, every medical record) first
    #[arg(long)]
    reset: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    RunMigrations(RunMigrationsArgs),
    Seed(SeedArgs),
}

/// Maintenance tasks for the horse index database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let app_config = config::AppConfig::init_from_env()?;
        if app_config.is_prod() && app_config.db_pass_encrypt.is_none() {
            eprintln!("warning: ENV=prod but DB_PASS_ENCRYPT is not set");
        }
        let db_pool = utils::setup_sqlite_db_pool(&app_config).await?;

        match &self.action {
            Action::RunMigrations(RunMigrationsArgs { file }) => {
                utils::run_migrations(&db_pool, file).await
            }
            Action::Seed(SeedArgs { reset }) => {
                let (horses, records) = utils::seed(&db_pool, *reset).await?;
                println!("Inserted {horses} horses and {records} medical records.");
                Ok(())
            }
        }
    }
}
