use clap::{Args, Parser, Subcommand};

use crate::{config, utils};

#[derive(Args, Debug, Clone)]
pub struct RunMigrationsArgs {
    /// Migration file name under `migrations/`
    #[arg(short, long)]
    file: String,
}

#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    #[arg(short, long)]
    user_id: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    RunMigrations(RunMigrationsArgs),
    /// Registers a user with no webhook secret yet
    CreateUser(UserArgs),
    /// Replaces the user's webhook secret and prints the new one
    RotateSecret(UserArgs),
}

/// Maintenance tasks for the crm hooks database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let db_pool = utils::setup_sqlite_db_pool(config::APP_CONFIG.is_prod()).await?;

        match &self.action {
            Action::RunMigrations(RunMigrationsArgs { file }) => {
                utils::run_migrations(&db_pool, file).await
            }
            Action::CreateUser(UserArgs { user_id }) => {
                if utils::create_user(&db_pool, user_id).await? {
                    println!("user {user_id} created");
                } else {
                    println!("user {user_id} already exists");
                }
                Ok(())
            }
            Action::RotateSecret(UserArgs { user_id }) => {
                let secret = utils::rotate_secret(&db_pool, user_id).await?;
                println!("{secret}");
                Ok(())
            }
        }
    }
}
