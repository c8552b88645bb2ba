use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use skripsi::store::{PgStore, UserStore};
use skripsi_config::DatabaseConfig;
use skripsi_core::Role;
use skripsi_db::{PgPool, init_db_pool};
use skripsi_models::{CreateUserDto, NewUser};
use validator::Validate;

#[derive(Parser)]
#[command(name = "skripsi-cli")]
#[command(about = "Administrative tools for the essay scoring API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a superadmin account (the only way to obtain that role)
    CreateSuperadmin {
        /// Full name
        #[arg(short = 'n', long)]
        nama_lengkap: Option<String>,

        /// Optional username
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env();
    let pool = init_db_pool(&config).await?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateSuperadmin {
            nama_lengkap,
            username,
            email,
            password,
        } => {
            let store = PgStore::new(pool, config.query_timeout);
            handle_create_superadmin(&store, nama_lengkap, username, email, password).await
        }
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_superadmin(
    store: &PgStore,
    nama_lengkap: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let nama_lengkap = match nama_lengkap {
        Some(value) => value,
        None => Input::new()
            .with_prompt("Full name")
            .interact_text()
            .context("Failed to read full name")?,
    };

    let username = match username {
        Some(value) => Some(value),
        None => {
            let value: String = Input::new()
                .with_prompt("Username (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read username")?;
            Some(value)
        }
    }
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty());

    let email = match email {
        Some(value) => value,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(value) => value,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let dto = CreateUserDto {
        nama_lengkap,
        username,
        email,
        password,
    };
    dto.validate().context("Invalid superadmin details")?;

    let new_user = NewUser::from(dto);
    let email = new_user.email.clone();
    let id = store
        .create_user(new_user, Role::Superadmin)
        .await
        .context("Failed to create superadmin")?;

    println!("\n✅ Superadmin created successfully!");
    println!("   ID: {}", id);
    println!("   Email: {}", email);
    Ok(())
}
