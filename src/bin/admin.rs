//! CLI administration tool for motolog.
//!
//! Provides commands for provisioning users, rotating passwords, and
//! checking the database without going through the HTTP API. Users are only
//! ever created here (or via the gated startup bootstrap); the service has
//! no self-service registration endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Create a user with a generated password
//! cargo run --bin admin -- user create --username alice
//!
//! # Rotate a password
//! cargo run --bin admin -- user set-password alice
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `PASSWORD_SIGNING_SECRET` (required): HMAC key for password hashes;
//!   must match the server's value or logins will fail

use motolog::domain::entities::NewUser;
use motolog::domain::repositories::UserRepository;
use motolog::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::Sha256;
use sqlx::PgPool;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

/// CLI tool for managing motolog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,

        /// Password (optional, auto-generated if not provided)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Replace a user's password
    SetPassword {
        /// Username
        username: String,

        /// New password (optional, auto-generated if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => {
            create_user(repo, username, password, yes).await?;
        }
        UserAction::SetPassword { username, password } => {
            set_password(repo, username, password).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
    }

    Ok(())
}

/// Creates a new user with interactive prompts.
///
/// # Security
///
/// - Only the HMAC-SHA256 of the password is stored
/// - A generated password is displayed once and cannot be retrieved later
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (generate_password(), true),
    };

    println!("  Username: {}", username.cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "Save this password now, it cannot be shown again.".red().bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hash_password(&password)?;

    let user = repo
        .create(NewUser {
            username,
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {e}"))?;

    println!();
    println!(
        "{} {}",
        "User created with id".green().bold(),
        user.id.to_string().bright_white()
    );

    Ok(())
}

/// Replaces a user's password.
async fn set_password(
    repo: Arc<PgUserRepository>,
    username: String,
    password: Option<String>,
) -> Result<()> {
    let user = repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {e}"))?
        .with_context(|| format!("user '{username}' not found"))?;

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (generate_password(), true),
    };

    let password_hash = hash_password(&password)?;
    repo.update_password(user.id, &password_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update password: {e}"))?;

    println!("{}", "Password updated".green().bold());
    if generated {
        println!("  New password: {}", password.bright_yellow().bold());
    }

    Ok(())
}

/// Lists all users.
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {e}"))?;

    if users.is_empty() {
        println!("{}", "No users yet".yellow());
        return Ok(());
    }

    println!("{}", "Users:".bright_white().bold());
    for user in users {
        println!(
            "  {} {} (created {})",
            user.id.to_string().bright_white(),
            user.username.cyan(),
            user.created_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1").execute(pool).await?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;
            let motorcycles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM motorcycles")
                .fetch_one(pool)
                .await?;
            let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_records")
                .fetch_one(pool)
                .await?;
            let alerts: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM alerts WHERE NOT is_completed")
                    .fetch_one(pool)
                    .await?;

            println!("{}", "Database info:".bright_white().bold());
            println!("  Users:        {users}");
            println!("  Motorcycles:  {motorcycles}");
            println!("  Records:      {records}");
            println!("  Open alerts:  {alerts}");
        }
    }

    Ok(())
}

/// Hashes a password the way the server does: HMAC-SHA256 keyed by
/// `PASSWORD_SIGNING_SECRET`, hex-encoded.
fn hash_password(password: &str) -> Result<String> {
    let secret =
        std::env::var("PASSWORD_SIGNING_SECRET").context("PASSWORD_SIGNING_SECRET must be set")?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Generates a random 20-character alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}
