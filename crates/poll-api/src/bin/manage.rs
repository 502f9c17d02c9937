//! Operator commands for the poll server
//!
//! ```bash
//! cargo run -p poll-api --bin poll-manage -- migrate
//! cargo run -p poll-api --bin poll-manage -- create-sample-data
//! cargo run -p poll-api --bin poll-manage -- create-admin --username admin
//! ```
//!
//! Database settings come from the same environment variables as the server.

use clap::{Parser, Subcommand};
use poll_common::{try_init_tracing, AppError, DatabaseConfig};
use poll_service::{AdminBootstrap, AdminService, SeedService};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "poll-manage", version, about = "Operator commands for the poll server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,

    /// Replace every poll with the sample questions
    CreateSampleData,

    /// Create the admin account unless it already exists
    CreateAdmin {
        #[arg(long, default_value = "admin")]
        username: String,

        #[arg(long, default_value = "admin@example.com")]
        email: String,

        /// Password for a new account; a random one is generated when omitted
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    let mut config = DatabaseConfig::from_env().map_err(|e| AppError::Config(e.to_string()))?;
    // `migrate` applies migrations itself; the other commands need the schema in place
    config.run_migrations = true;

    let pool = poll_api::connect_database(&config).await?;

    match command {
        Command::Migrate => {
            println!(
                "Migrations applied from {}",
                poll_api::migrations_dir(&config).display()
            );
        }
        Command::CreateSampleData => {
            let ctx = poll_api::pg_service_context(pool)?;

            println!("Creating sample data...");
            let report = SeedService::new(&ctx).seed().await.map_err(AppError::from)?;
            println!("Cleared {} existing questions", report.cleared);
            println!(
                "Created {} questions with choices! ({} choices)",
                report.questions_created, report.choices_created
            );
        }
        Command::CreateAdmin {
            username,
            email,
            password,
        } => {
            let ctx = poll_api::pg_service_context(pool)?;

            let outcome = AdminService::new(&ctx)
                .ensure_admin(&username, &email, password)
                .await
                .map_err(AppError::from)?;

            match outcome {
                AdminBootstrap::Existing(account) => {
                    println!("Admin account '{}' already exists; left unchanged", account.username);
                }
                AdminBootstrap::Created {
                    account,
                    generated_password,
                } => {
                    println!("Created admin account '{}'", account.username);
                    if let Some(password) = generated_password {
                        println!("Generated password: {password}");
                        println!("Store it now; it is not shown again.");
                    }
                    println!("Admin API: /api/v1/admin/");
                }
            }
        }
    }

    Ok(())
}
