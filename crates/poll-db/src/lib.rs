//! # poll-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `poll-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use poll_db::{create_pool, run_migrations, PgQuestionRepository, PoolConfig, MIGRATIONS_DIR};
//! use poll_core::QuestionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::new("postgres://localhost/polls", 20, 1);
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool, MIGRATIONS_DIR).await?;
//!
//!     let questions = PgQuestionRepository::new(pool);
//!     let total = questions.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig, MIGRATIONS_DIR};
pub use repositories::{PgAdminRepository, PgChoiceRepository, PgQuestionRepository};
