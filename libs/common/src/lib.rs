//! Common library for the answer signer
//!
//! This crate provides shared functionality used by the signer service,
//! including PostgreSQL configuration, pooling, schema setup and error
//! handling.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     let is_healthy = health_check(&pool).await?;
//!     println!("Database health check: {}", is_healthy);
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
