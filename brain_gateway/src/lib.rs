//! # Brain Gateway
//!
//! The HTTP surface of the agent brain: admin routes for curating the
//! registry, agent routes for prompts, readiness and voice design, plus typed
//! client wrappers and the Stake Engine demo data.
//!
//! ## Core Components
//!
//! - **routes**: The axum router over a shared, lock-protected [`agent_brain::Brain`]
//! - **server**: Foreground serving and a stoppable background gateway
//! - **client**: `AdminClient` and `FrontEndClient` over `reqwest`
//! - **config**: TOML configuration of the binary
//! - **seed**: The Stake Engine demo brain

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod server;

pub use client::{AdminClient, ChatOptions, ClientError, ClientResult, FrontEndClient};
pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, GatewayError};
pub use routes::{router, AppState, SharedBrain};
pub use seed::{seed_stake_engine, seed_via_admin};
pub use server::{serve, spawn, RunningGateway};
