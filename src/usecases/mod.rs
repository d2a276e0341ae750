//! Application use cases. Orchestrate domain logic via ports.

pub mod portfolio_service;

pub use portfolio_service::{PortfolioService, Step};
