//! GitHub adapter. Implements ProfilePort over the public REST API.

pub mod client;

pub use client::GithubProfileAdapter;
