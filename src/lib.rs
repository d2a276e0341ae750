//! gh-portfolio: GitHub profile → AI-generated portfolio page → Vercel, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
