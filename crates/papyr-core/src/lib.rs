//! # Papyr Core
//!
//! The domain layer of the papyr content backend.
//! This crate contains the post entities, query model, port traits and the
//! ownership-enforced post service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
