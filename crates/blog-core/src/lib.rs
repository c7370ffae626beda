//! # Blog Core
//!
//! The domain layer of the blog service: entities, repository ports,
//! mapping to wire types, and the services that tie them together.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::{AuthorService, CommentService, PostService};
