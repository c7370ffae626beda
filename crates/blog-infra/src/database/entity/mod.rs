//! SeaORM entities for the blog tables.

pub mod author;
pub mod comment;
pub mod post;
