//! # Blog Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;
