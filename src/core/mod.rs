//! Configuration, the user model and request validation.

pub mod config;
pub mod models;
pub mod validation;
