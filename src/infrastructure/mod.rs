//! Infrastructure layer for external integrations and technical concerns.
//!
//! This module contains:
//! - Database and storage abstractions

pub mod persistence;
