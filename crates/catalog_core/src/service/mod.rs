//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep caller-facing layers decoupled from storage details.

pub mod catalog_service;
