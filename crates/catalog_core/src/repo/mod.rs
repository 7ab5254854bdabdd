//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the catalog.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic outcomes (`Ok(None)` for missing rows)
//!   in addition to DB transport errors.
//! - Constraint failures surface as `RepoError::ConstraintViolation`, never
//!   as raw driver errors.

pub mod catalog_repo;
