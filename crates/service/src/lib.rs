//! Service layer for classified ads.
//! - Separates request validation and business rules from data access.
//! - Storage sits behind the `AdRepository` trait so callers can inject a
//!   SeaORM-backed store or the in-memory fake.

pub mod errors;
pub mod ads;
#[cfg(test)]
pub mod test_support;
