//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod error;
pub mod point;

pub use amount::{Amount, AmountError, Points, MAX_POINTS};
pub use error::DomainError;
pub use point::{PointHistory, TransactionType, UserId, UserPoint};
