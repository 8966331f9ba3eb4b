//! point_ledger Library
//!
//! Per-user point balances with a fixed cap, charge/use operations and an
//! append-only history. Re-exports modules for integration testing and the
//! binaries.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;

pub use config::Config;
pub use domain::{Amount, AmountError, DomainError, Points, MAX_POINTS};
pub use domain::{PointHistory, TransactionType, UserId, UserPoint};
pub use error::{AppError, AppResult, ErrorKind};
pub use service::PointService;
pub use store::{InMemoryLedgerStore, LedgerStore, StoreError};
