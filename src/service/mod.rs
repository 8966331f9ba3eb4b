//! Service module
//!
//! Business operations on point balances and the per-user locking they rely on.

mod locks;
mod point_service;


pub use locks::UserLocks;
pub use point_service::PointService;
