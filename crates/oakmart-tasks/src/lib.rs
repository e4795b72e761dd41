//! # oakmart-tasks: Async Cross-Cutting Helpers
//!
//! Small async utilities used by the serverless handlers around the pure
//! core. Nothing in here encodes business rules; that all lives in
//! `oakmart-core`.

pub mod timeout;

pub use timeout::{with_timeout, TimeoutError};
