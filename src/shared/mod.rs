/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Protocol definitions (order records, exchange pages)
/// - Common algorithms (stable merge sort)
/// - Error types

pub mod protocol;
pub mod collections;
pub mod error;

// Re-export commonly used types
pub use protocol::{Order, OrderStatus, OrderType, OrdersPage};
pub use error::{OrdersError, Result};
