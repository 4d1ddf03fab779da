//! Sorted order pages returned from exchange order queries.
//!
//! - `shared`: order records, exchange pages, errors, sorting helpers
//! - `domain`: `Orders` collection and its comparators
//! - `interfaces`: command-line inspection tool

pub mod shared;
pub mod domain;
pub mod interfaces;

pub use domain::{OrderRecord, OrderSortType, Orders};
pub use shared::{Order, OrderStatus, OrderType, OrdersError, OrdersPage};
