/// Domain Layer - Order Collections
///
/// Pure logic with no I/O: the order record abstraction, the comparators used
/// to sort orders, and the `Orders` collection returned from exchange queries.
///
/// ## Modules
/// - `traits`: `OrderRecord`, the minimal view of an exchange order
/// - `comparator`: ID (decimal → hex → text) and timestamp comparators
/// - `orders`: `Orders` collection and `OrderSortType`

pub mod traits;
pub mod comparator;
pub mod orders;

// Re-export key types
pub use comparator::{compare_ids, IdKey};
pub use orders::{OrderSortType, Orders};
pub use traits::OrderRecord;
