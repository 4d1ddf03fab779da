/// OrderRecord Trait - Domain Layer Abstraction
///
/// The collection does not care about the full shape of an exchange order.
/// It needs an identifier to sort by ID, a timestamp to sort by time and a
/// display rendering for debug output. Any connector-specific order type that
/// provides these can be collected in an [`Orders`](super::Orders).
///
/// ## Implementations
/// - `shared::protocol::Order`: the crate's own order record
///
/// ## Example
/// ```rust
/// use exchange_orders::domain::{OrderRecord, Orders};
/// use std::fmt;
///
/// struct Fill { id: String, ts: u64 }
///
/// impl fmt::Display for Fill {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "Fill {}", self.id)
///     }
/// }
///
/// impl OrderRecord for Fill {
///     fn id(&self) -> &str { &self.id }
///     fn timestamp(&self) -> u64 { self.ts }
/// }
///
/// let orders = Orders::new(vec![
///     Fill { id: "10".into(), ts: 1 },
///     Fill { id: "9".into(), ts: 2 },
/// ]);
/// assert_eq!(orders.orders()[0].id(), "9");
/// ```

use crate::shared::protocol::Order;
use std::fmt;

pub trait OrderRecord: fmt::Display {
    /// Exchange-assigned identifier, in whatever encoding the exchange uses
    fn id(&self) -> &str;

    /// Unix nanosecond timestamp; larger is later
    fn timestamp(&self) -> u64;
}

impl OrderRecord for Order {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl<T: OrderRecord + ?Sized> OrderRecord for &T {
    #[inline]
    fn id(&self) -> &str {
        (**self).id()
    }

    #[inline]
    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}
