/// Orders - one page of exchange orders plus pagination metadata
///
/// Returned from exchange order queries. The collection owns its own copy of
/// the orders, sorted once at construction according to [`OrderSortType`], and
/// is read-only afterwards. Instances are `Send + Sync` whenever the order type
/// is, so readers on several threads need no locking.
///
/// ## Usage
/// ```rust
/// use exchange_orders::domain::{OrderSortType, Orders};
/// use exchange_orders::shared::protocol::{Order, OrderType};
///
/// let page = vec![
///     Order::new(OrderType::Buy, "BTC/USD", "10", 2, 1),
///     Order::new(OrderType::Buy, "BTC/USD", "9", 1, 1),
/// ];
/// let orders = Orders::with_pagination(page, 77, OrderSortType::ById, Some("p2".into()));
///
/// assert_eq!(orders.orders()[0].id, "9");
/// assert_eq!(orders.last_id(), 77);
/// assert_eq!(orders.next_page_cursor(), Some("p2"));
/// ```

use super::comparator::{compare_by_id, compare_by_timestamp, IdKey};
use super::traits::OrderRecord;
use crate::shared::collections::{apply_permutation, merge_sort_by, sorted_permutation};
use crate::shared::error::OrdersError;
use crate::shared::protocol::{Order, OrdersPage};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderSortType {
    /// Earliest timestamp first
    ByTimestamp,
    /// Numeric ID order where possible, see [`compare_ids`](super::comparator::compare_ids)
    #[default]
    ById,
}

impl OrderSortType {
    /// Compares two orders under this sort type
    pub fn compare<O: OrderRecord + ?Sized>(&self, a: &O, b: &O) -> Ordering {
        match self {
            OrderSortType::ByTimestamp => compare_by_timestamp(a, b),
            OrderSortType::ById => compare_by_id(a, b),
        }
    }

    /// Stable sort of `orders` under this sort type
    pub fn sort<O: OrderRecord>(&self, orders: Vec<O>) -> Vec<O> {
        match self {
            OrderSortType::ByTimestamp => merge_sort_by(orders, |a, b| compare_by_timestamp(a, b)),
            OrderSortType::ById => {
                // 每个ID只解析一次；比较器可能不满足传递性，使用不会panic的归并排序
                let permutation = {
                    let keys: Vec<IdKey<'_>> = orders.iter().map(|order| IdKey::new(order.id())).collect();
                    sorted_permutation(keys.len(), |a, b| keys[a].compare(&keys[b]))
                };
                apply_permutation(orders, &permutation)
            }
        }
    }
}

impl fmt::Display for OrderSortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSortType::ByTimestamp => write!(f, "SortByTimestamp"),
            OrderSortType::ById => write!(f, "SortByID"),
        }
    }
}

impl FromStr for OrderSortType {
    type Err = OrdersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "by_id" | "sortbyid" => Ok(OrderSortType::ById),
            "timestamp" | "by_timestamp" | "sortbytimestamp" => Ok(OrderSortType::ByTimestamp),
            _ => Err(OrdersError::UnknownSortType(s.to_string())),
        }
    }
}

/// A sorted, immutable page of orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orders<O = Order> {
    orders: Vec<O>,
    last_id: i64,
    next_page_cursor: Option<String>,
    sort_type: OrderSortType,
}

impl<O: OrderRecord> Orders<O> {
    /// Collects `orders` sorted by ID, with `last_id` 0 and no cursor
    pub fn new(orders: impl IntoIterator<Item = O>) -> Self {
        Self::with_pagination(orders, 0, OrderSortType::default(), None)
    }

    pub fn with_sort_type(orders: impl IntoIterator<Item = O>, sort_type: OrderSortType) -> Self {
        Self::with_pagination(orders, 0, sort_type, None)
    }

    pub fn with_last_id(
        orders: impl IntoIterator<Item = O>,
        last_id: i64,
        sort_type: OrderSortType,
    ) -> Self {
        Self::with_pagination(orders, last_id, sort_type, None)
    }

    /// Full constructor
    ///
    /// # Arguments
    /// * `orders` - Orders from the exchange, collected into a fresh vector
    /// * `last_id` - Opaque sync marker returned alongside the page
    /// * `sort_type` - Key the collection is sorted by
    /// * `next_page_cursor` - Token for fetching the following page, if any
    pub fn with_pagination(
        orders: impl IntoIterator<Item = O>,
        last_id: i64,
        sort_type: OrderSortType,
        next_page_cursor: Option<String>,
    ) -> Self {
        let orders = sort_type.sort(orders.into_iter().collect());

        tracing::debug!(
            count = orders.len(),
            last_id,
            sort_type = %sort_type,
            has_next_page = next_page_cursor.is_some(),
            "orders collected"
        );

        Self {
            orders,
            last_id,
            next_page_cursor,
            sort_type,
        }
    }

    /// Copies a borrowed slice; later changes to `orders` do not reach the collection
    pub fn from_slice(orders: &[O], sort_type: OrderSortType) -> Self
    where
        O: Clone,
    {
        Self::with_sort_type(orders.iter().cloned(), sort_type)
    }

    /// Orders, sorted by [`sort_type`](Self::sort_type)
    pub fn orders(&self) -> &[O] {
        &self.orders
    }

    pub fn last_id(&self) -> i64 {
        self.last_id
    }

    pub fn sort_type(&self) -> OrderSortType {
        self.sort_type
    }

    pub fn next_page_cursor(&self) -> Option<&str> {
        self.next_page_cursor.as_deref()
    }

    /// Whether a non-empty cursor for a following page is present
    pub fn has_next_page(&self) -> bool {
        self.next_page_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, O> {
        self.orders.iter()
    }

    /// Gives up the collection, returning the sorted orders
    pub fn into_orders(self) -> Vec<O> {
        self.orders
    }
}

impl Orders<Order> {
    /// Builds a collection from a raw exchange page
    pub fn from_page(page: OrdersPage, sort_type: OrderSortType) -> Self {
        Self::with_pagination(page.orders, page.last_id, sort_type, page.next_page_cursor)
    }
}

impl<'a, O> IntoIterator for &'a Orders<O> {
    type Item = &'a O;
    type IntoIter = std::slice::Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl<O> IntoIterator for Orders<O> {
    type Item = O;
    type IntoIter = std::vec::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

/// Debug rendering for logs; not a stable or parseable format
impl<O: fmt::Display> fmt::Display for Orders<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orders")?;
        writeln!(f, "lastID= {}", self.last_id)?;
        for order in &self.orders {
            writeln!(f, "[order={}]", order)?;
        }
        match &self.next_page_cursor {
            Some(cursor) => writeln!(f, "nextPageCursor= {}", cursor),
            None => writeln!(f, "nextPageCursor= null"),
        }
    }
}
