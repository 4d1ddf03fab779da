use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 订单方向，区分买单和卖单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum OrderType {
    Buy,
    Sell,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Buy => write!(f, "BUY"),
            OrderType::Sell => write!(f, "SELL"),
        }
    }
}

/// 订单状态，由交易所回报
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub enum OrderStatus {
    /// Submitted but not yet acknowledged by the exchange
    Pending,
    #[default]
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Rejected,
    Expired,
}

impl OrderStatus {
    /// Whether an order in this status can still trade
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::New | OrderStatus::PartiallyFilled
        )
    }
}

/// 交易所返回的单个订单记录
///
/// IDs stay as text: exchanges encode them as decimal numbers, hex strings or
/// opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Order {
    pub order_type: OrderType,
    pub symbol: String,
    pub id: String,
    /// Unix 纳秒时间戳
    pub timestamp: u64,
    /// 限价，市价单为 None（使用 u64 避免浮点数精度问题）
    #[serde(default)]
    pub price: Option<u64>,
    pub quantity: u64,
    #[serde(default)]
    pub filled_quantity: u64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub user_reference: Option<String>,
}

impl Order {
    /// Creates a new, unfilled market order record
    pub fn new(
        order_type: OrderType,
        symbol: impl Into<String>,
        id: impl Into<String>,
        timestamp: u64,
        quantity: u64,
    ) -> Self {
        Self {
            order_type,
            symbol: symbol.into(),
            id: id.into(),
            timestamp,
            price: None,
            quantity,
            filled_quantity: 0,
            status: OrderStatus::New,
            user_reference: None,
        }
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_filled_quantity(mut self, filled_quantity: u64) -> Self {
        self.filled_quantity = filled_quantity;
        self
    }

    pub fn with_user_reference(mut self, user_reference: impl Into<String>) -> Self {
        self.user_reference = Some(user_reference.into());
        self
    }

    /// Quantity not yet filled; never underflows on inconsistent exchange data
    pub fn remaining_quantity(&self) -> u64 {
        self.quantity.saturating_sub(self.filled_quantity)
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order [id={}, type={}, symbol={}, quantity={}, filled={}, price=",
            self.id, self.order_type, self.symbol, self.quantity, self.filled_quantity
        )?;
        match self.price {
            Some(price) => write!(f, "{}", price)?,
            None => write!(f, "MARKET")?,
        }
        write!(f, ", status={:?}, timestamp={}", self.status, self.timestamp)?;
        if let Some(reference) = &self.user_reference {
            write!(f, ", reference={}", reference)?;
        }
        write!(f, "]")
    }
}

/// 交易所分页响应：一页订单加分页元数据
///
/// This is the raw shape an exchange connector hands over, before sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    #[serde(default)]
    pub last_id: i64,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_order() -> Order {
        Order::new(OrderType::Buy, "BTC/USD", "1001", 1_700_000_000_000_000_000, 10)
            .with_price(50000)
            .with_filled_quantity(4)
            .with_status(OrderStatus::PartiallyFilled)
    }

    #[test]
    fn test_remaining_quantity() {
        let order = limit_order();
        assert_eq!(order.remaining_quantity(), 6);

        let overfilled = order.with_filled_quantity(12);
        assert_eq!(overfilled.remaining_quantity(), 0);
    }

    #[test]
    fn test_open_status() {
        assert!(limit_order().is_open());
        assert!(!limit_order().with_status(OrderStatus::Filled).is_open());
        assert!(!limit_order().with_status(OrderStatus::Canceled).is_open());
        assert!(OrderStatus::Pending.is_open());
    }

    #[test]
    fn test_display() {
        let order = limit_order().with_user_reference("bot-7");
        assert_eq!(
            order.to_string(),
            "Order [id=1001, type=BUY, symbol=BTC/USD, quantity=10, filled=4, price=50000, \
             status=PartiallyFilled, timestamp=1700000000000000000, reference=bot-7]"
        );

        let market = Order::new(OrderType::Sell, "ETH/USD", "x", 5, 1);
        assert!(market.to_string().contains("price=MARKET"));
    }

    #[test]
    fn test_page_json_defaults() {
        let json = r#"{"orders":[{"order_type":"Sell","symbol":"ETH/USD","id":"ff","timestamp":3,"quantity":2}]}"#;
        let page: OrdersPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.last_id, 0);
        assert_eq!(page.next_page_cursor, None);
        assert_eq!(page.orders[0].status, OrderStatus::New);
        assert_eq!(page.orders[0].price, None);
        assert_eq!(page.orders[0].filled_quantity, 0);
    }

    #[test]
    fn test_page_bincode() {
        let page = OrdersPage {
            orders: vec![limit_order()],
            last_id: -3,
            next_page_cursor: Some("c2".to_string()),
        };
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(&page, config).unwrap();
        let (decoded, read): (OrdersPage, usize) = bincode::decode_from_slice(&bytes, config).unwrap();

        assert_eq!(read, bytes.len());
        assert_eq!(decoded, page);
    }
}
