/// CLI Interface Module
///
/// Command-line tool for inspecting a captured exchange order page.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Load an `OrdersPage` (JSON or bincode) from disk
/// - Build a sorted `Orders` collection
/// - Print the debug rendering or JSON

use crate::domain::{OrderSortType, Orders};
use crate::shared::error::{OrdersError, Result};
use crate::shared::protocol::OrdersPage;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// 订单页检查工具命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "exchange-orders")]
#[command(version = "0.1.0")]
#[command(about = "Sort and inspect a captured exchange order page", long_about = None)]
pub struct CliConfig {
    /// 订单页文件路径
    pub input: PathBuf,

    /// 输入文件编码
    #[arg(short = 'f', long, default_value = "json", value_parser = ["json", "bincode"])]
    pub format: String,

    /// 排序方式
    #[arg(short = 's', long, default_value = "id", value_parser = ["id", "timestamp"])]
    pub sort: String,

    /// 覆盖页面中的 lastID
    #[arg(long, allow_hyphen_values = true)]
    pub last_id: Option<i64>,

    /// 覆盖页面中的分页游标
    #[arg(long)]
    pub cursor: Option<String>,

    /// 输出格式
    #[arg(short = 'o', long, default_value = "text", value_parser = ["text", "json"])]
    pub output: String,

    /// 日志级别
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 仅显示配置不读取文件（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Encoding of a captured page on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Json,
    Bincode,
}

impl FromStr for PageFormat {
    type Err = OrdersError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(PageFormat::Json),
            "bincode" => Ok(PageFormat::Bincode),
            other => Err(OrdersError::UnknownFormat(other.to_string())),
        }
    }
}

/// Decodes a page from raw bytes
pub fn decode_page(bytes: &[u8], format: PageFormat) -> Result<OrdersPage> {
    match format {
        PageFormat::Json => Ok(serde_json::from_slice(bytes)?),
        PageFormat::Bincode => {
            let (page, _read) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
            Ok(page)
        }
    }
}

/// Encodes a page, the inverse of [`decode_page`]
pub fn encode_page(page: &OrdersPage, format: PageFormat) -> Result<Vec<u8>> {
    match format {
        PageFormat::Json => Ok(serde_json::to_vec(page)?),
        PageFormat::Bincode => Ok(bincode::encode_to_vec(page, bincode::config::standard())?),
    }
}

/// Applies command-line overrides to a loaded page and sorts it
pub fn build_orders(config: &CliConfig, mut page: OrdersPage) -> Result<Orders> {
    let sort_type: OrderSortType = config.sort.parse()?;

    if let Some(last_id) = config.last_id {
        page.last_id = last_id;
    }
    if let Some(cursor) = &config.cursor {
        page.next_page_cursor = Some(cursor.clone());
    }

    Ok(Orders::from_page(page, sort_type))
}

/// Renders a collection in the requested output format
pub fn render(orders: &Orders, output: &str) -> Result<String> {
    match output {
        "json" => Ok(serde_json::to_string_pretty(orders)?),
        _ => Ok(orders.to_string()),
    }
}

/// Runs the CLI application
///
/// Parses command-line arguments, loads the page and prints the sorted
/// collection to stdout.
pub fn run() -> Result<()> {
    // 解析命令行参数
    let config = CliConfig::parse();

    // 初始化日志系统
    init_logging(&config.log_level);

    tracing::debug!("配置: {:?}", config);

    let format: PageFormat = config.format.parse()?;

    if config.dry_run {
        tracing::info!(input = %config.input.display(), ?format, sort = %config.sort, "dry-run, not reading input");
        return Ok(());
    }

    let bytes = std::fs::read(&config.input)?;
    let page = decode_page(&bytes, format)?;
    tracing::info!(input = %config.input.display(), orders = page.orders.len(), "page loaded");

    let orders = build_orders(&config, page)?;
    print!("{}", render(&orders, &config.output)?);

    Ok(())
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    // 日志写到 stderr，stdout 只输出订单
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderRecord;
    use crate::shared::protocol::{Order, OrderType};

    fn sample_page() -> OrdersPage {
        OrdersPage {
            orders: vec![
                Order::new(OrderType::Buy, "BTC/USD", "10", 300, 1),
                Order::new(OrderType::Sell, "BTC/USD", "9", 100, 2),
                Order::new(OrderType::Buy, "BTC/USD", "11", 200, 3),
            ],
            last_id: 8,
            next_page_cursor: None,
        }
    }

    #[test]
    fn test_cli_config_default() {
        let config = CliConfig::parse_from(["exchange-orders", "page.json"]);
        assert_eq!(config.input, PathBuf::from("page.json"));
        assert_eq!(config.format, "json");
        assert_eq!(config.sort, "id");
        assert_eq!(config.last_id, None);
        assert_eq!(config.cursor, None);
        assert_eq!(config.output, "text");
        assert_eq!(config.log_level, "info");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_cli_config_custom() {
        let config = CliConfig::parse_from([
            "exchange-orders",
            "page.bin",
            "--format", "bincode",
            "--sort", "timestamp",
            "--last-id", "-4",
            "--cursor", "abc",
            "--output", "json",
            "--log-level", "debug",
            "--dry-run",
        ]);

        assert_eq!(config.format, "bincode");
        assert_eq!(config.sort, "timestamp");
        assert_eq!(config.last_id, Some(-4));
        assert_eq!(config.cursor.as_deref(), Some("abc"));
        assert_eq!(config.output, "json");
        assert_eq!(config.log_level, "debug");
        assert!(config.dry_run);
    }

    #[test]
    fn test_cli_config_short_flags() {
        let config = CliConfig::parse_from([
            "exchange-orders", "p", "-f", "bincode", "-s", "timestamp", "-o", "json", "-l", "warn",
        ]);
        assert_eq!(config.format, "bincode");
        assert_eq!(config.sort, "timestamp");
        assert_eq!(config.output, "json");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        assert!(CliConfig::try_parse_from(["exchange-orders", "p", "--sort", "price"]).is_err());
    }

    #[test]
    fn test_page_roundtrip_both_formats() {
        let page = sample_page();
        for format in [PageFormat::Json, PageFormat::Bincode] {
            let bytes = encode_page(&page, format).unwrap();
            assert_eq!(decode_page(&bytes, format).unwrap(), page);
        }
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_page(b"not json", PageFormat::Json), Err(OrdersError::Json(_))));
        assert!(matches!(decode_page(&[], PageFormat::Bincode), Err(OrdersError::BincodeDecode(_))));
        assert!(matches!("xml".parse::<PageFormat>(), Err(OrdersError::UnknownFormat(_))));
    }

    #[test]
    fn test_build_orders_with_overrides() {
        let config = CliConfig::parse_from([
            "exchange-orders", "p", "--sort", "timestamp", "--last-id", "99", "--cursor", "next",
        ]);
        let orders = build_orders(&config, sample_page()).unwrap();

        let ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["9", "11", "10"]);
        assert_eq!(orders.last_id(), 99);
        assert_eq!(orders.next_page_cursor(), Some("next"));
    }

    #[test]
    fn test_build_orders_keeps_page_metadata() {
        let config = CliConfig::parse_from(["exchange-orders", "p"]);
        let orders = build_orders(&config, sample_page()).unwrap();

        let ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["9", "10", "11"]);
        assert_eq!(orders.last_id(), 8);
        assert_eq!(orders.next_page_cursor(), None);
    }

    #[test]
    fn test_render() {
        let config = CliConfig::parse_from(["exchange-orders", "p"]);
        let orders = build_orders(&config, sample_page()).unwrap();

        let text = render(&orders, "text").unwrap();
        assert!(text.starts_with("Orders\nlastID= 8\n[order="));
        assert!(text.ends_with("nextPageCursor= null\n"));

        let json = render(&orders, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["orders"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(value["sort_type"], "ById");
    }
}
