use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// One line of an incoming order request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedLine {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub customer_id: String,
    pub lines: Vec<RequestedLine>,
}

/// Price snapshot of one ordered product at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: String,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

/// Remaining stock for one product, applied by the bulk quantity update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdate {
    pub product_id: String,
    pub quantity: u32,
}
