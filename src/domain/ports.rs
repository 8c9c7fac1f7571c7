use crate::domain::model::{Customer, Order, OrderLine, Product, StockUpdate};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerLookup: Send + Sync {
    /// Returns `None` when no customer has the given id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns the products matching the given ids. Ids without a matching
    /// product are omitted from the result, never an error.
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>>;

    /// Overwrites the stock quantity of each listed product in one call.
    async fn update_quantities(&self, updates: &[StockUpdate]) -> Result<()>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order, assigning its id and timestamp.
    async fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> Result<Order>;
}
