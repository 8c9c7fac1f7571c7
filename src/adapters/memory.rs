use crate::core::{
    Customer, CustomerLookup, Order, OrderLine, OrderStore, Product, ProductStore, StockUpdate,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory customer store.
#[derive(Clone, Default)]
pub struct InMemoryCustomers {
    customers: Arc<Mutex<HashMap<String, Customer>>>,
}

impl InMemoryCustomers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(customers: Vec<Customer>) -> Self {
        let map = customers
            .into_iter()
            .map(|customer| (customer.id.clone(), customer))
            .collect();
        Self {
            customers: Arc::new(Mutex::new(map)),
        }
    }
}

#[async_trait]
impl CustomerLookup for InMemoryCustomers {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let customers = self.customers.lock().await;
        Ok(customers.get(id).cloned())
    }
}

/// In-memory product store. The per-store mutex serializes concurrent
/// placements touching the same stock.
#[derive(Clone, Default)]
pub struct InMemoryProducts {
    products: Arc<Mutex<HashMap<String, Product>>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(products: Vec<Product>) -> Self {
        let map = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: Arc::new(Mutex::new(map)),
        }
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        let products = self.products.lock().await;
        products.get(id).cloned()
    }
}

#[async_trait]
impl ProductStore for InMemoryProducts {
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>> {
        let products = self.products.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }

    async fn update_quantities(&self, updates: &[StockUpdate]) -> Result<()> {
        let mut products = self.products.lock().await;
        for update in updates {
            if let Some(product) = products.get_mut(&update.product_id) {
                product.quantity = update.quantity;
            }
        }
        Ok(())
    }
}

/// In-memory order store; assigns ids and timestamps on create.
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrders {
    async fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> Result<Order> {
        let order = Order {
            id: Uuid::new_v4(),
            customer_id: customer.id.clone(),
            lines,
            created_at: Utc::now(),
        };
        let mut orders = self.orders.lock().await;
        orders.push(order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_find_all_by_id_omits_missing_ids() {
        let store = InMemoryProducts::seeded(vec![Product {
            id: "P1".to_string(),
            name: "Widget".to_string(),
            price: Decimal::new(1000, 2),
            quantity: 5,
        }]);

        let found = store
            .find_all_by_id(&["P1".to_string(), "P9".to_string()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "P1");
    }

    #[tokio::test]
    async fn test_update_quantities_overwrites_stock() {
        let store = InMemoryProducts::seeded(vec![Product {
            id: "P1".to_string(),
            name: "Widget".to_string(),
            price: Decimal::new(1000, 2),
            quantity: 5,
        }]);

        store
            .update_quantities(&[StockUpdate {
                product_id: "P1".to_string(),
                quantity: 2,
            }])
            .await
            .unwrap();

        assert_eq!(store.get("P1").await.unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_order_store_assigns_distinct_ids() {
        let store = InMemoryOrders::new();
        let customer = Customer {
            id: "C1".to_string(),
            name: "Ann".to_string(),
        };

        let first = store.create(&customer, vec![]).await.unwrap();
        let second = store.create(&customer, vec![]).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.all().await.len(), 2);
    }
}
