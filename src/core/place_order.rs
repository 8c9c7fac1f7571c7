use crate::core::{
    CustomerLookup, Order, OrderLine, OrderRequest, OrderStore, Product, ProductStore,
    RequestedLine, StockUpdate,
};
use crate::utils::error::{OrderError, Result};

/// Places orders against three injected collaborators: a customer lookup,
/// a product store and an order store. Validation is all-or-nothing: a
/// single missing product or short-stocked line aborts the whole request
/// before anything is persisted.
pub struct OrderPlacer<C: CustomerLookup, P: ProductStore, O: OrderStore> {
    customers: C,
    products: P,
    orders: O,
}

impl<C: CustomerLookup, P: ProductStore, O: OrderStore> OrderPlacer<C, P, O> {
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    pub async fn place_order(&self, request: OrderRequest) -> Result<Order> {
        let lines = normalize_lines(request.lines)?;

        tracing::debug!("Looking up customer {}", request.customer_id);
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| OrderError::CustomerNotFound {
                customer_id: request.customer_id.clone(),
            })?;

        let ids: Vec<String> = lines.iter().map(|line| line.product_id.clone()).collect();
        tracing::debug!("Looking up {} product(s)", ids.len());
        let found = self.products.find_all_by_id(&ids).await?;

        if found.len() < lines.len() {
            return Err(OrderError::ProductNotFound {
                product_ids: missing_ids(&ids, &found),
            });
        }

        let mut order_lines = Vec::with_capacity(found.len());
        let mut updates = Vec::with_capacity(found.len());

        for product in &found {
            // Guaranteed to match by the length check above; a miss here
            // means the store returned a product we never asked for.
            let requested = lines
                .iter()
                .find(|line| line.product_id == product.id)
                .ok_or_else(|| OrderError::ProductNotFound {
                    product_ids: vec![product.id.clone()],
                })?;

            if requested.quantity > product.quantity {
                return Err(OrderError::InsufficientStock {
                    product_id: product.id.clone(),
                    requested: requested.quantity,
                    available: product.quantity,
                });
            }

            order_lines.push(OrderLine {
                product_id: product.id.clone(),
                price: product.price,
                quantity: requested.quantity,
            });
            updates.push(StockUpdate {
                product_id: product.id.clone(),
                quantity: product.quantity - requested.quantity,
            });
        }

        let order = self.orders.create(&customer, order_lines).await?;
        self.products.update_quantities(&updates).await?;

        tracing::info!(
            "Placed order {} for customer {} ({} line(s))",
            order.id,
            order.customer_id,
            order.lines.len()
        );

        Ok(order)
    }
}

/// Rejects empty requests and zero quantities, and merges duplicate product
/// ids by summing their quantities so validation sees total demand per
/// product. First-occurrence order is preserved.
fn normalize_lines(lines: Vec<RequestedLine>) -> Result<Vec<RequestedLine>> {
    if lines.is_empty() {
        return Err(OrderError::InvalidRequest {
            message: "order request contains no lines".to_string(),
        });
    }

    let mut merged: Vec<RequestedLine> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 {
            return Err(OrderError::InvalidRequest {
                message: format!("requested quantity for product {} is zero", line.product_id),
            });
        }

        match merged
            .iter_mut()
            .find(|existing| existing.product_id == line.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(line.quantity).ok_or_else(
                    || OrderError::InvalidRequest {
                        message: format!(
                            "total requested quantity for product {} overflows",
                            line.product_id
                        ),
                    },
                )?;
            }
            None => merged.push(line),
        }
    }

    Ok(merged)
}

fn missing_ids(requested: &[String], found: &[Product]) -> Vec<String> {
    requested
        .iter()
        .filter(|id| !found.iter().any(|product| &product.id == *id))
        .cloned()
        .collect()
}
