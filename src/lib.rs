pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::memory::{InMemoryCustomers, InMemoryOrders, InMemoryProducts};
pub use crate::config::{Catalog, CliConfig};
pub use crate::core::place_order::OrderPlacer;
pub use crate::domain::model::{Customer, Order, OrderLine, OrderRequest, Product, RequestedLine};
pub use crate::utils::error::{OrderError, Result};
