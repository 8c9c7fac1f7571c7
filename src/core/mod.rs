pub mod place_order;

pub use crate::domain::model::{
    Customer, Order, OrderLine, OrderRequest, Product, RequestedLine, StockUpdate,
};
pub use crate::domain::ports::{CustomerLookup, OrderStore, ProductStore};
pub use crate::utils::error::Result;
