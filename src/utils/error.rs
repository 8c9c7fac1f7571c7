use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Customer {customer_id} does not exist")]
    CustomerNotFound { customer_id: String },

    #[error("Some ordered products do not exist: {}", .product_ids.join(", "))]
    ProductNotFound { product_ids: Vec<String> },

    #[error(
        "Insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid order request: {message}")]
    InvalidRequest { message: String },

    #[error("Store operation failed: {message}")]
    Store { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl OrderError {
    /// True for the failures a caller can act on by fixing the request,
    /// as opposed to infrastructure faults inside a collaborator.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::CustomerNotFound { .. }
                | Self::ProductNotFound { .. }
                | Self::InsufficientStock { .. }
                | Self::InvalidRequest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
