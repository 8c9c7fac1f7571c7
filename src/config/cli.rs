use crate::core::{Customer, Product, RequestedLine};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_non_empty, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-orders")]
#[command(about = "Place an order against a JSON catalog of customers and products")]
pub struct CliConfig {
    /// Path to the catalog seed file (JSON with customers and products)
    #[arg(long, default_value = "./catalog.json")]
    pub catalog: String,

    /// Id of the ordering customer
    #[arg(long)]
    pub customer: String,

    /// Requested line as product_id:quantity, repeatable
    #[arg(long = "line", value_name = "PRODUCT:QTY")]
    pub lines: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn requested_lines(&self) -> Result<Vec<RequestedLine>> {
        self.lines.iter().map(|spec| parse_line(spec)).collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", &self.catalog)?;
        validate_non_empty("customer", &self.customer)?;

        if self.lines.is_empty() {
            return Err(OrderError::InvalidConfigValue {
                field: "line".to_string(),
                value: String::new(),
                reason: "at least one --line product_id:quantity is required".to_string(),
            });
        }

        for spec in &self.lines {
            parse_line(spec)?;
        }

        Ok(())
    }
}

/// Parses a `product_id:quantity` argument.
pub fn parse_line(spec: &str) -> Result<RequestedLine> {
    let invalid = |reason: &str| OrderError::InvalidConfigValue {
        field: "line".to_string(),
        value: spec.to_string(),
        reason: reason.to_string(),
    };

    let (product_id, quantity) = spec
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected product_id:quantity"))?;

    if product_id.trim().is_empty() {
        return Err(invalid("product id cannot be empty"));
    }

    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| invalid("quantity must be a positive integer"))?;

    Ok(RequestedLine {
        product_id: product_id.trim().to_string(),
        quantity,
    })
}

/// Seed data for the in-memory stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&raw)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_accepts_product_and_quantity() {
        let line = parse_line("P1:3").unwrap();
        assert_eq!(line.product_id, "P1");
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_parse_line_rejects_malformed_specs() {
        assert!(parse_line("P1").is_err());
        assert!(parse_line(":3").is_err());
        assert!(parse_line("P1:three").is_err());
        assert!(parse_line("P1:-1").is_err());
    }

    #[test]
    fn test_validate_requires_at_least_one_line() {
        let config = CliConfig {
            catalog: "catalog.json".to_string(),
            customer: "C1".to_string(),
            lines: vec![],
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_load_round_trips() {
        let catalog = Catalog {
            customers: vec![Customer {
                id: "C1".to_string(),
                name: "Ann".to_string(),
            }],
            products: vec![Product {
                id: "P1".to_string(),
                name: "Widget".to_string(),
                price: Decimal::new(1000, 2),
                quantity: 5,
            }],
        };

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes())
            .unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded.customers.len(), 1);
        assert_eq!(loaded.products.len(), 1);
        assert_eq!(loaded.products[0].price, Decimal::new(1000, 2));
    }

    #[test]
    fn test_catalog_load_reports_missing_file() {
        let err = Catalog::load("does-not-exist.json").unwrap_err();
        assert!(matches!(err, OrderError::Io(_)));
    }
}
