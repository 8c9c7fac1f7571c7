pub mod cli;

pub use cli::{Catalog, CliConfig};
