pub mod chain;
pub mod config;
pub mod error;
pub mod logger;
pub mod table;

pub use chain::{Chain, Entry};
pub use config::{ConfigError, TableConfig, DEFAULT_MULTIPLIER, MIN_CAPACITY};
pub use error::TableError;
pub use table::{IntoIter, Iter, Table};

pub type Key = i64;
pub type Value = i64;
