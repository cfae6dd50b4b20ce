//! Infrastructure layer: storage adapters, service orchestration, config.

pub mod config;
pub mod product_service;
pub mod product_store;

pub use config::StoreConfig;
pub use product_service::{ProductService, ServiceError};
pub use product_store::InMemoryProductStore;
