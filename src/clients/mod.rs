mod macros;

mod catalog_client;
mod order_client;

pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
