//! Type-safe wrappers around each actor's `ResourceClient`.

pub mod chef_client;
pub mod order_client;
pub mod table_client;

pub use chef_client::ChefClient;
pub use order_client::OrderClient;
pub use table_client::TableClient;
