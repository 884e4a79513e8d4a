use crate::clients::{ChefClient, OrderClient, TableClient};
use crate::config::FloorConfig;
use crate::table_actor::TableContext;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the restaurant floor.
///
/// # Architecture
///
/// - **Table actor**: the table registry (`Context = TableContext`)
/// - **Chef actor**: the roster and its assignment boards (`Context = ()`)
/// - **Order actor**: the order pipeline (`Context = (TableClient, ChefClient)`)
///
/// # Example
///
/// ```rust
/// use floor_ops::lifecycle::FloorSystem;
/// use floor_ops::model::{ChefCreate, OrderCreate, OrderItem, TableCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = FloorSystem::new();
///
///     system.tables.add_table(TableCreate::new(4)).await?;
///     let chef = system.chefs.register_chef(ChefCreate::new("Rosa")).await?;
///     let order = system
///         .orders
///         .create_order(OrderCreate {
///             table_number: 1,
///             items: vec![OrderItem::new("ramen", 2)],
///         })
///         .await?;
///     assert_eq!(order.chef_id, Some(chef.id));
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct FloorSystem {
    pub tables: TableClient,
    pub chefs: ChefClient,
    pub orders: OrderClient,
    pub config: FloorConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl Default for FloorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorSystem {
    /// Starts every actor with the default configuration. Must be called inside a Tokio
    /// runtime.
    pub fn new() -> Self {
        Self::with_config(FloorConfig::default())
    }

    pub fn with_config(config: FloorConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (table_actor, tables) = crate::table_actor::new(&config);
        let (chef_actor, chefs) = crate::chef_actor::new(&config);
        let (order_actor, orders) = crate::order_actor::new(&config);

        // 2. Start actors with injected context
        let table_handle = tokio::spawn(table_actor.run(TableContext::from(&config)));
        let chef_handle = tokio::spawn(chef_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((tables.clone(), chefs.clone())));

        info!(
            max_tables = config.max_tables,
            actor_buffer = config.actor_buffer,
            "Floor system started"
        );

        Self {
            tables,
            chefs,
            orders,
            config,
            handles: vec![
                ("orders", order_handle),
                ("tables", table_handle),
                ("chefs", chef_handle),
            ],
        }
    }

    /// Drops every client and waits for the actors to drain their inboxes.
    ///
    /// The order actor holds clones of the table and chef clients, so it is awaited
    /// first. Clones handed out to other tasks must be dropped before calling this,
    /// otherwise the matching actor keeps running.
    ///
    /// # Errors
    ///
    /// The first actor task that panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down floor system...");

        drop(self.orders);
        drop(self.tables);
        drop(self.chefs);

        for (name, handle) in self.handles {
            if let Err(e) = handle.await {
                error!(actor = name, error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Floor system shutdown complete.");
        Ok(())
    }
}
