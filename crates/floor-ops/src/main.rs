//! # Floor Ops demo
//!
//! Runs one short service against the in-memory floor:
//! 1. Lay out tables and register the kitchen.
//! 2. Seat a party, place orders and move them through the pipeline.
//! 3. Free and remove a table, showing the renumbering on the event stream.
//!
//! `RUST_LOG=info cargo run -p floor-ops` shows the actors at work.

use floor_actor::tracing::setup_tracing;
use floor_actor::{ActorClient, ResourceEvent};
use floor_ops::config::FloorConfig;
use floor_ops::error::DomainError;
use floor_ops::lifecycle::FloorSystem;
use floor_ops::model::{ChefCreate, OrderCreate, OrderItem, OrderStatus, TableCreate};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = FloorConfig::from_env();
    info!(?config, "Starting floor");
    let system = FloorSystem::with_config(config);

    // Table events, as a dashboard would consume them.
    let mut table_events = system.tables.subscribe();
    let watcher = tokio::spawn(async move {
        loop {
            match table_events.recv().await {
                Ok(ResourceEvent::Created(t)) => info!(number = t.number, "table added"),
                Ok(ResourceEvent::Updated(t)) => {
                    info!(id = %t.id, number = t.number, reserved = t.reserved, "table changed")
                }
                Ok(ResourceEvent::Deleted(id)) => info!(%id, "table removed"),
                Err(RecvError::Lagged(missed)) => warn!(missed, "table events lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let layout = async {
        for (name, capacity) in [("Window", 2), ("Booth", 4), ("Patio", 6)] {
            system.tables.add_table(TableCreate::named(name, capacity)).await?;
        }
        for name in ["Rosa", "Kenji"] {
            system.chefs.register_chef(ChefCreate::new(name)).await?;
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    };
    layout.instrument(tracing::info_span!("layout")).await?;

    let service = async {
        let booth = system.tables.find_by_number(2).await?.ok_or("no table 2")?;
        system.tables.reserve(booth.id, 4).await?;

        match system.tables.reserve(booth.id, 2).await {
            Ok(_) => warn!("double booking went through"),
            Err(e) => info!(error = %e, status = e.status_code(), "second booking refused"),
        }

        let first = system
            .orders
            .create_order(OrderCreate {
                table_number: booth.number,
                items: vec![OrderItem::new("ramen", 2), OrderItem::new("gyoza", 1)],
            })
            .await?;
        let second = system
            .orders
            .create_order(OrderCreate {
                table_number: 3,
                items: vec![OrderItem::new("tea", 4)],
            })
            .await?;
        info!(first = ?first.chef_id, second = ?second.chef_id, "orders assigned");

        system.orders.update_status(first.id, OrderStatus::Processing).await?;
        system.orders.update_status(first.id, OrderStatus::Done).await?;
        system.orders.update_status(second.id, OrderStatus::Takeaway).await?;

        if let Err(e) = system.orders.update_status(second.id, OrderStatus::Pending).await {
            info!(error = %e, status = e.status_code(), "transition refused");
        }

        system.tables.unreserve(booth.id).await?;
        let window = system.tables.find_by_number(1).await?.ok_or("no table 1")?;
        system.tables.delete_table(window.id).await?;

        for table in system.tables.list_tables().await? {
            info!(number = table.number, label = %table.label(), "on the floor");
        }
        for chef in system.chefs.list_chefs().await? {
            info!(chef = %chef.name, load = chef.load(), "kitchen");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    };
    service.instrument(tracing::info_span!("service")).await?;

    system.shutdown().await?;
    watcher.await?;

    info!("Floor closed");
    Ok(())
}
