use floor_actor::{ActorClient, ResourceEvent};
use floor_ops::chef_actor::ChefError;
use floor_ops::config::FloorConfig;
use floor_ops::error::{DomainError, ErrorKind};
use floor_ops::lifecycle::FloorSystem;
use floor_ops::model::{
    ChefCreate, ChefId, OrderCreate, OrderFilter, OrderId, OrderItem, OrderStatus, Table,
    TableCreate, TableId, TableUpdate,
};
use floor_ops::order_actor::OrderError;
use floor_ops::reservation::ReservationError;
use floor_ops::table_actor::TableError;

fn order_on(table_number: u32) -> OrderCreate {
    OrderCreate {
        table_number,
        items: vec![OrderItem::new("noodles", 1)],
    }
}

fn numbers(tables: &[Table]) -> Vec<u32> {
    tables.iter().map(|t| t.number).collect()
}

async fn table_number_of(system: &FloorSystem, id: TableId) -> u32 {
    system.tables.get_table(id).await.unwrap().number
}

#[tokio::test]
async fn test_reserve_delete_and_renumber_scenario() {
    let system = FloorSystem::new();

    let t1 = system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let t2 = system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let t3 = system.tables.add_table(TableCreate::new(4)).await.unwrap();
    assert_eq!((t1.number, t2.number, t3.number), (1, 2, 3));

    let reserved = system.tables.reserve(t2.id, 2).await.unwrap();
    assert!(reserved.reserved);

    system.tables.delete_table(t1.id).await.unwrap();
    assert_eq!(table_number_of(&system, t2.id).await, 1);
    assert_eq!(table_number_of(&system, t3.id).await, 2);

    let err = system.tables.delete_table(t2.id).await.unwrap_err();
    assert_eq!(err, TableError::TableReserved { number: 1 });
    assert_eq!(err.status_code(), 409);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_without_chef_stays_unassigned() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(4)).await.unwrap();

    let order = system.orders.create_order(order_on(1)).await.unwrap();
    assert_eq!(order.chef_id, None);
    assert_eq!(order.status, OrderStatus::Pending);

    system
        .chefs
        .register_chef(ChefCreate::new("Rosa"))
        .await
        .unwrap();
    let order = system.orders.get_order(order.id).await.unwrap();
    assert_eq!(order.chef_id, None);

    let chefs = system.chefs.list_chefs().await.unwrap();
    assert!(chefs[0].assigned_orders.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_registry_cap() {
    let system = FloorSystem::new();

    for i in 1..=30 {
        let table = system.tables.add_table(TableCreate::new(2)).await.unwrap();
        assert_eq!(table.number, i);
    }

    let err = system.tables.add_table(TableCreate::new(2)).await.unwrap_err();
    assert_eq!(err, TableError::RegistryFull { max: 30 });
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // Capacity is checked before the cap.
    let err = system.tables.add_table(TableCreate::new(5)).await.unwrap_err();
    assert_eq!(err, TableError::CapacityInvalid(5));
    assert_eq!(err.status_code(), 400);

    assert_eq!(system.tables.list_tables().await.unwrap().len(), 30);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_cap() {
    let system = FloorSystem::with_config(FloorConfig {
        max_tables: 2,
        ..FloorConfig::default()
    });

    system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let second = system.tables.add_table(TableCreate::new(2)).await.unwrap();
    assert!(matches!(
        system.tables.add_table(TableCreate::new(2)).await,
        Err(TableError::RegistryFull { max: 2 })
    ));

    // Deleting frees a slot.
    system.tables.delete_table(second.id).await.unwrap();
    let again = system.tables.add_table(TableCreate::new(8)).await.unwrap();
    assert_eq!(again.number, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_numbers_stay_contiguous() {
    let system = FloorSystem::new();
    let mut ids: Vec<TableId> = Vec::new();
    let mut seed: u64 = 0x2545_f491;

    for step in 0..120 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let roll = (seed >> 33) as usize;

        if ids.is_empty() || (roll % 3 != 0 && ids.len() < 30) {
            let table = system
                .tables
                .add_table(TableCreate::new([2, 4, 6, 8][roll % 4]))
                .await
                .unwrap();
            ids.push(table.id);
        } else {
            let victim = ids.remove(roll % ids.len());
            system.tables.delete_table(victim).await.unwrap();
        }

        let tables = system.tables.list_tables().await.unwrap();
        let expected: Vec<u32> = (1..=ids.len() as u32).collect();
        assert_eq!(numbers(&tables), expected, "after step {step}");
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reserved_delete_leaves_registry_unchanged() {
    let system = FloorSystem::new();
    for capacity in [2, 4, 6] {
        system.tables.add_table(TableCreate::new(capacity)).await.unwrap();
    }
    let middle = system.tables.find_by_number(2).await.unwrap().unwrap();
    system.tables.reserve(middle.id, 3).await.unwrap();

    let before = system.tables.list_tables().await.unwrap();
    assert!(system.tables.delete_table(middle.id).await.is_err());
    let after = system.tables.list_tables().await.unwrap();
    assert_eq!(before, after);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reservation_errors_through_the_registry() {
    let system = FloorSystem::new();
    let table = system.tables.add_table(TableCreate::new(4)).await.unwrap();

    let err = system.tables.reserve(table.id, 0).await.unwrap_err();
    assert_eq!(err, TableError::Rejected(ReservationError::InvalidPartySize(0)));
    assert_eq!(err.status_code(), 400);

    let err = system.tables.reserve(table.id, 5).await.unwrap_err();
    assert_eq!(err.status_code(), 409);

    system.tables.reserve(table.id, 4).await.unwrap();
    let err = system.tables.reserve(table.id, 1).await.unwrap_err();
    assert_eq!(
        err,
        TableError::Rejected(ReservationError::AlreadyReserved { number: 1 })
    );

    let freed = system.tables.unreserve(table.id).await.unwrap();
    assert!(!freed.reserved);
    assert_eq!(
        system.tables.unreserve(table.id).await,
        Err(TableError::NotReserved { number: 1 })
    );

    let missing = system.tables.reserve(TableId(99), 2).await.unwrap_err();
    assert_eq!(missing, TableError::NotFound("table_99".into()));
    assert_eq!(missing.status_code(), 404);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_available_tables_and_update() {
    let system = FloorSystem::new();
    for capacity in [2, 6, 4, 8] {
        system.tables.add_table(TableCreate::new(capacity)).await.unwrap();
    }
    let six = system.tables.find_by_number(2).await.unwrap().unwrap();
    system.tables.reserve(six.id, 5).await.unwrap();

    let free = system.tables.available_tables(3).await.unwrap();
    assert_eq!(numbers(&free), vec![3, 4]);

    let err = system
        .tables
        .update_table(
            six.id,
            TableUpdate {
                capacity: Some(8),
                ..TableUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, TableError::TableReserved { number: 2 });

    let renamed = system
        .tables
        .update_table(
            six.id,
            TableUpdate {
                name: Some("Garden".into()),
                ..TableUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.label(), "Garden");
    assert_eq!(renamed.number, 2);
    assert!(renamed.reserved);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_transition_closure() {
    use OrderStatus::*;

    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();

    let allowed = [
        (Pending, Processing),
        (Pending, Takeaway),
        (Processing, Done),
        (Takeaway, Done),
        (Done, Done),
    ];

    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            let order = system.orders.create_order(order_on(1)).await.unwrap();
            let path: &[OrderStatus] = match from {
                Pending => &[],
                Processing => &[Processing],
                Takeaway => &[Takeaway],
                Done => &[Processing, Done],
            };
            for step in path {
                system.orders.update_status(order.id, *step).await.unwrap();
            }

            let result = system.orders.update_status(order.id, to).await;
            if allowed.contains(&(from, to)) {
                assert_eq!(result.unwrap().status, to, "{from} -> {to}");
            } else {
                let err = result.unwrap_err();
                assert_eq!(err, OrderError::InvalidTransition { from, to }, "{from} -> {to}");
                assert_eq!(err.status_code(), 409);
                let unchanged = system.orders.get_order(order.id).await.unwrap();
                assert_eq!(unchanged.status, from);
            }
        }
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_validation() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();

    let err = system
        .orders
        .create_order(OrderCreate {
            table_number: 1,
            items: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::EmptyItems);
    assert_eq!(err.status_code(), 400);

    let err = system.orders.create_order(order_on(4)).await.unwrap_err();
    assert_eq!(err, OrderError::TableNotFound(4));
    assert_eq!(err.status_code(), 404);

    // Rejected orders do not use up order numbers.
    let order = system.orders.create_order(order_on(1)).await.unwrap();
    assert_eq!(order.order_number, 1);

    let missing = system
        .orders
        .update_status(order.id.0.wrapping_add(10).into(), OrderStatus::Processing)
        .await
        .unwrap_err();
    assert!(matches!(missing, OrderError::NotFound(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_numbers_are_never_reused() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();

    let first = system.orders.create_order(order_on(1)).await.unwrap();
    let second = system.orders.create_order(order_on(1)).await.unwrap();
    system.orders.delete_order(second.id).await.unwrap();
    let third = system.orders.create_order(order_on(1)).await.unwrap();

    assert_eq!(
        (first.order_number, second.order_number, third.order_number),
        (1, 2, 3)
    );
    assert!(matches!(
        system.orders.delete_order(second.id).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_least_loaded_assignment_and_release() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(4)).await.unwrap();
    let rosa = system.chefs.register_chef(ChefCreate::new("Rosa")).await.unwrap();
    let kenji = system.chefs.register_chef(ChefCreate::new("Kenji")).await.unwrap();

    let a = system.orders.create_order(order_on(1)).await.unwrap();
    let b = system.orders.create_order(order_on(1)).await.unwrap();
    let c = system.orders.create_order(order_on(1)).await.unwrap();
    assert_eq!(a.chef_id, Some(rosa.id));
    assert_eq!(b.chef_id, Some(kenji.id));
    assert_eq!(c.chef_id, Some(rosa.id));

    // Deleting an order frees the chef, who then gets the next one.
    system.orders.delete_order(c.id).await.unwrap();
    system.orders.delete_order(a.id).await.unwrap();
    let d = system.orders.create_order(order_on(1)).await.unwrap();
    assert_eq!(d.chef_id, Some(rosa.id));

    let rosa_now = system.chefs.get_chef(rosa.id).await.unwrap();
    assert_eq!(rosa_now.assigned_orders, vec![d.id]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reassign_moves_order_between_chefs() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(4)).await.unwrap();
    let rosa = system.chefs.register_chef(ChefCreate::new("Rosa")).await.unwrap();
    let kenji = system.chefs.register_chef(ChefCreate::new("Kenji")).await.unwrap();

    let order = system.orders.create_order(order_on(1)).await.unwrap();
    assert_eq!(order.chef_id, Some(rosa.id));

    let moved = system.orders.reassign(order.id, kenji.id).await.unwrap();
    assert_eq!(moved.chef_id, Some(kenji.id));
    assert!(system.chefs.get_chef(rosa.id).await.unwrap().assigned_orders.is_empty());
    assert_eq!(
        system.chefs.get_chef(kenji.id).await.unwrap().assigned_orders,
        vec![order.id]
    );
    assert_eq!(
        system.orders.chef_orders(kenji.id).await.unwrap(),
        vec![moved.clone()]
    );

    // Same chef again is a no-op.
    let same = system.orders.reassign(order.id, kenji.id).await.unwrap();
    assert_eq!(same, moved);

    let err = system.orders.reassign(order.id, ChefId(77)).await.unwrap_err();
    assert_eq!(err, OrderError::Assignment(ChefError::NotFound("chef_77".into())));
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        system.orders.get_order(order.id).await.unwrap().chef_id,
        Some(kenji.id)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reassign_unknown_order_leaves_roster_alone() {
    let system = FloorSystem::new();
    let rosa = system.chefs.register_chef(ChefCreate::new("Rosa")).await.unwrap();

    let err = system.orders.reassign(OrderId(999), rosa.id).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_999".into()));
    assert_eq!(err.status_code(), 404);

    assert!(system.chefs.get_chef(rosa.id).await.unwrap().assigned_orders.is_empty());
    system.chefs.delete_chef(rosa.id).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_busy_chef_cannot_be_deleted() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let rosa = system.chefs.register_chef(ChefCreate::new("Rosa")).await.unwrap();
    let order = system.orders.create_order(order_on(1)).await.unwrap();

    let err = system.chefs.delete_chef(rosa.id).await.unwrap_err();
    assert_eq!(
        err,
        ChefError::ChefBusy {
            chef: rosa.id,
            orders: 1
        }
    );
    assert_eq!(err.status_code(), 409);

    system.orders.delete_order(order.id).await.unwrap();
    system.chefs.delete_chef(rosa.id).await.unwrap();
    assert!(system.chefs.list_chefs().await.unwrap().is_empty());

    assert_eq!(
        system.chefs.register_chef(ChefCreate::new("  ")).await,
        Err(ChefError::InvalidName)
    );
    let renamed = system.chefs.register_chef(ChefCreate::new("Kenji")).await.unwrap();
    let renamed = system
        .chefs
        .rename_chef(renamed.id, "Ken".into())
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ken");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_table_number_is_frozen_on_orders() {
    let system = FloorSystem::new();
    let first = system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let second = system.tables.add_table(TableCreate::new(4)).await.unwrap();

    let order = system.orders.create_order(order_on(2)).await.unwrap();
    system.tables.delete_table(first.id).await.unwrap();
    assert_eq!(table_number_of(&system, second.id).await, 1);

    let order = system.orders.get_order(order.id).await.unwrap();
    assert_eq!(order.table_number, 2);

    // Number 2 no longer exists on the floor.
    assert_eq!(
        system.orders.create_order(order_on(2)).await,
        Err(OrderError::TableNotFound(2))
    );

    let on_two = system.orders.list_orders(OrderFilter::table(2)).await.unwrap();
    assert_eq!(on_two.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_orders_filters() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();

    let a = system.orders.create_order(order_on(1)).await.unwrap();
    let b = system.orders.create_order(order_on(2)).await.unwrap();
    let c = system.orders.create_order(order_on(1)).await.unwrap();
    system.orders.update_status(b.id, OrderStatus::Takeaway).await.unwrap();

    let all = system.orders.list_orders(OrderFilter::default()).await.unwrap();
    let ids: Vec<_> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);

    let pending = system
        .orders
        .list_orders(OrderFilter::status(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 2);

    let takeaway_on_one = system
        .orders
        .list_orders(OrderFilter {
            status: Some(OrderStatus::Takeaway),
            table_number: Some(1),
            chef_id: None,
        })
        .await
        .unwrap();
    assert!(takeaway_on_one.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_events_report_renumbering() {
    let system = FloorSystem::new();
    let mut events = system.tables.subscribe();

    let t1 = system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let t2 = system.tables.add_table(TableCreate::new(4)).await.unwrap();
    let t3 = system.tables.add_table(TableCreate::new(6)).await.unwrap();
    system.tables.delete_table(t1.id).await.unwrap();

    for expected in [t1.id, t2.id, t3.id] {
        match events.recv().await.unwrap() {
            ResourceEvent::Created(t) => assert_eq!(t.id, expected),
            other => panic!("expected Created, got {other:?}"),
        }
    }
    assert!(matches!(events.recv().await.unwrap(), ResourceEvent::Deleted(id) if id == t1.id));

    let mut renumbered = Vec::new();
    for _ in 0..2 {
        match events.recv().await.unwrap() {
            ResourceEvent::Updated(t) => renumbered.push((t.id, t.number)),
            other => panic!("expected Updated, got {other:?}"),
        }
    }
    assert_eq!(renumbered, vec![(t2.id, 1), (t3.id, 2)]);

    // A rejected request publishes nothing.
    system.tables.reserve(t2.id, 2).await.unwrap();
    assert!(system.tables.delete_table(t2.id).await.is_err());
    assert!(matches!(events.recv().await.unwrap(), ResourceEvent::Updated(t) if t.reserved));
    assert!(events.try_recv().is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_done_is_silent() {
    let system = FloorSystem::new();
    system.tables.add_table(TableCreate::new(2)).await.unwrap();
    let order = system.orders.create_order(order_on(1)).await.unwrap();
    for status in [OrderStatus::Processing, OrderStatus::Done] {
        system.orders.update_status(order.id, status).await.unwrap();
    }

    let mut events = system.orders.subscribe();
    let again = system
        .orders
        .update_status(order.id, OrderStatus::Done)
        .await
        .unwrap();
    assert_eq!(again.status, OrderStatus::Done);
    assert!(events.try_recv().is_err());

    system.shutdown().await.unwrap();
}
