//! Repository and catalog-store tests against an in-memory SQLite database.

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use bizup_core::domain::{
    EmployeePatch, EmployeeStatus, InventoryPatch, NewContract, NewEmployee, NewInventoryItem,
    NotificationFlags, OrderPriority, SaleEvent, SaleOutcome, StoreDraft,
};
use bizup_core::error::DomainError;
use bizup_core::repositories::{
    ContractRepository, EmployeeRepository, InventoryRepository, MenuRepository, OrderRepository,
    StoreRepository,
};
use bizup_core::services::{MenuUploadService, ReconcileMode, SaleService};
use bizup_core::NewOrderLine;
use bizup_infrastructure::{
    create_memory_pool, run_migrations, SqliteCatalogStore, SqliteContractRepository,
    SqliteEmployeeRepository, SqliteInventoryRepository, SqliteMenuRepository,
    SqliteOrderRepository, SqliteStoreRepository,
};
use bizup_shared::types::Pagination;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

async fn pool() -> SqlitePool {
    let pool = create_memory_pool().await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn item(name: &str, category: &str, quantity: f64) -> NewInventoryItem {
    NewInventoryItem {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: "g".to_string(),
        min_quantity: 10.0,
        price: 5.0,
    }
}

fn sale(menu: &str, quantity: u32) -> SaleEvent {
    SaleEvent {
        menu_name: menu.to_string(),
        quantity,
        timestamp: String::new(),
    }
}

#[tokio::test]
async fn inventory_crud_and_search() {
    let repo = SqliteInventoryRepository::new(pool().await);

    let beans = repo.create(&item("Beans", "Coffee", 40.0), today()).await.unwrap();
    repo.create(&item("Milk", "Dairy", 0.0), today()).await.unwrap();
    repo.create(&item("Oat Milk", "Dairy", 3.0), today()).await.unwrap();

    let dup = repo.create(&item("Beans", "Coffee", 1.0), today()).await;
    assert!(matches!(dup, Err(DomainError::InventoryNameExists(_))));

    let dairy = repo
        .list(Pagination::default(), Some("Dairy".to_string()))
        .await
        .unwrap();
    assert_eq!(dairy.len(), 2);

    let milk = repo
        .list(Pagination::default(), Some("Milk".to_string()))
        .await
        .unwrap();
    assert_eq!(milk.len(), 2);

    let page = repo.list(Pagination::new(1, 1), None).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Milk");

    let out = repo.list_out_of_stock().await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Milk");

    let mut updated = beans.clone();
    InventoryPatch {
        price: Some(7.5),
        ..InventoryPatch::default()
    }
    .apply(&mut updated, today());
    let saved = repo.update(&updated).await.unwrap();
    assert_eq!(saved.price, 7.5);
    assert_eq!(saved.last_updated, today());

    assert!(repo.delete(beans.id).await.unwrap());
    assert!(!repo.delete(beans.id).await.unwrap());
    assert!(repo.find_by_id(beans.id).await.unwrap().is_none());
}

#[tokio::test]
async fn add_upload_then_reupload_merges() {
    let pool = pool().await;
    let store = Arc::new(SqliteCatalogStore::new(pool.clone()));
    let uploads = MenuUploadService::new(store);
    let inventory = SqliteInventoryRepository::new(pool.clone());
    let menus = SqliteMenuRepository::new(pool.clone());

    let first = uploads
        .reconcile(&bizup_core::csv::parse_menu_csv("Latte,Milk-200"), ReconcileMode::Add, today())
        .await
        .unwrap();
    assert_eq!((first.menus_created, first.menus_updated, first.ingredients_registered), (1, 0, 1));

    let milk = inventory.find_by_name("Milk").await.unwrap().unwrap();
    let mut edited = milk.clone();
    edited.quantity = 42.0;
    edited.price = 3000.0;
    inventory.update(&edited).await.unwrap();

    let second = uploads
        .reconcile(
            &bizup_core::csv::parse_menu_csv("Latte,Milk-300,Sugar-5"),
            ReconcileMode::Add,
            today(),
        )
        .await
        .unwrap();
    assert_eq!((second.menus_created, second.menus_updated), (0, 1));
    assert_eq!(second.total_inventory_count, 2);

    let latte = menus.find_by_name("Latte").await.unwrap().unwrap();
    assert_eq!(latte.ingredients.len(), 2);
    assert_eq!(latte.ingredient("Milk").unwrap().quantity, 300.0);
    assert_eq!(latte.ingredient("Sugar").unwrap().quantity, 5.0);

    let milk = inventory.find_by_name("Milk").await.unwrap().unwrap();
    assert_eq!(milk.quantity, 42.0);
    assert_eq!(milk.price, 3000.0);
}

#[tokio::test]
async fn reset_upload_leaves_only_placeholders_and_blocks_sales() {
    let pool = pool().await;
    let store = Arc::new(SqliteCatalogStore::new(pool.clone()));
    let uploads = MenuUploadService::new(store.clone());
    let sales = SaleService::new(store);
    let inventory = SqliteInventoryRepository::new(pool.clone());
    let menus = SqliteMenuRepository::new(pool.clone());

    uploads
        .upload(b"Latte,Milk-200\nMocha,Choco-30", ReconcileMode::Add, today())
        .await;
    let outcome = uploads
        .upload(b"Tea,Leaf-5", ReconcileMode::Reset, today())
        .await;
    assert!(outcome.is_success());

    let all_menus = menus.list().await.unwrap();
    assert_eq!(all_menus.len(), 1);
    assert_eq!(all_menus[0].name, "Tea");

    let items = inventory.list_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 0.0);
    assert!(items[0].is_uninitialized());

    let err = sales.process_batch(&[sale("Tea", 1)], today()).await.unwrap_err();
    assert!(matches!(err, DomainError::InventoryUninitialized(1)));

    // Configure the placeholder, then sales go through.
    let mut leaf = items[0].clone();
    InventoryPatch {
        category: Some("Tea".to_string()),
        unit: Some("g".to_string()),
        quantity: Some(50.0),
        min_quantity: Some(10.0),
        ..InventoryPatch::default()
    }
    .apply(&mut leaf, today());
    inventory.update(&leaf).await.unwrap();

    let outcomes = sales.process_batch(&[sale("Tea", 2)], today()).await.unwrap();
    assert!(outcomes[0].is_success());
    assert_eq!(inventory.find_by_name("Leaf").await.unwrap().unwrap().quantity, 40.0);
}

#[tokio::test]
async fn sales_batch_mixes_known_and_unknown_menus() {
    let pool = pool().await;
    let store = Arc::new(SqliteCatalogStore::new(pool.clone()));
    MenuUploadService::new(store.clone())
        .upload(b"Latte,Milk-60", ReconcileMode::Add, today())
        .await;
    let inventory = SqliteInventoryRepository::new(pool.clone());
    let mut milk = inventory.find_by_name("Milk").await.unwrap().unwrap();
    milk.quantity = 50.0;
    milk.min_quantity = 20.0;
    inventory.update(&milk).await.unwrap();

    let outcomes = SaleService::new(store)
        .process_batch(&[sale("Frappe", 1), sale("Latte", 1)], today())
        .await
        .unwrap();

    assert!(matches!(&outcomes[0], SaleOutcome::Error { .. }));
    assert!(outcomes[1].is_success());
    let json = serde_json::to_value(&outcomes[1]).unwrap();
    assert_eq!(json["deducted_items"][0]["remaining"], 0.0);
    assert_eq!(json["deducted_items"][0]["status"], "OUT_OF_STOCK");
    assert_eq!(json["deducted_items"][0]["status_changed"], true);
    assert_eq!(inventory.find_by_name("Milk").await.unwrap().unwrap().quantity, 0.0);
}

#[tokio::test]
async fn deleting_menu_removes_its_rows() {
    let pool = pool().await;
    MenuUploadService::new(Arc::new(SqliteCatalogStore::new(pool.clone())))
        .upload(b"Latte,Milk-200,Sugar-5", ReconcileMode::Add, today())
        .await;
    let menus = SqliteMenuRepository::new(pool.clone());
    let latte = menus.find_by_name("Latte").await.unwrap().unwrap();

    assert!(menus.delete(latte.id).await.unwrap());
    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_ingredients")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn deleting_employee_cascades_to_contracts() {
    let pool = pool().await;
    let employees = SqliteEmployeeRepository::new(pool.clone());
    let contracts = SqliteContractRepository::new(pool.clone());

    let kim = employees
        .create(
            &NewEmployee {
                name: "Kim".to_string(),
                role: "Barista".to_string(),
                phone: "010-1234-5678".to_string(),
                join_date: None,
            },
            today(),
        )
        .await
        .unwrap();
    assert_eq!(kim.status, EmployeeStatus::Active);

    let mut kim = kim;
    EmployeePatch {
        status: Some(EmployeeStatus::Inactive),
        ..EmployeePatch::default()
    }
    .apply(&mut kim);
    let kim = employees.update(&kim).await.unwrap();
    assert_eq!(kim.status, EmployeeStatus::Inactive);

    contracts
        .create(&NewContract {
            employee_id: kim.id,
            employer_name: "Our Cafe".to_string(),
            working_conditions: None,
            wage: Some("10,030 KRW/h".to_string()),
            contract_date: today(),
            employee_name: "Kim".to_string(),
            employee_address: "Seoul".to_string(),
            employee_phone: "010-1234-5678".to_string(),
            employee_signature: "A".repeat(120),
        })
        .await
        .unwrap();
    assert_eq!(contracts.list_by_employee(kim.id).await.unwrap().len(), 1);

    assert!(employees.delete(kim.id).await.unwrap());
    assert!(contracts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn store_settings_are_singletons() {
    let repo = SqliteStoreRepository::new(pool().await);
    assert!(repo.find_profile().await.unwrap().is_none());

    let first = repo.save_profile(&StoreDraft::default()).await.unwrap();
    let second = repo
        .save_profile(&StoreDraft {
            name: "Bean There".to_string(),
            address: None,
            phone: Some("02-000".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Bean There");
    assert!(second.address.is_none());

    let flags = NotificationFlags {
        daily_report: true,
        ..NotificationFlags::default()
    };
    repo.save_notifications(&NotificationFlags::default()).await.unwrap();
    let saved = repo.save_notifications(&flags).await.unwrap();
    assert!(saved.flags.daily_report);
    assert!(saved.flags.low_stock);
}

#[tokio::test]
async fn order_lines_survive_inventory_delete() {
    let pool = pool().await;
    let inventory = SqliteInventoryRepository::new(pool.clone());
    let orders = SqliteOrderRepository::new(pool.clone());

    let beans = inventory.create(&item("Beans", "Coffee", 2.0), today()).await.unwrap();
    let order = orders
        .create(
            vec![NewOrderLine {
                inventory_item_id: beans.id,
                name: beans.name.clone(),
                unit: beans.unit.clone(),
                quantity: 10.0,
                unit_price: beans.price,
                total_price: 10.0 * beans.price,
                priority: OrderPriority::High,
            }],
            50.0,
        )
        .await
        .unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].priority, OrderPriority::High);

    inventory.delete(beans.id).await.unwrap();
    let reloaded = orders.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(reloaded.items[0].inventory_item_id, None);
    assert_eq!(reloaded.items[0].name, "Beans");
    assert_eq!(reloaded.total_cost, 50.0);
}

#[tokio::test]
async fn identical_add_reupload_keeps_repeated_ingredient_rows() {
    let pool = pool().await;
    let uploads = MenuUploadService::new(Arc::new(SqliteCatalogStore::new(pool.clone())));
    let menus = SqliteMenuRepository::new(pool.clone());
    let csv = bizup_core::csv::parse_menu_csv("Latte,Milk-10,Milk-20");

    uploads.reconcile(&csv, ReconcileMode::Add, today()).await.unwrap();
    let before = menus.find_by_name("Latte").await.unwrap().unwrap();

    let report = uploads.reconcile(&csv, ReconcileMode::Add, today()).await.unwrap();
    let after = menus.find_by_name("Latte").await.unwrap().unwrap();

    assert_eq!(after, before);
    assert_eq!(report.menus, vec![after]);
}
