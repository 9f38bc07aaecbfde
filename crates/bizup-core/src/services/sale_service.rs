// ============================================================================
// Bizup Core - Sale Service
// File: crates/bizup-core/src/services/sale_service.rs
// ============================================================================
//! Deducts ingredient stock for batches of sale events.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{IngredientDeduction, SaleEvent, SaleOutcome};
use crate::error::DomainError;
use crate::repositories::{CatalogStore, CatalogTransaction};

pub struct SaleService<S: CatalogStore> {
    store: Arc<S>,
}

impl<S: CatalogStore> SaleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Processes the batch in one transaction.
    ///
    /// Fails as a whole only when the inventory still holds uninitialized
    /// items, in which case nothing is written. Every other problem is
    /// reported in the outcome of the event it belongs to.
    pub async fn process_batch(
        &self,
        events: &[SaleEvent],
        today: NaiveDate,
    ) -> Result<Vec<SaleOutcome>, DomainError> {
        let mut tx = self.store.begin().await?;

        let uninitialized = tx.count_uninitialized_inventory().await?;
        if uninitialized > 0 {
            warn!(uninitialized, "Sales batch rejected: inventory not initialized");
            return Err(DomainError::InventoryUninitialized(uninitialized));
        }

        let mut outcomes = Vec::with_capacity(events.len());
        for event in events {
            let outcome = match process_event(&mut tx, event, today).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(menu = %event.menu_name, "Sale event failed: {}", e);
                    SaleOutcome::error(&event.menu_name, e.to_string())
                }
            };
            outcomes.push(outcome);
        }

        tx.commit().await?;

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            events = events.len(),
            succeeded,
            failed = events.len() - succeeded,
            "Sales batch processed"
        );
        Ok(outcomes)
    }
}

async fn process_event<T: CatalogTransaction>(
    tx: &mut T,
    event: &SaleEvent,
    today: NaiveDate,
) -> Result<SaleOutcome, DomainError> {
    let menu = match tx.find_menu_by_name(&event.menu_name).await? {
        Some(menu) if !menu.ingredients.is_empty() => menu,
        _ => {
            warn!(menu = %event.menu_name, "Sale for unknown menu");
            return Ok(SaleOutcome::menu_not_found(&event.menu_name));
        }
    };

    let mut deducted_items = Vec::with_capacity(menu.ingredients.len());
    for requirement in &menu.ingredients {
        let name = requirement.ingredient_name.trim();
        let Some(mut item) = tx.find_inventory_by_name(name).await? else {
            warn!(menu = %menu.name, ingredient = %name, "Ingredient missing from inventory");
            deducted_items.push(IngredientDeduction::missing(name));
            continue;
        };

        let amount = requirement.quantity * f64::from(event.quantity);
        let old_quantity = item.deduct(amount, today);
        tx.update_inventory_stock(&item).await?;

        debug!(
            ingredient = %item.name,
            deducted = amount,
            remaining = item.quantity,
            "Stock deducted"
        );
        deducted_items.push(IngredientDeduction::applied(&item, old_quantity, amount));
    }

    Ok(SaleOutcome::Success {
        menu_name: event.menu_name.clone(),
        quantity: event.quantity,
        deducted_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IngredientRequirement, MenuDefinition, NewInventoryItem, StockStatus};
    use crate::services::{MenuUploadService, ReconcileMode};
    use crate::testing::InMemoryCatalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn sale(menu: &str, quantity: u32) -> SaleEvent {
        SaleEvent {
            menu_name: menu.to_string(),
            quantity,
            timestamp: "2024-03-01T09:00:00".to_string(),
        }
    }

    fn stocked(name: &str, quantity: f64, min_quantity: f64) -> NewInventoryItem {
        NewInventoryItem {
            quantity,
            min_quantity,
            ..NewInventoryItem::seeded(name)
        }
    }

    async fn catalog_with_menu(definition: MenuDefinition) -> Arc<InMemoryCatalog> {
        let catalog = Arc::new(InMemoryCatalog::new());
        let mut tx = catalog.begin().await.unwrap();
        tx.insert_menu(&definition.name, &definition.ingredients)
            .await
            .unwrap();
        tx.commit().await.unwrap();
        catalog
    }

    fn latte(milk: f64) -> MenuDefinition {
        MenuDefinition {
            name: "Latte".to_string(),
            ingredients: vec![IngredientRequirement::new("Milk", milk)],
        }
    }

    #[tokio::test]
    async fn test_deduction_clamps_and_warns() {
        let catalog = catalog_with_menu(latte(60.0)).await;
        catalog.seed_inventory(stocked("Milk", 50.0, 20.0), today());
        let service = SaleService::new(catalog.clone());

        let outcomes = service.process_batch(&[sale("Latte", 1)], today()).await.unwrap();

        match &outcomes[0] {
            SaleOutcome::Success { deducted_items, .. } => match &deducted_items[0] {
                IngredientDeduction::Deducted {
                    deducted,
                    remaining,
                    old_quantity,
                    status,
                    status_changed,
                    warning,
                    ..
                } => {
                    assert_eq!(*deducted, 60.0);
                    assert_eq!(*remaining, 0.0);
                    assert_eq!(*old_quantity, 50.0);
                    assert_eq!(*status, StockStatus::OutOfStock);
                    assert!(*status_changed);
                    assert!(warning.is_some());
                }
                other => panic!("unexpected deduction: {:?}", other),
            },
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(catalog.inventory_item("Milk").unwrap().quantity, 0.0);
    }

    #[tokio::test]
    async fn test_quantity_multiplies_requirement() {
        let catalog = catalog_with_menu(latte(20.0)).await;
        catalog.seed_inventory(stocked("Milk", 500.0, 20.0), today());
        let service = SaleService::new(catalog.clone());

        service.process_batch(&[sale("Latte", 3)], today()).await.unwrap();
        let milk = catalog.inventory_item("Milk").unwrap();
        assert_eq!(milk.quantity, 440.0);
        assert_eq!(milk.last_updated, today());
    }

    #[tokio::test]
    async fn test_unknown_menu_does_not_block_batch() {
        let catalog = catalog_with_menu(latte(10.0)).await;
        catalog.seed_inventory(stocked("Milk", 500.0, 20.0), today());
        let service = SaleService::new(catalog.clone());

        let outcomes = service
            .process_batch(&[sale("Frappe", 1), sale("Latte", 1)], today())
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(&outcomes[0], SaleOutcome::Error { menu_name, .. } if menu_name == "Frappe"));
        assert!(outcomes[1].is_success());
        assert_eq!(catalog.inventory_item("Milk").unwrap().quantity, 490.0);
    }

    #[tokio::test]
    async fn test_missing_ingredient_is_reported() {
        let catalog = catalog_with_menu(MenuDefinition {
            name: "Latte".to_string(),
            ingredients: vec![
                IngredientRequirement::new("Milk", 10.0),
                IngredientRequirement::new("Oat", 5.0),
            ],
        })
        .await;
        catalog.seed_inventory(stocked("Milk", 500.0, 20.0), today());
        let service = SaleService::new(catalog);

        let outcomes = service.process_batch(&[sale("Latte", 1)], today()).await.unwrap();
        let SaleOutcome::Success { deducted_items, .. } = &outcomes[0] else {
            panic!("expected success");
        };
        assert!(matches!(
            &deducted_items[1],
            IngredientDeduction::Missing { ingredient, deducted, .. } if ingredient == "Oat" && *deducted == 0.0
        ));
    }

    #[tokio::test]
    async fn test_reset_upload_blocks_sales_until_configured() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let uploads = MenuUploadService::new(catalog.clone());
        uploads
            .upload(b"Latte,Milk-200", ReconcileMode::Reset, today())
            .await;

        let service = SaleService::new(catalog.clone());
        let err = service
            .process_batch(&[sale("Latte", 1)], today())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InventoryUninitialized(1)));
        assert_eq!(catalog.inventory_item("Milk").unwrap().quantity, 0.0);
    }

    #[tokio::test]
    async fn test_add_upload_allows_sales() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let uploads = MenuUploadService::new(catalog.clone());
        uploads
            .upload(b"Latte,Milk-30", ReconcileMode::Add, today())
            .await;

        let service = SaleService::new(catalog.clone());
        let outcomes = service.process_batch(&[sale("Latte", 1)], today()).await.unwrap();
        assert!(outcomes[0].is_success());
        assert_eq!(catalog.inventory_item("Milk").unwrap().quantity, 70.0);
    }
}
