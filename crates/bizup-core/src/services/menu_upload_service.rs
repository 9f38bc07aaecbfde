// ============================================================================
// Bizup Core - Menu Upload Service
// File: crates/bizup-core/src/services/menu_upload_service.rs
// ============================================================================
//! Reconciles parsed menu CSV lines against the inventory and menu catalog.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use bizup_shared::constants::LOG_PREVIEW_CHARS;
use bizup_shared::utils::preview;

use crate::csv::parse_menu_csv;
use crate::domain::{Menu, MenuDefinition, NewInventoryItem};
use crate::error::DomainError;
use crate::repositories::{CatalogStore, CatalogTransaction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileMode {
    /// Merge into the existing catalog.
    #[default]
    Add,
    /// Wipe menus and inventory, then rebuild from the upload.
    Reset,
}

impl ReconcileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileMode::Add => "add",
            ReconcileMode::Reset => "reset",
        }
    }

    fn placeholder(&self, name: &str) -> NewInventoryItem {
        match self {
            ReconcileMode::Add => NewInventoryItem::seeded(name),
            ReconcileMode::Reset => NewInventoryItem::placeholder(name),
        }
    }
}

impl fmt::Display for ReconcileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters and names produced by one reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileReport {
    pub mode: ReconcileMode,
    pub menus_count: usize,
    pub menus_created: usize,
    pub menus_updated: usize,
    pub ingredients_registered: usize,
    /// Distinct ingredient names resolved to an inventory item, first-seen order.
    pub ingredient_names: Vec<String>,
    pub failed_ingredients: Vec<String>,
    pub total_inventory_count: i64,
    /// Menus created or updated by this call, in their final state.
    pub menus: Vec<Menu>,
}

impl ReconcileReport {
    fn new(mode: ReconcileMode, menus_count: usize) -> Self {
        Self {
            mode,
            menus_count,
            menus_created: 0,
            menus_updated: 0,
            ingredients_registered: 0,
            ingredient_names: Vec::new(),
            failed_ingredients: Vec::new(),
            total_inventory_count: 0,
            menus: Vec::new(),
        }
    }

    /// Keeps one entry per menu id, replacing an earlier state.
    fn record_menu(&mut self, menu: Menu) {
        match self.menus.iter_mut().find(|m| m.id == menu.id) {
            Some(existing) => *existing = menu,
            None => self.menus.push(menu),
        }
    }

    pub fn message(&self) -> String {
        let mut message = format!("{} menus processed", self.menus_count);
        if self.ingredients_registered > 0 {
            message.push_str(&format!(
                ", {} ingredients registered in inventory",
                self.ingredients_registered
            ));
        } else {
            message.push_str(" (all ingredients were already in inventory)");
        }
        if !self.failed_ingredients.is_empty() {
            message.push_str(&format!(
                ", {} ingredients could not be registered",
                self.failed_ingredients.len()
            ));
        }
        message
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadSummary {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub report: ReconcileReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadFailure {
    pub success: bool,
    pub mode: ReconcileMode,
    pub message: String,
}

/// Upload result. Failures are reported as data, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Completed(UploadSummary),
    Failed(UploadFailure),
}

impl UploadOutcome {
    pub fn failed(mode: ReconcileMode, message: impl Into<String>) -> Self {
        UploadOutcome::Failed(UploadFailure {
            success: false,
            mode,
            message: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Completed(_))
    }
}

pub struct MenuUploadService<S: CatalogStore> {
    store: Arc<S>,
}

impl<S: CatalogStore> MenuUploadService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Parses and reconciles raw CSV bytes.
    pub async fn upload(&self, content: &[u8], mode: ReconcileMode, today: NaiveDate) -> UploadOutcome {
        let text = match std::str::from_utf8(content) {
            Ok(text) => text,
            Err(e) => {
                warn!("Menu CSV is not valid UTF-8: {}", e);
                return UploadOutcome::failed(mode, format!("CSV must be UTF-8 text: {}", e));
            }
        };

        debug!(mode = %mode, "Menu CSV preview: {}", preview(text, LOG_PREVIEW_CHARS));
        let menus = parse_menu_csv(text);

        match self.reconcile(&menus, mode, today).await {
            Ok(report) => {
                info!(
                    mode = %mode,
                    menus = report.menus_count,
                    created = report.menus_created,
                    updated = report.menus_updated,
                    registered = report.ingredients_registered,
                    failed = report.failed_ingredients.len(),
                    "Menu CSV upload complete"
                );
                UploadOutcome::Completed(UploadSummary {
                    success: true,
                    message: report.message(),
                    report,
                })
            }
            Err(e) => {
                error!(mode = %mode, "Menu CSV upload failed: {}", e);
                UploadOutcome::failed(mode, e.to_string())
            }
        }
    }

    /// Applies `menus` to the catalog in one transaction.
    pub async fn reconcile(
        &self,
        menus: &[MenuDefinition],
        mode: ReconcileMode,
        today: NaiveDate,
    ) -> Result<ReconcileReport, DomainError> {
        let mut tx = self.store.begin().await?;
        let mut report = ReconcileReport::new(mode, menus.len());

        if mode == ReconcileMode::Reset {
            tx.clear_catalog().await?;
            info!("Catalog cleared for reset upload");
        }

        let names = distinct_ingredient_names(menus);
        if names.is_empty() && !menus.is_empty() {
            warn!("Parsed menus reference no ingredients");
        }

        for name in names {
            if let Some(existing) = tx.find_inventory_by_name(&name).await? {
                debug!(ingredient = %name, id = existing.id, "Ingredient already in inventory");
                report.ingredient_names.push(name);
                continue;
            }

            match tx.create_inventory(&mode.placeholder(&name), today).await {
                Ok(created) => {
                    debug!(ingredient = %name, id = created.id, "Ingredient registered");
                    report.ingredients_registered += 1;
                    report.ingredient_names.push(name);
                }
                Err(e) => {
                    error!(ingredient = %name, "Failed to register ingredient: {}", e);
                    report.failed_ingredients.push(name);
                }
            }
        }

        // A name appearing twice in one upload counts once: as created when
        // this call inserted it, otherwise as updated.
        let mut created_here: HashSet<&str> = HashSet::new();
        let mut updated_here: HashSet<&str> = HashSet::new();
        for definition in menus {
            let name = definition.name.as_str();
            let menu = match tx.find_menu_by_name(name).await? {
                Some(mut menu) => {
                    menu.merge_requirements(&definition.ingredients);
                    let menu = tx.update_menu(&menu).await?;
                    if !created_here.contains(name) && updated_here.insert(name) {
                        report.menus_updated += 1;
                    }
                    menu
                }
                None => {
                    let menu = tx.insert_menu(name, &definition.ingredients).await?;
                    created_here.insert(name);
                    report.menus_created += 1;
                    menu
                }
            };
            report.record_menu(menu);
        }

        report.total_inventory_count = tx.count_inventory().await?;
        tx.commit().await?;

        Ok(report)
    }
}

fn distinct_ingredient_names(menus: &[MenuDefinition]) -> Vec<String> {
    let mut seen = HashSet::new();
    menus
        .iter()
        .flat_map(|m| m.ingredients.iter())
        .map(|i| i.ingredient_name.trim())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
