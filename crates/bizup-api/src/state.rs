//! Shared application state

use std::sync::Arc;

use sqlx::SqlitePool;

use bizup_core::services::{
    InventoryService, MenuService, MenuUploadService, OrderService, OutOfStockService,
    SaleService, StaffService, StoreService,
};
use bizup_infrastructure::{
    SqliteCatalogStore, SqliteContractRepository, SqliteEmployeeRepository,
    SqliteInventoryRepository, SqliteMenuRepository, SqliteOrderRepository,
    SqliteStoreRepository,
};
use bizup_security::{
    verifier_from_settings, CredentialVerifier, SecurityError, StaticTokenIssuer, TokenIssuer,
};
use bizup_shared::config::AppConfig;

pub type Inventory = InventoryService<SqliteInventoryRepository>;
pub type Menus = MenuService<SqliteMenuRepository>;
pub type MenuUploads = MenuUploadService<SqliteCatalogStore>;
pub type Sales = SaleService<SqliteCatalogStore>;
pub type OutOfStock = OutOfStockService<SqliteInventoryRepository, SqliteMenuRepository>;
pub type Orders = OrderService<SqliteInventoryRepository, SqliteOrderRepository>;
pub type Staff = StaffService<SqliteEmployeeRepository, SqliteContractRepository>;
pub type Store = StoreService<SqliteStoreRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub inventory: Arc<Inventory>,
    pub menus: Arc<Menus>,
    pub menu_uploads: Arc<MenuUploads>,
    pub sales: Arc<Sales>,
    pub out_of_stock: Arc<OutOfStock>,
    pub orders: Arc<Orders>,
    pub staff: Arc<Staff>,
    pub store: Arc<Store>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    /// Wires every service onto the given pool.
    pub fn new(pool: SqlitePool, config: AppConfig) -> Result<Self, SecurityError> {
        let inventory_repo = Arc::new(SqliteInventoryRepository::new(pool.clone()));
        let menu_repo = Arc::new(SqliteMenuRepository::new(pool.clone()));
        let catalog = Arc::new(SqliteCatalogStore::new(pool.clone()));
        let orders_repo = Arc::new(SqliteOrderRepository::new(pool.clone()));
        let employees = Arc::new(SqliteEmployeeRepository::new(pool.clone()));
        let contracts = Arc::new(SqliteContractRepository::new(pool.clone()));
        let store_repo = Arc::new(SqliteStoreRepository::new(pool));

        let credentials = verifier_from_settings(&config.auth)?;
        let tokens: Arc<dyn TokenIssuer> =
            Arc::new(StaticTokenIssuer::new(config.auth.token_prefix.clone()));

        Ok(Self {
            inventory: Arc::new(InventoryService::new(inventory_repo.clone())),
            menus: Arc::new(MenuService::new(menu_repo.clone())),
            menu_uploads: Arc::new(MenuUploadService::new(catalog.clone())),
            sales: Arc::new(SaleService::new(catalog)),
            out_of_stock: Arc::new(OutOfStockService::new(inventory_repo.clone(), menu_repo)),
            orders: Arc::new(OrderService::new(inventory_repo, orders_repo)),
            staff: Arc::new(StaffService::new(employees, contracts)),
            store: Arc::new(StoreService::new(store_repo)),
            credentials,
            tokens,
            config: Arc::new(config),
        })
    }
}
