//! Domain services (business logic)

pub mod inventory_service;
pub mod menu_service;
pub mod menu_upload_service;
pub mod order_service;
pub mod out_of_stock_service;
pub mod sale_service;
pub mod staff_service;
pub mod store_service;

pub use inventory_service::InventoryService;
pub use menu_service::MenuService;
pub use menu_upload_service::{
    MenuUploadService, ReconcileMode, ReconcileReport, UploadFailure, UploadOutcome,
    UploadSummary,
};
pub use order_service::OrderService;
pub use out_of_stock_service::OutOfStockService;
pub use sale_service::SaleService;
pub use staff_service::StaffService;
pub use store_service::StoreService;
