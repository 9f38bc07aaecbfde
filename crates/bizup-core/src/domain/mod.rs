pub mod analytics;
pub mod contract;
pub mod employee;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod sale;
pub mod stock;
pub mod store;

pub use analytics::{OutOfStockItem, OutOfStockMenu, Severity};
pub use contract::{Contract, ContractPatch, NewContract};
pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
pub use inventory::{
    InventoryItem, InventoryItemWithStatus, InventoryPatch, InventoryStats, NewInventoryItem,
};
pub use menu::{IngredientRequirement, Menu, MenuDefinition, MenuIngredient};
pub use order::{
    NewOrderLine, Order, OrderLine, OrderPriority, OrderRecommendation, OrderRequestLine,
    OrderStatus,
};
pub use sale::{IngredientDeduction, SaleEvent, SaleOutcome};
pub use stock::StockStatus;
pub use store::{NotificationFlags, NotificationSettings, StoreDraft, StorePatch, StoreProfile};
