//! Internal row types for SQLx mapping

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use bizup_core::domain::{
    Contract, Employee, EmployeeStatus, InventoryItem, MenuIngredient, NotificationFlags,
    NotificationSettings, OrderLine, OrderPriority, StoreProfile,
};

pub(crate) const INVENTORY_COLUMNS: &str = "id, name, category, quantity, unit, min_quantity, \
     price, last_updated, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct InventoryRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub min_quantity: f64,
    pub price: f64,
    pub last_updated: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        InventoryItem {
            id: row.id,
            name: row.name,
            category: row.category,
            quantity: row.quantity,
            unit: row.unit,
            min_quantity: row.min_quantity,
            price: row.price,
            last_updated: row.last_updated,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct MenuRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub(crate) struct MenuIngredientRow {
    pub id: i64,
    pub menu_id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<MenuIngredientRow> for MenuIngredient {
    fn from(row: MenuIngredientRow) -> Self {
        MenuIngredient {
            id: Some(row.id),
            ingredient_name: row.ingredient_name,
            quantity: row.quantity,
            unit: row.unit,
        }
    }
}

pub(crate) const EMPLOYEE_COLUMNS: &str =
    "id, name, role, phone, status, join_date, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: String,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            role: row.role,
            phone: row.phone,
            status: EmployeeStatus::parse(&row.status).unwrap_or_default(),
            join_date: row.join_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub(crate) const CONTRACT_COLUMNS: &str = "id, employee_id, employer_name, working_conditions, \
     wage, contract_date, employee_name, employee_address, employee_phone, employee_signature, \
     created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct ContractRow {
    pub id: i64,
    pub employee_id: i64,
    pub employer_name: String,
    pub working_conditions: Option<String>,
    pub wage: Option<String>,
    pub contract_date: NaiveDate,
    pub employee_name: String,
    pub employee_address: String,
    pub employee_phone: String,
    pub employee_signature: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContractRow> for Contract {
    fn from(row: ContractRow) -> Self {
        Contract {
            id: row.id,
            employee_id: row.employee_id,
            employer_name: row.employer_name,
            working_conditions: row.working_conditions,
            wage: row.wage,
            contract_date: row.contract_date,
            employee_name: row.employee_name,
            employee_address: row.employee_address,
            employee_phone: row.employee_phone,
            employee_signature: row.employee_signature,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct StoreRow {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoreRow> for StoreProfile {
    fn from(row: StoreRow) -> Self {
        StoreProfile {
            id: row.id,
            name: row.name,
            address: row.address,
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct NotificationRow {
    pub id: i64,
    pub low_stock: bool,
    pub out_of_stock: bool,
    pub order_reminder: bool,
    pub daily_report: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NotificationRow> for NotificationSettings {
    fn from(row: NotificationRow) -> Self {
        NotificationSettings {
            id: row.id,
            flags: NotificationFlags {
                low_stock: row.low_stock,
                out_of_stock: row.out_of_stock,
                order_reminder: row.order_reminder,
                daily_report: row.daily_report,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct OrderRow {
    pub id: i64,
    pub status: String,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub(crate) struct OrderLineRow {
    pub id: i64,
    pub inventory_item_id: Option<i64>,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub priority: String,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        OrderLine {
            id: row.id,
            inventory_item_id: row.inventory_item_id,
            name: row.name,
            quantity: row.quantity,
            unit: row.unit,
            unit_price: row.unit_price,
            total_price: row.total_price,
            priority: OrderPriority::parse(&row.priority).unwrap_or_default(),
        }
    }
}
