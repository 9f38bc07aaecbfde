//! HTTP handlers, one module per resource

pub mod auth;
pub mod contracts;
pub mod employees;
pub mod health;
pub mod inventory;
pub mod menus;
pub mod orders;
pub mod out_of_stock;
pub mod sales;
pub mod store;

use chrono::{Local, NaiveDate};

/// Business date used for `last_updated`, join dates and day counts.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
