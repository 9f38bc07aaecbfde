// ============================================================================
// Bizup Infrastructure - Catalog Queries
// File: crates/bizup-infrastructure/src/database/sqlite/catalog_queries.rs
// ============================================================================
//! Inventory and menu statements shared by the pool repositories and the
//! transactional catalog store.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sqlx::SqliteConnection;

use bizup_core::domain::{IngredientRequirement, InventoryItem, Menu, MenuIngredient, NewInventoryItem};
use bizup_core::error::DomainError;
use bizup_shared::types::Pagination;

use super::rows::{InventoryRow, MenuIngredientRow, MenuRow, INVENTORY_COLUMNS};
use super::{db_error, is_unique_violation};

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

pub(crate) async fn find_inventory_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<InventoryItem>, DomainError> {
    let sql = format!("SELECT {} FROM inventory_items WHERE id = ?", INVENTORY_COLUMNS);
    let row: Option<InventoryRow> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| db_error("finding inventory item by id", e))?;

    Ok(row.map(Into::into))
}

pub(crate) async fn find_inventory_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<InventoryItem>, DomainError> {
    let sql = format!("SELECT {} FROM inventory_items WHERE name = ?", INVENTORY_COLUMNS);
    let row: Option<InventoryRow> = sqlx::query_as(&sql)
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| db_error("finding inventory item by name", e))?;

    Ok(row.map(Into::into))
}

pub(crate) async fn list_inventory(
    conn: &mut SqliteConnection,
    page: Pagination,
    search: Option<&str>,
) -> Result<Vec<InventoryItem>, DomainError> {
    let sql = format!(
        r#"
        SELECT {}
        FROM inventory_items
        WHERE ?1 IS NULL
           OR name LIKE '%' || ?1 || '%'
           OR category LIKE '%' || ?1 || '%'
        ORDER BY id
        LIMIT ?2 OFFSET ?3
        "#,
        INVENTORY_COLUMNS
    );
    let rows: Vec<InventoryRow> = sqlx::query_as(&sql)
        .bind(search)
        .bind(i64::from(page.limit))
        .bind(i64::from(page.skip))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("listing inventory", e))?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub(crate) async fn list_all_inventory(
    conn: &mut SqliteConnection,
) -> Result<Vec<InventoryItem>, DomainError> {
    let sql = format!("SELECT {} FROM inventory_items ORDER BY id", INVENTORY_COLUMNS);
    let rows: Vec<InventoryRow> = sqlx::query_as(&sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("listing all inventory", e))?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub(crate) async fn list_out_of_stock(
    conn: &mut SqliteConnection,
) -> Result<Vec<InventoryItem>, DomainError> {
    let sql = format!(
        "SELECT {} FROM inventory_items WHERE quantity = 0 ORDER BY id",
        INVENTORY_COLUMNS
    );
    let rows: Vec<InventoryRow> = sqlx::query_as(&sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("listing out-of-stock inventory", e))?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub(crate) async fn insert_inventory(
    conn: &mut SqliteConnection,
    item: &NewInventoryItem,
    today: NaiveDate,
) -> Result<InventoryItem, DomainError> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO inventory_items (
            name, category, quantity, unit, min_quantity, price,
            last_updated, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(item.min_quantity)
    .bind(item.price)
    .bind(today)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DomainError::InventoryNameExists(item.name.clone())
        } else {
            db_error("creating inventory item", e)
        }
    })?;

    find_inventory_by_id(conn, result.last_insert_rowid())
        .await?
        .ok_or_else(|| DomainError::InternalError("Inserted inventory item vanished".to_string()))
}

pub(crate) async fn update_inventory(
    conn: &mut SqliteConnection,
    item: &InventoryItem,
) -> Result<InventoryItem, DomainError> {
    let result = sqlx::query(
        r#"
        UPDATE inventory_items
        SET name = ?, category = ?, quantity = ?, unit = ?, min_quantity = ?,
            price = ?, last_updated = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(item.min_quantity)
    .bind(item.price)
    .bind(item.last_updated)
    .bind(Utc::now())
    .bind(item.id)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DomainError::InventoryNameExists(item.name.clone())
        } else {
            db_error("updating inventory item", e)
        }
    })?;

    if result.rows_affected() == 0 {
        return Err(DomainError::InventoryItemNotFound(item.id));
    }
    find_inventory_by_id(conn, item.id)
        .await?
        .ok_or(DomainError::InventoryItemNotFound(item.id))
}

pub(crate) async fn update_inventory_stock(
    conn: &mut SqliteConnection,
    item: &InventoryItem,
) -> Result<(), DomainError> {
    let result = sqlx::query(
        "UPDATE inventory_items SET quantity = ?, last_updated = ?, updated_at = ? WHERE id = ?",
    )
    .bind(item.quantity)
    .bind(item.last_updated)
    .bind(Utc::now())
    .bind(item.id)
    .execute(&mut *conn)
    .await
    .map_err(|e| db_error("updating inventory stock", e))?;

    if result.rows_affected() == 0 {
        return Err(DomainError::InventoryItemNotFound(item.id));
    }
    Ok(())
}

pub(crate) async fn delete_inventory(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<bool, DomainError> {
    let result = sqlx::query("DELETE FROM inventory_items WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| db_error("deleting inventory item", e))?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn count_inventory(conn: &mut SqliteConnection) -> Result<i64, DomainError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventory_items")
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| db_error("counting inventory", e))
}

/// Same rule as `InventoryItem::is_uninitialized`.
pub(crate) async fn count_uninitialized_inventory(
    conn: &mut SqliteConnection,
) -> Result<i64, DomainError> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM inventory_items WHERE TRIM(category) = '' OR TRIM(unit) = ''",
    )
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| db_error("counting uninitialized inventory", e))
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

async fn load_ingredients(
    conn: &mut SqliteConnection,
    menu_id: i64,
) -> Result<Vec<MenuIngredient>, DomainError> {
    let rows: Vec<MenuIngredientRow> = sqlx::query_as(
        r#"
        SELECT id, menu_id, ingredient_name, quantity, unit
        FROM menu_ingredients
        WHERE menu_id = ?
        ORDER BY id
        "#,
    )
    .bind(menu_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| db_error("loading menu ingredients", e))?;

    Ok(rows.into_iter().map(Into::into).collect())
}

async fn find_menu_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Menu>, DomainError> {
    let row: Option<MenuRow> = sqlx::query_as("SELECT id, name FROM menus WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| db_error("finding menu by id", e))?;

    match row {
        Some(row) => Ok(Some(Menu {
            ingredients: load_ingredients(conn, row.id).await?,
            id: row.id,
            name: row.name,
        })),
        None => Ok(None),
    }
}

pub(crate) async fn find_menu_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Menu>, DomainError> {
    let row: Option<MenuRow> = sqlx::query_as("SELECT id, name FROM menus WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| db_error("finding menu by name", e))?;

    match row {
        Some(row) => Ok(Some(Menu {
            ingredients: load_ingredients(conn, row.id).await?,
            id: row.id,
            name: row.name,
        })),
        None => Ok(None),
    }
}

pub(crate) async fn list_menus(conn: &mut SqliteConnection) -> Result<Vec<Menu>, DomainError> {
    let menus: Vec<MenuRow> = sqlx::query_as("SELECT id, name FROM menus ORDER BY id")
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("listing menus", e))?;

    let rows: Vec<MenuIngredientRow> = sqlx::query_as(
        r#"
        SELECT id, menu_id, ingredient_name, quantity, unit
        FROM menu_ingredients
        ORDER BY menu_id, id
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| db_error("listing menu ingredients", e))?;

    let mut by_menu: HashMap<i64, Vec<MenuIngredient>> = HashMap::new();
    for row in rows {
        by_menu.entry(row.menu_id).or_default().push(row.into());
    }

    Ok(menus
        .into_iter()
        .map(|m| Menu {
            ingredients: by_menu.remove(&m.id).unwrap_or_default(),
            id: m.id,
            name: m.name,
        })
        .collect())
}

async fn insert_ingredient(
    conn: &mut SqliteConnection,
    menu_id: i64,
    ingredient_name: &str,
    quantity: f64,
    unit: &str,
) -> Result<(), DomainError> {
    sqlx::query(
        "INSERT INTO menu_ingredients (menu_id, ingredient_name, quantity, unit) VALUES (?, ?, ?, ?)",
    )
    .bind(menu_id)
    .bind(ingredient_name)
    .bind(quantity)
    .bind(unit)
    .execute(&mut *conn)
    .await
    .map_err(|e| db_error("inserting menu ingredient", e))?;
    Ok(())
}

pub(crate) async fn insert_menu(
    conn: &mut SqliteConnection,
    name: &str,
    ingredients: &[IngredientRequirement],
) -> Result<Menu, DomainError> {
    let result = sqlx::query("INSERT INTO menus (name, created_at) VALUES (?, ?)")
        .bind(name)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::MenuNameExists(name.to_string())
            } else {
                db_error("creating menu", e)
            }
        })?;
    let menu_id = result.last_insert_rowid();

    for req in ingredients {
        insert_ingredient(conn, menu_id, &req.ingredient_name, req.quantity, &req.unit).await?;
    }

    find_menu_by_id(conn, menu_id)
        .await?
        .ok_or_else(|| DomainError::MenuNotFound(name.to_string()))
}

pub(crate) async fn update_menu(conn: &mut SqliteConnection, menu: &Menu) -> Result<Menu, DomainError> {
    for row in &menu.ingredients {
        match row.id {
            Some(id) => {
                sqlx::query("UPDATE menu_ingredients SET quantity = ?, unit = ? WHERE id = ? AND menu_id = ?")
                    .bind(row.quantity)
                    .bind(&row.unit)
                    .bind(id)
                    .bind(menu.id)
                    .execute(&mut *conn)
                    .await
                    .map_err(|e| db_error("updating menu ingredient", e))?;
            }
            None => {
                insert_ingredient(conn, menu.id, &row.ingredient_name, row.quantity, &row.unit)
                    .await?
            }
        }
    }

    find_menu_by_id(conn, menu.id)
        .await?
        .ok_or_else(|| DomainError::MenuNotFound(menu.name.clone()))
}

pub(crate) async fn delete_menu(conn: &mut SqliteConnection, id: i64) -> Result<bool, DomainError> {
    let result = sqlx::query("DELETE FROM menus WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| db_error("deleting menu", e))?;

    Ok(result.rows_affected() > 0)
}

/// Removes all menus (ingredient rows cascade) and all inventory.
pub(crate) async fn clear_catalog(conn: &mut SqliteConnection) -> Result<(), DomainError> {
    for statement in ["DELETE FROM menus", "DELETE FROM inventory_items"] {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(|e| db_error("clearing catalog", e))?;
    }
    Ok(())
}
