// ============================================================================
// Bizup Infrastructure - SQLite Order Repository
// File: crates/bizup-infrastructure/src/database/sqlite/order_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::warn;

use bizup_core::domain::{NewOrderLine, Order, OrderStatus};
use bizup_core::error::DomainError;
use bizup_core::repositories::OrderRepository;

use super::db_error;
use super::rows::{OrderLineRow, OrderRow};

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn create(
        &self,
        lines: Vec<NewOrderLine>,
        total_cost: f64,
    ) -> Result<Order, DomainError> {
        let now = Utc::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("beginning order transaction", e))?;

        let order_id = sqlx::query(
            "INSERT INTO orders (status, total_cost, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(OrderStatus::Pending.as_str())
        .bind(total_cost)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("creating order", e))?
        .last_insert_rowid();

        for line in &lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id, inventory_item_id, name, unit, quantity,
                    unit_price, total_price, priority, created_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(line.inventory_item_id)
            .bind(&line.name)
            .bind(&line.unit)
            .bind(line.quantity)
            .bind(line.unit_price)
            .bind(line.total_price)
            .bind(line.priority.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("creating order line", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing order", e))?;

        self.find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::InternalError(format!("Order {} missing after insert", order_id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT id, status, total_cost, created_at, updated_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding order by id", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lines: Vec<OrderLineRow> = sqlx::query_as(
            r#"
            SELECT id, inventory_item_id, name, unit, quantity, unit_price, total_price, priority
            FROM order_items
            WHERE order_id = ?
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading order lines", e))?;

        let status = OrderStatus::parse(&row.status).unwrap_or_else(|| {
            warn!(id, status = %row.status, "Unknown order status, treating as pending");
            OrderStatus::Pending
        });

        Ok(Some(Order {
            id: row.id,
            status,
            total_cost: row.total_cost,
            items: lines.into_iter().map(Into::into).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}
