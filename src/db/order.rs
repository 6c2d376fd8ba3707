//! Order repository over the single-slot `current_order` table

use chrono::Utc;
use rusqlite::OptionalExtension;

use super::DbPool;
use crate::order::Order;
use crate::{Error, Result};

/// Order repository
#[derive(Clone)]
pub struct OrderRepo {
    pool: DbPool,
}

impl OrderRepo {
    /// Create a new order repository
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Replace the current order
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn save(&self, order: &Order) -> Result<()> {
        let conn = self.pool.get().map_err(|e| Error::Database(e.to_string()))?;
        let extras = serde_json::to_string(&order.extras)?;

        conn.execute(
            r"
            INSERT INTO current_order (slot, drink_type, size, milk, extras, name, updated_at)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(slot) DO UPDATE SET
                drink_type = excluded.drink_type,
                size = excluded.size,
                milk = excluded.milk,
                extras = excluded.extras,
                name = excluded.name,
                updated_at = excluded.updated_at
            ",
            rusqlite::params![
                order.drink_type,
                order.size,
                order.milk,
                extras,
                order.name,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// Get the current order, if one has been saved
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn current(&self) -> Result<Option<Order>> {
        let conn = self.pool.get().map_err(|e| Error::Database(e.to_string()))?;

        let row = conn
            .query_row(
                r"
                SELECT drink_type, size, milk, extras, name
                FROM current_order
                WHERE slot = 1
                ",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((drink_type, size, milk, extras, name)) = row else {
            return Ok(None);
        };

        let extras: Vec<String> = serde_json::from_str(&extras)?;
        Ok(Some(Order::new(drink_type, size, milk, extras, name)))
    }
}
