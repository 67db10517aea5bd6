//! PostgreSQL-backed car repository.
//!
//! Saves are upserts keyed by the vehicle id. A car referencing an unknown
//! manufacturer is rejected by the `cars_manufacturer_id_fkey` foreign key
//! and surfaces as [`RepositoryError::Constraint`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Car, VehicleId};

use super::diesel_helpers::{map_diesel_error, map_pool_error, map_row_error, page_limit};
use super::models::{CarRow, NewCarRow, row_to_car};
use super::pool::DbPool;
use super::schema::cars;

/// Diesel implementation of `Repository<Car>`.
#[derive(Clone)]
pub struct DieselCarRepository {
    pool: DbPool,
}

impl DieselCarRepository {
    /// Repository storing cars through `pool`.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Car> for DieselCarRepository {
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Car>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CarRow> = cars::table
            .filter(cars::id.eq(id.get()))
            .select(CarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_car).transpose().map_err(map_row_error)
    }

    async fn find_page(
        &self,
        after: Option<VehicleId>,
        limit: usize,
    ) -> Result<Vec<Car>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = cars::table
            .select(CarRow::as_select())
            .order_by(cars::id.asc())
            .limit(page_limit(limit))
            .into_boxed();
        if let Some(after) = after {
            query = query.filter(cars::id.gt(after.get()));
        }

        let rows: Vec<CarRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        debug!(rows = rows.len(), after = ?after, "loaded car page");
        rows.into_iter()
            .map(row_to_car)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_row_error)
    }

    async fn save(&self, entity: &Car) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCarRow::from(entity);

        diesel::insert_into(cars::table)
            .values(&row)
            .on_conflict(cars::id)
            .do_update()
            .set(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: VehicleId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(cars::table.filter(cars::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
