//! PostgreSQL-backed manufacturer repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Manufacturer, ManufacturerId};

use super::diesel_helpers::{map_diesel_error, map_pool_error, map_row_error, page_limit};
use super::models::{ManufacturerRow, NewManufacturerRow, row_to_manufacturer};
use super::pool::DbPool;
use super::schema::manufacturers;

/// Diesel implementation of `Repository<Manufacturer>`.
#[derive(Clone)]
pub struct DieselManufacturerRepository {
    pool: DbPool,
}

impl DieselManufacturerRepository {
    /// Repository storing manufacturers through `pool`.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Manufacturer> for DieselManufacturerRepository {
    async fn find_by_id(
        &self,
        id: ManufacturerId,
    ) -> Result<Option<Manufacturer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ManufacturerRow> = manufacturers::table
            .filter(manufacturers::id.eq(id.get()))
            .select(ManufacturerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_manufacturer).transpose().map_err(map_row_error)
    }

    async fn find_page(
        &self,
        after: Option<ManufacturerId>,
        limit: usize,
    ) -> Result<Vec<Manufacturer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = manufacturers::table
            .select(ManufacturerRow::as_select())
            .order_by(manufacturers::id.asc())
            .limit(page_limit(limit))
            .into_boxed();
        if let Some(after) = after {
            query = query.filter(manufacturers::id.gt(after.get()));
        }

        let rows: Vec<ManufacturerRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter()
            .map(row_to_manufacturer)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_row_error)
    }

    async fn save(&self, entity: &Manufacturer) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(manufacturers::table)
            .values(NewManufacturerRow::from(entity))
            .on_conflict(manufacturers::id)
            .do_update()
            .set(manufacturers::name.eq(excluded(manufacturers::name)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: ManufacturerId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(manufacturers::table.filter(manufacturers::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
