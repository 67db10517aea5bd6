//! Generic repository port shared by every persisted entity.
//!
//! Adapters implement four primitives: lookup by key, keyset paging, upsert
//! and delete. [`RepositoryExt::find_all`] builds a lazy, restartable stream
//! over the paging primitive, so neither adapters nor test doubles need to
//! implement it.

use std::fmt;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt, TryStreamExt};

use super::define_port_error;

/// Page size used by [`RepositoryExt::find_all`].
pub const DEFAULT_PAGE_SIZE: usize = 100;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A referential or check constraint rejected the mutation.
        Constraint { message: String } => "repository constraint violated: {message}",
    }
}

/// A persisted record identified by a unique key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifying key; ordering defines the `find_all` traversal order.
    type Key: Copy + Ord + Send + Sync + fmt::Debug + fmt::Display + 'static;

    /// Key of this record.
    fn key(&self) -> Self::Key;
}

/// Stream of entities produced by [`RepositoryExt::find_all`].
pub type EntityStream<'a, E> = BoxStream<'a, Result<E, RepositoryError>>;

/// Key-based CRUD over one entity type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetch a record by key. An absent key yields `Ok(None)`.
    async fn find_by_id(&self, id: E::Key) -> Result<Option<E>, RepositoryError>;

    /// Fetch up to `limit` records with keys strictly greater than `after`,
    /// in ascending key order.
    async fn find_page(
        &self,
        after: Option<E::Key>,
        limit: usize,
    ) -> Result<Vec<E>, RepositoryError>;

    /// Insert the record, or replace the stored record with the same key.
    async fn save(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Remove the record with `id`, reporting whether one existed.
    async fn delete_by_id(&self, id: E::Key) -> Result<bool, RepositoryError>;
}

/// Operations derived from the [`Repository`] primitives.
pub trait RepositoryExt<E: Entity>: Repository<E> {
    /// Stream every record in ascending key order.
    ///
    /// The stream is lazy: pages are fetched as it is polled. Calling
    /// `find_all` again starts a fresh traversal.
    fn find_all(&self) -> EntityStream<'_, E> {
        self.find_all_paged(DEFAULT_PAGE_SIZE)
    }

    /// Stream every record, fetching `page_size` records per round trip.
    fn find_all_paged(&self, page_size: usize) -> EntityStream<'_, E>;
}

impl<E, R> RepositoryExt<E> for R
where
    E: Entity,
    R: Repository<E> + ?Sized,
{
    fn find_all_paged(&self, page_size: usize) -> EntityStream<'_, E> {
        let page_size = page_size.max(1);
        // `None` marks an exhausted traversal; `Some(after)` is the next cursor.
        let start: Option<Option<E::Key>> = Some(None);
        stream::try_unfold(start, move |cursor| async move {
            let Some(after) = cursor else {
                return Ok(None);
            };
            let page = self.find_page(after, page_size).await?;
            let next = if page.len() < page_size {
                None
            } else {
                page.last().map(|entity| Some(entity.key()))
            };
            let items = stream::iter(page.into_iter().map(Ok::<E, RepositoryError>));
            Ok::<_, RepositoryError>(Some((items, next)))
        })
        .try_flatten()
        .boxed()
    }
}
