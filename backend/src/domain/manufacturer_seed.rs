//! Startup seeding of the default manufacturers.

use tracing::info;

use super::ports::{Repository, RepositoryError};
use super::{Manufacturer, ManufacturerId};

/// Manufacturer codes and names ensured at startup.
pub const DEFAULT_MANUFACTURERS: [(i32, &str); 5] = [
    (100, "Audi"),
    (101, "Chevrolet"),
    (102, "Ford"),
    (103, "BMW"),
    (104, "Dodge"),
];

/// Insert every default manufacturer that is not already stored.
///
/// Existing records are left untouched, even when their name differs.
/// Returns the number of manufacturers inserted.
pub async fn seed_default_manufacturers<R>(repo: &R) -> Result<usize, RepositoryError>
where
    R: Repository<Manufacturer> + ?Sized,
{
    let mut inserted = 0;
    for (raw_id, name) in DEFAULT_MANUFACTURERS {
        let Ok(id) = ManufacturerId::new(raw_id) else {
            continue;
        };
        if repo.find_by_id(id).await?.is_some() {
            continue;
        }
        let Ok(manufacturer) = Manufacturer::new(id, name) else {
            continue;
        };
        repo.save(&manufacturer).await?;
        inserted += 1;
    }
    info!(inserted, "default manufacturers seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::InMemoryRepository;

    #[tokio::test]
    async fn seeds_all_defaults_into_empty_store() {
        let repo = InMemoryRepository::<Manufacturer>::new();

        let inserted = seed_default_manufacturers(&repo).await.expect("seeding");

        assert_eq!(inserted, 5);
        let ford = repo
            .find_by_id(ManufacturerId::new(102).expect("valid id"))
            .await
            .expect("lookup")
            .expect("seeded");
        assert_eq!(ford.name(), "Ford");
    }

    #[tokio::test]
    async fn keeps_existing_records() {
        let id = ManufacturerId::new(100).expect("valid id");
        let custom = Manufacturer::new(id, "Audi AG").expect("valid manufacturer");
        let repo = InMemoryRepository::from_entities([custom.clone()]);

        let inserted = seed_default_manufacturers(&repo).await.expect("seeding");
        let again = seed_default_manufacturers(&repo).await.expect("reseeding");

        assert_eq!(inserted, 4);
        assert_eq!(again, 0);
        assert_eq!(repo.find_by_id(id).await.expect("lookup"), Some(custom));
    }
}
