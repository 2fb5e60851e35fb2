use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tavern_core::AggregateRoot;

use super::r#trait::{Repository, RepositoryError};

/// In-memory repository.
///
/// A map from aggregate identity to aggregate value behind one `RwLock`.
/// Mutating operations (`add`, `update`, `delete`) hold the write lock for
/// their entire duration, so at most one of them runs at a time. Reads take
/// the read lock: concurrent with each other, excluded against writers, so a
/// reader never observes a partially-updated map.
///
/// The store owns its values; readers get clones and persist changes by
/// calling `update`.
#[derive(Debug)]
pub struct InMemoryRepository<A: AggregateRoot> {
    records: RwLock<HashMap<A::Id, A>>,
}

impl<A: AggregateRoot> InMemoryRepository<A> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl<A: AggregateRoot> Default for InMemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Repository<A> for InMemoryRepository<A>
where
    A: AggregateRoot + Clone + Send + Sync,
    A::Id: Send + Sync,
{
    fn get_all(&self) -> Result<Vec<A>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;

        Ok(records.values().cloned().collect())
    }

    fn get_by_id(&self, id: &A::Id) -> Result<A, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;

        records.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn add(&self, aggregate: A) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;

        let id = aggregate.id().clone();
        if records.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists);
        }

        records.insert(id, aggregate);
        Ok(())
    }

    fn update(&self, aggregate: A) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;

        let id = aggregate.id().clone();
        if !records.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }

        records.insert(id, aggregate);
        Ok(())
    }

    fn delete(&self, id: &A::Id) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;

        if records.remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tavern_customers::Customer;
    use tavern_products::{Product, ProductId};

    fn beer() -> Product {
        Product::new("Beer", "Good for you're health", 1.99).unwrap()
    }

    #[test]
    fn add_then_get_by_id_returns_equal_value() {
        let repo = InMemoryRepository::<Product>::new();
        let product = beer();

        repo.add(product.clone()).unwrap();

        let stored = repo.get_by_id(product.id()).unwrap();
        assert_eq!(stored, product);
    }

    #[test]
    fn add_twice_fails_and_leaves_store_unchanged() {
        let repo = InMemoryRepository::<Product>::new();
        let product = beer();

        repo.add(product.clone()).unwrap();
        let err = repo.add(product).unwrap_err();

        assert_eq!(err, RepositoryError::AlreadyExists);
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn get_by_id_on_unknown_identifier_fails() {
        let repo = InMemoryRepository::<Product>::new();
        let unknown = ProductId::new(tavern_core::AggregateId::new());

        let err = repo.get_by_id(&unknown).unwrap_err();
        assert_eq!(err, RepositoryError::NotFound);
    }

    #[test]
    fn update_on_absent_identity_fails_without_inserting() {
        let repo = InMemoryRepository::<Product>::new();
        let product = beer();

        let err = repo.update(product).unwrap_err();
        assert_eq!(err, RepositoryError::NotFound);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_the_stored_value_in_full() {
        let repo = InMemoryRepository::<Customer>::new();
        let customer = Customer::new("Percy").unwrap();
        repo.add(customer.clone()).unwrap();

        // Grow the stored state first.
        let mut with_product = repo.get_by_id(customer.id()).unwrap();
        with_product.add_product(beer().item().clone());
        repo.update(with_product).unwrap();
        assert_eq!(repo.get_by_id(customer.id()).unwrap().products().len(), 1);

        // Writing back the original value discards the product list: a
        // replacement, not a merge.
        let mut renamed = customer.clone();
        renamed.set_name("Bolmer").unwrap();
        repo.update(renamed).unwrap();

        let stored = repo.get_by_id(customer.id()).unwrap();
        assert_eq!(stored.name(), "Bolmer");
        assert!(stored.products().is_empty());
    }

    #[test]
    fn mutating_a_returned_clone_does_not_touch_the_store() {
        let repo = InMemoryRepository::<Customer>::new();
        let customer = Customer::new("Percy").unwrap();
        repo.add(customer.clone()).unwrap();

        let mut clone = repo.get_by_id(customer.id()).unwrap();
        clone.add_product(beer().item().clone());

        assert!(repo.get_by_id(customer.id()).unwrap().products().is_empty());
    }

    #[test]
    fn delete_on_absent_identity_fails_and_is_not_idempotent() {
        let repo = InMemoryRepository::<Product>::new();
        let product = beer();
        repo.add(product.clone()).unwrap();

        repo.delete(product.id()).unwrap();
        let err = repo.delete(product.id()).unwrap_err();

        assert_eq!(err, RepositoryError::NotFound);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn add_get_all_delete_scenario() {
        let repo = InMemoryRepository::<Product>::new();
        let product = beer();

        repo.add(product.clone()).unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], product);

        repo.delete(product.id()).unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn concurrent_adds_with_distinct_identifiers_all_land() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 32;

        let repo = InMemoryRepository::<Product>::arc();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        repo.add(beer()).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.get_all().unwrap().len(), THREADS * PER_THREAD);
    }

    #[test]
    fn works_behind_a_trait_object() {
        let repo: Arc<dyn Repository<Product>> = InMemoryRepository::<Product>::arc();
        let product = beer();

        repo.add(product.clone()).unwrap();
        assert_eq!(repo.get_by_id(product.id()).unwrap(), product);
    }
}
