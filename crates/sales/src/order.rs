use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use tavern_core::DomainError;
use tavern_customers::{Customer, CustomerId, Transaction};
use tavern_infra::{InMemoryRepository, Repository, RepositoryError};
use tavern_products::{Product, ProductId};

/// Order workflow error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The service was built without a required dependency.
    #[error("service misconfigured: {0}")]
    Configuration(&'static str),

    /// A repository call failed (customer or product lookup, write-back).
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A domain rule was violated while assembling the order.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Builder for [`OrderService`].
///
/// Dependencies are named optional fields; `build` validates that every
/// required one is set and aborts on the first missing dependency. The
/// `with_memory_*` variants are conveniences for tests and local runs.
#[derive(Default)]
pub struct OrderServiceBuilder {
    customers: Option<Arc<dyn Repository<Customer>>>,
    products: Option<Arc<dyn Repository<Product>>>,
}

impl OrderServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given customer repository.
    pub fn with_customer_repository(mut self, repo: Arc<dyn Repository<Customer>>) -> Self {
        self.customers = Some(repo);
        self
    }

    /// Use a fresh in-memory customer repository.
    pub fn with_memory_customer_repository(self) -> Self {
        self.with_customer_repository(InMemoryRepository::<Customer>::arc())
    }

    /// Use the given product repository.
    pub fn with_product_repository(mut self, repo: Arc<dyn Repository<Product>>) -> Self {
        self.products = Some(repo);
        self
    }

    /// Use a fresh in-memory product repository.
    pub fn with_memory_product_repository(self) -> Self {
        self.with_product_repository(InMemoryRepository::<Product>::arc())
    }

    /// Validate the configuration and assemble the service.
    pub fn build(self) -> Result<OrderService, OrderError> {
        let customers = self
            .customers
            .ok_or(OrderError::Configuration("customer repository is not set"))?;
        let products = self
            .products
            .ok_or(OrderError::Configuration("product repository is not set"))?;

        Ok(OrderService {
            customers,
            products,
        })
    }
}

/// Service orchestrating order creation across customers and products.
///
/// Each repository call is atomic only with respect to its own store; a
/// workflow spanning both stores has no combined atomicity guarantee.
pub struct OrderService {
    customers: Arc<dyn Repository<Customer>>,
    products: Arc<dyn Repository<Product>>,
}

impl OrderService {
    pub fn builder() -> OrderServiceBuilder {
        OrderServiceBuilder::new()
    }

    /// Create an order: the customer buys the given products.
    ///
    /// Fetches the customer (failing fast with the repository's error if
    /// absent), fetches each product, hands the items to the customer,
    /// records one transaction per product and writes the customer back.
    /// Returns the order total.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<f64, OrderError> {
        let mut customer = self.customers.get_by_id(&customer_id)?;

        let mut total = 0.0;
        for product_id in product_ids {
            let product = self.products.get_by_id(product_id)?;
            debug!(%product_id, price = product.price(), "adding product to order");

            total += product.price();
            customer.record_transaction(Transaction::new(
                customer_id.0,
                product_id.0,
                product.price(),
            ));
            customer.add_product(product.item().clone());
        }

        self.customers.update(customer)?;

        info!(%customer_id, products = product_ids.len(), total, "order created");
        Ok(total)
    }
}
