use serde::{Deserialize, Serialize};

use tavern_core::{AggregateId, AggregateRoot, DomainError, DomainResult, Entity};

/// Product identifier (the wrapped item's identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: a sellable item with a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Entity for Item {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Aggregate root: Product.
///
/// Wraps a single [`Item`]; the item's identifier is the aggregate identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    item: Item,
}

impl Product {
    /// Factory: create a new product with a fresh identifier.
    ///
    /// Name and description must be non-empty. Price must be finite and
    /// non-negative (zero is allowed); negative, NaN and infinite prices are
    /// rejected.
    pub fn new(name: &str, description: &str, price: f64) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation(
                "product description must not be empty",
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "product price must be finite and non-negative, got {price}"
            )));
        }

        Ok(Self {
            item: Item {
                id: ProductId::new(AggregateId::new()),
                name: name.to_string(),
                description: description.to_string(),
                price,
            },
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.item.id
    }

    /// The wrapped root entity.
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }

    pub fn price(&self) -> f64 {
        self.item.price
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.item.id
    }
}
