use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tavern_core::{AggregateId, AggregateRoot, DomainError, DomainResult, Entity, ValueObject};
use tavern_products::Item;

/// Customer identifier (the root person's identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub AggregateId);

impl CustomerId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: the person behind a customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: CustomerId,
    name: String,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Person {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Value object: a monetary exchange between two parties.
///
/// Immutable once created; compared by value, has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    from: AggregateId,
    to: AggregateId,
    amount: f64,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(from: AggregateId, to: AggregateId, amount: f64) -> Self {
        Self {
            from,
            to,
            amount,
            occurred_at: Utc::now(),
        }
    }

    pub fn from(&self) -> AggregateId {
        self.from
    }

    pub fn to(&self) -> AggregateId {
        self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl ValueObject for Transaction {}

/// Aggregate root: Customer.
///
/// Combines the entities needed to represent a customer. The [`Person`] is
/// the root entity, so its identifier is the aggregate identity. A customer
/// can hold many products and perform many transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    person: Person,
    products: Vec<Item>,
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Factory: create a new customer with a fresh identifier.
    ///
    /// The name must be non-empty. All collections start out empty, never
    /// uninitialized.
    pub fn new(name: &str) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }

        Ok(Self {
            person: Person {
                id: CustomerId::new(AggregateId::new()),
                name: name.to_string(),
            },
            products: Vec::new(),
            transactions: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.person.id
    }

    /// The root entity.
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Rename the customer; the same non-empty rule as at creation applies.
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        self.person.name = name.to_string();
        Ok(())
    }

    pub fn products(&self) -> &[Item] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append an item the customer now holds. Insertion order is kept.
    pub fn add_product(&mut self, item: Item) {
        self.products.push(item);
    }

    /// Append a performed transaction. Insertion order is kept.
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.person.id
    }
}
