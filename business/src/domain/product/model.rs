use bigdecimal::BigDecimal;
use uuid::Uuid;

/// A product as stored. The `id` is assigned by the repository on save.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub value: BigDecimal,
}

/// A product that passed validation but has no identity yet.
///
/// Only built through [`validate_create`](super::validation::validate_create),
/// so holding one means `name` is not blank.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub(crate) name: String,
    pub(crate) value: BigDecimal,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// Attaches the identifier handed out by the store.
    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            value: self.value,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, value: BigDecimal) -> Self {
        Self { id, name, value }
    }
}
