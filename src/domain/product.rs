use crate::store_actor::Entity;

/// A catalog item. Immutable once listed; the catalog offers no edit or
/// delete, so a product lives for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price as a currency-agnostic integer (NTD in presentation).
    pub price: u32,
    /// Display reference: a URI for seed data, a session-local handle for
    /// admin uploads.
    pub image: String,
    pub category: String,
    pub description: String,
}

/// Admin-supplied fields for a new product. The catalog mints the id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: u32,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl Product {
    pub fn from_draft(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            image: draft.image,
            category: draft.category,
            description: draft.description,
        }
    }
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}
