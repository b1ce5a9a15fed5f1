/*
 * Responsibility
 * - products の CRUD (in-memory)
 * - id 採番はロック内で行い、削除後も再利用しない
 */
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: Option<String>,
}

/// Validated input for `create` / `update`. Constructed by the DTO layer,
/// never directly from a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Default)]
struct Shelf {
    // Pre-incremented under the write lock; deletes never hand an id back.
    next_id: i64,
    items: BTreeMap<i64, Product>,
}

/// The authoritative product collection.
///
/// One `RwLock` covers both the map and the id counter, so concurrent
/// requests on the multi-threaded runtime cannot race an allocation against
/// an insert or observe a half-applied update.
#[derive(Debug, Default)]
pub struct ProductStore {
    shelf: RwLock<Shelf>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.shelf.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.shelf.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All products, ascending by id. Empty store is not an error.
    pub fn list(&self) -> Vec<Product> {
        self.read().items.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.read().items.get(&id).cloned()
    }

    pub fn create(&self, fields: ProductFields) -> Product {
        let mut shelf = self.write();
        shelf.next_id += 1;

        let product = Product {
            id: shelf.next_id,
            name: fields.name,
            maker: fields.maker,
            price: fields.price,
            image_url: fields.image_url,
        };
        shelf.items.insert(product.id, product.clone());

        product
    }

    /// Replace every mutable field of an existing product.
    pub fn update(&self, id: i64, fields: ProductFields) -> Option<Product> {
        let mut shelf = self.write();
        let product = shelf.items.get_mut(&id)?;

        product.name = fields.name;
        product.maker = fields.maker;
        product.price = fields.price;
        product.image_url = fields.image_url;

        Some(product.clone())
    }

    pub fn delete(&self, id: i64) -> bool {
        self.write().items.remove(&id).is_some()
    }
}
