//! Typed registries layering domain lookups over the generic in-memory list.
//!
//! A registry is a thin wrapper around an [`InMemoryList`] of one model type.
//! It delegates storage to the list and adds the lookups and uniqueness rules
//! the model calls for; nothing here enforces validity on plain `add`, that is
//! what the checked entry points (`can_add`, `try_add`) are for.

use crudkit_core::{entity::Entity, error::StoreResult, store::IndexedStore};
use crudkit_memory::InMemoryList;

use crate::models::{Product, User};

/// Registry of [`User`]s with username/email uniqueness checks.
#[derive(Debug, Default, Clone)]
pub struct UserDirectory {
    users: InMemoryList<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user without any validity or uniqueness checks.
    pub fn add(&self, user: User) -> StoreResult<()> {
        self.users.create(user)
    }

    /// Returns all users in insertion order.
    pub fn all(&self) -> StoreResult<Vec<User>> {
        self.users.read_all()
    }

    /// Number of users in the directory.
    pub fn len(&self) -> StoreResult<usize> {
        self.users.len()
    }

    /// Reports whether the directory is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        self.users.is_empty()
    }

    /// Finds a user by id.
    pub fn find_by_id(&self, id: i32) -> Option<User> {
        self.users.find(|user| user.id == id)
    }

    /// Finds a user by username, case-insensitively.
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .find(|user| user.username.eq_ignore_ascii_case(username))
    }

    /// Finds a user by email, case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Reports whether a username is already taken, case-insensitively.
    pub fn username_exists(&self, username: &str) -> bool {
        self.users
            .any(|user| user.username.eq_ignore_ascii_case(username))
    }

    /// Reports whether an email is already registered, case-insensitively.
    pub fn email_exists(&self, email: &str) -> bool {
        self.users
            .any(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Reports whether a user passes validity and uniqueness checks.
    pub fn can_add(&self, user: &User) -> bool {
        user.is_valid()
            && !self.username_exists(&user.username)
            && !self.email_exists(&user.email)
    }

    /// Adds the user when [`can_add`](Self::can_add) allows it.
    ///
    /// Returns whether the user was added.
    pub fn try_add(&self, user: User) -> StoreResult<bool> {
        if !self.can_add(&user) {
            return Ok(false);
        }
        self.users.create(user)?;
        Ok(true)
    }

    /// Removes the first user with the given id.
    ///
    /// Returns whether a user was removed.
    pub fn remove_by_id(&self, id: i32) -> StoreResult<bool> {
        match self.users.position(|user| user.id == id) {
            Some(index) => {
                self.users.delete(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns only the users passing their own validity rules.
    pub fn valid_users(&self) -> Vec<User> {
        self.users.filter(User::is_valid)
    }
}

/// Registry of [`Product`]s with price and availability lookups.
#[derive(Debug, Default, Clone)]
pub struct ProductCatalog {
    products: InMemoryList<Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product without checks.
    pub fn add(&self, product: Product) -> StoreResult<()> {
        self.products.create(product)
    }

    /// Returns all products in insertion order.
    pub fn all(&self) -> StoreResult<Vec<Product>> {
        self.products.read_all()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> StoreResult<usize> {
        self.products.len()
    }

    /// Reports whether the catalog is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        self.products.is_empty()
    }

    /// Finds a product by id.
    pub fn find_by_id(&self, id: i32) -> Option<Product> {
        self.products.find(|product| product.id == id)
    }

    /// Finds a product by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<Product> {
        self.products
            .find(|product| product.name.eq_ignore_ascii_case(name))
    }

    /// Returns products priced within `[min, max]`, bounds inclusive.
    pub fn in_price_range(&self, min: f64, max: f64) -> Vec<Product> {
        self.products
            .filter(|product| product.price >= min && product.price <= max)
    }

    /// Returns only the products currently available for sale.
    pub fn available(&self) -> Vec<Product> {
        self.products.filter(Product::is_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(1, "alice", "alice@example.com")
    }

    #[test]
    fn test_find_by_username_is_case_insensitive() {
        let directory = UserDirectory::new();
        directory.add(alice()).unwrap();

        assert_eq!(directory.find_by_username("ALICE"), Some(alice()));
        assert!(directory.find_by_username("bob").is_none());
    }

    #[test]
    fn test_find_by_email_is_case_insensitive() {
        let directory = UserDirectory::new();
        directory.add(alice()).unwrap();

        assert_eq!(directory.find_by_email("Alice@Example.COM"), Some(alice()));
    }

    #[test]
    fn test_can_add_rejects_invalid_user() {
        let directory = UserDirectory::new();
        assert!(!directory.can_add(&User::new(0, "zero", "zero@example.com")));
        assert!(!directory.can_add(&User::new(2, "bob", "no-at-sign")));
        assert!(directory.can_add(&alice()));
    }

    #[test]
    fn test_can_add_rejects_taken_username_and_email() {
        let directory = UserDirectory::new();
        directory.add(alice()).unwrap();

        assert!(!directory.can_add(&User::new(2, "ALICE", "other@example.com")));
        assert!(!directory.can_add(&User::new(3, "other", "alice@example.com")));
    }

    #[test]
    fn test_try_add_reports_outcome() {
        let directory = UserDirectory::new();
        assert!(directory.try_add(alice()).unwrap());
        assert!(!directory.try_add(alice()).unwrap());
        assert_eq!(directory.len().unwrap(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let directory = UserDirectory::new();
        directory.add(alice()).unwrap();

        assert!(directory.remove_by_id(1).unwrap());
        assert!(!directory.remove_by_id(1).unwrap());
        assert!(directory.is_empty().unwrap());
    }

    #[test]
    fn test_valid_users_filters_invalid_entries() {
        let directory = UserDirectory::new();
        directory.add(alice()).unwrap();
        directory.add(User::new(0, "ghost", "ghost@example.com")).unwrap();

        assert_eq!(directory.valid_users(), [alice()]);
    }

    #[test]
    fn test_catalog_find_by_name_is_case_insensitive() {
        let catalog = ProductCatalog::new();
        catalog.add(Product::new(1, "Keyboard", 49.99, 5)).unwrap();

        assert!(catalog.find_by_name("keyboard").is_some());
        assert!(catalog.find_by_name("mouse").is_none());
    }

    #[test]
    fn test_catalog_price_range_is_inclusive() {
        let catalog = ProductCatalog::new();
        catalog.add(Product::new(1, "Cable", 10.0, 9)).unwrap();
        catalog.add(Product::new(2, "Keyboard", 50.0, 5)).unwrap();
        catalog.add(Product::new(3, "Monitor", 200.0, 2)).unwrap();

        let in_range = catalog.in_price_range(10.0, 50.0);
        let ids: Vec<i32> = in_range.iter().map(|product| product.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_catalog_available_excludes_out_of_stock() {
        let catalog = ProductCatalog::new();
        catalog.add(Product::new(1, "Cable", 10.0, 9)).unwrap();
        catalog.add(Product::new(2, "Keyboard", 50.0, 0)).unwrap();

        let ids: Vec<i32> = catalog.available().iter().map(|product| product.id).collect();
        assert_eq!(ids, [1]);
    }
}
