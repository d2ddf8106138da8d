//! Ready-made typed models implementing the [`Entity`] contract.
//!
//! These are small value objects with public fields and advisory validity
//! rules; the registries in [`registry`](crate::registry) build their domain
//! checks on top of them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crudkit_core::entity::Entity;

/// An account holder identified by username and email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> i32 {
        self.id
    }

    /// A user is valid with a positive id, a non-blank username, and a
    /// non-blank email containing `@`.
    fn is_valid(&self) -> bool {
        self.id > 0
            && !self.username.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.email.contains('@')
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.email)
    }
}

/// A sellable item with price and stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// A product is available with a positive price, positive stock, and a
    /// non-blank name.
    pub fn is_available(&self) -> bool {
        self.price > 0.0 && self.stock > 0 && !self.name.trim().is_empty()
    }
}

impl Entity for Product {
    fn id(&self) -> i32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        self.id > 0 && self.is_available()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ${:.2} ({} in stock)",
            self.name, self.price, self.stock
        )
    }
}
