//! # Domain Types
//!
//! Core domain types for the product catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │  ProductType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  name           │   │  TShirt         │       │
//! │  │  name           │   │  product_type   │   │  Cap            │       │
//! │  │  product_type   │   │  price          │   │  Sweatshirt     │       │
//! │  │  price (Money)  │   │  quantity       │   └─────────────────┘       │
//! │  │  quantity       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Draft = what the form submits. Product = draft + store-assigned id.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned exclusively by the store on creation and never changes
//! afterwards. Callers never pick ids; the form submits a [`ProductDraft`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product Type
// =============================================================================

/// The closed set of product categories the catalog carries.
///
/// Every consumption site matches exhaustively; adding a category is a
/// compile-time visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    TShirt,
    Cap,
    Sweatshirt,
}

impl ProductType {
    /// All categories, in form-picker display order.
    pub const ALL: [ProductType; 3] = [
        ProductType::TShirt,
        ProductType::Cap,
        ProductType::Sweatshirt,
    ];

    /// Human-readable label for list rows and the form picker.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductType::TShirt => "T-Shirt",
            ProductType::Cap => "Cap",
            ProductType::Sweatshirt => "Sweatshirt",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store on creation.
    /// Strictly positive and immutable for the product's lifetime.
    pub id: u32,

    /// Display name shown on list rows.
    pub name: String,

    /// Category from the closed [`ProductType`] set.
    pub product_type: ProductType,

    /// Unit price in cents (never negative once validated).
    pub price: Money,

    /// Stock on hand.
    pub quantity: u32,
}

impl Product {
    /// Total value of the stock on hand (unit price × quantity).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price * self.quantity
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The id-less field set submitted by the add/edit form.
///
/// ## Why a Separate Type?
/// The store is the only id authority. Accepting a full `Product` on
/// `add` would invite callers to fabricate ids; a draft makes that
/// impossible at the type level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub product_type: ProductType,
    pub price: Money,
    pub quantity: u32,
}

impl ProductDraft {
    /// Materializes a [`Product`] with the id the store assigned.
    pub fn into_product(self, id: u32) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_labels() {
        assert_eq!(ProductType::TShirt.label(), "T-Shirt");
        assert_eq!(ProductType::Cap.label(), "Cap");
        assert_eq!(ProductType::Sweatshirt.label(), "Sweatshirt");
        assert_eq!(ProductType::Cap.to_string(), "Cap");
    }

    #[test]
    fn test_product_type_all_is_exhaustive() {
        // One entry per variant, no duplicates
        assert_eq!(ProductType::ALL.len(), 3);
        for ty in ProductType::ALL {
            assert_eq!(ProductType::ALL.iter().filter(|t| **t == ty).count(), 1);
        }
    }

    #[test]
    fn test_draft_into_product() {
        let draft = ProductDraft {
            name: "Tee".to_string(),
            product_type: ProductType::TShirt,
            price: Money::from_cents(1000),
            quantity: 5,
        };

        let product = draft.into_product(1);
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Tee");
        assert_eq!(product.product_type, ProductType::TShirt);
        assert_eq!(product.price.cents(), 1000);
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_stock_value() {
        let product = Product {
            id: 1,
            name: "Cap".to_string(),
            product_type: ProductType::Cap,
            price: Money::from_cents(1250),
            quantity: 4,
        };
        assert_eq!(product.stock_value().cents(), 5000);
    }

    #[test]
    fn test_product_json_wire_shape() {
        let product = Product {
            id: 7,
            name: "Hoodie".to_string(),
            product_type: ProductType::Sweatshirt,
            price: Money::from_cents(3999),
            quantity: 2,
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"product_type\":\"sweatshirt\""));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
