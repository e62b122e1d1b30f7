//! # catalog-core: Pure Business Logic for the Catalog
//!
//! This crate is the **heart** of the catalog. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Collaborators (external)              │   │
//! │  │    Home ──► Product List ──► Add/Edit Form ──► Settings         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-store (stateful layer)                   │   │
//! │  │    add, update, delete, set_current, snapshot pub/sub           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │ validation│  │   error   │   │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │  │  verdicts │   │   │
//! │  │   │   Draft   │  │  parsing  │  │  checks   │  │  messages │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductType, ProductDraft)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Form field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::money::Money;
//! use catalog_core::validation::validate_price;
//!
//! // Parse money from form text (never from floats!)
//! let price = Money::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! // Validate form input before submission
//! assert_eq!(validate_price("10.99"), Ok(Money::from_cents(1099)));
//! assert!(validate_price("-5").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Money` instead of
// `use catalog_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::{Product, ProductDraft, ProductType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum product name length (in characters).
///
/// ## Business Reason
/// Rejects placeholder input like "a" while still allowing short real
/// names ("Cap").
pub const MIN_NAME_CHARS: usize = 3;

/// Maximum product name length (in characters).
///
/// ## Business Reason
/// Keeps names printable on list rows and labels. Can be made
/// configurable in future versions.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum product price.
///
/// ## Business Reason
/// The catalog covers apparel only; anything above 1000.00 is assumed to
/// be a data-entry mistake.
pub const MAX_PRICE: Money = Money::from_cents(100_000);

/// Maximum stock quantity for a single product.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 10).
pub const MAX_QUANTITY: u32 = 1000;
