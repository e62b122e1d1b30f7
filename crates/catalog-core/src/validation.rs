//! # Validation Module
//!
//! Form field validation rules for the product catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  Form screen (external collaborator)                                   │
//! │  ├── User edits a field                                                │
//! │  ├── validate_name / validate_price / validate_quantity ◄─ THIS MODULE │
//! │  │        │                                                             │
//! │  │        ├── Err(e) → e.to_string() rendered next to the field        │
//! │  │        └── Ok(..) → field marked clean                              │
//! │  │                                                                     │
//! │  └── Submit button enabled iff parse_draft(..) succeeds                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  store.add(draft) / store.update(draft.into_product(id))               │
//! │                                                                         │
//! │  One canonical rule set. The store trusts validated drafts and does    │
//! │  not re-check fields.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_name, validate_price};
//!
//! assert!(validate_name("Shirt").is_ok());
//! assert!(validate_name("ab").is_err());
//! assert_eq!(
//!     validate_price("-5").unwrap_err().to_string(),
//!     "Price cannot be negative"
//! );
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{ProductDraft, ProductType};
use crate::{MAX_NAME_CHARS, MAX_PRICE, MAX_QUANTITY, MIN_NAME_CHARS};

// Display names leading the rendered messages ("Name is required", ...)
const NAME: &str = "Name";
const PRICE: &str = "Price";
const QUANTITY: &str = "Quantity";

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 3 and 50 characters
///
/// Lengths are counted in characters (`chars().count()`), not bytes, so
/// accented names are measured the way the user sees them. Input is not
/// trimmed; whitespace counts as typed.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required { field: NAME });
    }

    let chars = name.chars().count();
    if chars < MIN_NAME_CHARS {
        return Err(ValidationError::TooShort {
            field: NAME,
            min: MIN_NAME_CHARS,
        });
    }
    if chars > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: NAME,
            max: MAX_NAME_CHARS,
        });
    }

    Ok(())
}

/// Validates a price entered as form text.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal amount (see [`Money::parse`])
/// - Must not be negative
/// - Must not exceed 1000.00
///
/// ## Returns
/// The parsed [`Money`] value, so the submit path never parses twice.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
/// use catalog_core::Money;
///
/// assert_eq!(validate_price("10.99"), Ok(Money::from_cents(1099)));
/// assert!(validate_price("abc").is_err());
/// assert!(validate_price("-5").is_err());
/// ```
pub fn validate_price(price: &str) -> ValidationResult<Money> {
    if price.is_empty() {
        return Err(ValidationError::Required { field: PRICE });
    }

    let amount =
        Money::parse(price).map_err(|_| ValidationError::NotANumber { field: PRICE })?;

    if amount.is_negative() {
        return Err(ValidationError::Negative { field: PRICE });
    }
    if amount > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: PRICE,
            max: MAX_PRICE.major(),
        });
    }

    Ok(amount)
}

/// Validates a quantity entered as form text.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as an integer (no decimals)
/// - Must not be negative
/// - Must not exceed 1000
///
/// ## Returns
/// The parsed count, ready for the draft.
pub fn validate_quantity(quantity: &str) -> ValidationResult<u32> {
    if quantity.is_empty() {
        return Err(ValidationError::Required { field: QUANTITY });
    }

    let count: i64 = quantity
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger { field: QUANTITY })?;

    if count < 0 {
        return Err(ValidationError::Negative { field: QUANTITY });
    }
    if count > MAX_QUANTITY as i64 {
        return Err(ValidationError::TooLarge {
            field: QUANTITY,
            max: MAX_QUANTITY as i64,
        });
    }

    Ok(count as u32)
}

// =============================================================================
// Submission Gate
// =============================================================================

/// Validates all form fields and builds the draft the store accepts.
///
/// All three field rules must pass; the first failure wins, checked in
/// field order (name, price, quantity). This is the single "submittable"
/// gate: the form enables its submit button exactly when this returns
/// `Ok`.
pub fn parse_draft(
    name: &str,
    product_type: ProductType,
    price: &str,
    quantity: &str,
) -> ValidationResult<ProductDraft> {
    validate_name(name)?;
    let price = validate_price(price)?;
    let quantity = validate_quantity(quantity)?;

    Ok(ProductDraft {
        name: name.to_string(),
        product_type,
        price,
        quantity,
    })
}

/// Convenience check for submit-button enablement.
pub fn is_submittable(name: &str, price: &str, quantity: &str) -> bool {
    validate_name(name).is_ok()
        && validate_price(price).is_ok()
        && validate_quantity(quantity).is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
