//! # Validation Module
//!
//! Field-level validation rules for CAS-POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI forms (external)                                          │
//! │  ├── Basic format checks (empty fields, lengths)                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - domain rule validation                         │
//! │  ├── Called by every constructor and validated setter                  │
//! │  └── A failure here means the value is never constructed               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store codec (cas-db)                                         │
//! │  └── Re-runs the same rules on records read back from disk             │
//! │                                                                         │
//! │  Defense in depth: bad rows in a hand-edited stock file are caught     │
//! │  by the same rules as bad form input.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cas_core::validation::{validate_barcode, validate_card_number};
//!
//! validate_barcode(123456).unwrap();
//! validate_card_number("1234567890123456").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_BARCODE, MAX_USER_ID, MIN_BARCODE, MIN_POSTCODE_LEN, MIN_USER_ID};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product bar code.
///
/// ## Rules
/// - Must be a six-digit number: 100000..=999999
pub fn validate_barcode(barcode: u32) -> ValidationResult<()> {
    if !(MIN_BARCODE..=MAX_BARCODE).contains(&barcode) {
        return Err(ValidationError::OutOfRange {
            field: "barcode",
            min: i64::from(MIN_BARCODE),
            max: i64::from(MAX_BARCODE),
        });
    }

    Ok(())
}

/// Validates a product brand. Must be non-empty.
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    require_non_empty("brand", brand)
}

/// Validates a product colour. Must be non-empty.
pub fn validate_colour(colour: &str) -> ValidationResult<()> {
    require_non_empty("colour", colour)
}

/// Validates a price. Zero is allowed (clearance stock); negative is not.
pub fn validate_price(pence: i64) -> ValidationResult<()> {
    if pence < 0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a stock or basket quantity. Must not be negative.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative { field: "quantity" });
    }

    Ok(())
}

/// Validates a mouse button count. Must be strictly positive.
pub fn validate_button_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "button count",
        });
    }

    Ok(())
}

// =============================================================================
// User Validators
// =============================================================================

/// Validates a user id.
///
/// ## Rules
/// - Strictly between 100 and 999 (both bounds exclusive)
pub fn validate_user_id(id: u32) -> ValidationResult<()> {
    if id <= MIN_USER_ID || id >= MAX_USER_ID {
        return Err(ValidationError::OutOfRange {
            field: "id",
            min: i64::from(MIN_USER_ID) + 1,
            max: i64::from(MAX_USER_ID) - 1,
        });
    }

    Ok(())
}

/// Validates a username. Must be non-empty.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    require_non_empty("username", username)
}

/// Validates a surname. Must be non-empty.
pub fn validate_surname(surname: &str) -> ValidationResult<()> {
    require_non_empty("surname", surname)
}

/// Validates a house number. Must be strictly positive.
pub fn validate_house_number(house_number: u32) -> ValidationResult<()> {
    if house_number == 0 {
        return Err(ValidationError::MustBePositive {
            field: "house number",
        });
    }

    Ok(())
}

/// Validates a city. Must be non-empty.
pub fn validate_city(city: &str) -> ValidationResult<()> {
    require_non_empty("city", city)
}

/// Validates a postcode. Must be at least four characters.
pub fn validate_postcode(postcode: &str) -> ValidationResult<()> {
    if postcode.len() < MIN_POSTCODE_LEN {
        return Err(ValidationError::TooShort {
            field: "postcode",
            min: MIN_POSTCODE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Payment Validators
// =============================================================================

/// Validates a credit card number: exactly 16 numeric digits.
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    if card_number.len() != 16 || !card_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number",
            reason: "must be exactly 16 digits",
        });
    }

    Ok(())
}

/// Validates a card security code: exactly 3 numeric digits.
pub fn validate_security_code(security_code: &str) -> ValidationResult<()> {
    if security_code.len() != 3 || !security_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "security code",
            reason: "must be exactly 3 digits",
        });
    }

    Ok(())
}

/// Validates a PayPal account email.
///
/// ## Rules
/// A valid address contains exactly one `@` which does not start the
/// string, and at least one `.` strictly after the character following the
/// `@`, with that `.` not ending the string — e.g. `joe@domain.com`.
///
/// ```text
/// a@b.com   ✓
/// a@@b.com  ✗  two '@'
/// a@b       ✗  no '.' after the domain start
/// a@b.      ✗  '.' is last
/// a@.com    ✗  '.' not strictly after the character following '@'
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: "email",
        reason: "must look like name@domain.tld",
    };

    let Some(at) = email.find('@') else {
        return Err(invalid());
    };

    let valid = at == email.rfind('@').unwrap_or(at)
        && at > 0
        && email.rfind('.').is_some_and(|dot| dot > at + 1)
        && email.rfind('.').is_some_and(|dot| dot + 1 < email.len());

    if valid {
        Ok(())
    } else {
        Err(invalid())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn require_non_empty(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_barcode() {
        assert!(validate_barcode(100_000).is_ok());
        assert!(validate_barcode(999_999).is_ok());
        assert!(validate_barcode(123_456).is_ok());

        assert!(validate_barcode(99_999).is_err());
        assert!(validate_barcode(1_000_000).is_err());
        assert!(validate_barcode(0).is_err());
    }

    #[test]
    fn test_validate_strings_reject_empty() {
        assert!(validate_brand("Logitech").is_ok());
        assert!(validate_brand("").is_err());
        assert!(validate_colour("black").is_ok());
        assert!(validate_colour("").is_err());
        assert!(validate_username("jsmith").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_surname("Smith").is_ok());
        assert!(validate_surname("").is_err());
        assert!(validate_city("Leeds").is_ok());
        assert!(validate_city("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(2499).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(50).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_user_id_bounds_are_exclusive() {
        assert!(validate_user_id(101).is_ok());
        assert!(validate_user_id(998).is_ok());

        assert!(validate_user_id(100).is_err());
        assert!(validate_user_id(999).is_err());
        assert!(validate_user_id(0).is_err());
    }

    #[test]
    fn test_validate_postcode() {
        assert!(validate_postcode("LS29JT").is_ok());
        assert!(validate_postcode("1234").is_ok());
        assert!(validate_postcode("123").is_err());
        assert!(validate_postcode("").is_err());
    }

    #[test]
    fn test_validate_house_number_and_buttons() {
        assert!(validate_house_number(1).is_ok());
        assert!(validate_house_number(0).is_err());
        assert!(validate_button_count(3).is_ok());
        assert!(validate_button_count(0).is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("1234567890123456").is_ok());

        assert!(validate_card_number("123456789012345").is_err()); // 15 digits
        assert!(validate_card_number("12345678901234567").is_err()); // 17 digits
        assert!(validate_card_number("123456789012345a").is_err());
        assert!(validate_card_number("").is_err());
    }

    #[test]
    fn test_validate_security_code() {
        assert!(validate_security_code("123").is_ok());
        assert!(validate_security_code("12").is_err());
        assert!(validate_security_code("1234").is_err());
        assert!(validate_security_code("12a").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("joe@domain.co.uk").is_ok());

        assert!(validate_email("a@@b.com").is_err()); // two '@'
        assert!(validate_email("a@b").is_err()); // no '.' after domain start
        assert!(validate_email("@b.com").is_err()); // '@' at position 0
        assert!(validate_email("a@b.").is_err()); // '.' is last
        assert!(validate_email("a@.com").is_err()); // '.' right after '@'
        assert!(validate_email("ab.com").is_err()); // no '@' at all
    }
}
