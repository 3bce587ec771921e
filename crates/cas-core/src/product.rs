//! # Product Types
//!
//! The product domain type and its device variants.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Shape                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐                                      │
//! │  │           Product            │                                      │
//! │  │  ──────────────────────────  │    ┌────────────────────────────┐   │
//! │  │  barcode (6-digit, unique)   │    │        DeviceKind          │   │
//! │  │  brand / colour              │    │  ────────────────────────  │   │
//! │  │  connectivity (wired/…less)  │───►│  Keyboard { kind, layout } │   │
//! │  │  original_cost / retail      │    │  Mouse { kind, buttons }   │   │
//! │  │  quantity (mutable, ≥ 0)     │    └────────────────────────────┘   │
//! │  └──────────────────────────────┘                                      │
//! │                                                                         │
//! │  The original system modelled this as an inheritance hierarchy;        │
//! │  here the variant-specific fields are payload of a closed enum.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! Constructors validate eagerly and return `Err` instead of building a
//! half-valid product. Barcode *uniqueness* is not a product concern; it is
//! enforced at [`crate::inventory::Inventory::add`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_barcode, validate_brand, validate_button_count, validate_colour, validate_price,
    validate_quantity,
};

// =============================================================================
// Variant Enums
// =============================================================================

/// Whether a device connects over a cable or wirelessly.
///
/// Stored in the stock file as `wired` / `wireless`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Wired,
    Wireless,
}

impl Connectivity {
    /// The lowercase name used in the stock file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Connectivity::Wired => "wired",
            Connectivity::Wireless => "wireless",
        }
    }
}

impl FromStr for Connectivity {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "wired" => Ok(Connectivity::Wired),
            "wireless" => Ok(Connectivity::Wireless),
            _ => Err(ValidationError::InvalidFormat {
                field: "connectivity",
                reason: "expected wired or wireless",
            }),
        }
    }
}

/// All possible types of keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardType {
    Standard,
    Internet,
    Gaming,
    Flexible,
}

impl KeyboardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyboardType::Standard => "standard",
            KeyboardType::Internet => "internet",
            KeyboardType::Gaming => "gaming",
            KeyboardType::Flexible => "flexible",
        }
    }
}

impl FromStr for KeyboardType {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        // Stock files in the field carry these lowercase; accept any case.
        match text.to_ascii_lowercase().as_str() {
            "standard" => Ok(KeyboardType::Standard),
            "internet" => Ok(KeyboardType::Internet),
            "gaming" => Ok(KeyboardType::Gaming),
            "flexible" => Ok(KeyboardType::Flexible),
            _ => Err(ValidationError::InvalidFormat {
                field: "keyboard type",
                reason: "expected standard, internet, gaming, or flexible",
            }),
        }
    }
}

/// Keyboard layouts carried by the shop.
///
/// The UK layout is the one the inventory filter keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    Uk,
    Us,
    Eu,
}

impl KeyboardLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyboardLayout::Uk => "uk",
            KeyboardLayout::Us => "us",
            KeyboardLayout::Eu => "eu",
        }
    }
}

impl FromStr for KeyboardLayout {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "uk" => Ok(KeyboardLayout::Uk),
            "us" => Ok(KeyboardLayout::Us),
            "eu" => Ok(KeyboardLayout::Eu),
            _ => Err(ValidationError::InvalidFormat {
                field: "keyboard layout",
                reason: "expected uk, us, or eu",
            }),
        }
    }
}

/// All possible types of mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseType {
    Standard,
    Gaming,
    Ergonomic,
}

impl MouseType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MouseType::Standard => "standard",
            MouseType::Gaming => "gaming",
            MouseType::Ergonomic => "ergonomic",
        }
    }
}

impl FromStr for MouseType {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "standard" => Ok(MouseType::Standard),
            "gaming" => Ok(MouseType::Gaming),
            "ergonomic" => Ok(MouseType::Ergonomic),
            _ => Err(ValidationError::InvalidFormat {
                field: "mouse type",
                reason: "expected standard, gaming, or ergonomic",
            }),
        }
    }
}

// =============================================================================
// Device Kind
// =============================================================================

/// The variant-specific payload of a product.
///
/// Maps to the stock file's `deviceClass` field (`keyboard` / `mouse`),
/// with `deviceType` and `additionalInfo` living in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "class")]
pub enum DeviceKind {
    Keyboard {
        kind: KeyboardType,
        layout: KeyboardLayout,
    },
    Mouse {
        kind: MouseType,
        button_count: u32,
    },
}

impl DeviceKind {
    /// The stock-file device class name.
    pub const fn class_name(&self) -> &'static str {
        match self {
            DeviceKind::Keyboard { .. } => "keyboard",
            DeviceKind::Mouse { .. } => "mouse",
        }
    }

    /// True for keyboards with the UK layout. Mice have no layout and so
    /// never satisfy this.
    pub const fn is_uk_keyboard(&self) -> bool {
        matches!(
            self,
            DeviceKind::Keyboard {
                layout: KeyboardLayout::Uk,
                ..
            }
        )
    }
}

// =============================================================================
// Product
// =============================================================================

/// An item of stock: a keyboard or a mouse.
///
/// All fields except `quantity` are immutable after construction; the
/// quantity changes as stock is sold and is re-validated by
/// [`Product::set_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    barcode: u32,
    brand: String,
    colour: String,
    connectivity: Connectivity,
    original_cost: Money,
    retail_price: Money,
    quantity: i64,
    device: DeviceKind,
}

impl Product {
    /// Creates a keyboard product, validating every argument.
    #[allow(clippy::too_many_arguments)]
    pub fn keyboard(
        barcode: u32,
        brand: impl Into<String>,
        colour: impl Into<String>,
        connectivity: Connectivity,
        kind: KeyboardType,
        layout: KeyboardLayout,
        original_cost: Money,
        retail_price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        Product::new(
            barcode,
            brand.into(),
            colour.into(),
            connectivity,
            original_cost,
            retail_price,
            quantity,
            DeviceKind::Keyboard { kind, layout },
        )
    }

    /// Creates a mouse product, validating every argument.
    #[allow(clippy::too_many_arguments)]
    pub fn mouse(
        barcode: u32,
        brand: impl Into<String>,
        colour: impl Into<String>,
        connectivity: Connectivity,
        kind: MouseType,
        button_count: u32,
        original_cost: Money,
        retail_price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        validate_button_count(button_count)?;
        Product::new(
            barcode,
            brand.into(),
            colour.into(),
            connectivity,
            original_cost,
            retail_price,
            quantity,
            DeviceKind::Mouse { kind, button_count },
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        barcode: u32,
        brand: String,
        colour: String,
        connectivity: Connectivity,
        original_cost: Money,
        retail_price: Money,
        quantity: i64,
        device: DeviceKind,
    ) -> CoreResult<Self> {
        validate_barcode(barcode)?;
        validate_brand(&brand)?;
        validate_colour(&colour)?;
        validate_price(original_cost.pence())?;
        validate_price(retail_price.pence())?;
        validate_quantity(quantity)?;

        Ok(Product {
            barcode,
            brand,
            colour,
            connectivity,
            original_cost,
            retail_price,
            quantity,
            device,
        })
    }

    // Getters.

    /// The product's six-digit bar code.
    #[inline]
    pub const fn barcode(&self) -> u32 {
        self.barcode
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    #[inline]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub const fn is_wired(&self) -> bool {
        matches!(self.connectivity, Connectivity::Wired)
    }

    /// The price at which the product was bought (admin-only information).
    #[inline]
    pub const fn original_cost(&self) -> Money {
        self.original_cost
    }

    /// The price at which the product is sold.
    #[inline]
    pub const fn retail_price(&self) -> Money {
        self.retail_price
    }

    /// The quantity of this product in stock.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub const fn device(&self) -> &DeviceKind {
        &self.device
    }

    /// Updates the stock quantity, re-validating the new value.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Renders a human-readable description of the product.
    ///
    /// The admin and customer views differ only in `show_original_cost`:
    /// the admin view includes the purchase cost, the customer view omits
    /// it. Field order follows the original per-variant renderings.
    pub fn describe(&self, show_original_cost: bool) -> String {
        let mut out = format!(
            "Bar code: {}, Brand: {}, Colour: {}, Connection: {}, ",
            self.barcode,
            self.brand,
            self.colour,
            self.connectivity.as_str()
        );

        match &self.device {
            DeviceKind::Keyboard { kind, layout } => {
                out.push_str(&format!(
                    "Type: {}, Layout: {}, ",
                    kind.as_str(),
                    layout.as_str().to_uppercase()
                ));
                if show_original_cost {
                    out.push_str(&format!("Original Cost: {}, ", self.original_cost));
                }
            }
            DeviceKind::Mouse { kind, button_count } => {
                if show_original_cost {
                    out.push_str(&format!("Original Cost: {}, ", self.original_cost));
                }
                out.push_str(&format!(
                    "Type: {}, Button Count: {}, ",
                    kind.as_str(),
                    button_count
                ));
            }
        }

        out.push_str(&format!(
            "Retail Price: {}, Quantity: {}",
            self.retail_price, self.quantity
        ));
        out
    }
}

/// The customer-facing description (original cost omitted).
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(false))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> Product {
        Product::keyboard(
            123456,
            "Logitech",
            "black",
            Connectivity::Wired,
            KeyboardType::Gaming,
            KeyboardLayout::Uk,
            Money::from_pence(3500),
            Money::from_pence(5999),
            10,
        )
        .unwrap()
    }

    fn mouse() -> Product {
        Product::mouse(
            654321,
            "Razer",
            "white",
            Connectivity::Wireless,
            MouseType::Ergonomic,
            5,
            Money::from_pence(1200),
            Money::from_pence(2499),
            4,
        )
        .unwrap()
    }

    #[test]
    fn test_accessors_return_constructed_values() {
        let p = keyboard();
        assert_eq!(p.barcode(), 123456);
        assert_eq!(p.brand(), "Logitech");
        assert_eq!(p.colour(), "black");
        assert!(p.is_wired());
        assert_eq!(p.original_cost(), Money::from_pence(3500));
        assert_eq!(p.retail_price(), Money::from_pence(5999));
        assert_eq!(p.quantity(), 10);
        assert!(p.device().is_uk_keyboard());
    }

    #[test]
    fn test_construction_rejects_invalid_arguments() {
        let attempt = |barcode, brand: &str, colour: &str, cost, retail, qty| {
            Product::keyboard(
                barcode,
                brand,
                colour,
                Connectivity::Wired,
                KeyboardType::Standard,
                KeyboardLayout::Uk,
                Money::from_pence(cost),
                Money::from_pence(retail),
                qty,
            )
        };

        assert!(attempt(99_999, "A", "black", 100, 200, 1).is_err());
        assert!(attempt(1_000_000, "A", "black", 100, 200, 1).is_err());
        assert!(attempt(123456, "", "black", 100, 200, 1).is_err());
        assert!(attempt(123456, "A", "", 100, 200, 1).is_err());
        assert!(attempt(123456, "A", "black", -1, 200, 1).is_err());
        assert!(attempt(123456, "A", "black", 100, -1, 1).is_err());
        assert!(attempt(123456, "A", "black", 100, 200, -1).is_err());
    }

    #[test]
    fn test_mouse_requires_positive_button_count() {
        let result = Product::mouse(
            654321,
            "Razer",
            "white",
            Connectivity::Wireless,
            MouseType::Standard,
            0,
            Money::from_pence(1200),
            Money::from_pence(2499),
            4,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_set_quantity_revalidates() {
        let mut p = keyboard();
        p.set_quantity(3).unwrap();
        assert_eq!(p.quantity(), 3);
        assert!(p.set_quantity(-1).is_err());
        assert_eq!(p.quantity(), 3); // unchanged after failed set
    }

    #[test]
    fn test_describe_keyboard() {
        let p = keyboard();
        assert_eq!(
            p.describe(false),
            "Bar code: 123456, Brand: Logitech, Colour: black, Connection: wired, \
             Type: gaming, Layout: UK, Retail Price: 59.99, Quantity: 10"
        );
        assert_eq!(
            p.describe(true),
            "Bar code: 123456, Brand: Logitech, Colour: black, Connection: wired, \
             Type: gaming, Layout: UK, Original Cost: 35.00, Retail Price: 59.99, Quantity: 10"
        );
    }

    #[test]
    fn test_describe_mouse_places_cost_before_type() {
        let p = mouse();
        assert_eq!(
            p.describe(true),
            "Bar code: 654321, Brand: Razer, Colour: white, Connection: wireless, \
             Original Cost: 12.00, Type: ergonomic, Button Count: 5, \
             Retail Price: 24.99, Quantity: 4"
        );
    }

    #[test]
    fn test_display_matches_customer_view() {
        let p = mouse();
        assert_eq!(p.to_string(), p.describe(false));
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!("wired".parse::<Connectivity>().unwrap(), Connectivity::Wired);
        assert_eq!("GAMING".parse::<KeyboardType>().unwrap(), KeyboardType::Gaming);
        assert_eq!("uk".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Uk);
        assert_eq!("ergonomic".parse::<MouseType>().unwrap(), MouseType::Ergonomic);

        assert!("bluetooth".parse::<Connectivity>().is_err());
        assert!("mechanical".parse::<KeyboardType>().is_err());
        assert!("jp".parse::<KeyboardLayout>().is_err());
        assert!("trackball".parse::<MouseType>().is_err());
    }

    #[test]
    fn test_serializes_with_lowercase_tags() {
        let p = mouse();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["device"]["class"], "mouse");
        assert_eq!(json["device"]["kind"], "ergonomic");
        assert_eq!(json["connectivity"], "wireless");
    }
}
