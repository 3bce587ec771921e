//! # Line Codec
//!
//! Parsing and formatting of the comma-space-separated records used by
//! the stock and user-accounts stores.
//!
//! ## Record Shapes
//! ```text
//! stock (10 fields):
//!   barcode, deviceClass, deviceType, brand, colour, connectivity,
//!   quantity, originalCost, retailPrice, additionalInfo
//!
//!   deviceClass ∈ {keyboard, mouse}
//!   additionalInfo = keyboard layout ("UK") or mouse button count ("5")
//!
//! user accounts (7 fields):
//!   id, username, surname, houseNumber, postcode, city, role
//!
//!   role ∈ {admin, customer}
//! ```
//!
//! Device types are written lowercase but parsed case-insensitively;
//! keyboard layouts are written uppercase. Device class, connectivity,
//! and role match exactly — the files are machine-written, so anything
//! else is a malformed record.

use std::fmt::Write as _;

use cas_core::product::{Connectivity, DeviceKind, KeyboardLayout, KeyboardType, MouseType};
use cas_core::{ActivityLog, Money, Product, User};

use crate::error::ParseError;

/// Field separator used by every store.
pub const FIELD_SEPARATOR: &str = ", ";

const STOCK_FIELDS: usize = 10;
const USER_FIELDS: usize = 7;

// ===== Stock lines =====

/// Parses one stock line into a [`Product`].
pub fn parse_product_line(line: &str) -> Result<Product, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != STOCK_FIELDS {
        return Err(ParseError::FieldCount {
            expected: STOCK_FIELDS,
            found: fields.len(),
        });
    }

    let barcode = parse_number::<u32>("barcode", fields[0])?;
    let brand = fields[3];
    let colour = fields[4];
    let connectivity: Connectivity = fields[5].parse()?;
    let quantity = parse_number::<i64>("quantity", fields[6])?;
    let original_cost: Money = fields[7].parse()?;
    let retail_price: Money = fields[8].parse()?;

    let product = match fields[1] {
        "keyboard" => {
            let kind: KeyboardType = fields[2].parse()?;
            let layout: KeyboardLayout = fields[9].parse()?;
            Product::keyboard(
                barcode,
                brand,
                colour,
                connectivity,
                kind,
                layout,
                original_cost,
                retail_price,
                quantity,
            )?
        }
        "mouse" => {
            let kind: MouseType = fields[2].parse()?;
            let button_count = parse_number::<u32>("button count", fields[9])?;
            Product::mouse(
                barcode,
                brand,
                colour,
                connectivity,
                kind,
                button_count,
                original_cost,
                retail_price,
                quantity,
            )?
        }
        other => return Err(ParseError::UnknownDeviceClass(other.to_owned())),
    };

    Ok(product)
}

/// Formats a [`Product`] as one stock line, without a trailing newline.
pub fn format_product_line(product: &Product) -> String {
    let mut line = String::new();

    let (device_type, additional_info) = match product.device() {
        DeviceKind::Keyboard { kind, layout } => {
            (kind.as_str().to_owned(), layout.as_str().to_uppercase())
        }
        DeviceKind::Mouse { kind, button_count } => {
            (kind.as_str().to_owned(), button_count.to_string())
        }
    };

    // Infallible: writing to a String cannot fail.
    let _ = write!(
        line,
        "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
        product.barcode(),
        product.device().class_name(),
        device_type,
        product.brand(),
        product.colour(),
        product.connectivity().as_str(),
        product.quantity(),
        product.original_cost(),
        product.retail_price(),
        additional_info,
    );

    line
}

// ===== User-account lines =====

/// Parses one user-accounts line into a [`User`].
pub fn parse_user_line(line: &str) -> Result<User, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != USER_FIELDS {
        return Err(ParseError::FieldCount {
            expected: USER_FIELDS,
            found: fields.len(),
        });
    }

    let id = parse_number::<u32>("id", fields[0])?;
    let username = fields[1];
    let surname = fields[2];
    let house_number = parse_number::<u32>("house number", fields[3])?;
    let postcode = fields[4];
    let city = fields[5];

    let user = match fields[6] {
        "admin" => User::admin(id, username, surname, house_number, city, postcode)?,
        "customer" => User::customer(id, username, surname, house_number, city, postcode)?,
        other => return Err(ParseError::UnknownRole(other.to_owned())),
    };

    Ok(user)
}

/// Formats a [`User`] as one user-accounts line, without a trailing newline.
pub fn format_user_line(user: &User) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}, {}",
        user.id(),
        user.username(),
        user.surname(),
        user.address().house_number(),
        user.address().postcode(),
        user.address().city(),
        user.role().as_str(),
    )
}

// ===== Activity-log lines =====

/// Formats an [`ActivityLog`] as one log line, without a trailing newline.
///
/// Log records are formatted at creation time, so this is a straight
/// pass-through kept here so every store shape has its codec entry point.
pub fn format_activity_line(log: &ActivityLog) -> String {
    log.as_line().to_owned()
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::NotANumber {
        field,
        value: value.to_owned(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const KEYBOARD_LINE: &str =
        "123456, keyboard, gaming, Logitech, black, wired, 10, 35.00, 59.99, UK";
    const MOUSE_LINE: &str =
        "654321, mouse, ergonomic, Razer, white, wireless, 4, 12.50, 24.99, 7";

    #[test]
    fn test_parse_keyboard_line() {
        let product = parse_product_line(KEYBOARD_LINE).unwrap();

        assert_eq!(product.barcode(), 123456);
        assert_eq!(product.brand(), "Logitech");
        assert_eq!(product.colour(), "black");
        assert_eq!(product.connectivity(), Connectivity::Wired);
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.original_cost(), Money::from_pence(3500));
        assert_eq!(product.retail_price(), Money::from_pence(5999));
        assert!(matches!(
            product.device(),
            DeviceKind::Keyboard {
                kind: KeyboardType::Gaming,
                layout: KeyboardLayout::Uk,
            }
        ));
    }

    #[test]
    fn test_parse_mouse_line() {
        let product = parse_product_line(MOUSE_LINE).unwrap();

        assert_eq!(product.barcode(), 654321);
        assert_eq!(product.connectivity(), Connectivity::Wireless);
        assert!(matches!(
            product.device(),
            DeviceKind::Mouse {
                kind: MouseType::Ergonomic,
                button_count: 7,
            }
        ));
    }

    #[test]
    fn test_device_type_and_layout_parse_any_case() {
        let line = "123456, keyboard, GAMING, Logitech, black, wired, 10, 35.00, 59.99, uk";
        let product = parse_product_line(line).unwrap();
        assert!(product.device().is_uk_keyboard());
    }

    #[test]
    fn test_product_line_round_trip() {
        for line in [KEYBOARD_LINE, MOUSE_LINE] {
            let product = parse_product_line(line).unwrap();
            assert_eq!(format_product_line(&product), line);
        }
    }

    #[test]
    fn test_product_line_wrong_field_count() {
        let err = parse_product_line("123456, keyboard, gaming").unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldCount {
                expected: 10,
                found: 3,
            }
        );
    }

    #[test]
    fn test_product_line_bad_number() {
        let line = "12x456, keyboard, gaming, Logitech, black, wired, 10, 35.00, 59.99, UK";
        assert!(matches!(
            parse_product_line(line).unwrap_err(),
            ParseError::NotANumber {
                field: "barcode",
                ..
            }
        ));
    }

    #[test]
    fn test_product_line_unknown_device_class() {
        let line = "123456, webcam, gaming, Logitech, black, wired, 10, 35.00, 59.99, UK";
        assert_eq!(
            parse_product_line(line).unwrap_err(),
            ParseError::UnknownDeviceClass("webcam".to_owned())
        );
    }

    #[test]
    fn test_product_line_out_of_range_barcode_fails_validation() {
        let line = "99999, mouse, standard, Razer, white, wireless, 4, 12.50, 24.99, 3";
        assert!(matches!(
            parse_product_line(line).unwrap_err(),
            ParseError::Validation(_)
        ));
    }

    #[test]
    fn test_parse_user_lines() {
        let admin = parse_user_line("101, boss, Adams, 4, NE1 6QG, Newcastle, admin").unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.id(), 101);
        assert_eq!(admin.postcode(), "NE1 6QG");
        assert_eq!(admin.address().city(), "Newcastle");

        let customer =
            parse_user_line("250, jsmith, Smith, 12, LS1 4PQ, Leeds, customer").unwrap();
        assert!(!customer.is_admin());
        assert!(customer.basket().is_some_and(|b| b.is_empty()));
    }

    #[test]
    fn test_user_line_round_trip() {
        let line = "250, jsmith, Smith, 12, LS1 4PQ, Leeds, customer";
        let user = parse_user_line(line).unwrap();
        assert_eq!(format_user_line(&user), line);
    }

    #[test]
    fn test_user_line_unknown_role() {
        // Roles match exactly; "Admin" is a malformed record.
        let err = parse_user_line("101, boss, Adams, 4, NE1 6QG, Newcastle, Admin").unwrap_err();
        assert_eq!(err, ParseError::UnknownRole("Admin".to_owned()));
    }

    #[test]
    fn test_user_line_wrong_field_count() {
        let err = parse_user_line("101, boss, Adams").unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldCount {
                expected: 7,
                found: 3,
            }
        );
    }
}
