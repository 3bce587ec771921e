//! # Payment Processing
//!
//! Validated, immutable payment instructions that apply a purchase
//! against the store.
//!
//! ## Purchase Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Payment::process                                 │
//! │                                                                         │
//! │  1. re-read the stock file (current quantities, not the UI snapshot)    │
//! │  2. look up the product by bar code                                     │
//! │  3. decrement its quantity by the purchased amount                      │
//! │  4. overwrite the stock file                                            │
//! │  5. append a "purchased" activity record with the method label          │
//! │                                                                         │
//! │  Any failure along the way is logged and reported as `false`.           │
//! │  There is NO rollback: a failure after step 4 leaves stock              │
//! │  decremented with no matching log line. Callers must treat false        │
//! │  as "nothing guaranteed".                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cas_core::validation::{validate_card_number, validate_email, validate_security_code};
use cas_core::{ActivityLog, ActivityStatus, CoreResult, Money, Product, User, ValidationError};
use thiserror::Error;
use tracing::error;

use crate::error::StoreError;
use crate::store::Database;

/// Credentials for one of the supported payment methods, validated at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    CreditCard {
        card_number: String,
        security_code: String,
    },
    Paypal {
        email: String,
    },
}

impl PaymentDetails {
    /// Credit card credentials: 16-digit number, 3-digit security code.
    pub fn credit_card(
        card_number: impl Into<String>,
        security_code: impl Into<String>,
    ) -> CoreResult<Self> {
        let card_number = card_number.into();
        let security_code = security_code.into();
        validate_card_number(&card_number)?;
        validate_security_code(&security_code)?;
        Ok(PaymentDetails::CreditCard {
            card_number,
            security_code,
        })
    }

    /// PayPal credentials: a plausibly shaped account email.
    pub fn paypal(email: impl Into<String>) -> CoreResult<Self> {
        let email = email.into();
        validate_email(&email)?;
        Ok(PaymentDetails::Paypal { email })
    }

    /// The human-readable method label used in activity records and
    /// confirmation messages.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentDetails::CreditCard { .. } => "Credit Card",
            PaymentDetails::Paypal { .. } => "PayPal",
        }
    }
}

/// An immutable, validated instruction to purchase a quantity of one
/// product on behalf of a customer.
#[derive(Debug)]
pub struct Payment<'a> {
    db: &'a Database,
    customer: &'a User,
    barcode: u32,
    quantity: i64,
    details: PaymentDetails,
}

impl<'a> Payment<'a> {
    /// Creates a payment for `quantity` units of `item`.
    ///
    /// Fails if the account is not a customer, or if the quantity is
    /// negative or exceeds the item's current stock. The credentials in
    /// `details` were already validated when it was built.
    pub fn new(
        db: &'a Database,
        customer: &'a User,
        item: &Product,
        quantity: i64,
        details: PaymentDetails,
    ) -> CoreResult<Self> {
        if customer.is_admin() {
            return Err(ValidationError::InvalidFormat {
                field: "customer",
                reason: "admin accounts cannot make purchases",
            });
        }
        if quantity < 0 || quantity > item.quantity() {
            return Err(ValidationError::OutOfRange {
                field: "quantity",
                min: 0,
                max: item.quantity(),
            });
        }

        Ok(Payment {
            db,
            customer,
            barcode: item.barcode(),
            quantity,
            details,
        })
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub const fn details(&self) -> &PaymentDetails {
        &self.details
    }

    /// Carries out the purchase.
    ///
    /// Returns `true` on success. Every failure, from I/O to the product
    /// having vanished since the payment was built, is logged and
    /// reported as `false`; partial mutation may have occurred.
    pub fn process(&self) -> bool {
        match self.apply() {
            Ok(()) => true,
            Err(err) => {
                error!(
                    barcode = self.barcode,
                    method = self.details.label(),
                    error = %err,
                    "payment failed"
                );
                false
            }
        }
    }

    fn apply(&self) -> Result<(), ProcessError> {
        let mut products = self.db.products()?;

        let retail_price;
        {
            let product = products
                .get_by_barcode_mut(self.barcode)
                .ok_or(ProcessError::MissingProduct(self.barcode))?;
            // Fails if stock dropped below the purchased amount since
            // this payment was built.
            product.set_quantity(product.quantity() - self.quantity)?;
            retail_price = product.retail_price();
        }

        self.db.write_products(&products)?;
        self.db.write_activity_log(&self.purchase_record(retail_price))
            .map_err(ProcessError::from)
    }

    fn purchase_record(&self, retail_price: Money) -> ActivityLog {
        ActivityLog::with_payment(
            self.customer,
            self.barcode,
            retail_price,
            self.quantity,
            ActivityStatus::Purchased,
            self.details.label(),
        )
    }
}

/// Everything that can go wrong mid-purchase. Never escapes
/// [`Payment::process`]; exists so the failure can be logged with one
/// coherent message.
#[derive(Debug, Error)]
enum ProcessError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("product {0} is no longer stocked")]
    MissingProduct(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const STOCK: &str = "\
123456, keyboard, gaming, Logitech, black, wired, 5, 35.00, 59.99, UK
654321, mouse, ergonomic, Razer, white, wireless, 4, 12.50, 24.99, 7
";

    const ACCOUNTS: &str = "\
101, boss, Adams, 4, NE1 6QG, Newcastle, admin
250, jsmith, Smith, 12, LS1 4PQ, Leeds, customer
";

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("stock.txt"), STOCK).unwrap();
            fs::write(dir.path().join("accounts.txt"), ACCOUNTS).unwrap();
            Fixture { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn open(&self) -> Database {
            Database::open(
                self.path("stock.txt"),
                self.path("accounts.txt"),
                self.path("activity.txt"),
            )
            .unwrap()
        }
    }

    #[test]
    fn test_credit_card_details_validation() {
        assert!(PaymentDetails::credit_card("1234567890123456", "123").is_ok());
        assert!(PaymentDetails::credit_card("123456789012345", "123").is_err()); // 15 digits
        assert!(PaymentDetails::credit_card("123456789012345a", "123").is_err());
        assert!(PaymentDetails::credit_card("1234567890123456", "12").is_err());
        assert!(PaymentDetails::credit_card("1234567890123456", "12a").is_err());
    }

    #[test]
    fn test_paypal_details_validation() {
        assert!(PaymentDetails::paypal("a@b.com").is_ok());
        assert!(PaymentDetails::paypal("a@@b.com").is_err());
        assert!(PaymentDetails::paypal("a@b").is_err());
        assert!(PaymentDetails::paypal("@b.com").is_err());
    }

    #[test]
    fn test_labels() {
        let card = PaymentDetails::credit_card("1234567890123456", "123").unwrap();
        assert_eq!(card.label(), "Credit Card");
        let paypal = PaymentDetails::paypal("a@b.com").unwrap();
        assert_eq!(paypal.label(), "PayPal");
    }

    #[test]
    fn test_new_rejects_bad_quantity_and_admin() {
        let fixture = Fixture::new();
        let db = fixture.open();
        let customer = db.user_by_id(250).unwrap().clone();
        let admin = db.user_by_id(101).unwrap().clone();
        let products = db.products().unwrap();
        let item = products.get_by_barcode(123456).unwrap();
        let details = PaymentDetails::credit_card("1234567890123456", "123").unwrap();

        assert!(Payment::new(&db, &customer, item, 6, details.clone()).is_err()); // stock is 5
        assert!(Payment::new(&db, &customer, item, -1, details.clone()).is_err());
        assert!(Payment::new(&db, &admin, item, 1, details.clone()).is_err());
        assert!(Payment::new(&db, &customer, item, 5, details).is_ok());
    }

    #[test]
    fn test_process_decrements_stock_and_logs() {
        let fixture = Fixture::new();
        let db = fixture.open();
        let customer = db.user_by_id(250).unwrap().clone();
        let products = db.products().unwrap();
        let item = products.get_by_barcode(123456).unwrap();

        let details = PaymentDetails::credit_card("1234567890123456", "123").unwrap();
        let payment = Payment::new(&db, &customer, item, 2, details).unwrap();
        assert!(payment.process());

        // Stock file reflects 5 - 2 = 3.
        let after = db.products().unwrap();
        assert_eq!(after.get_by_barcode(123456).unwrap().quantity(), 3);
        // Untouched product is preserved by the rewrite.
        assert_eq!(after.get_by_barcode(654321).unwrap().quantity(), 4);

        let log = fs::read_to_string(fixture.path("activity.txt")).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("250, LS1 4PQ, 123456, 59.99, 2, purchased, Credit Card, "));
    }

    #[test]
    fn test_process_uses_paypal_label() {
        let fixture = Fixture::new();
        let db = fixture.open();
        let customer = db.user_by_id(250).unwrap().clone();
        let products = db.products().unwrap();
        let item = products.get_by_barcode(654321).unwrap();

        let payment =
            Payment::new(&db, &customer, item, 1, PaymentDetails::paypal("a@b.com").unwrap())
                .unwrap();
        assert!(payment.process());

        let log = fs::read_to_string(fixture.path("activity.txt")).unwrap();
        assert!(log.contains(", purchased, PayPal, "));
    }

    #[test]
    fn test_process_fails_when_product_vanishes() {
        let fixture = Fixture::new();
        let db = fixture.open();
        let customer = db.user_by_id(250).unwrap().clone();
        let products = db.products().unwrap();
        let item = products.get_by_barcode(123456).unwrap().clone();

        let details = PaymentDetails::credit_card("1234567890123456", "123").unwrap();
        let payment = Payment::new(&db, &customer, &item, 1, details).unwrap();

        // Product removed from the file between construction and process.
        fs::write(
            fixture.path("stock.txt"),
            "654321, mouse, ergonomic, Razer, white, wireless, 4, 12.50, 24.99, 7\n",
        )
        .unwrap();

        assert!(!payment.process());
        assert_eq!(fs::read_to_string(fixture.path("activity.txt")).unwrap(), "");
    }

    #[test]
    fn test_process_fails_when_stock_dropped_below_quantity() {
        let fixture = Fixture::new();
        let db = fixture.open();
        let customer = db.user_by_id(250).unwrap().clone();
        let products = db.products().unwrap();
        let item = products.get_by_barcode(123456).unwrap().clone();

        let details = PaymentDetails::credit_card("1234567890123456", "123").unwrap();
        let payment = Payment::new(&db, &customer, &item, 5, details).unwrap();

        // Someone else bought 3 units in the meantime.
        fs::write(
            fixture.path("stock.txt"),
            "123456, keyboard, gaming, Logitech, black, wired, 2, 35.00, 59.99, UK\n",
        )
        .unwrap();

        assert!(!payment.process());
    }
}
