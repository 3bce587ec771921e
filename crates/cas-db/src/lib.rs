//! # cas-db: Flat-File Store Layer for CAS-POS
//!
//! This crate persists the shop's data in three line-oriented text files
//! and applies purchases against them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CAS-POS Data Flow                                │
//! │                                                                         │
//! │  UI event (admin edits stock, customer checks out)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      cas-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │     codec     │    │   Payment    │  │   │
//! │  │   │  (store.rs)   │◄───│  line parse/  │    │ (payment.rs) │  │   │
//! │  │   │               │    │    format     │    │              │  │   │
//! │  │   │ products()    │    │               │    │ CreditCard   │  │   │
//! │  │   │ users()       │    │ 10-field stock│    │ PayPal       │  │   │
//! │  │   │ activity log  │    │ 7-field user  │    │ process()    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock.txt          user_accounts.txt          activity_log.txt        │
//! │  (read/overwrite)   (read once at open)        (append only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The [`Database`] facade over the three files
//! - [`codec`] - Line-level parsing and formatting
//! - [`payment`] - Credit card and PayPal purchase processing
//! - [`error`] - Store and parse error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cas_db::{Database, Payment, PaymentDetails};
//!
//! let db = Database::open("stock.txt", "user_accounts.txt", "activity_log.txt")?;
//!
//! let inventory = db.products()?;
//! let item = inventory.get_by_barcode(123456).unwrap();
//! let customer = db.user_by_id(250).unwrap();
//!
//! let details = PaymentDetails::credit_card("1234567890123456", "123")?;
//! let paid = Payment::new(&db, customer, item, 2, details)?.process();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod payment;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ParseError, StoreError, StoreResult};
pub use payment::{Payment, PaymentDetails};
pub use store::Database;
