//! # cas-core: Pure Business Logic for CAS-POS
//!
//! This crate is the **heart** of the computer-accessories shop system.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CAS-POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      UI Layer (external)                        │   │
//! │  │    Admin screens ──► Customer screens ──► Payment dialog        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ cas-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │ inventory │  │  basket   │  │   │
//! │  │   │   user    │  │   Money   │  │ Inventory │  │  Basket   │  │   │
//! │  │   │ activity  │  │  2dp fix  │  │ sort/filt │  │  entries  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     cas-db (Store Layer)                        │   │
//! │  │           stock file, user accounts file, activity log          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Fixed-point monetary type (integer pence, no floats!)
//! - [`product`] - Product and its keyboard/mouse device variants
//! - [`user`] - User accounts with the embedded Address value type
//! - [`inventory`] - Ordered product collection with sort/filter/lookup
//! - [`basket`] - Customer basket with merge-add and stock validation
//! - [`activity`] - Formatted audit records
//! - [`validation`] - Field-level validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output (the one exception is
//!    the creation date captured by an [`activity::ActivityLog`])
//! 2. **No I/O**: file, network, and database access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are pence (i64), never floats
//! 4. **Explicit Errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cas_core::money::Money;
//! use cas_core::product::{Connectivity, KeyboardLayout, KeyboardType, Product};
//!
//! let keyboard = Product::keyboard(
//!     123456,
//!     "Logitech",
//!     "black",
//!     Connectivity::Wired,
//!     KeyboardType::Gaming,
//!     KeyboardLayout::Uk,
//!     "35.00".parse::<Money>().unwrap(),
//!     "59.99".parse::<Money>().unwrap(),
//!     10,
//! )
//! .unwrap();
//!
//! assert_eq!(keyboard.retail_price().to_string(), "59.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod activity;
pub mod basket;
pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cas_core::Money` instead of
// `use cas_core::money::Money`.

pub use activity::{ActivityLog, ActivityStatus};
pub use basket::{Basket, BasketEntry};
pub use error::{CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use product::{
    Connectivity, DeviceKind, KeyboardLayout, KeyboardType, MouseType, Product,
};
pub use user::{Address, Role, User};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest valid product bar code (six digits).
pub const MIN_BARCODE: u32 = 100_000;

/// Largest valid product bar code (six digits).
pub const MAX_BARCODE: u32 = 999_999;

/// User ids must be strictly greater than this bound.
///
/// ## Business Reason
/// Account ids are three-digit codes handed out by the shop; the bounds are
/// exclusive on both sides, matching the account files already in the field.
pub const MIN_USER_ID: u32 = 100;

/// User ids must be strictly less than this bound.
pub const MAX_USER_ID: u32 = 999;

/// Minimum length of a valid postcode.
pub const MIN_POSTCODE_LEN: usize = 4;
