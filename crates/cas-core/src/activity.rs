//! # Activity Log
//!
//! Audit-trail records for basket checkouts, cancellations, and saves.
//! A record is formatted at creation time and never parsed back — the
//! log file is write-only as far as the application is concerned.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::user::User;

/// What happened to the basket entry being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Entry was paid for and stock was decremented.
    Purchased,
    /// Entry was discarded without purchase.
    Cancelled,
    /// Basket was kept for later in the running session.
    Saved,
}

impl ActivityStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Purchased => "purchased",
            ActivityStatus::Cancelled => "cancelled",
            ActivityStatus::Saved => "saved",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the activity log, pre-formatted and immutable.
///
/// ## Line shape
/// ```text
/// <user id>, <postcode>, <barcode>, <retail price>, <quantity>, <status>[, <payment label>], <dd-mm-yyyy>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    line: String,
}

impl ActivityLog {
    /// Records an activity without a payment method, e.g. a cancel or save.
    pub fn new(
        user: &User,
        barcode: u32,
        retail_price: Money,
        quantity: i64,
        status: ActivityStatus,
    ) -> Self {
        ActivityLog {
            line: format!(
                "{}, {}, {}, {}, {}, {}, {}",
                user.id(),
                user.postcode(),
                barcode,
                retail_price,
                quantity,
                status,
                today()
            ),
        }
    }

    /// Records a purchase, including the payment-method label.
    pub fn with_payment(
        user: &User,
        barcode: u32,
        retail_price: Money,
        quantity: i64,
        status: ActivityStatus,
        payment_label: &str,
    ) -> Self {
        ActivityLog {
            line: format!(
                "{}, {}, {}, {}, {}, {}, {}, {}",
                user.id(),
                user.postcode(),
                barcode,
                retail_price,
                quantity,
                status,
                payment_label,
                today()
            ),
        }
    }

    /// The formatted log line, without a trailing newline.
    pub fn as_line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for ActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

fn today() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
