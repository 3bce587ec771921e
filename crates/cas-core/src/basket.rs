//! # Basket
//!
//! A customer's pending order: an ordered list of entries, one per bar
//! code. Entries are snapshots, not references into the [`Inventory`] —
//! each carries the bar code, brand, and the retail price frozen at the
//! moment it was added. [`Basket::validate`] re-resolves every entry
//! against the current inventory before checkout, so a product that was
//! removed or sold out since being basketed is caught there rather than
//! silently observed through a shared reference.

use serde::{Deserialize, Serialize};

use crate::inventory::{selection_sort_desc, Inventory};
use crate::money::Money;
use crate::product::Product;

/// One line of a basket: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketEntry {
    barcode: u32,
    brand: String,
    /// Retail price at the time the product was added. Deliberately not
    /// refreshed if the inventory price changes afterwards.
    retail_price: Money,
    quantity: i64,
}

impl BasketEntry {
    fn from_product(product: &Product) -> Self {
        BasketEntry {
            barcode: product.barcode(),
            brand: product.brand().to_owned(),
            retail_price: product.retail_price(),
            quantity: 1,
        }
    }

    #[inline]
    pub const fn barcode(&self) -> u32 {
        self.barcode
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub const fn retail_price(&self) -> Money {
        self.retail_price
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total: frozen retail price times quantity.
    #[inline]
    pub const fn line_total(&self) -> Money {
        self.retail_price.multiply_quantity(self.quantity)
    }
}

/// An ordered sequence of [`BasketEntry`], unique by bar code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    entries: Vec<BasketEntry>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket {
            entries: Vec::new(),
        }
    }

    /// Adds one unit of the product.
    ///
    /// If an entry for the bar code already exists its quantity goes up
    /// by exactly 1; otherwise a new entry with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        match self.get_by_barcode_mut(product.barcode()) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(BasketEntry::from_product(product)),
        }
    }

    /// Removes one unit from the entry at the given index.
    ///
    /// Quantity goes down by 1; once it would reach 0 (or the entry is
    /// already at quantity ≤ 1) the entry is deleted outright. Out of
    /// bounds is a no-op.
    pub fn remove(&mut self, index: usize) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if entry.quantity > 1 {
            entry.quantity -= 1;
        } else {
            self.entries.remove(index);
        }
    }

    /// Deletes the entry at the given index regardless of its quantity.
    pub fn remove_all(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Empties the basket, e.g. after checkout or explicit cancel.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&BasketEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BasketEntry> {
        self.entries.iter()
    }

    /// Finds the entry for the given bar code by linear scan.
    pub fn get_by_barcode(&self, barcode: u32) -> Option<&BasketEntry> {
        self.entries.iter().find(|e| e.barcode == barcode)
    }

    fn get_by_barcode_mut(&mut self, barcode: u32) -> Option<&mut BasketEntry> {
        self.entries.iter_mut().find(|e| e.barcode == barcode)
    }

    /// Sorts the entries by quantity, descending, in place.
    pub fn sort_by_quantity(&mut self) {
        selection_sort_desc(&mut self.entries, |e| e.quantity);
    }

    /// Checks the basket against the current stock.
    ///
    /// Returns `true` iff every entry's bar code still exists in `stock`
    /// and the entry quantity does not exceed the stock quantity. Stops
    /// at the first failing entry.
    pub fn validate(&self, stock: &Inventory) -> bool {
        self.entries.iter().all(|entry| {
            stock
                .get_by_barcode(entry.barcode)
                .is_some_and(|p| entry.quantity <= p.quantity())
        })
    }

    /// Sum of line totals across all entries, in exact pence.
    pub fn total_price(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |acc, e| acc + e.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
