//! # Inventory
//!
//! An ordered sequence of products, unique by bar code.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Operations                               │
//! │                                                                         │
//! │  add(product)        ─► append unless the barcode already exists        │
//! │  remove(index)       ─► take the product out by position                │
//! │  get_by_barcode(..)  ─► linear scan (inventories are small)             │
//! │  filter(brand, uk)   ─► DESTRUCTIVE: replaces contents with the subset  │
//! │  sort_by_quantity()  ─► descending, in place                            │
//! │  sort_by_barcode()   ─► descending, in place                            │
//! │                                                                         │
//! │  There is no undo for filter; callers re-fetch from the store to       │
//! │  restore the full set.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// An ordered collection of products, unique by bar code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Returns the product at the given index, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Adds the product to the end of the inventory.
    ///
    /// ## Returns
    /// `false` (leaving the inventory unchanged) if a product with the same
    /// bar code is already present; `true` once appended. A duplicate is
    /// not an error: re-adding existing stock is an everyday admin slip.
    pub fn add(&mut self, product: Product) -> bool {
        if self.get_by_barcode(product.barcode()).is_some() {
            return false;
        }

        self.products.push(product);
        true
    }

    /// Removes and returns the product at the given index, if in bounds.
    pub fn remove(&mut self, index: usize) -> Option<Product> {
        if index < self.products.len() {
            Some(self.products.remove(index))
        } else {
            None
        }
    }

    /// The number of products in the inventory.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates the products in order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Finds the product with the given bar code by linear scan.
    pub fn get_by_barcode(&self, barcode: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode() == barcode)
    }

    /// Mutable lookup by bar code, used when applying a purchase.
    pub fn get_by_barcode_mut(&mut self, barcode: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.barcode() == barcode)
    }

    /// Destructively filters the inventory to products of the given brand
    /// and, optionally, to UK-layout keyboards.
    ///
    /// ## Rules
    /// - An empty `brand` matches every product; otherwise the match is
    ///   exact (case-sensitive).
    /// - When `only_uk_layout` is set, keyboards must have the UK layout;
    ///   mice are unaffected by the layout constraint and always pass it.
    pub fn filter(&mut self, brand: &str, only_uk_layout: bool) {
        self.products.retain(|p| {
            if !brand.is_empty() && p.brand() != brand {
                return false;
            }
            if only_uk_layout && p.device().class_name() == "keyboard" {
                return p.device().is_uk_keyboard();
            }
            true
        });
    }

    /// Sorts the products by stock quantity, descending, in place.
    pub fn sort_by_quantity(&mut self) {
        selection_sort_desc(&mut self.products, |p| p.quantity());
    }

    /// Sorts the products by bar code, descending, in place.
    pub fn sort_by_barcode(&mut self) {
        selection_sort_desc(&mut self.products, |p| i64::from(p.barcode()));
    }
}

/// In-place descending selection sort.
///
/// Inventories and baskets are a few dozen entries at most, so the O(n²)
/// scan costs nothing and keeps the ordering behavior identical for the
/// basket's quantity sort.
pub(crate) fn selection_sort_desc<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut max = i;
        for j in i + 1..len {
            if key(&items[j]) > key(&items[max]) {
                max = j;
            }
        }
        items.swap(i, max);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::{Connectivity, KeyboardLayout, KeyboardType, MouseType};

    fn keyboard(barcode: u32, brand: &str, layout: KeyboardLayout, quantity: i64) -> Product {
        Product::keyboard(
            barcode,
            brand,
            "black",
            Connectivity::Wired,
            KeyboardType::Standard,
            layout,
            Money::from_pence(1000),
            Money::from_pence(1999),
            quantity,
        )
        .unwrap()
    }

    fn mouse(barcode: u32, brand: &str, quantity: i64) -> Product {
        Product::mouse(
            barcode,
            brand,
            "grey",
            Connectivity::Wireless,
            MouseType::Standard,
            3,
            Money::from_pence(500),
            Money::from_pence(999),
            quantity,
        )
        .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate_barcode() {
        let mut inv = Inventory::new();
        assert!(inv.add(keyboard(123456, "Logitech", KeyboardLayout::Uk, 5)));
        assert!(!inv.add(keyboard(123456, "Razer", KeyboardLayout::Us, 9)));

        // Unchanged: still one product, still the first one.
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(0).unwrap().brand(), "Logitech");
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let mut inv = Inventory::new();
        inv.add(keyboard(123456, "Logitech", KeyboardLayout::Uk, 5));
        assert!(inv.get(0).is_some());
        assert!(inv.get(1).is_none());
    }

    #[test]
    fn test_remove() {
        let mut inv = Inventory::new();
        inv.add(keyboard(123456, "Logitech", KeyboardLayout::Uk, 5));
        inv.add(mouse(654321, "Razer", 2));

        let removed = inv.remove(0).unwrap();
        assert_eq!(removed.barcode(), 123456);
        assert_eq!(inv.len(), 1);
        assert!(inv.remove(5).is_none());
    }

    #[test]
    fn test_get_by_barcode() {
        let mut inv = Inventory::new();
        inv.add(keyboard(123456, "Logitech", KeyboardLayout::Uk, 5));

        assert!(inv.get_by_barcode(123456).is_some());
        assert!(inv.get_by_barcode(111111).is_none());
    }

    #[test]
    fn test_filter_by_brand_exact_match() {
        let mut inv = Inventory::new();
        inv.add(keyboard(100001, "Logitech", KeyboardLayout::Uk, 1));
        inv.add(mouse(100002, "Logitech", 1));
        inv.add(mouse(100003, "Razer", 1));

        inv.filter("Logitech", false);
        assert_eq!(inv.len(), 2);
        assert!(inv.iter().all(|p| p.brand() == "Logitech"));
    }

    #[test]
    fn test_filter_empty_brand_matches_everything() {
        let mut inv = Inventory::new();
        inv.add(keyboard(100001, "Logitech", KeyboardLayout::Uk, 1));
        inv.add(mouse(100003, "Razer", 1));

        inv.filter("", false);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_filter_uk_layout_passes_mice_unconditionally() {
        let mut inv = Inventory::new();
        inv.add(keyboard(100001, "Logitech", KeyboardLayout::Uk, 1));
        inv.add(keyboard(100002, "Logitech", KeyboardLayout::Us, 1));
        inv.add(mouse(100003, "Logitech", 1));

        inv.filter("", true);

        let barcodes: Vec<u32> = inv.iter().map(|p| p.barcode()).collect();
        assert_eq!(barcodes, vec![100001, 100003]); // US keyboard dropped, mouse kept
    }

    #[test]
    fn test_sort_by_quantity_descending() {
        let mut inv = Inventory::new();
        inv.add(mouse(100001, "A", 2));
        inv.add(mouse(100002, "B", 9));
        inv.add(mouse(100003, "C", 5));

        inv.sort_by_quantity();
        let quantities: Vec<i64> = inv.iter().map(|p| p.quantity()).collect();
        assert_eq!(quantities, vec![9, 5, 2]);
    }

    #[test]
    fn test_sort_by_barcode_descending() {
        let mut inv = Inventory::new();
        inv.add(mouse(100002, "A", 1));
        inv.add(mouse(100009, "B", 1));
        inv.add(mouse(100005, "C", 1));

        inv.sort_by_barcode();
        let barcodes: Vec<u32> = inv.iter().map(|p| p.barcode()).collect();
        assert_eq!(barcodes, vec![100009, 100005, 100002]);
    }

    #[test]
    fn test_sort_handles_sorted_reverse_and_duplicate_keys() {
        // Already descending.
        let mut inv = Inventory::new();
        inv.add(mouse(100001, "A", 9));
        inv.add(mouse(100002, "B", 5));
        inv.add(mouse(100003, "C", 2));
        inv.sort_by_quantity();
        assert_eq!(
            inv.iter().map(|p| p.quantity()).collect::<Vec<_>>(),
            vec![9, 5, 2]
        );

        // Ascending input with a duplicate key.
        let mut inv = Inventory::new();
        inv.add(mouse(100001, "A", 2));
        inv.add(mouse(100002, "B", 5));
        inv.add(mouse(100003, "C", 5));
        inv.add(mouse(100004, "D", 9));
        inv.sort_by_quantity();
        assert_eq!(
            inv.iter().map(|p| p.quantity()).collect::<Vec<_>>(),
            vec![9, 5, 5, 2]
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut inv = Inventory::new();
        inv.sort_by_quantity(); // must not panic

        inv.add(mouse(100001, "A", 1));
        inv.sort_by_barcode();
        assert_eq!(inv.len(), 1);
    }
}
