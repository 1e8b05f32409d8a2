//! # Menu Module
//!
//! Snacks and drinks sold alongside a gaming session.
//!
//! ## Quantity Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [-] Cola 2.50 [ 0 ] [+]                                               │
//! │                                                                         │
//! │  "+" ──► adjust_quantity(0, +1) ──► 1                                  │
//! │  "-" ──► adjust_quantity(0, -1) ──► 0                                  │
//! │  "-" ──► adjust_quantity(0, -1) ──► 0   (clamped, not an error)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items keep their position for display; the total does not depend on it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_menu, validate_unit_price};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Menu Item
// =============================================================================

/// One sellable menu entry and how many of it are on the tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique within the menu.
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl MenuItem {
    /// Creates an item with quantity zero.
    pub fn new(name: impl Into<String>, unit_price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;

        Ok(MenuItem {
            name: name.trim().to_string(),
            unit_price,
            quantity: 0,
        })
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Applies `delta` and clamps the result to `0..=MAX_ITEM_QUANTITY`.
    ///
    /// Returns the new quantity.
    pub fn adjust(&mut self, delta: i64) -> u32 {
        let next = (self.quantity as i64)
            .saturating_add(delta)
            .clamp(0, MAX_ITEM_QUANTITY as i64);
        self.quantity = next as u32;
        self.quantity
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The ordered menu list.
///
/// Deserialization goes through the same checks as [`Menu::new`], so a
/// restored tab can't carry duplicate names, negative prices or
/// quantities above `MAX_ITEM_QUANTITY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "MenuData")]
pub struct Menu {
    items: Vec<MenuItem>,
}

/// Unchecked wire form of [`Menu`].
#[derive(Deserialize)]
struct MenuData {
    items: Vec<MenuItem>,
}

impl TryFrom<MenuData> for Menu {
    type Error = CoreError;

    fn try_from(data: MenuData) -> CoreResult<Self> {
        Menu::new(data.items)
    }
}

impl Menu {
    /// Builds a menu, rejecting duplicate names.
    pub fn new(items: Vec<MenuItem>) -> CoreResult<Self> {
        validate_menu(&items)?;
        Ok(Menu { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `delta` to the quantity at `index`, clamped to
    /// `0..=MAX_ITEM_QUANTITY`.
    ///
    /// ## Returns
    /// - `Some(new_quantity)` when the index exists
    /// - `None` when it doesn't (the menu is left untouched)
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::menu::Menu;
    ///
    /// let mut menu = Menu::default();
    /// assert_eq!(menu.adjust_quantity(0, 1), Some(1));
    /// assert_eq!(menu.adjust_quantity(0, -5), Some(0));
    /// assert_eq!(menu.adjust_quantity(99, 1), None);
    /// ```
    pub fn adjust_quantity(&mut self, index: usize, delta: i64) -> Option<u32> {
        self.items.get_mut(index).map(|item| item.adjust(delta))
    }

    /// Sum of every line total.
    pub fn total(&self) -> Money {
        self.items.iter().map(MenuItem::line_total).sum()
    }

    /// Items with a non-zero quantity, in menu order.
    pub fn ordered(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.quantity > 0)
    }

    /// Sets every quantity back to zero; names and prices are kept.
    pub fn clear_quantities(&mut self) {
        for item in &mut self.items {
            item.quantity = 0;
        }
    }
}

impl Default for Menu {
    /// The lounge's standard menu.
    fn default() -> Self {
        let items = [
            ("Cola", 250),
            ("Cips", 300),
            ("Çay", 200),
            ("Tum", 200),
            ("Qəlyan", 800),
        ]
        .into_iter()
        .map(|(name, cents)| MenuItem {
            name: name.to_string(),
            unit_price: Money::from_cents(cents),
            quantity: 0,
        })
        .collect();

        Menu { items }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
