//! # Bill Module
//!
//! Turns a session, a menu and a tariff into the charge breakdown.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start/end ──► elapsed_minutes ──► minutes                             │
//! │                                      │                                  │
//! │             console rate × minutes ──┼──► console charge  ─┐           │
//! │   (console && add-on) rate × minutes ┴──► add-on charge   ─┼► game     │
//! │                                                            │           │
//! │  Σ unit price × quantity ──────────────► menu charge ──────┴► total    │
//! │                                                                         │
//! │  Exact in 1/60 cent until the end; each amount is rounded once.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bill is a value, never cached: compute it again after any change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::menu::Menu;
use crate::money::{Metered, Money};
use crate::session::Session;
use crate::types::{ConsoleKind, Tariff};

// =============================================================================
// Bill
// =============================================================================

/// What a bill line charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BillLineKind {
    Console,
    AddOn,
    MenuItem,
}

/// One printable row of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillLine {
    pub kind: BillLineKind,
    pub label: String,
    /// Set for menu lines only.
    pub quantity: Option<u32>,
    pub amount: Money,
}

/// Charge breakdown for the current tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub duration_minutes: u32,
    pub console: Option<ConsoleKind>,
    pub console_charge: Money,
    pub add_on_charge: Money,
    /// Console plus add-on.
    pub game_charge: Money,
    pub menu_charge: Money,
    pub total: Money,
    /// Console line if one is rented, add-on line if billable, then every
    /// ordered menu item.
    pub lines: Vec<BillLine>,
}

// =============================================================================
// Charges
// =============================================================================

/// Rental charge for the selected console over `minutes`.
pub fn console_charge(session: &Session, tariff: &Tariff, minutes: u32) -> Metered {
    tariff.console_rate(session.console).charge(minutes)
}

/// Extra controller charge; zero unless a console is selected too.
pub fn add_on_charge(session: &Session, tariff: &Tariff, minutes: u32) -> Metered {
    if session.add_on_billable() {
        tariff.add_on.charge(minutes)
    } else {
        Metered::zero()
    }
}

/// Computes the full bill.
///
/// ## Example
/// ```rust
/// use lounge_core::{compute_bill, ConsoleKind, Menu, Session, Tariff};
///
/// let mut session = Session::default();
/// session.set_start_time("23:00");
/// session.set_end_time("01:00");
/// session.select_console(ConsoleKind::Premium);
///
/// let bill = compute_bill(&session, &Menu::default(), &Tariff::default());
/// assert_eq!(bill.duration_minutes, 120);
/// assert_eq!(bill.console_charge.cents(), 300);
/// ```
pub fn compute_bill(session: &Session, menu: &Menu, tariff: &Tariff) -> Bill {
    let minutes = session.duration_minutes();

    let console_exact = console_charge(session, tariff, minutes);
    let add_on_exact = add_on_charge(session, tariff, minutes);
    let game_exact = console_exact + add_on_exact;
    let menu_charge = menu.total();

    let console_charge = console_exact.to_money();
    let add_on_charge = add_on_exact.to_money();

    let mut lines = Vec::new();
    if let Some(console) = session.console {
        lines.push(BillLine {
            kind: BillLineKind::Console,
            label: console.short_label().to_string(),
            quantity: None,
            amount: console_charge,
        });
    }
    if session.add_on_billable() {
        lines.push(BillLine {
            kind: BillLineKind::AddOn,
            label: "Extra controller".to_string(),
            quantity: None,
            amount: add_on_charge,
        });
    }
    lines.extend(menu.ordered().map(|item| BillLine {
        kind: BillLineKind::MenuItem,
        label: item.name.clone(),
        quantity: Some(item.quantity),
        amount: item.line_total(),
    }));

    Bill {
        duration_minutes: minutes,
        console: session.console,
        console_charge,
        add_on_charge,
        game_charge: game_exact.to_money(),
        menu_charge,
        total: (game_exact + Metered::from(menu_charge)).to_money(),
        lines,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
