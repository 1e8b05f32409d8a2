//! # Session Module
//!
//! The in-progress gaming session and the `Tab` that bundles it with the
//! menu.
//!
//! ## Console Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 select(Standard)            select(Premium)             │
//! │   ┌──────┐ ──────────────────► ┌──────────┐ ──────────────► ┌─────────┐ │
//! │   │ None │                     │ Standard │                 │ Premium │ │
//! │   └──────┘ ◄────────────────── └──────────┘ ◄────────────── └─────────┘ │
//! │      ▲       select(Standard)               select(Standard)     │      │
//! │      └───────────────────────────────────────────────────────────┘      │
//! │                              select(Premium)                            │
//! │                                                                         │
//! │  Re-selecting the active console deselects it.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field is independently settable at any time; there is no locking
//! and no terminal state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bill::{compute_bill, Bill};
use crate::menu::Menu;
use crate::time::{elapsed_minutes, TimeOfDay};
use crate::types::{ConsoleKind, Tariff};

// =============================================================================
// Session
// =============================================================================

/// Console choice, extra controller flag and time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub console: Option<ConsoleKind>,
    /// May stay set with no console; it is simply not billed then.
    pub has_add_on: bool,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

impl Session {
    /// Toggles `kind`: re-selecting the active console clears it, picking
    /// the other one switches directly.
    ///
    /// Returns the new selection.
    pub fn select_console(&mut self, kind: ConsoleKind) -> Option<ConsoleKind> {
        self.console = if self.console == Some(kind) {
            None
        } else {
            Some(kind)
        };
        self.console
    }

    pub fn set_add_on(&mut self, enabled: bool) {
        self.has_add_on = enabled;
    }

    /// Sets the start from raw `"HH:MM"` input; invalid input unsets it.
    pub fn set_start_time(&mut self, input: &str) -> Option<TimeOfDay> {
        self.start_time = TimeOfDay::parse_input(input);
        self.start_time
    }

    /// Sets the end from raw `"HH:MM"` input; invalid input unsets it.
    pub fn set_end_time(&mut self, input: &str) -> Option<TimeOfDay> {
        self.end_time = TimeOfDay::parse_input(input);
        self.end_time
    }

    /// Both ends of the window are known.
    pub fn has_interval(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    pub fn duration_minutes(&self) -> u32 {
        elapsed_minutes(self.start_time, self.end_time)
    }

    /// The add-on is only billed alongside a rented console.
    pub fn add_on_billable(&self) -> bool {
        self.has_add_on && self.console.is_some()
    }

    /// "PlayStation 4 + extra controller", or `None` with no console.
    pub fn selection_summary(&self) -> Option<String> {
        self.console.map(|console| {
            if self.has_add_on {
                format!("{} + extra controller", console.label())
            } else {
                console.label().to_string()
            }
        })
    }

    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

// =============================================================================
// Tab
// =============================================================================

/// Everything the cashier can change: the session and the menu counts.
///
/// ## Ownership
/// A `Tab` has exactly one owner and is only changed through `&mut self`;
/// the bill is never stored, [`Tab::bill`] recomputes it on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub session: Session,
    pub menu: Menu,
}

impl Tab {
    pub fn new(menu: Menu) -> Self {
        Tab {
            session: Session::default(),
            menu,
        }
    }

    pub fn bill(&self, tariff: &Tariff) -> Bill {
        compute_bill(&self.session, &self.menu, tariff)
    }

    /// Clears the session and every quantity; menu items and prices stay.
    pub fn reset(&mut self) {
        self.session.reset();
        self.menu.clear_quantities();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
