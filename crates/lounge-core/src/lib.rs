//! # lounge-core: Pure Billing Logic for Lounge POS
//!
//! This crate is the **heart** of Lounge POS. It turns a gaming session
//! (console tier, extra controller, start/end time) and a snack menu into a
//! bill, using pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lounge POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (out of tree)                   │   │
//! │  │    Time pickers ──► Console toggles ──► Menu +/- ──► Bill view │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lounge-desk commands                         │   │
//! │  │    set_start_time, select_console, adjust_quantity, get_bill   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lounge-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  time   │ │  money  │ │ session │ │  menu   │ │  bill   │  │   │
//! │  │   │TimeOfDay│ │  Money  │ │ Session │ │MenuItem │ │  Bill   │  │   │
//! │  │   │ elapsed │ │ Metered │ │   Tab   │ │  Menu   │ │compute_ │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO ENVIRONMENT • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Console tiers, hourly rates and the tariff
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`time`] - Time-of-day parsing and overnight-aware durations
//! - [`session`] - Session state, console toggling and the whole `Tab`
//! - [`menu`] - Menu items and quantity clamping
//! - [`bill`] - Bill computation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use lounge_core::{compute_bill, ConsoleKind, Menu, Session, Tariff};
//!
//! let mut session = Session::default();
//! session.set_start_time("14:00");
//! session.set_end_time("16:30");
//! session.select_console(ConsoleKind::Standard);
//! session.set_add_on(true);
//!
//! let bill = compute_bill(&session, &Menu::default(), &Tariff::default());
//! assert_eq!(bill.duration_minutes, 150);
//! assert_eq!(bill.game_charge.to_string(), "3.75");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod menu;
pub mod money;
pub mod session;
pub mod time;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{compute_bill, Bill, BillLine, BillLineKind};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Menu, MenuItem};
pub use money::{Metered, Money};
pub use session::{Session, Tab};
pub use time::{elapsed_minutes, format_duration, TimeOfDay};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single menu item on one tab.
///
/// Quantity adjustments saturate here instead of failing.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum length of a menu item name.
pub const MAX_ITEM_NAME_LEN: usize = 50;

/// Upper bound for a unit price or an hourly rate, in cents (100 000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000;

pub const MINUTES_PER_HOUR: u32 = 60;

/// Added to the end time when a session crosses midnight.
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;
