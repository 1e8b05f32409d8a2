//! # Bill Commands
//!
//! The bill is recomputed from the tab on every call; nothing is cached.
//!
//! ## Bill Panel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  PS3:                                          2.50 ₼          │    │
//! │  │  Extra controller:                             1.25 ₼          │    │
//! │  │  Game:                                         3.75 ₼          │    │
//! │  │  Menu:                                         8.00 ₼          │    │
//! │  │  ──────────────────────────────────────────────────            │    │
//! │  │  Total:                                       11.75 ₼          │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  get_bill() → { durationMinutes, gameCharge: {cents, display}, ... }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lounge_core::{format_duration, Bill, BillLineKind, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::{ConfigState, TabState};

/// An amount in cents together with its display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountView {
    pub cents: i64,
    pub display: String,
}

impl AmountView {
    fn new(amount: Money, config: &ConfigState) -> Self {
        AmountView {
            cents: amount.cents(),
            display: config.format_currency(amount),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLineView {
    pub kind: BillLineKind,
    pub label: String,
    pub quantity: Option<u32>,
    pub amount: AmountView,
}

/// Bill as returned to the presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub duration_minutes: u32,
    pub duration_label: String,
    pub console_charge: AmountView,
    pub add_on_charge: AmountView,
    pub game_charge: AmountView,
    pub menu_charge: AmountView,
    pub total: AmountView,
    pub lines: Vec<BillLineView>,
}

impl BillResponse {
    pub fn new(bill: &Bill, config: &ConfigState) -> Self {
        BillResponse {
            duration_minutes: bill.duration_minutes,
            duration_label: format_duration(bill.duration_minutes),
            console_charge: AmountView::new(bill.console_charge, config),
            add_on_charge: AmountView::new(bill.add_on_charge, config),
            game_charge: AmountView::new(bill.game_charge, config),
            menu_charge: AmountView::new(bill.menu_charge, config),
            total: AmountView::new(bill.total, config),
            lines: bill
                .lines
                .iter()
                .map(|line| BillLineView {
                    kind: line.kind,
                    label: line.label.clone(),
                    quantity: line.quantity,
                    amount: AmountView::new(line.amount, config),
                })
                .collect(),
        }
    }
}

/// Computes the bill for the current tab with the configured tariff.
pub fn get_bill(tab: &TabState, config: &ConfigState) -> BillResponse {
    let bill = tab.with_tab(|t| t.bill(&config.tariff));
    debug!(
        minutes = bill.duration_minutes,
        total_cents = bill.total.cents(),
        "get_bill command"
    );
    BillResponse::new(&bill, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{menu, session, tab};
    use lounge_core::ConsoleKind;

    #[test]
    fn test_full_session_bill() {
        let state = TabState::default();
        let config = ConfigState::default();

        session::set_start_time(&state, "14:00");
        session::set_end_time(&state, "16:30");
        session::select_console(&state, ConsoleKind::Standard);
        session::set_add_on(&state, true);
        menu::adjust_quantity(&state, 0, 2).unwrap(); // Cola 2.50
        menu::adjust_quantity(&state, 1, 1).unwrap(); // Cips 3.00

        let bill = get_bill(&state, &config);

        assert_eq!(bill.duration_minutes, 150);
        assert_eq!(bill.duration_label, "2h 30m");
        assert_eq!(bill.console_charge.display, "2.50 ₼");
        assert_eq!(bill.add_on_charge.display, "1.25 ₼");
        assert_eq!(bill.game_charge.display, "3.75 ₼");
        assert_eq!(bill.menu_charge.display, "8.00 ₼");
        assert_eq!(bill.total.cents, 1175);
        assert_eq!(bill.total.display, "11.75 ₼");
        assert_eq!(bill.lines.len(), 4);
    }

    #[test]
    fn test_bill_is_never_stale() {
        let state = TabState::default();
        let config = ConfigState::default();

        session::set_start_time(&state, "23:00");
        session::set_end_time(&state, "01:00");
        session::select_console(&state, ConsoleKind::Premium);
        assert_eq!(get_bill(&state, &config).total.display, "3.00 ₼");

        session::select_console(&state, ConsoleKind::Standard);
        assert_eq!(get_bill(&state, &config).total.display, "2.00 ₼");
    }

    #[test]
    fn test_reset_then_bill_is_zero() {
        let state = TabState::default();
        let config = ConfigState::default();

        session::set_start_time(&state, "10:00");
        session::set_end_time(&state, "12:00");
        session::select_console(&state, ConsoleKind::Premium);
        menu::adjust_quantity(&state, 4, 1).unwrap();

        tab::reset_tab(&state);
        let bill = get_bill(&state, &config);

        assert_eq!(bill.duration_minutes, 0);
        assert_eq!(bill.total.display, "0.00 ₼");
        assert!(bill.lines.is_empty());
    }

    #[test]
    fn test_bill_uses_configured_tariff() {
        let state = TabState::default();
        let mut config = ConfigState::default();
        config.tariff.premium = lounge_core::HourlyRate::from_cents(300);

        session::set_start_time(&state, "18:00");
        session::set_end_time(&state, "18:30");
        session::select_console(&state, ConsoleKind::Premium);

        assert_eq!(get_bill(&state, &config).console_charge.cents, 150);
    }
}
