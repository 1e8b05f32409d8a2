//! # Tab Commands
//!
//! Reading and clearing the open tab.
//!
//! ## Tab Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tab Lifecycle                                        │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────┐                    │
//! │  │  Unset   │────►│  In progress │────►│  Billed  │                    │
//! │  │ defaults │     │ times/console│     │ get_bill │                    │
//! │  └──────────┘     │  menu counts │     └────┬─────┘                    │
//! │       ▲           └──────────────┘          │                          │
//! │       │                                     │                          │
//! │       └──────────────── reset_tab ◄─────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lounge_core::{format_duration, Money, Session, Tab};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::state::TabState;

/// A menu row as the presentation draws it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub index: usize,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// The "-" control does nothing at zero, so it is shown disabled.
    pub can_decrement: bool,
}

/// Tab snapshot returned after every mutating command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabResponse {
    pub session: Session,
    /// "2h 30m", only once both times are set.
    pub duration_label: Option<String>,
    /// "PlayStation 4 + extra controller", only with a console.
    pub selection_summary: Option<String>,
    /// The extra controller toggle is only offered with a console.
    pub add_on_enabled: bool,
    pub items: Vec<MenuItemView>,
}

impl From<&Tab> for TabResponse {
    fn from(tab: &Tab) -> Self {
        let session = tab.session;

        TabResponse {
            session,
            duration_label: session
                .has_interval()
                .then(|| format_duration(session.duration_minutes())),
            selection_summary: session.selection_summary(),
            add_on_enabled: session.console.is_some(),
            items: tab
                .menu
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| MenuItemView {
                    index,
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                    can_decrement: item.quantity > 0,
                })
                .collect(),
        }
    }
}

/// Gets the current tab.
pub fn get_tab(tab: &TabState) -> TabResponse {
    debug!("get_tab command");
    tab.with_tab(|t| TabResponse::from(t))
}

/// Clears console, extra controller, both times and every menu count.
///
/// Menu items and their prices are kept.
pub fn reset_tab(tab: &TabState) -> TabResponse {
    info!("reset_tab command");
    tab.with_tab_mut(|t| {
        t.reset();
        TabResponse::from(&*t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lounge_core::ConsoleKind;

    #[test]
    fn test_fresh_tab_response() {
        let response = get_tab(&TabState::default());

        assert_eq!(response.duration_label, None);
        assert_eq!(response.selection_summary, None);
        assert!(!response.add_on_enabled);
        assert_eq!(response.items.len(), 5);
        assert!(response.items.iter().all(|i| !i.can_decrement));
    }

    #[test]
    fn test_response_hints_follow_state() {
        let state = TabState::default();
        state.with_tab_mut(|t| {
            t.session.set_start_time("14:00");
            t.session.set_end_time("16:30");
            t.session.select_console(ConsoleKind::Standard);
            t.menu.adjust_quantity(2, 1);
        });

        let response = get_tab(&state);

        assert_eq!(response.duration_label.as_deref(), Some("2h 30m"));
        assert_eq!(response.selection_summary.as_deref(), Some("PlayStation 3"));
        assert!(response.add_on_enabled);
        assert!(response.items[2].can_decrement);
        assert!(!response.items[0].can_decrement);
    }

    #[test]
    fn test_reset_tab() {
        let state = TabState::default();
        state.with_tab_mut(|t| {
            t.session.select_console(ConsoleKind::Premium);
            t.session.set_add_on(true);
            t.session.set_start_time("20:00");
            t.menu.adjust_quantity(0, 4);
        });

        let response = reset_tab(&state);

        assert_eq!(response.session, Session::default());
        assert!(response.items.iter().all(|i| i.quantity == 0));
        assert_eq!(response.items[0].name, "Cola");
        assert_eq!(response.items[0].unit_price.cents(), 250);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let json = serde_json::to_value(get_tab(&TabState::default())).unwrap();
        assert_eq!(json["addOnEnabled"], false);
        assert_eq!(json["items"][0]["unitPrice"], 250);
        assert_eq!(json["items"][0]["canDecrement"], false);
    }
}
