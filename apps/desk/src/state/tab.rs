//! # Tab State
//!
//! Owns the one open tab (session + menu counts).
//!
//! ## Thread Safety
//! The tab is wrapped in `Arc<Mutex<T>>` so the host can call commands from
//! whichever thread its event loop uses. Every command holds the lock for
//! its whole mutation, so a reader never sees half an update.
//!
//! ## Tab Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tab State Operations                                 │
//! │                                                                         │
//! │  UI Action                Command                 Tab Change            │
//! │  ─────────                ───────                 ──────────            │
//! │                                                                         │
//! │  Pick start time ───────► set_start_time() ────► session.start_time    │
//! │                                                                         │
//! │  Toggle console ────────► select_console() ────► session.console       │
//! │                                                                         │
//! │  Click +/- ─────────────► adjust_quantity() ───► menu[i].quantity      │
//! │                                                                         │
//! │  Click Clear ───────────► reset_tab() ─────────► Tab::reset()          │
//! │                                                                         │
//! │  View Bill ─────────────► get_bill() ──────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use lounge_core::{Menu, Tab};

/// Managed tab state.
#[derive(Debug, Clone)]
pub struct TabState {
    tab: Arc<Mutex<Tab>>,
}

impl TabState {
    /// Creates a fresh tab over `menu`.
    pub fn new(menu: Menu) -> Self {
        TabState {
            tab: Arc::new(Mutex::new(Tab::new(menu))),
        }
    }

    /// Executes a function with read access to the tab.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let bill = tab_state.with_tab(|tab| tab.bill(&config.tariff));
    /// ```
    pub fn with_tab<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Tab) -> R,
    {
        // Every mutation leaves the tab consistent, so a poisoned lock is safe to reuse.
        let tab = self.tab.lock().unwrap_or_else(PoisonError::into_inner);
        f(&tab)
    }

    /// Executes a function with write access to the tab.
    pub fn with_tab_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Tab) -> R,
    {
        let mut tab = self.tab.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut tab)
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new(Menu::default())
    }
}
