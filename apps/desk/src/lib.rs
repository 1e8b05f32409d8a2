//! # Lounge Desk Library
//!
//! The command layer a presentation (web view, kiosk UI, test harness)
//! calls into. It owns the open tab and the configuration, and delegates
//! every calculation to `lounge-core`.
//!
//! ## Module Organization
//! ```text
//! lounge_desk_lib/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── tab.rs      ◄─── Tab state (Arc<Mutex<Tab>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Times, console, extra controller
//! │   ├── menu.rs     ◄─── Menu quantities
//! │   ├── tab.rs      ◄─── Snapshot and reset
//! │   ├── bill.rs     ◄─── Bill
//! │   └── config.rs   ◄─── Configuration
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use lounge_core::Menu;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, TabState};

/// Everything a host needs to serve commands.
#[derive(Debug, Clone)]
pub struct Desk {
    pub tab: TabState,
    pub config: ConfigState,
}

impl Desk {
    /// Loads configuration from the environment and opens an empty tab over
    /// the standard menu.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Load Configuration ──────────────────────────────────────────────► │
    /// │     • LOUNGE_* overrides, defaults otherwise                           │
    /// │                                                                         │
    /// │  2. Initialize State Objects ────────────────────────────────────────► │
    /// │     • TabState: default menu, nothing selected                         │
    /// │     • ConfigState: read-only from here on                              │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn from_env() -> Self {
        Self::with_config(ConfigState::from_env())
    }

    pub fn with_config(config: ConfigState) -> Self {
        info!(
            store = %config.store_name,
            standard = %config.tariff.standard,
            premium = %config.tariff.premium,
            add_on = %config.tariff.add_on,
            "Opening lounge desk"
        );

        Desk {
            tab: TabState::new(Menu::default()),
            config,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lounge_desk_lib=trace` - Trace the command layer only
/// - Default: INFO, DEBUG for the command layer
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lounge_desk_lib=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{bill, menu, session};
    use lounge_core::ConsoleKind;

    #[test]
    fn test_desk_end_to_end() {
        init_tracing();
        let desk = Desk::with_config(ConfigState::default());

        session::set_start_time(&desk.tab, "23:00");
        session::set_end_time(&desk.tab, "01:00");
        session::select_console(&desk.tab, ConsoleKind::Premium);
        menu::adjust_quantity(&desk.tab, 2, 2).unwrap(); // Çay 2.00

        let response = bill::get_bill(&desk.tab, &desk.config);
        assert_eq!(response.game_charge.display, "3.00 ₼");
        assert_eq!(response.menu_charge.display, "4.00 ₼");
        assert_eq!(response.total.display, "7.00 ₼");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
