//! # State Module
//!
//! Manages application state for the desk command layer.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, commands
//! declare exactly the state they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┬──────────────────────┐           │
//! │          ▼                          ▼                      │           │
//! │  ┌────────────────────┐   ┌──────────────────────┐         │           │
//! │  │     TabState       │   │     ConfigState      │         │           │
//! │  │                    │   │                      │         │           │
//! │  │  Arc<Mutex<Tab>>   │   │  store_name          │         │           │
//! │  │  session + menu    │   │  currency symbol     │         │           │
//! │  │                    │   │  tariff              │         │           │
//! │  └────────────────────┘   └──────────────────────┘         │           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • TabState: Protected by Arc<Mutex<T>> for exclusive access           │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod tab;

pub use config::{
    ConfigError, ConfigState, ENV_CURRENCY_CODE, ENV_CURRENCY_SYMBOL, ENV_RATE_ADD_ON,
    ENV_RATE_PREMIUM, ENV_RATE_STANDARD, ENV_STORE_NAME,
};
pub use tab::TabState;
