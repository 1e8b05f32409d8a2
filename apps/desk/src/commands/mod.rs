//! # Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── Times, console toggle, extra controller
//! ├── menu.rs     ◄─── Menu quantity +/-
//! ├── tab.rs      ◄─── Tab snapshot and reset
//! ├── bill.rs     ◄─── Bill computation and formatting
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation                                                           │
//! │  ────────────                                                           │
//! │  click "+" on Cola                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn adjust_quantity(                                                    │
//! │      tab: &TabState,     ◄── The state the command needs               │
//! │      index: usize,       ◄── Menu position                             │
//! │      delta: i64,         ◄── +1 / -1                                    │
//! │  ) -> Result<TabResponse, ApiError>                                     │
//! │         │                                                               │
//! │         │ (serde serialization)                                         │
//! │         ▼                                                               │
//! │  Presentation redraws from TabResponse, then asks get_bill()           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the tab
//! fn select_console(tab: &TabState, console: ConsoleKind)
//!
//! // Needs both
//! fn get_bill(tab: &TabState, config: &ConfigState)
//! ```

pub mod bill;
pub mod config;
pub mod menu;
pub mod session;
pub mod tab;
