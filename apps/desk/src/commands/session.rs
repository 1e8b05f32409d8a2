//! # Session Commands
//!
//! Time pickers, console toggles and the extra controller switch.
//!
//! None of these can fail: a time that isn't a valid `"HH:MM"` simply
//! becomes unset, which bills as zero minutes.

use lounge_core::ConsoleKind;
use tracing::{debug, warn};

use crate::commands::tab::TabResponse;
use crate::state::TabState;

/// Sets the session start from raw picker input.
pub fn set_start_time(tab: &TabState, time: &str) -> TabResponse {
    debug!(time = %time, "set_start_time command");
    tab.with_tab_mut(|t| {
        if t.session.set_start_time(time).is_none() && !time.trim().is_empty() {
            warn!(time = %time, "Start time not HH:MM, treating as unset");
        }
        TabResponse::from(&*t)
    })
}

/// Sets the session end from raw picker input.
pub fn set_end_time(tab: &TabState, time: &str) -> TabResponse {
    debug!(time = %time, "set_end_time command");
    tab.with_tab_mut(|t| {
        if t.session.set_end_time(time).is_none() && !time.trim().is_empty() {
            warn!(time = %time, "End time not HH:MM, treating as unset");
        }
        TabResponse::from(&*t)
    })
}

/// Toggles a console.
///
/// ## Behavior
/// - Same console as selected: deselects it
/// - Other console: switches to it directly
/// - The extra controller flag is left as it is either way
pub fn select_console(tab: &TabState, console: ConsoleKind) -> TabResponse {
    debug!(?console, "select_console command");
    tab.with_tab_mut(|t| {
        let selected = t.session.select_console(console);
        debug!(?selected, "Console selection changed");
        TabResponse::from(&*t)
    })
}

/// Sets (not toggles) the extra controller flag.
pub fn set_add_on(tab: &TabState, enabled: bool) -> TabResponse {
    debug!(enabled, "set_add_on command");
    tab.with_tab_mut(|t| {
        t.session.set_add_on(enabled);
        TabResponse::from(&*t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_set_duration_label() {
        let state = TabState::default();
        set_start_time(&state, "23:00");
        let response = set_end_time(&state, "01:00");

        assert_eq!(response.duration_label.as_deref(), Some("2h 0m"));
        assert_eq!(response.session.duration_minutes(), 120);
    }

    #[test]
    fn test_invalid_time_unsets() {
        let state = TabState::default();
        set_start_time(&state, "14:00");
        let response = set_start_time(&state, "14:");

        assert_eq!(response.session.start_time, None);
        assert_eq!(response.duration_label, None);
    }

    #[test]
    fn test_console_toggle() {
        let state = TabState::default();

        let response = select_console(&state, ConsoleKind::Standard);
        assert_eq!(response.session.console, Some(ConsoleKind::Standard));

        let response = select_console(&state, ConsoleKind::Premium);
        assert_eq!(response.session.console, Some(ConsoleKind::Premium));

        let response = select_console(&state, ConsoleKind::Premium);
        assert_eq!(response.session.console, None);
    }

    #[test]
    fn test_add_on_is_a_direct_set() {
        let state = TabState::default();
        set_add_on(&state, true);
        let response = set_add_on(&state, true);
        assert!(response.session.has_add_on);

        let response = set_add_on(&state, false);
        assert!(!response.session.has_add_on);
    }

    #[test]
    fn test_add_on_flag_kept_when_console_cleared() {
        let state = TabState::default();
        select_console(&state, ConsoleKind::Standard);
        set_add_on(&state, true);

        let response = select_console(&state, ConsoleKind::Standard);

        assert!(response.session.has_add_on);
        assert!(!response.add_on_enabled);
        assert_eq!(response.selection_summary, None);
    }
}
