//! # Menu Commands
//!
//! The "+" / "-" buttons next to each menu item.

use lounge_core::CoreError;
use tracing::debug;

use crate::commands::tab::TabResponse;
use crate::error::ApiError;
use crate::state::TabState;

/// Adjusts the quantity of the menu item at `index`.
///
/// ## Behavior
/// - Any delta is accepted; the buttons send +1 / -1
/// - The result is clamped at 0 (and at the per-item maximum)
/// - An index outside the menu changes nothing and returns `NOT_FOUND`
///
/// ## Returns
/// Updated tab
pub fn adjust_quantity(tab: &TabState, index: usize, delta: i64) -> Result<TabResponse, ApiError> {
    debug!(index, delta, "adjust_quantity command");

    tab.with_tab_mut(|t| -> Result<TabResponse, ApiError> {
        let quantity = t
            .menu
            .adjust_quantity(index, delta)
            .ok_or(CoreError::UnknownMenuItem {
                index,
                len: t.menu.len(),
            })?;
        debug!(index, quantity, "Menu quantity updated");
        Ok(TabResponse::from(&*t))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_increment_and_decrement() {
        let state = TabState::default();
        adjust_quantity(&state, 0, 1).unwrap();
        let response = adjust_quantity(&state, 0, 1).unwrap();
        assert_eq!(response.items[0].quantity, 2);

        let response = adjust_quantity(&state, 0, -1).unwrap();
        assert_eq!(response.items[0].quantity, 1);
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let state = TabState::default();
        let response = adjust_quantity(&state, 3, -1).unwrap();
        assert_eq!(response.items[3].quantity, 0);
    }

    #[test]
    fn test_large_negative_delta_clamps() {
        let state = TabState::default();
        adjust_quantity(&state, 1, 5).unwrap();
        let response = adjust_quantity(&state, 1, -100).unwrap();
        assert_eq!(response.items[1].quantity, 0);
    }

    #[test]
    fn test_unknown_index_is_not_found() {
        let state = TabState::default();
        let err = adjust_quantity(&state, 42, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.with_tab(|t| t.menu.total().is_zero()));
    }
}
