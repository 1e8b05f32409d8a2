//! # Config Commands
//!
//! Retrieving application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Startup (store name in the header)
/// - Price labels next to the console toggles
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes_tariff() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["storeName"], "Atlant");
        assert_eq!(json["currencySymbol"], "₼");
        assert_eq!(json["tariff"]["standard"], 100);
        assert_eq!(json["tariff"]["premium"], 150);
        assert_eq!(json["tariff"]["addOn"], 50);
    }
}
