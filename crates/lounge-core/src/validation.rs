//! # Validation Module
//!
//! Business rule checks for menus and tariffs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  └── Time pickers, +/- buttons (input is already well-shaped)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: lounge-desk commands                                          │
//! │  └── Lenient: bad times become "unset", quantities are clamped         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  └── Strict: menus and tariffs are rejected when they break rules      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::types::Tariff;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_ITEM_NAME_LEN` characters (not bytes: "Qəlyan" is 6)
///
/// ## Example
/// ```rust
/// use lounge_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Qəlyan").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Rules
/// - Must not be negative
/// - Must not exceed `MAX_PRICE_CENTS`
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "unit price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a quantity carried on a menu item.
///
/// ## Rules
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_item_quantity(qty: u32) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates every item and requires names to be unique.
pub fn validate_menu(items: &[MenuItem]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for item in items {
        validate_item_name(&item.name)?;
        validate_unit_price(item.unit_price)?;
        validate_item_quantity(item.quantity)?;

        if !seen.insert(item.name.trim()) {
            return Err(ValidationError::Duplicate {
                field: "menu item".to_string(),
                value: item.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a tariff.
///
/// ## Rules
/// - No rate may be negative or exceed `MAX_PRICE_CENTS` per hour
/// - The premium console must cost more per hour than the standard one
pub fn validate_tariff(tariff: &Tariff) -> CoreResult<()> {
    for (field, rate) in [
        ("standard", tariff.standard),
        ("premium", tariff.premium),
        ("add_on", tariff.add_on),
    ] {
        if rate.per_hour().is_negative() {
            return Err(CoreError::InvalidTariff {
                reason: format!("{field} rate must not be negative"),
            });
        }
        if rate.per_hour().cents() > MAX_PRICE_CENTS {
            return Err(CoreError::InvalidTariff {
                reason: format!("{field} rate {rate} is above the maximum"),
            });
        }
    }

    if tariff.premium <= tariff.standard {
        return Err(CoreError::InvalidTariff {
            reason: format!(
                "premium rate {} must be above standard rate {}",
                tariff.premium, tariff.standard
            ),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HourlyRate;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Cola").is_ok());
        assert!(validate_item_name("Çay").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(51)).is_err());
        assert!(validate_item_name(&"ə".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(250)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
        assert!(validate_unit_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert!(validate_unit_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
    }

    #[test]
    fn test_validate_item_quantity() {
        assert!(validate_item_quantity(0).is_ok());
        assert!(validate_item_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_item_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_menu_rejects_bad_items() {
        let cola = |cents: i64, quantity: u32| MenuItem {
            name: "Cola".to_string(),
            unit_price: Money::from_cents(cents),
            quantity,
        };

        assert!(validate_menu(&[cola(250, 2)]).is_ok());
        assert!(matches!(
            validate_menu(&[cola(250, 0), cola(300, 0)]),
            Err(ValidationError::Duplicate { .. })
        ));
        assert!(validate_menu(&[cola(-100, 0)]).is_err());
        assert!(validate_menu(&[cola(250, 5000)]).is_err());
    }

    #[test]
    fn test_validate_tariff() {
        assert!(validate_tariff(&Tariff::default()).is_ok());

        let flat = Tariff {
            premium: HourlyRate::from_cents(100),
            ..Tariff::default()
        };
        assert!(matches!(
            validate_tariff(&flat),
            Err(CoreError::InvalidTariff { .. })
        ));

        let negative = Tariff {
            add_on: HourlyRate::from_cents(-50),
            ..Tariff::default()
        };
        assert!(validate_tariff(&negative).is_err());

        // 92 233 720 368 547 758.00 per hour would overflow a two-hour charge
        let huge = Tariff {
            standard: HourlyRate::from_cents(9_223_372_036_854_775_800),
            premium: HourlyRate::from_cents(i64::MAX),
            ..Tariff::default()
        };
        assert!(validate_tariff(&huge).is_err());
    }
}
