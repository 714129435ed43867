use std::str::FromStr;

use thiserror::Error;

/// Share of booked guests assumed not to show up.
pub const NO_SHOW_RATE: f64 = 0.1;

/// Demand floor: units of prepared food per guest actually present.
pub const MIN_QUANTITY_PER_GUEST: f64 = 0.5;

/// The pricing column held a value outside the known tiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pricing tier: {0}")]
pub struct UnknownTierError(pub String);

/// Per-unit cost bracket of a catered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Low,
    Moderate,
    High,
}

impl PricingTier {
    pub fn cost_per_unit(self) -> u32 {
        match self {
            PricingTier::Low => 200,
            PricingTier::Moderate => 400,
            PricingTier::High => 600,
        }
    }
}

impl FromStr for PricingTier {
    type Err = UnknownTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(PricingTier::Low),
            "Moderate" => Ok(PricingTier::Moderate),
            "High" => Ok(PricingTier::High),
            other => Err(UnknownTierError(other.to_string())),
        }
    }
}

/// One dataset row together with its derived planning fields. Records are
/// read-only for the whole run once constructed.
#[derive(Debug, Clone)]
pub struct MenuItemRecord {
    pub food_type: String,
    pub event_type: String,
    /// Booked guest count
    pub guests: u32,
    pub pricing: PricingTier,
    /// Observed wastage per prepared unit
    pub wastage_amount: f64,
    /// round(guests × NO_SHOW_RATE)
    pub no_show_guests: u32,
    /// guests − no_show_guests
    pub actual_guests: u32,
    /// Fixed cost from the pricing tier
    pub cost_per_unit: u32,
}

impl MenuItemRecord {
    pub fn new(
        food_type: String,
        event_type: String,
        guests: u32,
        pricing: PricingTier,
        wastage_amount: f64,
    ) -> Self {
        let no_show_guests = (f64::from(guests) * NO_SHOW_RATE).round() as u32;
        Self {
            no_show_guests,
            actual_guests: guests - no_show_guests,
            cost_per_unit: pricing.cost_per_unit(),
            food_type,
            event_type,
            guests,
            pricing,
            wastage_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let record = MenuItemRecord::new(
            "Meat".to_string(),
            "Corporate".to_string(),
            100,
            PricingTier::Low,
            10.0,
        );
        assert_eq!(record.no_show_guests, 10);
        assert_eq!(record.actual_guests, 90);
        assert_eq!(record.cost_per_unit, 200);

        let record = MenuItemRecord::new(
            "Dairy".to_string(),
            "Wedding".to_string(),
            50,
            PricingTier::High,
            5.0,
        );
        assert_eq!(record.no_show_guests, 5);
        assert_eq!(record.actual_guests, 45);
        assert_eq!(record.cost_per_unit, 600);
    }

    #[test]
    fn test_no_shows_round_to_nearest() {
        let record = MenuItemRecord::new(
            "Fruit".to_string(),
            "Birthday".to_string(),
            14,
            PricingTier::Moderate,
            1.0,
        );
        assert_eq!(record.no_show_guests, 1);
        assert_eq!(record.actual_guests, 13);

        let record = MenuItemRecord::new(
            "Fruit".to_string(),
            "Birthday".to_string(),
            16,
            PricingTier::Moderate,
            1.0,
        );
        assert_eq!(record.no_show_guests, 2);
        assert_eq!(record.actual_guests, 14);
    }

    #[test]
    fn test_zero_guests_stay_non_negative() {
        let record = MenuItemRecord::new(
            "Bread".to_string(),
            "Social".to_string(),
            0,
            PricingTier::Low,
            0.0,
        );
        assert_eq!(record.no_show_guests, 0);
        assert_eq!(record.actual_guests, 0);
    }

    #[test]
    fn test_cost_mapping_is_total() {
        assert_eq!(PricingTier::Low.cost_per_unit(), 200);
        assert_eq!(PricingTier::Moderate.cost_per_unit(), 400);
        assert_eq!(PricingTier::High.cost_per_unit(), 600);
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let err = "Premium".parse::<PricingTier>().unwrap_err();
        assert_eq!(err, UnknownTierError("Premium".to_string()));
    }
}
