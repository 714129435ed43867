use platewise_solver::LpScenario;

use crate::record::{MIN_QUANTITY_PER_GUEST, MenuItemRecord};

/// Per-row bound vectors feeding the shared scenario constructor. The nominal
/// run and the sensitivity sweep derive these differently but build the LP
/// through the same code path.
#[derive(Debug, Clone)]
pub struct ScenarioBounds {
    pub budget_per_row: Vec<f64>,
    pub min_quantity_per_row: Vec<f64>,
    pub wastage_per_row: Vec<f64>,
}

impl ScenarioBounds {
    /// Bounds for the nominal run: each row's budget is its per-unit price
    /// times its booked guest count, the demand floor is half the guests
    /// actually present, and the wastage coefficients are used unscaled.
    pub fn nominal(records: &[MenuItemRecord]) -> Self {
        Self {
            budget_per_row: records
                .iter()
                .map(|r| f64::from(r.cost_per_unit) * f64::from(r.guests))
                .collect(),
            min_quantity_per_row: records
                .iter()
                .map(|r| MIN_QUANTITY_PER_GUEST * f64::from(r.actual_guests))
                .collect(),
            wastage_per_row: records.iter().map(|r| r.wastage_amount).collect(),
        }
    }

    /// Bounds for one sensitivity cell: a single budget broadcast to every
    /// row, with turnout and wastage rescaled and rounded to whole units
    /// before the demand floor is applied.
    pub fn adjusted(
        records: &[MenuItemRecord],
        budget: f64,
        guest_factor: f64,
        wastage_factor: f64,
    ) -> Self {
        Self {
            budget_per_row: vec![budget; records.len()],
            min_quantity_per_row: records
                .iter()
                .map(|r| {
                    let adjusted_guests = (f64::from(r.actual_guests) * guest_factor).round();
                    MIN_QUANTITY_PER_GUEST * adjusted_guests
                })
                .collect(),
            wastage_per_row: records
                .iter()
                .map(|r| (r.wastage_amount * wastage_factor).round())
                .collect(),
        }
    }

    pub fn to_scenario(&self) -> LpScenario {
        LpScenario::from_bounds(
            &self.budget_per_row,
            &self.min_quantity_per_row,
            &self.wastage_per_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PricingTier;

    fn sample_records() -> Vec<MenuItemRecord> {
        vec![
            MenuItemRecord::new(
                "Meat".to_string(),
                "Corporate".to_string(),
                100,
                PricingTier::Low,
                10.0,
            ),
            MenuItemRecord::new(
                "Dairy".to_string(),
                "Wedding".to_string(),
                50,
                PricingTier::High,
                5.0,
            ),
        ]
    }

    #[test]
    fn test_nominal_bounds() {
        let bounds = ScenarioBounds::nominal(&sample_records());
        assert_eq!(bounds.budget_per_row, vec![20000.0, 30000.0]);
        assert_eq!(bounds.min_quantity_per_row, vec![45.0, 22.5]);
        assert_eq!(bounds.wastage_per_row, vec![10.0, 5.0]);
    }

    #[test]
    fn test_adjusted_bounds() {
        let bounds = ScenarioBounds::adjusted(&sample_records(), 300.0, 0.2, 0.7);
        assert_eq!(bounds.budget_per_row, vec![300.0, 300.0]);
        // round(90 × 0.2) = 18, round(45 × 0.2) = 9
        assert_eq!(bounds.min_quantity_per_row, vec![9.0, 4.5]);
        // round(10 × 0.7) = 7, round(5 × 0.7) = 4
        assert_eq!(bounds.wastage_per_row, vec![7.0, 4.0]);
    }

    #[test]
    fn test_to_scenario_carries_bounds_through() {
        let scenario = ScenarioBounds::nominal(&sample_records()).to_scenario();
        assert_eq!(scenario.objective, vec![10.0, 5.0]);
        assert_eq!(scenario.bounds, vec![20000.0, 30000.0, -45.0, -22.5]);
        assert_eq!(scenario.num_constraints(), 4);
    }
}
