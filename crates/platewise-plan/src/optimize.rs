use platewise_solver::{LpSolver, LpStatus};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::record::MenuItemRecord;
use crate::scenario::ScenarioBounds;

/// The nominal solve ended without an optimum. There is no fallback; callers
/// report the failure and produce no plan artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    #[error("no feasible preparation plan exists")]
    Infeasible,
    #[error("solver failed: {0}")]
    Solver(String),
}

/// One prepared-quantity recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct PlanLine {
    pub food_type: String,
    pub event_type: String,
    /// Units to prepare, rounded to two decimals
    pub optimal_quantity: f64,
    pub wastage_per_unit: f64,
    pub cost_per_unit: u32,
}

/// The nominal optimum over the whole dataset, one line per record.
#[derive(Debug, Clone, Serialize)]
pub struct OptimalPlan {
    pub lines: Vec<PlanLine>,
    /// Total wastage at the optimum
    pub total_wastage: f64,
}

/// Solve the nominal scenario: budgets from each row's own price and booked
/// guest count, turnout and wastage taken as recorded.
pub fn optimize(records: &[MenuItemRecord]) -> Result<OptimalPlan, OptimizeError> {
    let scenario = ScenarioBounds::nominal(records).to_scenario();
    let result = LpSolver::new().solve(&scenario);

    let (values, total_wastage) = match (result.status, result.objective) {
        (LpStatus::Optimal, Some(objective)) => (result.values, objective),
        (LpStatus::Infeasible, _) => return Err(OptimizeError::Infeasible),
        _ => {
            return Err(OptimizeError::Solver(
                result.message.unwrap_or_else(|| "no diagnostic".to_string()),
            ));
        }
    };

    let lines = records
        .iter()
        .zip(&values)
        .map(|(record, &quantity)| PlanLine {
            food_type: record.food_type.clone(),
            event_type: record.event_type.clone(),
            optimal_quantity: (quantity * 100.0).round() / 100.0,
            wastage_per_unit: record.wastage_amount,
            cost_per_unit: record.cost_per_unit,
        })
        .collect();

    info!(total_wastage, "nominal optimization solved");
    Ok(OptimalPlan {
        lines,
        total_wastage,
    })
}
