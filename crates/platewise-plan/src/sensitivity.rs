use platewise_solver::{LpSolver, LpStatus};
use tracing::{debug, warn};

use crate::record::MenuItemRecord;
use crate::scenario::ScenarioBounds;

/// Candidate values swept over budget, guest turnout, and wastage rate.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub budgets: Vec<f64>,
    pub guest_factors: Vec<f64>,
    pub wastage_factors: Vec<f64>,
}

impl Default for SweepGrid {
    /// The standard grid: budgets 300..=1000 by 100, turnout factors
    /// 0.2..1.2 by 0.2, wastage factors 0.5..1.6 by 0.2.
    fn default() -> Self {
        Self {
            budgets: grid_points(300.0, 1001.0, 100.0),
            guest_factors: grid_points(0.2, 1.2, 0.2),
            wastage_factors: grid_points(0.5, 1.6, 0.2),
        }
    }
}

impl SweepGrid {
    /// Number of combinations in the full Cartesian product.
    pub fn len(&self) -> usize {
        self.budgets.len() * self.guest_factors.len() * self.wastage_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evenly spaced values from `start` up to but excluding `stop`, generated as
/// `start + i × step` so repeated addition error cannot creep in.
fn grid_points(start: f64, stop: f64, step: f64) -> Vec<f64> {
    debug_assert!(step > 0.0);
    let mut points = Vec::new();
    for i in 0.. {
        let value = start + f64::from(i) * step;
        if value >= stop {
            break;
        }
        points.push(value);
    }
    points
}

/// One grid point's recorded outcome.
#[derive(Debug, Clone)]
pub struct SensitivityCell {
    pub budget: f64,
    pub guest_factor: f64,
    pub wastage_factor: f64,
    /// Objective at the optimum; `None` when the cell did not solve to
    /// optimality.
    pub optimal_wastage: Option<f64>,
    /// Internal solve status. Backend failures stay distinct here even
    /// though the report label folds them into "Infeasible".
    pub status: LpStatus,
}

impl SensitivityCell {
    /// Label used in the sweep artifact, which keeps a two-value status
    /// vocabulary.
    pub fn status_label(&self) -> &'static str {
        match self.status {
            LpStatus::Optimal => "Optimal",
            LpStatus::Infeasible | LpStatus::SolverError => "Infeasible",
        }
    }
}

/// Solve every (budget, guest factor, wastage factor) combination, budgets
/// outermost and wastage factors innermost. Cells whose scenario data is not
/// finite are skipped entirely, so the result can be shorter than the full
/// product; every other cell is recorded in grid order.
pub fn run_sweep(records: &[MenuItemRecord], grid: &SweepGrid) -> Vec<SensitivityCell> {
    let solver = LpSolver::new();
    let mut cells = Vec::with_capacity(grid.len());

    for &budget in &grid.budgets {
        for &guest_factor in &grid.guest_factors {
            for &wastage_factor in &grid.wastage_factors {
                let scenario = ScenarioBounds::adjusted(records, budget, guest_factor, wastage_factor)
                    .to_scenario();
                if let Err(err) = scenario.validate() {
                    warn!(budget, guest_factor, wastage_factor, %err, "skipping scenario");
                    continue;
                }

                let result = solver.solve(&scenario);
                debug!(
                    budget,
                    guest_factor,
                    wastage_factor,
                    status = ?result.status,
                    "solved cell"
                );
                cells.push(SensitivityCell {
                    budget,
                    guest_factor,
                    wastage_factor,
                    optimal_wastage: result.objective,
                    status: result.status,
                });
            }
        }
    }

    cells
}
