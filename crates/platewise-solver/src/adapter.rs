use good_lp::solvers::clarabel::clarabel;
use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, Variable, constraint, variable, variables,
};

use crate::result::LpResult;
use crate::scenario::LpScenario;

/// Adapter over the Clarabel interior-point backend.
///
/// A single call is authoritative for a scenario; there are no retries and no
/// state carried between solves.
#[derive(Debug, Default)]
pub struct LpSolver;

impl LpSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve `minimize c·x  s.t.  A·x <= b, x >= 0`.
    ///
    /// Non-negativity comes from the variable definitions; every constraint
    /// row becomes one `<=` inequality.
    pub fn solve(&self, scenario: &LpScenario) -> LpResult {
        let mut vars = variables!();
        let xs: Vec<Variable> = (0..scenario.num_variables())
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let mut objective = Expression::from(0.0);
        for (&c, &x) in scenario.objective.iter().zip(&xs) {
            objective += c * x;
        }

        let mut model = vars.minimise(objective).using(clarabel);
        for (row, &rhs) in scenario.constraints.iter().zip(&scenario.bounds) {
            let mut lhs = Expression::from(0.0);
            for (&a, &x) in row.iter().zip(&xs) {
                if a != 0.0 {
                    lhs += a * x;
                }
            }
            model = model.with(constraint!(lhs <= rhs));
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = xs.iter().map(|&x| solution.value(x)).collect();
                // Recompute c·x from the returned point so the reported value
                // is exactly the objective the scenario defines.
                let objective = scenario
                    .objective
                    .iter()
                    .zip(&values)
                    .map(|(c, x)| c * x)
                    .sum();
                LpResult::optimal(values, objective)
            }
            Err(ResolutionError::Infeasible) => LpResult::infeasible(),
            Err(err) => LpResult::solver_error(err.to_string()),
        }
    }
}
