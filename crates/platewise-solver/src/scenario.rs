use thiserror::Error;

/// A scenario contained a NaN or infinite value and cannot be solved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("non-finite {entry} at index {index}")]
pub struct InvalidScenarioError {
    /// Which part of the scenario the bad value was found in
    pub entry: &'static str,
    /// Offset of the bad value within that part
    pub index: usize,
}

/// One solver-ready linear program:
/// minimize `objective · x` subject to `constraints · x <= bounds`, `x >= 0`.
///
/// Scenarios are built fresh for every solve and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LpScenario {
    /// Objective coefficients, one per decision variable
    pub objective: Vec<f64>,
    /// Inequality rows; `from_bounds` produces `2n` rows of `n` coefficients
    pub constraints: Vec<Vec<f64>>,
    /// Right-hand side, one entry per constraint row
    pub bounds: Vec<f64>,
}

impl LpScenario {
    /// Assemble the per-row bound form shared by every preparation scenario:
    /// an identity block enforcing `x_i <= budget[i]` stacked on a negated
    /// identity block enforcing `x_i >= min_quantity[i]`, with the wastage
    /// coefficients as the objective.
    ///
    /// All three slices must have the same length.
    pub fn from_bounds(budget: &[f64], min_quantity: &[f64], wastage: &[f64]) -> Self {
        let n = wastage.len();
        debug_assert_eq!(budget.len(), n);
        debug_assert_eq!(min_quantity.len(), n);

        let mut constraints = Vec::with_capacity(2 * n);
        for i in 0..n {
            let mut row = vec![0.0; n];
            row[i] = 1.0;
            constraints.push(row);
        }
        for i in 0..n {
            let mut row = vec![0.0; n];
            row[i] = -1.0;
            constraints.push(row);
        }

        let mut bounds = Vec::with_capacity(2 * n);
        bounds.extend_from_slice(budget);
        bounds.extend(min_quantity.iter().map(|m| -m));

        Self {
            objective: wastage.to_vec(),
            constraints,
            bounds,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Reject scenarios containing NaN or infinite data. Sweep drivers call
    /// this before solving and skip the scenario on failure; the nominal
    /// driver solves unchecked.
    pub fn validate(&self) -> Result<(), InvalidScenarioError> {
        if let Some(index) = self.objective.iter().position(|v| !v.is_finite()) {
            return Err(InvalidScenarioError {
                entry: "objective coefficient",
                index,
            });
        }
        for (index, row) in self.constraints.iter().enumerate() {
            if row.iter().any(|v| !v.is_finite()) {
                return Err(InvalidScenarioError {
                    entry: "constraint row",
                    index,
                });
            }
        }
        if let Some(index) = self.bounds.iter().position(|v| !v.is_finite()) {
            return Err(InvalidScenarioError {
                entry: "bound",
                index,
            });
        }
        Ok(())
    }
}
