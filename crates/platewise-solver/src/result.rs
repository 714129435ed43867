/// Outcome of a single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus {
    /// An optimal solution was found
    Optimal,
    /// No non-negative point satisfies the constraints
    Infeasible,
    /// The backend failed (unbounded ray, numerical breakdown, iteration limit)
    SolverError,
}

/// The result of solving one scenario. Owned by the driver that requested the
/// solve; a fresh result is produced for every scenario.
#[derive(Debug, Clone)]
pub struct LpResult {
    pub status: LpStatus,
    /// Optimal quantity per decision variable, aligned positionally with the
    /// scenario's columns. Empty unless optimal.
    pub values: Vec<f64>,
    /// Objective at the optimum; `None` unless optimal.
    pub objective: Option<f64>,
    /// Backend diagnostic for failed solves.
    pub message: Option<String>,
}

impl LpResult {
    pub fn optimal(values: Vec<f64>, objective: f64) -> Self {
        Self {
            status: LpStatus::Optimal,
            values,
            objective: Some(objective),
            message: None,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            status: LpStatus::Infeasible,
            values: Vec::new(),
            objective: None,
            message: None,
        }
    }

    pub fn solver_error(message: impl Into<String>) -> Self {
        Self {
            status: LpStatus::SolverError,
            values: Vec::new(),
            objective: None,
            message: Some(message.into()),
        }
    }
}
