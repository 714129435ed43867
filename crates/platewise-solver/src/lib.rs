mod adapter;
mod result;
mod scenario;

pub use adapter::LpSolver;
pub use result::{LpResult, LpStatus};
pub use scenario::{InvalidScenarioError, LpScenario};
