pub mod dataset;
pub mod optimize;
pub mod record;
pub mod scenario;
pub mod sensitivity;

pub use dataset::{DatasetError, load_records, read_records};
pub use optimize::{OptimalPlan, OptimizeError, PlanLine, optimize};
pub use record::{
    MIN_QUANTITY_PER_GUEST, MenuItemRecord, NO_SHOW_RATE, PricingTier, UnknownTierError,
};
pub use scenario::ScenarioBounds;
pub use sensitivity::{SensitivityCell, SweepGrid, run_sweep};
