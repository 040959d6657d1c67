//! 온수 바닥난방(UFH) 코일 길이 계산 모듈 모음.
//! 유체 물성, 마찰계수, 공급관 열손실, 코일 수력 계산(이분법), 관경 스윕으로 구성한다.

pub mod feed_loss;
pub mod fluid_props;
pub mod friction;
pub mod input;
pub mod loop_solver;
pub mod sweep;

pub use feed_loss::{feed_loss, FeedLossInput, FeedLossResult};
pub use fluid_props::{FluidKind, FluidProperties};
pub use friction::friction_factor;
pub use input::{
    summarize, CalculationInput, HeatDemandSummary, HeatMode, InsulationPreset, InsulationSpec,
    LAYING_STEP_CHOICES_MM,
};
pub use loop_solver::{
    solve_max_length, BindingConstraint, DiameterResult, LoopHydraulics, OperatingPoint,
};
pub use sweep::{evaluate, DEFAULT_DIAMETERS_MM, OFFERED_DIAMETERS_MM};
