//! 거시경제 시나리오, 투자 평가, 구매 시점 판단 모듈 모음.

pub mod purchase_timing;
pub mod scenario;
pub mod scenario_evaluator;
pub mod thresholds;

pub use purchase_timing::*;
pub use scenario::*;
pub use scenario_evaluator::*;
pub use thresholds::*;
