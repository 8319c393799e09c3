//! 수요 시계열과 성장률 계산 모듈 모음.

pub mod demand_series;
pub mod growth_rate;

pub use demand_series::*;
pub use growth_rate::*;
