//! 창고 용량 예측 모듈.

pub mod capacity_projection;

pub use capacity_projection::*;
