//! 차량 구성 추천, 투자비, 신뢰성 손실 계산 모듈 모음.

pub mod investment_cost;
pub mod mix_recommender;
pub mod reliability_loss;

pub use investment_cost::*;
pub use mix_recommender::*;
pub use reliability_loss::*;
