use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::thresholds::{classify_by_thresholds, RiskLevel, ThresholdRule};
use crate::config::EngineConfig;

/// 구매 시점 판단.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseDecision {
    /// 지금 전량 구매
    BuyNow,
    /// 일부만 지금 구매
    Partial,
    /// 대기
    Wait,
}

impl fmt::Display for PurchaseDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PurchaseDecision::BuyNow => "BUY_NOW",
            PurchaseDecision::Partial => "PARTIAL",
            PurchaseDecision::Wait => "WAIT",
        };
        f.write_str(s)
    }
}

/// 구매 시점 계산 입력 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseTimingError {
    InvalidInput(&'static str),
}

impl fmt::Display for PurchaseTimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseTimingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for PurchaseTimingError {}

/// 구매 시점 계산 입력. 인플레이션은 % 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseTimingInput {
    /// 현재 인플레이션 [%]
    pub current_inflation: f64,
    /// 예상 인플레이션 [%]
    pub estimated_inflation: f64,
    /// 환율
    pub fx_rate: f64,
    /// 기준 가격
    pub base_price: f64,
}

/// 구매 시점 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseTimingResult {
    pub cost_now: f64,
    pub cost_later: f64,
    /// (나중 - 지금) / 지금 [%]
    pub difference_percent: f64,
    pub decision: PurchaseDecision,
    pub risk_level: RiskLevel,
}

const DECISION_RULES: [ThresholdRule<PurchaseDecision>; 2] = [
    ThresholdRule::above(15.0, PurchaseDecision::BuyNow),
    ThresholdRule::above(10.0, PurchaseDecision::Partial),
];
const RISK_RULES: [ThresholdRule<RiskLevel>; 2] = [
    ThresholdRule::above(20.0, RiskLevel::High),
    ThresholdRule::above(10.0, RiskLevel::Medium),
];

/// 지금 구매와 나중 구매의 비용을 비교해 구매 시점을 판단한다.
pub fn evaluate_purchase_timing(
    input: PurchaseTimingInput,
    cfg: &EngineConfig,
) -> Result<PurchaseTimingResult, PurchaseTimingError> {
    if !(input.base_price.is_finite() && input.base_price > 0.0) {
        return Err(PurchaseTimingError::InvalidInput(
            "기준 가격은 0보다 커야 합니다.",
        ));
    }
    if !(input.fx_rate.is_finite() && input.fx_rate > 0.0) {
        return Err(PurchaseTimingError::InvalidInput("환율은 0보다 커야 합니다."));
    }
    if !(cfg.reference_fx_rate.is_finite() && cfg.reference_fx_rate > 0.0) {
        return Err(PurchaseTimingError::InvalidInput(
            "기준 환율 설정은 0보다 커야 합니다.",
        ));
    }
    if !input.current_inflation.is_finite()
        || !input.estimated_inflation.is_finite()
        || input.current_inflation <= -100.0
        || input.estimated_inflation <= -100.0
    {
        return Err(PurchaseTimingError::InvalidInput(
            "인플레이션은 -100%보다 커야 합니다.",
        ));
    }

    let fx_factor = input.fx_rate / cfg.reference_fx_rate;
    let cost_now = input.base_price * fx_factor * (1.0 + input.current_inflation / 100.0);
    let cost_later = input.base_price * fx_factor * (1.0 + input.estimated_inflation / 100.0);
    let difference_percent = (cost_later - cost_now) / cost_now * 100.0;

    let decision = classify_by_thresholds(difference_percent, &DECISION_RULES, PurchaseDecision::Wait);
    let risk_level = classify_by_thresholds(difference_percent, &RISK_RULES, RiskLevel::Low);

    debug!(cost_now, cost_later, difference_percent, %decision, %risk_level, "purchase timing");

    Ok(PurchaseTimingResult {
        cost_now,
        cost_later,
        difference_percent,
        decision,
        risk_level,
    })
}
