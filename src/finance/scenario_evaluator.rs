use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scenario::{Scenario, ScenarioError};
use super::thresholds::{classify_by_thresholds, RiskLevel, ThresholdRule};
use crate::config::EngineConfig;

/// 투자 회수 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payback {
    /// n개월 후 회수
    Months(u32),
    /// 월 순익이 0 이하라 회수되지 않음
    Never,
}

impl Payback {
    pub fn months(&self) -> Option<u32> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Never => None,
        }
    }

    /// 표시용 값. 회수 불가는 설정된 센티넬(기본 999)로 바꾼다.
    pub fn as_months_or_sentinel(&self, sentinel: u32) -> u32 {
        self.months().unwrap_or(sentinel)
    }
}

/// 시나리오 평가 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioEvaluationInput {
    /// 시나리오 반영 전 취득비
    pub base_cost: f64,
    pub scenario: Scenario,
    /// 예측 수요 평균(월)
    pub projected_avg_demand: f64,
    /// 수요 증가율 [%]
    pub demand_increase_percent: f64,
    /// 장비 부족분 [대]
    pub capacity_gap_units: f64,
}

/// 시나리오 평가 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    /// 인플레이션 반영 취득비
    pub adjusted_cost: f64,
    pub monthly_revenue: f64,
    pub monthly_costs: f64,
    pub monthly_net: f64,
    pub payback: Payback,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

const INFLATION_POINTS: [ThresholdRule<u32>; 2] = [
    ThresholdRule::at_least(0.30, 2),
    ThresholdRule::at_least(0.25, 1),
];
const INTEREST_POINTS: [ThresholdRule<u32>; 2] = [
    ThresholdRule::at_least(0.55, 2),
    ThresholdRule::at_least(0.45, 1),
];
const FX_POINTS: [ThresholdRule<u32>; 1] = [ThresholdRule::at_least(38.0, 1)];
const GAP_POINTS: [ThresholdRule<u32>; 1] = [ThresholdRule::above(20.0, 1)];
const RISK_LEVELS: [ThresholdRule<RiskLevel>; 2] = [
    ThresholdRule::at_least(5.0, RiskLevel::High),
    ThresholdRule::at_least(3.0, RiskLevel::Medium),
];

/// 위험 점수. 각 항목은 독립적으로 더해진다.
pub fn risk_score(scenario: &Scenario, demand_increase_percent: f64, capacity_gap_units: f64) -> u32 {
    let weak_demand = if demand_increase_percent < 5.0 { 1 } else { 0 };
    classify_by_thresholds(scenario.inflation, &INFLATION_POINTS, 0)
        + classify_by_thresholds(scenario.interest, &INTEREST_POINTS, 0)
        + classify_by_thresholds(scenario.fx_rate, &FX_POINTS, 0)
        + weak_demand
        + classify_by_thresholds(capacity_gap_units, &GAP_POINTS, 0)
}

/// 점수를 위험 등급으로 바꾼다. 5점 이상 High, 3점 이상 Medium.
pub fn risk_level_for_score(score: u32) -> RiskLevel {
    classify_by_thresholds(score as f64, &RISK_LEVELS, RiskLevel::Low)
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidInput { field, value })
    }
}

/// 시나리오 하에서 투자 회수 기간과 위험 등급을 평가한다.
pub fn evaluate_scenario(
    input: ScenarioEvaluationInput,
    cfg: &EngineConfig,
) -> Result<ScenarioEvaluation, ScenarioError> {
    input.scenario.validate()?;
    non_negative("base_cost", input.base_cost)?;
    non_negative("projected_avg_demand", input.projected_avg_demand)?;
    let scenario = input.scenario;

    let adjusted_cost = input.base_cost * (1.0 + scenario.inflation);
    let monthly_revenue = input.projected_avg_demand * cfg.revenue_per_unit;
    let monthly_costs = adjusted_cost * (scenario.interest / 12.0)
        + input.base_cost * cfg.monthly_depreciation_rate;
    let monthly_net = monthly_revenue - monthly_costs;

    let payback = if monthly_net > 0.0 {
        Payback::Months((adjusted_cost / monthly_net).ceil() as u32)
    } else {
        Payback::Never
    };

    let risk_score = risk_score(
        &scenario,
        input.demand_increase_percent,
        input.capacity_gap_units,
    );
    let risk_level = risk_level_for_score(risk_score);

    debug!(
        adjusted_cost,
        monthly_net,
        ?payback,
        risk_score,
        %risk_level,
        "scenario evaluated"
    );

    Ok(ScenarioEvaluation {
        adjusted_cost,
        monthly_revenue,
        monthly_costs,
        monthly_net,
        payback,
        risk_score,
        risk_level,
    })
}
