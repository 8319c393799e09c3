//! 수요 → 장비 구성 → 투자 평가 → 권고까지 한 번에 계산하는 파이프라인.
//!
//! 입력이 바뀌면 새 입력으로 다시 호출한다. 내부 상태는 없다.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::demand::{demand_increase_percent, DemandError, DemandSeries};
use crate::equipment::{EquipmentMix, FleetSnapshot, PriceTable};
use crate::finance::{
    evaluate_scenario, Payback, RiskLevel, Scenario, ScenarioError, ScenarioEvaluationInput,
};
use crate::fleet::{annual_reliability_loss, investment_cost, recommend_mix, ReliabilityProfile};
use crate::market::{MarketGap, Region, Sector};
use crate::recommendation::{synthesize, Advisory};

/// 파이프라인 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// 수요 시계열 오류
    Demand(DemandError),
    /// 시나리오 값 오류
    Scenario(ScenarioError),
    /// 요청한 지역/섹터와 시계열이 다름
    SeriesMismatch {
        expected: (Region, Sector),
        found: (Region, Sector),
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Demand(e) => write!(f, "수요 모델 오류: {e}"),
            SimulationError::Scenario(e) => write!(f, "시나리오 오류: {e}"),
            SimulationError::SeriesMismatch { expected, found } => write!(
                f,
                "시계열 불일치: 요청 {} / {}, 입력 {} / {}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<DemandError> for SimulationError {
    fn from(value: DemandError) -> Self {
        SimulationError::Demand(value)
    }
}

impl From<ScenarioError> for SimulationError {
    fn from(value: ScenarioError) -> Self {
        SimulationError::Scenario(value)
    }
}

/// 차량 투자 시뮬레이션 입력.
#[derive(Debug, Clone, Copy)]
pub struct FleetSimulationInput<'a> {
    pub region: Region,
    pub sector: Sector,
    pub series: &'a DemandSeries,
    pub fleet: &'a FleetSnapshot,
    pub prices: &'a PriceTable,
    pub reliability: &'a [ReliabilityProfile],
    pub scenario: Scenario,
    pub market_gap: MarketGap,
}

/// 시뮬레이션 결과. 저장하지 않으며 입력만으로 결정된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 수요 증가율 [%]. 기준값이 0이면 None.
    pub demand_increase_percent: Option<f64>,
    pub projected_avg_demand: f64,
    /// 추가 구매 추천
    pub recommended: EquipmentMix,
    /// 추천 반영 후 보유 현황
    pub projected_fleet: FleetSnapshot,
    /// 시나리오 반영 전 취득비
    pub base_cost: f64,
    /// 인플레이션 반영 취득비
    pub adjusted_cost: f64,
    pub monthly_net: f64,
    pub payback: Payback,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// 연간 고장 손실 추정
    pub annual_reliability_loss: f64,
    pub advisories: Vec<Advisory>,
}

impl SimulationResult {
    /// 회수 기간을 개월 수로. 회수 불가는 센티넬 값.
    pub fn roi_months(&self, cfg: &EngineConfig) -> u32 {
        self.payback.as_months_or_sentinel(cfg.payback_never_sentinel)
    }
}

/// 차량 투자 시나리오를 끝까지 계산한다.
pub fn simulate_fleet(
    input: &FleetSimulationInput<'_>,
    cfg: &EngineConfig,
) -> Result<SimulationResult, SimulationError> {
    let series = input.series;
    if (series.region, series.sector) != (input.region, input.sector) {
        return Err(SimulationError::SeriesMismatch {
            expected: (input.region, input.sector),
            found: (series.region, series.sector),
        });
    }
    input.scenario.validate()?;

    let mut pipeline_notes = Vec::new();
    let demand_increase = match demand_increase_percent(series) {
        Ok(v) => Some(v),
        Err(DemandError::ZeroBaseline) => {
            warn!(region = %input.region, sector = %input.sector, "zero demand baseline");
            pipeline_notes.push(Advisory::NoGrowthSignal);
            None
        }
        Err(e) => return Err(e.into()),
    };
    let increase = demand_increase.unwrap_or(0.0);
    let projected_avg_demand = series.average_projected()?;

    let recommended = recommend_mix(input.region, input.sector, increase, &input.market_gap);
    let base_cost = investment_cost(&recommended, input.prices);
    let evaluation = evaluate_scenario(
        ScenarioEvaluationInput {
            base_cost,
            scenario: input.scenario,
            projected_avg_demand,
            demand_increase_percent: increase,
            capacity_gap_units: input.market_gap.gap,
        },
        cfg,
    )?;
    let reliability_loss = annual_reliability_loss(&recommended, input.reliability);

    let mut advisories = synthesize(
        &recommended,
        &input.market_gap,
        input.reliability,
        input.region,
        input.sector,
    );
    advisories.extend(pipeline_notes);
    if evaluation.payback == Payback::Never {
        advisories.push(Advisory::PaybackNever);
    }
    if evaluation.risk_level == RiskLevel::High {
        advisories.push(Advisory::HighRisk {
            score: evaluation.risk_score,
        });
    }

    info!(
        region = %input.region,
        sector = %input.sector,
        base_cost,
        adjusted_cost = evaluation.adjusted_cost,
        risk = %evaluation.risk_level,
        advisories = advisories.len(),
        "fleet simulation complete"
    );

    Ok(SimulationResult {
        demand_increase_percent: demand_increase,
        projected_avg_demand,
        projected_fleet: input.fleet.with_additions(&recommended),
        recommended,
        base_cost,
        adjusted_cost: evaluation.adjusted_cost,
        monthly_net: evaluation.monthly_net,
        payback: evaluation.payback,
        risk_score: evaluation.risk_score,
        risk_level: evaluation.risk_level,
        annual_reliability_loss: reliability_loss,
        advisories,
    })
}
