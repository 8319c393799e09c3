use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::demand::{cagr, compound};
use crate::recommendation::Severity;

/// 포화로 보는 가동률 [%].
pub const SATURATION_PERCENT: f64 = 100.0;
/// 한 번에 예측할 수 있는 최대 연수.
pub const MAX_HORIZON_YEARS: i64 = 100;

/// 창고 용량 예측 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// 입력값 오류
    InvalidInput(&'static str),
    /// 가동률 이력이 없음
    NoHistory(String),
    /// 해당 이름의 창고가 없음
    UnknownDepot(String),
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            ProjectionError::NoHistory(name) => write!(f, "가동률 이력이 없습니다: {name}"),
            ProjectionError::UnknownDepot(name) => write!(f, "알 수 없는 창고: {name}"),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// 특정 연도의 가동률 기록.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    pub year: i32,
    /// 가동률 [%] (0~100)
    pub utilization_percent: f64,
}

/// 창고와 연도별 가동률 이력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    pub name: String,
    /// 면적 [m²]
    pub capacity_sqm: f64,
    /// 연도 오름차순 가동률 이력
    pub history: Vec<UtilizationRecord>,
}

impl Depot {
    pub fn new(name: &str, capacity_sqm: f64, history: Vec<UtilizationRecord>) -> Self {
        Self {
            name: name.to_string(),
            capacity_sqm,
            history,
        }
    }

    /// 가장 최근 기록.
    pub fn latest(&self) -> Option<&UtilizationRecord> {
        self.history.last()
    }

    /// 첫 기록과 마지막 기록 사이 가동률 CAGR.
    pub fn growth_rate(&self) -> f64 {
        match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) => {
                let span = (last.year - first.year).max(0) as u32;
                cagr(first.utilization_percent, last.utilization_percent, span)
            }
            _ => 0.0,
        }
    }

    /// 최근 기록 연도부터 `end_year`까지 예측 입력을 만든다.
    pub fn projection_input(
        &self,
        additional_capacity_sqm: f64,
        end_year: i32,
    ) -> Result<ProjectionInput, ProjectionError> {
        let latest = self
            .latest()
            .ok_or_else(|| ProjectionError::NoHistory(self.name.clone()))?;
        Ok(ProjectionInput {
            capacity_sqm: self.capacity_sqm,
            utilization_percent: latest.utilization_percent,
            growth_rate: self.growth_rate(),
            additional_capacity_sqm,
            start_year: latest.year,
            end_year,
        })
    }
}

/// 용량 예측 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub capacity_sqm: f64,
    /// 현재 가동률 [%]
    pub utilization_percent: f64,
    /// 연 성장률(소수)
    pub growth_rate: f64,
    /// 증설 면적 [m²]
    pub additional_capacity_sqm: f64,
    /// 기준 연도(예측은 다음 해부터)
    pub start_year: i32,
    pub end_year: i32,
}

/// 연도별 예측 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: i32,
    /// 사용 면적 [m²]
    pub used: f64,
    /// 적용 용량 [m²]
    pub capacity: f64,
    /// 가동률 [%] (최대 100)
    pub utilization_percent: f64,
}

/// 증설 효과 판단.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityOutlook {
    /// 증설 없이 기간 내 포화
    SaturationAhead,
    /// 증설 없이 기간 내 여유
    Comfortable,
    /// 증설로 기간 내 포화 해소
    ExpansionResolves,
    /// 증설로 5년 이상 연장
    ExpansionStrong,
    /// 증설로 2~4년 연장
    ExpansionModerate,
    /// 증설 효과 2년 미만
    ExpansionInsufficient,
}

impl CapacityOutlook {
    pub fn severity(&self) -> Severity {
        match self {
            CapacityOutlook::SaturationAhead => Severity::Warning,
            CapacityOutlook::Comfortable => Severity::Info,
            CapacityOutlook::ExpansionResolves => Severity::Success,
            CapacityOutlook::ExpansionStrong => Severity::Success,
            CapacityOutlook::ExpansionModerate => Severity::Info,
            CapacityOutlook::ExpansionInsufficient => Severity::Warning,
        }
    }
}

/// 용량 예측 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityProjection {
    /// 증설 반영 연도별 값
    pub yearly: Vec<YearProjection>,
    /// 증설 반영 포화 연도
    pub saturation_year: Option<i32>,
    /// 현재 용량 기준 포화 연도
    pub baseline_saturation_year: Option<i32>,
    /// 증설로 늦춰진 연수. 증설 후 포화가 없으면 None.
    pub years_gained: Option<i32>,
    pub outlook: CapacityOutlook,
}

fn validate(input: &ProjectionInput) -> Result<(), ProjectionError> {
    if !(input.capacity_sqm.is_finite() && input.capacity_sqm > 0.0) {
        return Err(ProjectionError::InvalidInput("용량은 0보다 커야 합니다."));
    }
    if !(0.0..=100.0).contains(&input.utilization_percent) {
        return Err(ProjectionError::InvalidInput(
            "가동률은 0 ~ 100% 사이여야 합니다.",
        ));
    }
    if !(input.additional_capacity_sqm.is_finite() && input.additional_capacity_sqm >= 0.0) {
        return Err(ProjectionError::InvalidInput("증설 면적은 0 이상이어야 합니다."));
    }
    if !input.growth_rate.is_finite() {
        return Err(ProjectionError::InvalidInput("성장률이 유한하지 않습니다."));
    }
    if input.end_year < input.start_year {
        return Err(ProjectionError::InvalidInput(
            "종료 연도는 기준 연도보다 빠를 수 없습니다.",
        ));
    }
    if i64::from(input.end_year) - i64::from(input.start_year) > MAX_HORIZON_YEARS {
        return Err(ProjectionError::InvalidInput(
            "예측 기간은 100년을 넘을 수 없습니다.",
        ));
    }
    if input.start_year.checked_add(1).is_none() {
        return Err(ProjectionError::InvalidInput("기준 연도가 너무 큽니다."));
    }
    Ok(())
}

/// 주어진 용량으로 연도별 가동률을 계산한다.
fn yearly_rows(input: &ProjectionInput, capacity: f64) -> Vec<YearProjection> {
    let current_used = (input.capacity_sqm * input.utilization_percent / 100.0).round();
    // validate()가 start_year + 1 overflow를 막는다
    let first_year = input.start_year.saturating_add(1);
    (first_year..=input.end_year)
        .map(|year| {
            let elapsed = (year - input.start_year) as u32;
            let used = compound(current_used, input.growth_rate, elapsed).round();
            let utilization_percent = (used / capacity * 100.0).round().min(SATURATION_PERCENT);
            YearProjection {
                year,
                used,
                capacity,
                utilization_percent,
            }
        })
        .collect()
}

fn first_saturation(rows: &[YearProjection]) -> Option<i32> {
    rows.iter()
        .find(|r| r.utilization_percent >= SATURATION_PERCENT)
        .map(|r| r.year)
}

/// 증설 여부와 연장 연수로 예측 결과를 분류한다.
pub fn classify_outlook(
    expanded: bool,
    saturation_year: Option<i32>,
    years_gained: Option<i32>,
) -> CapacityOutlook {
    if !expanded {
        return match saturation_year {
            Some(_) => CapacityOutlook::SaturationAhead,
            None => CapacityOutlook::Comfortable,
        };
    }
    match (saturation_year, years_gained) {
        (None, _) => CapacityOutlook::ExpansionResolves,
        (Some(_), Some(g)) if g >= 5 => CapacityOutlook::ExpansionStrong,
        (Some(_), Some(g)) if g >= 2 => CapacityOutlook::ExpansionModerate,
        (Some(_), _) => CapacityOutlook::ExpansionInsufficient,
    }
}

/// 복합 성장 가정으로 창고 가동률을 예측하고 포화 연도를 찾는다.
pub fn project_capacity(input: &ProjectionInput) -> Result<CapacityProjection, ProjectionError> {
    validate(input)?;

    let new_capacity = input.capacity_sqm + input.additional_capacity_sqm;
    let yearly = yearly_rows(input, new_capacity);
    let saturation_year = first_saturation(&yearly);
    let baseline_saturation_year = first_saturation(&yearly_rows(input, input.capacity_sqm));

    let years_gained = match (baseline_saturation_year, saturation_year) {
        (Some(base), Some(expanded)) => Some(expanded - base),
        _ => None,
    };
    let expanded = input.additional_capacity_sqm > 0.0;
    let outlook = classify_outlook(expanded, saturation_year, years_gained);

    if outlook.severity() == Severity::Warning {
        warn!(?saturation_year, ?years_gained, ?outlook, "depot saturation ahead");
    } else {
        debug!(?saturation_year, ?years_gained, ?outlook, "depot projection");
    }

    Ok(CapacityProjection {
        yearly,
        saturation_year,
        baseline_saturation_year,
        years_gained,
        outlook,
    })
}

/// 창고 이력에서 성장률을 구해 `end_year`까지 예측한다.
pub fn project_depot(
    depot: &Depot,
    additional_capacity_sqm: f64,
    end_year: i32,
) -> Result<CapacityProjection, ProjectionError> {
    let input = depot.projection_input(additional_capacity_sqm, end_year)?;
    project_capacity(&input)
}
