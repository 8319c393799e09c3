use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::market::{Region, Sector};

/// 수요 모델 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum DemandError {
    /// 과거 수요가 비어 있음
    EmptyHistorical,
    /// 예측 수요가 비어 있음
    EmptyProjected,
    /// 마지막 과거 수요가 0이라 증가율을 정의할 수 없음
    ZeroBaseline,
    /// 음수이거나 유한하지 않은 수요 값
    InvalidValue(f64),
    /// 증가율이 유한하지 않음(기준값이 지나치게 작음)
    NonFiniteIncrease,
    /// 해당 지역/섹터의 수요 시계열이 없음
    NotFound { region: Region, sector: Sector },
}

impl std::fmt::Display for DemandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandError::EmptyHistorical => write!(f, "과거 수요 값이 비어 있습니다."),
            DemandError::EmptyProjected => write!(f, "예측 수요 값이 비어 있습니다."),
            DemandError::ZeroBaseline => {
                write!(f, "마지막 과거 수요가 0이라 증가율을 계산할 수 없습니다.")
            }
            DemandError::InvalidValue(v) => {
                write!(f, "수요 값은 0 이상의 유한한 수여야 합니다: {v}")
            }
            DemandError::NonFiniteIncrease => write!(f, "수요 증가율이 유한하지 않습니다."),
            DemandError::NotFound { region, sector } => {
                write!(f, "수요 시계열 없음: {region} / {sector}")
            }
        }
    }
}

impl std::error::Error for DemandError {}

/// 지역/섹터별 과거 및 예측 수요.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSeries {
    pub region: Region,
    pub sector: Sector,
    pub historical: Vec<f64>,
    pub projected: Vec<f64>,
}

impl DemandSeries {
    pub fn new(region: Region, sector: Sector, historical: Vec<f64>, projected: Vec<f64>) -> Self {
        Self {
            region,
            sector,
            historical,
            projected,
        }
    }

    /// 모든 값이 0 이상의 유한한 수인지 확인한다.
    pub fn validate(&self) -> Result<(), DemandError> {
        match self
            .historical
            .iter()
            .chain(&self.projected)
            .find(|v| !(v.is_finite() && **v >= 0.0))
        {
            Some(v) => Err(DemandError::InvalidValue(*v)),
            None => Ok(()),
        }
    }

    /// 가장 최근 과거 수요.
    pub fn latest_historical(&self) -> Result<f64, DemandError> {
        self.historical
            .last()
            .copied()
            .ok_or(DemandError::EmptyHistorical)
    }

    /// 예측 수요 평균.
    pub fn average_projected(&self) -> Result<f64, DemandError> {
        if self.projected.is_empty() {
            return Err(DemandError::EmptyProjected);
        }
        Ok(self.projected.iter().sum::<f64>() / self.projected.len() as f64)
    }
}

/// 예측 평균이 마지막 과거 값 대비 몇 % 증가하는지 계산한다.
pub fn demand_increase_percent(series: &DemandSeries) -> Result<f64, DemandError> {
    series.validate()?;
    let last = series.latest_historical()?;
    let avg = series.average_projected()?;
    if last == 0.0 {
        return Err(DemandError::ZeroBaseline);
    }
    let increase = (avg - last) / last * 100.0;
    if !increase.is_finite() {
        return Err(DemandError::NonFiniteIncrease);
    }
    debug!(
        region = %series.region,
        sector = %series.sector,
        last,
        avg,
        increase,
        "demand increase"
    );
    Ok(increase)
}

/// 여러 수요 시계열을 (지역, 섹터)로 조회하는 묶음.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandBook {
    pub series: Vec<DemandSeries>,
}

impl DemandBook {
    pub fn new(series: Vec<DemandSeries>) -> Self {
        Self { series }
    }

    pub fn find(&self, region: Region, sector: Sector) -> Result<&DemandSeries, DemandError> {
        self.series
            .iter()
            .find(|s| s.region == region && s.sector == sector)
            .ok_or(DemandError::NotFound { region, sector })
    }
}
