use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 인플레이션/이자율 허용 상한(소수). 500%를 넘는 값은 입력 오류로 본다.
pub const MAX_RATE: f64 = 5.0;

/// 거시경제 가정 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 연 인플레이션(소수, 0.25 = 25%)
    pub inflation: f64,
    /// 환율 (TRY/USD)
    pub fx_rate: f64,
    /// 연 이자율(소수)
    pub interest: f64,
}

/// 시나리오 값 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// 인플레이션이 범위를 벗어남
    Inflation(f64),
    /// 이자율이 범위를 벗어남
    Interest(f64),
    /// 환율이 0 이하이거나 유한하지 않음
    FxRate(f64),
    /// 알 수 없는 프리셋 이름
    UnknownPreset(String),
    /// 평가 입력(취득비, 수요)이 음수이거나 유한하지 않음
    InvalidInput { field: &'static str, value: f64 },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Inflation(v) => {
                write!(f, "인플레이션은 0 ~ {MAX_RATE} 사이여야 합니다: {v}")
            }
            ScenarioError::Interest(v) => write!(f, "이자율은 0 ~ {MAX_RATE} 사이여야 합니다: {v}"),
            ScenarioError::FxRate(v) => write!(f, "환율은 0보다 커야 합니다: {v}"),
            ScenarioError::UnknownPreset(name) => write!(f, "알 수 없는 시나리오: {name}"),
            ScenarioError::InvalidInput { field, value } => {
                write!(f, "{field} 값은 0 이상의 유한한 수여야 합니다: {value}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

fn rate_in_range(v: f64) -> bool {
    v.is_finite() && (0.0..=MAX_RATE).contains(&v)
}

impl Scenario {
    pub const fn new(inflation: f64, fx_rate: f64, interest: f64) -> Self {
        Self {
            inflation,
            fx_rate,
            interest,
        }
    }

    /// 음수 인플레이션 등 범위를 벗어난 값을 거부한다.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !rate_in_range(self.inflation) {
            return Err(ScenarioError::Inflation(self.inflation));
        }
        if !rate_in_range(self.interest) {
            return Err(ScenarioError::Interest(self.interest));
        }
        if !self.fx_rate.is_finite() || self.fx_rate <= 0.0 {
            return Err(ScenarioError::FxRate(self.fx_rate));
        }
        Ok(())
    }
}

/// 시나리오 프리셋 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Optimistic,
    Base,
    Pessimistic,
    Custom,
}

impl ScenarioKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Optimistic => "optimistic",
            ScenarioKind::Base => "base",
            ScenarioKind::Pessimistic => "pessimistic",
            ScenarioKind::Custom => "custom",
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimistic" | "iyimser" => Ok(ScenarioKind::Optimistic),
            "base" | "baz" => Ok(ScenarioKind::Base),
            "pessimistic" | "kotumser" | "kötümser" => Ok(ScenarioKind::Pessimistic),
            "custom" | "ozel" | "özel" => Ok(ScenarioKind::Custom),
            other => Err(ScenarioError::UnknownPreset(other.to_string())),
        }
    }
}

/// 세 가지 기본 시나리오와 사용자 정의 시나리오.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioPresets {
    pub optimistic: Scenario,
    pub base: Scenario,
    pub pessimistic: Scenario,
    pub custom: Scenario,
}

impl Default for ScenarioPresets {
    fn default() -> Self {
        Self {
            optimistic: Scenario::new(0.20, 32.0, 0.40),
            base: Scenario::new(0.25, 34.5, 0.45),
            pessimistic: Scenario::new(0.35, 40.0, 0.55),
            custom: Scenario::new(0.25, 34.5, 0.45),
        }
    }
}

impl ScenarioPresets {
    pub fn get(&self, kind: ScenarioKind) -> Scenario {
        match kind {
            ScenarioKind::Optimistic => self.optimistic,
            ScenarioKind::Base => self.base,
            ScenarioKind::Pessimistic => self.pessimistic,
            ScenarioKind::Custom => self.custom,
        }
    }

    /// 사용자 정의 시나리오를 검증 후 교체한다.
    pub fn set_custom(&mut self, scenario: Scenario) -> Result<(), ScenarioError> {
        scenario.validate()?;
        self.custom = scenario;
        Ok(())
    }
}
