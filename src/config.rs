use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::equipment::PriceTable;
use crate::finance::ScenarioPresets;
use crate::reference_db;

/// 계산식에 들어가는 기준 상수. 테스트에서 바꿔 넣을 수 있도록 설정으로 분리한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 수요 1단위당 월 매출
    pub revenue_per_unit: f64,
    /// 월 감가상각률(소수)
    pub monthly_depreciation_rate: f64,
    /// 구매 시점 비교의 기준 환율
    pub reference_fx_rate: f64,
    /// 회수 불가를 표시할 때 쓰는 개월 수
    pub payback_never_sentinel: u32,
    /// 창고 예측 종료 연도
    pub horizon_end_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            revenue_per_unit: 10_000.0,
            monthly_depreciation_rate: 0.02,
            reference_fx_rate: 28.0,
            payback_never_sentinel: 999,
            horizon_end_year: 2030,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.revenue_per_unit.is_finite() && self.revenue_per_unit >= 0.0) {
            return Err(ConfigError::Invalid("revenue_per_unit"));
        }
        if !(self.monthly_depreciation_rate.is_finite() && self.monthly_depreciation_rate >= 0.0) {
            return Err(ConfigError::Invalid("monthly_depreciation_rate"));
        }
        if !(self.reference_fx_rate.is_finite() && self.reference_fx_rate > 0.0) {
            return Err(ConfigError::Invalid("reference_fx_rate"));
        }
        Ok(())
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(ko/en/tr). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 외부 언어팩 디렉터리. 없으면 locales/ 와 내장 팩을 쓴다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    pub engine: EngineConfig,
    pub scenarios: ScenarioPresets,
    pub prices: PriceTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            language_pack_dir: None,
            engine: EngineConfig::default(),
            scenarios: ScenarioPresets::default(),
            prices: reference_db::price_table(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 허용 범위를 벗어난 설정 값
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Invalid(field) => write!(f, "잘못된 설정 값: {field}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.engine.validate()?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        parse_config(&content)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
