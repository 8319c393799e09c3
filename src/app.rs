use std::path::Path;

use crate::config::{self, Config};
use crate::demand::DemandError;
use crate::finance::{
    evaluate_purchase_timing, PurchaseTimingError, PurchaseTimingInput, PurchaseTimingResult,
    ScenarioKind,
};
use crate::i18n::{self, Translator};
use crate::market::{Region, Sector};
use crate::reference_db;
use crate::simulation::{simulate_fleet, FleetSimulationInput, SimulationError, SimulationResult};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::warehouse::{project_depot, CapacityProjection, Depot, ProjectionError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 수요 모델 오류
    Demand(DemandError),
    /// 시뮬레이션 오류
    Simulation(SimulationError),
    /// 구매 시점 계산 오류
    PurchaseTiming(PurchaseTimingError),
    /// 창고 예측 오류
    Projection(ProjectionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Demand(e) => write!(f, "수요 모델 오류: {e}"),
            AppError::Simulation(e) => write!(f, "시뮬레이션 오류: {e}"),
            AppError::PurchaseTiming(e) => write!(f, "구매 시점 계산 오류: {e}"),
            AppError::Projection(e) => write!(f, "창고 예측 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DemandError> for AppError {
    fn from(value: DemandError) -> Self {
        AppError::Demand(value)
    }
}

impl From<SimulationError> for AppError {
    fn from(value: SimulationError) -> Self {
        AppError::Simulation(value)
    }
}

impl From<PurchaseTimingError> for AppError {
    fn from(value: PurchaseTimingError) -> Self {
        AppError::PurchaseTiming(value)
    }
}

impl From<ProjectionError> for AppError {
    fn from(value: ProjectionError) -> Self {
        AppError::Projection(value)
    }
}

/// 샘플 참조 데이터와 설정으로 차량 투자 시뮬레이션을 실행한다.
pub fn run_fleet(
    cfg: &Config,
    region: Region,
    sector: Sector,
    scenario: ScenarioKind,
) -> Result<SimulationResult, AppError> {
    let book = reference_db::demand_book();
    let series = book.find(region, sector)?;
    let fleet = reference_db::fleet_snapshot();
    let reliability = reference_db::reliability_profiles();
    let input = FleetSimulationInput {
        region,
        sector,
        series,
        fleet: &fleet,
        prices: &cfg.prices,
        reliability: &reliability,
        scenario: cfg.scenarios.get(scenario),
        market_gap: reference_db::frigo_market_gap(),
    };
    Ok(simulate_fleet(&input, &cfg.engine)?)
}

/// 구매 시점 판단을 실행한다.
pub fn run_timing(cfg: &Config, input: PurchaseTimingInput) -> Result<PurchaseTimingResult, AppError> {
    Ok(evaluate_purchase_timing(input, &cfg.engine)?)
}

/// 창고 이름으로 용량 예측을 실행한다. 종료 연도가 없으면 설정값을 쓴다.
pub fn run_warehouse(
    cfg: &Config,
    depot_name: &str,
    additional_capacity_sqm: f64,
    end_year: Option<i32>,
) -> Result<(Depot, CapacityProjection), AppError> {
    let depot = reference_db::find_depot(depot_name)?;
    let projection = project_depot(
        &depot,
        additional_capacity_sqm,
        end_year.unwrap_or(cfg.engine.horizon_end_year),
    )?;
    Ok((depot, projection))
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::FleetSimulation => ui_cli::handle_fleet(tr, config)?,
            MenuChoice::PurchaseTiming => ui_cli::handle_timing(tr, config)?,
            MenuChoice::WarehouseProjection => ui_cli::handle_warehouse(tr, config)?,
            MenuChoice::ScenarioPresets => ui_cli::print_presets(tr, config),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let lang = i18n::resolve_language("auto", config.language.as_deref());
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
