use std::io::{self, Write};
use std::str::FromStr;

use crate::app::{self, AppError};
use crate::config::Config;
use crate::finance::{PurchaseDecision, PurchaseTimingInput, PurchaseTimingResult, RiskLevel, Scenario, ScenarioKind};
use crate::i18n::{keys, Translator};
use crate::market::{Region, Sector};
use crate::recommendation::Severity;
use crate::reference_db;
use crate::simulation::SimulationResult;
use crate::warehouse::{CapacityOutlook, CapacityProjection, Depot};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FleetSimulation,
    PurchaseTiming,
    WarehouseProjection,
    ScenarioPresets,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_FLEET,
        keys::MAIN_MENU_TIMING,
        keys::MAIN_MENU_WAREHOUSE,
        keys::MAIN_MENU_PRESETS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FleetSimulation),
            "2" => return Ok(MenuChoice::PurchaseTiming),
            "3" => return Ok(MenuChoice::WarehouseProjection),
            "4" => return Ok(MenuChoice::ScenarioPresets),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 차량 투자 시뮬레이션 메뉴를 처리한다.
pub fn handle_fleet(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLEET_HEADING));
    let region: Region = read_parsed(tr, tr.t(keys::PROMPT_REGION))?;
    let sector: Sector = read_parsed(tr, tr.t(keys::PROMPT_SECTOR))?;
    let scenario: ScenarioKind = read_parsed(tr, tr.t(keys::PROMPT_SCENARIO))?;
    match app::run_fleet(cfg, region, sector, scenario) {
        Ok(result) => print_simulation(tr, cfg, &result),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

/// 구매 시점 메뉴를 처리한다.
pub fn handle_timing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TIMING_HEADING));
    let input = PurchaseTimingInput {
        current_inflation: read_f64(tr, tr.t(keys::PROMPT_CURRENT_INFLATION))?,
        estimated_inflation: read_f64(tr, tr.t(keys::PROMPT_ESTIMATED_INFLATION))?,
        fx_rate: read_f64(tr, tr.t(keys::PROMPT_FX_RATE))?,
        base_price: read_f64(tr, tr.t(keys::PROMPT_BASE_PRICE))?,
    };
    match app::run_timing(cfg, input) {
        Ok(result) => print_timing(tr, &result),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

/// 창고 용량 예측 메뉴를 처리한다.
pub fn handle_warehouse(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WAREHOUSE_HEADING));
    for depot in reference_db::depots() {
        println!("  - {} ({:.0} m²)", depot.name, depot.capacity_sqm);
    }
    let name = read_line(tr.t(keys::PROMPT_DEPOT))?;
    let additional = read_f64(tr, tr.t(keys::PROMPT_ADDITIONAL_CAPACITY))?;
    let end_year: i32 = read_parsed(tr, tr.t(keys::PROMPT_END_YEAR))?;
    match app::run_warehouse(cfg, name.trim(), additional, Some(end_year)) {
        Ok((depot, projection)) => print_projection(tr, &depot, &projection),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), tr.language_code());
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => "ko",
                "2" => "en",
                "3" => "tr",
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(false);
                }
            };
            cfg.language = Some(lang.to_string());
            Ok(true)
        }
        "2" => {
            let scenario = Scenario::new(
                read_f64(tr, tr.t(keys::PROMPT_INFLATION_FRACTION))?,
                read_f64(tr, tr.t(keys::PROMPT_FX_RATE))?,
                read_f64(tr, tr.t(keys::PROMPT_INTEREST_FRACTION))?,
            );
            if let Err(e) = cfg.scenarios.set_custom(scenario) {
                print_error(tr, &e);
            }
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

/// 시나리오 프리셋 목록을 출력한다.
pub fn print_presets(tr: &Translator, cfg: &Config) {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    for kind in [
        ScenarioKind::Optimistic,
        ScenarioKind::Base,
        ScenarioKind::Pessimistic,
        ScenarioKind::Custom,
    ] {
        let s = cfg.scenarios.get(kind);
        println!(
            "  {:<12} inflation {:>5.1}%  fx {:>6.2}  interest {:>5.1}%",
            kind.name(),
            s.inflation * 100.0,
            s.fx_rate,
            s.interest * 100.0
        );
    }
}

pub fn print_simulation(tr: &Translator, cfg: &Config, result: &SimulationResult) {
    match result.demand_increase_percent {
        Some(p) => println!("{} {p:.2}%", tr.t(keys::RESULT_DEMAND_INCREASE)),
        None => println!(
            "{} {}",
            tr.t(keys::RESULT_DEMAND_INCREASE),
            tr.t(keys::RESULT_NO_GROWTH)
        ),
    }
    println!("{}", tr.t(keys::RESULT_RECOMMENDED));
    for (code, count) in result.recommended.entries() {
        println!("  {code:<12} +{count}");
    }
    println!("{} {:.0}", tr.t(keys::RESULT_BASE_COST), result.base_cost);
    println!("{} {:.0}", tr.t(keys::RESULT_ADJUSTED_COST), result.adjusted_cost);
    match result.payback.months() {
        Some(m) => println!("{} {m}", tr.t(keys::RESULT_PAYBACK)),
        None => println!(
            "{} {} ({})",
            tr.t(keys::RESULT_PAYBACK),
            tr.t(keys::RESULT_PAYBACK_NEVER),
            result.roi_months(&cfg.engine)
        ),
    }
    println!(
        "{} {} ({})",
        tr.t(keys::RESULT_RISK),
        risk_label(tr, result.risk_level),
        result.risk_score
    );
    println!(
        "{} {:.0}",
        tr.t(keys::RESULT_RELIABILITY_LOSS),
        result.annual_reliability_loss
    );
    println!("{}", tr.t(keys::RESULT_ADVISORIES));
    for advisory in &result.advisories {
        println!(
            "  [{}] {}",
            severity_label(tr, advisory.severity()),
            advisory.render(tr)
        );
    }
}

pub fn print_timing(tr: &Translator, result: &PurchaseTimingResult) {
    println!("{} {:.0}", tr.t(keys::RESULT_COST_NOW), result.cost_now);
    println!("{} {:.0}", tr.t(keys::RESULT_COST_LATER), result.cost_later);
    println!("{} {:.2}", tr.t(keys::RESULT_DIFFERENCE), result.difference_percent);
    let decision = match result.decision {
        PurchaseDecision::BuyNow => keys::DECISION_BUY_NOW,
        PurchaseDecision::Partial => keys::DECISION_PARTIAL,
        PurchaseDecision::Wait => keys::DECISION_WAIT,
    };
    println!(
        "{} {} ({})",
        tr.t(keys::RESULT_DECISION),
        tr.t(decision),
        result.decision
    );
    println!("{} {}", tr.t(keys::RESULT_RISK), risk_label(tr, result.risk_level));
}

pub fn print_projection(tr: &Translator, depot: &Depot, projection: &CapacityProjection) {
    println!("{} ({:.0} m²)", depot.name, depot.capacity_sqm);
    println!(
        "{} {:.2}%",
        tr.t(keys::RESULT_GROWTH_RATE),
        depot.growth_rate() * 100.0
    );
    for row in &projection.yearly {
        println!(
            "  {}  {:>8.0} / {:>8.0} m²  {:>5.0}%",
            row.year, row.used, row.capacity, row.utilization_percent
        );
    }
    match projection.saturation_year {
        Some(y) => println!("{} {y}", tr.t(keys::RESULT_SATURATION_YEAR)),
        None => println!(
            "{} {}",
            tr.t(keys::RESULT_SATURATION_YEAR),
            tr.t(keys::RESULT_NO_SATURATION)
        ),
    }
    if let Some(g) = projection.years_gained {
        println!("{} {g}", tr.t(keys::RESULT_YEARS_GAINED));
    }
    let outlook = match projection.outlook {
        CapacityOutlook::SaturationAhead => keys::OUTLOOK_SATURATION_AHEAD,
        CapacityOutlook::Comfortable => keys::OUTLOOK_COMFORTABLE,
        CapacityOutlook::ExpansionResolves => keys::OUTLOOK_EXPANSION_RESOLVES,
        CapacityOutlook::ExpansionStrong => keys::OUTLOOK_EXPANSION_STRONG,
        CapacityOutlook::ExpansionModerate => keys::OUTLOOK_EXPANSION_MODERATE,
        CapacityOutlook::ExpansionInsufficient => keys::OUTLOOK_EXPANSION_INSUFFICIENT,
    };
    println!(
        "[{}] {}",
        severity_label(tr, projection.outlook.severity()),
        tr.t(outlook)
    );
}

fn risk_label<'a>(tr: &'a Translator, level: RiskLevel) -> &'a str {
    tr.t(match level {
        RiskLevel::Low => keys::RISK_LOW,
        RiskLevel::Medium => keys::RISK_MEDIUM,
        RiskLevel::High => keys::RISK_HIGH,
    })
}

fn severity_label<'a>(tr: &'a Translator, severity: Severity) -> &'a str {
    tr.t(match severity {
        Severity::Info => keys::SEVERITY_INFO,
        Severity::Warning => keys::SEVERITY_WARNING,
        Severity::Success => keys::SEVERITY_SUCCESS,
    })
}

fn print_error(tr: &Translator, err: &dyn std::error::Error) {
    println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_parsed<T>(tr: &Translator, prompt: &str) -> Result<T, AppError>
where
    T: FromStr,
{
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
