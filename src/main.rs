use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fleet_planning_toolbox::finance::{PurchaseTimingInput, ScenarioKind};
use fleet_planning_toolbox::i18n::{self, Translator};
use fleet_planning_toolbox::market::{Region, Sector};
use fleet_planning_toolbox::{app, config, ui_cli};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// 물류 차량·창고 투자 시나리오 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 표시 언어 (ko, en, tr, auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 지역/섹터 차량 투자 시뮬레이션
    Fleet {
        region: Region,
        sector: Sector,
        #[arg(long, default_value = "base")]
        scenario: ScenarioKind,
    },
    /// 지금 살지 나중에 살지 판단
    Timing {
        /// 현재 인플레이션 [%]
        current_inflation: f64,
        /// 예상 인플레이션 [%]
        estimated_inflation: f64,
        /// 환율 (TRY/USD)
        fx_rate: f64,
        /// 기준 가격
        base_price: f64,
    },
    /// 창고 용량 포화 예측
    Warehouse {
        depot: String,
        /// 증설 면적 [m²]
        #[arg(long, default_value_t = 0.0)]
        additional: f64,
        /// 예측 종료 연도
        #[arg(long)]
        end_year: Option<i32>,
    },
    /// 시나리오 프리셋 출력
    Presets,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    debug!(lang = %lang, config = %cli.config.display(), "starting");
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => app::run(&mut cfg, &cli.config, &mut tr)?,
        Some(Command::Fleet {
            region,
            sector,
            scenario,
        }) => {
            let result = app::run_fleet(&cfg, region, sector, scenario)?;
            ui_cli::print_simulation(&tr, &cfg, &result);
        }
        Some(Command::Timing {
            current_inflation,
            estimated_inflation,
            fx_rate,
            base_price,
        }) => {
            let result = app::run_timing(
                &cfg,
                PurchaseTimingInput {
                    current_inflation,
                    estimated_inflation,
                    fx_rate,
                    base_price,
                },
            )?;
            ui_cli::print_timing(&tr, &result);
        }
        Some(Command::Warehouse {
            depot,
            additional,
            end_year,
        }) => {
            let (depot, projection) = app::run_warehouse(&cfg, &depot, additional, end_year)?;
            ui_cli::print_projection(&tr, &depot, &projection);
        }
        Some(Command::Presets) => ui_cli::print_presets(&tr, &cfg),
    }
    Ok(())
}
