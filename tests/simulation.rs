use fleet_planning_toolbox::app;
use fleet_planning_toolbox::config::{Config, EngineConfig};
use fleet_planning_toolbox::demand::DemandSeries;
use fleet_planning_toolbox::equipment::{FleetSnapshot, TractorClass, TrailerClass};
use fleet_planning_toolbox::finance::{Payback, RiskLevel, Scenario, ScenarioError, ScenarioKind};
use fleet_planning_toolbox::fleet::investment_cost;
use fleet_planning_toolbox::i18n::Translator;
use fleet_planning_toolbox::market::{MarketGap, Region, Sector};
use fleet_planning_toolbox::recommendation::{synthesize, Advisory, Severity};
use fleet_planning_toolbox::reference_db;
use fleet_planning_toolbox::simulation::{simulate_fleet, FleetSimulationInput, SimulationError};

#[test]
fn marmara_heavy_base_scenario() {
    let cfg = Config::default();
    let r = app::run_fleet(&cfg, Region::Marmara, Sector::Heavy, ScenarioKind::Base).unwrap();

    assert!((r.demand_increase_percent.unwrap() - 15.0).abs() < 1e-9);
    assert_eq!(r.recommended.trailer(TrailerClass::Heavy), 2);
    assert_eq!(r.recommended.trailer(TrailerClass::Open), 1);
    assert_eq!(r.recommended.tractor(TractorClass::SixByFourHighHp), 2);
    assert_eq!(r.recommended.tractor(TractorClass::FourByTwo500Hp), 1);
    assert!((r.base_cost - 18_650_000.0).abs() < 1e-6);
    assert!((r.adjusted_cost - 23_312_500.0).abs() < 1e-6);
    assert_eq!(r.payback, Payback::Months(49));
    assert_eq!(r.roi_months(&cfg.engine), 49);
    assert_eq!(r.risk_score, 3);
    assert_eq!(r.risk_level, RiskLevel::Medium);

    // 비용은 추천 구성과 단가표로 다시 계산해도 같아야 한다
    assert_eq!(r.base_cost, investment_cost(&r.recommended, &cfg.prices));
    let inflation = cfg.scenarios.base.inflation;
    assert!((r.adjusted_cost / (1.0 + inflation) - r.base_cost).abs() < 1e-6);

    assert_eq!(
        r.advisories,
        vec![
            Advisory::HeavyTractorPurchase { units: 2 },
            Advisory::UnreliableBrand {
                brand: "Ford Trucks".into(),
                breakdown_rate: 0.06
            },
        ]
    );
    let owned = reference_db::fleet_snapshot().owned;
    assert_eq!(
        r.projected_fleet.owned.tractor(TractorClass::SixByFourHighHp),
        owned.tractor(TractorClass::SixByFourHighHp) + 2
    );
}

#[test]
fn marmara_food_fruit_advisory_order() {
    let cfg = Config::default();
    let r = app::run_fleet(&cfg, Region::Marmara, Sector::FoodFruit, ScenarioKind::Base).unwrap();
    // 억제된 1대 + 시장 부족분 2대
    assert_eq!(r.recommended.trailer(TrailerClass::Frigo), 3);
    assert_eq!(r.recommended.tractor(TractorClass::Kirkayak), 2);
    assert_eq!(
        r.advisories,
        vec![
            Advisory::MarmaraFrigoSuppressed,
            Advisory::MarketGapClosure { added: 2, gap: 35.0 },
            Advisory::KirkayakForProduce { units: 2 },
            Advisory::UnreliableBrand {
                brand: "Ford Trucks".into(),
                breakdown_rate: 0.06
            },
        ]
    );
}

#[test]
fn pessimistic_scenario_flags_high_risk_last() {
    let cfg = Config::default();
    let r = app::run_fleet(&cfg, Region::Marmara, Sector::Heavy, ScenarioKind::Pessimistic).unwrap();
    assert_eq!(r.risk_score, 6);
    assert_eq!(r.risk_level, RiskLevel::High);
    assert_eq!(r.advisories.last(), Some(&Advisory::HighRisk { score: 6 }));
}

#[test]
fn zero_baseline_becomes_no_growth_signal() {
    let series = DemandSeries::new(Region::Ege, Sector::Standard, vec![10.0, 0.0], vec![5.0]);
    let fleet = FleetSnapshot::default();
    let prices = reference_db::price_table();
    let input = FleetSimulationInput {
        region: Region::Ege,
        sector: Sector::Standard,
        series: &series,
        fleet: &fleet,
        prices: &prices,
        reliability: &[],
        scenario: Scenario::new(0.25, 34.5, 0.45),
        market_gap: MarketGap::none(),
    };
    let r = simulate_fleet(&input, &EngineConfig::default()).unwrap();
    assert_eq!(r.demand_increase_percent, None);
    assert!(r.recommended.is_empty());
    assert_eq!(r.base_cost, 0.0);
    assert_eq!(r.advisories, vec![Advisory::NoGrowthSignal]);
}

#[test]
fn mismatched_series_is_rejected() {
    let book = reference_db::demand_book();
    let series = book.find(Region::Ege, Sector::FoodFruit).unwrap();
    let fleet = reference_db::fleet_snapshot();
    let prices = reference_db::price_table();
    let input = FleetSimulationInput {
        region: Region::Marmara,
        sector: Sector::FoodFruit,
        series,
        fleet: &fleet,
        prices: &prices,
        reliability: &[],
        scenario: Scenario::new(0.25, 34.5, 0.45),
        market_gap: MarketGap::none(),
    };
    assert!(matches!(
        simulate_fleet(&input, &EngineConfig::default()),
        Err(SimulationError::SeriesMismatch { .. })
    ));

    let bad = FleetSimulationInput {
        region: Region::Ege,
        scenario: Scenario::new(-0.5, 34.5, 0.45),
        ..input
    };
    assert_eq!(
        simulate_fleet(&bad, &EngineConfig::default()),
        Err(SimulationError::Scenario(ScenarioError::Inflation(-0.5)))
    );
}

#[test]
fn missing_series_surfaces_as_error() {
    let cfg = Config::default();
    assert!(app::run_fleet(&cfg, Region::DoguAnadolu, Sector::Heavy, ScenarioKind::Base).is_err());
}

#[test]
fn standard_sector_recommends_tractor() {
    let gap = reference_db::frigo_market_gap();
    let mix = fleet_planning_toolbox::fleet::recommend_mix(Region::Ege, Sector::Standard, 20.0, &gap);
    let advisories = synthesize(&mix, &gap, &[], Region::Ege, Sector::Standard);
    assert_eq!(
        advisories,
        vec![
            Advisory::MarketGapClosure { added: 2, gap: 35.0 },
            Advisory::StandardTractor {
                units: mix.tractor(TractorClass::FourByTwo500Hp)
            },
        ]
    );
    assert_eq!(advisories[0].severity(), Severity::Success);
}

#[test]
fn advisories_render_in_each_language() {
    let a = Advisory::HeavyTractorPurchase { units: 2 };
    let en = Translator::new("en");
    assert_eq!(a.render(&en), "Buy 2 6x4 high-hp tractors for heavy-load demand.");

    let tr = Translator::new("tr");
    let gap = Advisory::MarketGapClosure { added: 2, gap: 35.0 };
    let text = gap.render(&tr);
    assert!(text.contains("35") && text.contains('2'), "{text}");

    let ko = Translator::new("ko");
    assert!(!a.render(&ko).contains("{units}"));
}

#[test]
fn invalid_demand_values_stop_the_pipeline() {
    let fleet = FleetSnapshot::default();
    let prices = reference_db::price_table();
    for series in [
        DemandSeries::new(Region::Ege, Sector::Standard, vec![f64::NAN], vec![100.0]),
        DemandSeries::new(Region::Ege, Sector::Standard, vec![1e-310], vec![1e300]),
    ] {
        let input = FleetSimulationInput {
            region: Region::Ege,
            sector: Sector::Standard,
            series: &series,
            fleet: &fleet,
            prices: &prices,
            reliability: &[],
            scenario: Scenario::new(0.25, 34.5, 0.45),
            market_gap: MarketGap::none(),
        };
        assert!(matches!(
            simulate_fleet(&input, &EngineConfig::default()),
            Err(SimulationError::Demand(_))
        ));
    }
}

#[test]
fn zero_baseline_with_overflowing_projection_is_rejected() {
    let series = DemandSeries::new(Region::Ege, Sector::Standard, vec![0.0], vec![1e308, 1e308]);
    let fleet = FleetSnapshot::default();
    let prices = reference_db::price_table();
    let input = FleetSimulationInput {
        region: Region::Ege,
        sector: Sector::Standard,
        series: &series,
        fleet: &fleet,
        prices: &prices,
        reliability: &[],
        scenario: Scenario::new(0.25, 34.5, 0.45),
        market_gap: MarketGap::none(),
    };
    assert!(matches!(
        simulate_fleet(&input, &EngineConfig::default()),
        Err(SimulationError::Scenario(ScenarioError::InvalidInput {
            field: "projected_avg_demand",
            ..
        }))
    ));
}

#[test]
fn invalid_custom_preset_surfaces_as_simulation_error() {
    let mut cfg = Config::default();
    cfg.scenarios.custom = Scenario::new(9.0, 34.5, 0.45);
    assert!(matches!(
        app::run_fleet(&cfg, Region::Marmara, Sector::Heavy, ScenarioKind::Custom),
        Err(app::AppError::Simulation(SimulationError::Scenario(
            ScenarioError::Inflation(_)
        )))
    ));
}

#[test]
fn warehouse_end_year_beyond_horizon_is_rejected() {
    let cfg = Config::default();
    assert!(matches!(
        app::run_warehouse(&cfg, "mersin", 0.0, Some(i32::MAX)),
        Err(app::AppError::Projection(_))
    ));
    let (_, projection) = app::run_warehouse(&cfg, "mersin", 0.0, Some(2027)).unwrap();
    assert_eq!(projection.yearly.len(), 2);
}
