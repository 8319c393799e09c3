use fleet_planning_toolbox::demand::cagr;
use fleet_planning_toolbox::equipment::TrailerClass;
use fleet_planning_toolbox::finance::{risk_level_for_score, risk_score, Scenario};
use fleet_planning_toolbox::fleet::recommend_mix;
use fleet_planning_toolbox::market::{MarketGap, Region, Sector};
use fleet_planning_toolbox::warehouse::{project_capacity, ProjectionInput};
use proptest::prelude::*;

fn any_region() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

fn any_sector() -> impl Strategy<Value = Sector> {
    prop::sample::select(Sector::ALL.to_vec())
}

proptest! {
    #[test]
    fn cagr_of_flat_series_is_zero(v in 0.1f64..1e6, n in 1u32..30) {
        prop_assert!(cagr(v, v, n).abs() < 1e-12);
    }

    #[test]
    fn risk_never_decreases_with_inflation(
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        fx in 1.0f64..60.0,
        interest in 0.0f64..1.0,
        demand in -50.0f64..100.0,
        gap in 0.0f64..60.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = risk_score(&Scenario::new(lo, fx, interest), demand, gap);
        let high = risk_score(&Scenario::new(hi, fx, interest), demand, gap);
        prop_assert!(low <= high);
        prop_assert!(risk_level_for_score(low) <= risk_level_for_score(high));
    }

    #[test]
    fn risk_never_decreases_with_interest_or_fx(
        inflation in 0.0f64..1.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        fx_a in 1.0f64..60.0,
        fx_b in 1.0f64..60.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            risk_score(&Scenario::new(inflation, 30.0, lo), 10.0, 0.0)
                <= risk_score(&Scenario::new(inflation, 30.0, hi), 10.0, 0.0)
        );
        let (fx_lo, fx_hi) = if fx_a <= fx_b { (fx_a, fx_b) } else { (fx_b, fx_a) };
        prop_assert!(
            risk_score(&Scenario::new(inflation, fx_lo, 0.3), 10.0, 0.0)
                <= risk_score(&Scenario::new(inflation, fx_hi, 0.3), 10.0, 0.0)
        );
    }

    #[test]
    fn growth_guarantees_some_equipment(
        region in any_region(),
        sector in any_sector(),
        increase in 0.01f64..500.0,
    ) {
        let mix = recommend_mix(region, sector, increase, &MarketGap::none());
        prop_assert!(mix.total_trailers() >= 2);
        prop_assert!(mix.total_tractors() >= 1);
    }

    #[test]
    fn marmara_frigo_below_other_regions(increase in 0.01f64..500.0) {
        let marmara = recommend_mix(Region::Marmara, Sector::FoodFruit, increase, &MarketGap::none());
        let akdeniz = recommend_mix(Region::Akdeniz, Sector::FoodFruit, increase, &MarketGap::none());
        prop_assert!(marmara.trailer(TrailerClass::Frigo) < akdeniz.trailer(TrailerClass::Frigo));
    }

    #[test]
    fn utilization_is_capped(
        util in 0.0f64..100.0,
        growth in -0.5f64..1.0,
        additional in 0.0f64..10_000.0,
    ) {
        let p = project_capacity(&ProjectionInput {
            capacity_sqm: 5_000.0,
            utilization_percent: util,
            growth_rate: growth,
            additional_capacity_sqm: additional,
            start_year: 2025,
            end_year: 2035,
        }).unwrap();
        prop_assert_eq!(p.yearly.len(), 10);
        prop_assert!(p.yearly.iter().all(|r| (0.0..=100.0).contains(&r.utilization_percent)));
    }
}
