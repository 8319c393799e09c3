use fleet_planning_toolbox::equipment::{EquipmentMix, PriceTable, TractorClass, TrailerClass};
use fleet_planning_toolbox::fleet::{
    annual_reliability_loss, base_tractor_units, base_trailer_units, investment_cost,
    market_gap_frigo, recommend_mix, worst_brand, ReliabilityProfile,
};
use fleet_planning_toolbox::market::{MarketGap, Region, Sector};
use fleet_planning_toolbox::reference_db;

#[test]
fn base_units_round_up() {
    assert_eq!(base_trailer_units(15.0), 2);
    assert_eq!(base_tractor_units(15.0), 2);
    assert_eq!(base_trailer_units(10.0), 1);
    assert_eq!(base_tractor_units(8.1), 2);
    assert_eq!(base_trailer_units(0.0), 0);
    assert_eq!(base_tractor_units(-12.0), 0);
}

#[test]
fn heavy_mix_for_fifteen_percent() {
    let mix = recommend_mix(Region::Marmara, Sector::Heavy, 15.0, &MarketGap::none());
    assert_eq!(mix.trailer(TrailerClass::Heavy), 2);
    assert_eq!(mix.trailer(TrailerClass::Open), 1);
    assert_eq!(mix.tractor(TractorClass::SixByFourHighHp), 2);
    assert_eq!(mix.tractor(TractorClass::FourByTwo500Hp), 1);
    assert_eq!(mix.trailer(TrailerClass::Frigo), 0);
}

#[test]
fn heavy_sector_ignores_market_gap() {
    let gap = MarketGap::new(85.0, 120.0, 0.18);
    let with_gap = recommend_mix(Region::Marmara, Sector::Heavy, 15.0, &gap);
    let without = recommend_mix(Region::Marmara, Sector::Heavy, 15.0, &MarketGap::none());
    assert_eq!(with_gap, without);
    assert_eq!(market_gap_frigo(Sector::Heavy, &gap), 0);
}

#[test]
fn marmara_gets_fewer_frigo_than_ege() {
    for increase in [1.0, 11.1, 25.0, 60.0, 140.0] {
        let marmara = recommend_mix(Region::Marmara, Sector::FoodFruit, increase, &MarketGap::none());
        let ege = recommend_mix(Region::Ege, Sector::FoodFruit, increase, &MarketGap::none());
        assert!(
            marmara.trailer(TrailerClass::Frigo) < ege.trailer(TrailerClass::Frigo),
            "increase={increase}"
        );
    }
}

#[test]
fn market_gap_adds_capped_frigo() {
    let gap = MarketGap::new(85.0, 120.0, 0.18);
    assert_eq!(gap.gap, 35.0);
    assert_eq!(market_gap_frigo(Sector::Standard, &gap), 2);

    let small = MarketGap::new(10.0, 12.0, 0.0);
    assert_eq!(market_gap_frigo(Sector::Standard, &small), 1);

    let surplus = MarketGap::new(12.0, 10.0, 0.0);
    assert_eq!(surplus.gap, 0.0);
    assert_eq!(market_gap_frigo(Sector::FoodFruit, &surplus), 0);
}

#[test]
fn no_growth_still_closes_market_gap() {
    let gap = MarketGap::new(85.0, 120.0, 0.18);
    let mix = recommend_mix(Region::Karadeniz, Sector::Standard, -3.0, &gap);
    assert_eq!(mix.trailer(TrailerClass::Frigo), 2);
    assert_eq!(mix.total_tractors(), 0);
    assert_eq!(mix.total_trailers(), 2);
}

#[test]
fn no_growth_no_gap_is_empty() {
    let mix = recommend_mix(Region::Ege, Sector::Industrial, 0.0, &MarketGap::none());
    assert!(mix.is_empty());
}

#[test]
fn investment_cost_sums_unit_prices() {
    let prices = PriceTable::new()
        .with_price("heavy", 100.0)
        .with_price("6x4-high-hp", 1000.0);
    let mut mix = EquipmentMix::new();
    mix.add_trailers(TrailerClass::Heavy, 3);
    mix.add_tractors(TractorClass::SixByFourHighHp, 2);
    mix.add_trailers(TrailerClass::Open, 4);
    // open 가격 없음 → 0으로 계산
    assert_eq!(investment_cost(&mix, &prices), 2300.0);
}

#[test]
fn reliability_loss_uses_mean_profile() {
    let profiles = vec![
        ReliabilityProfile::new("A", 0.02, 10.0, 10_000.0),
        ReliabilityProfile::new("B", 0.04, 20.0, 20_000.0),
    ];
    let mut mix = EquipmentMix::new();
    mix.add_tractors(TractorClass::FourByTwo500Hp, 4);
    let loss = annual_reliability_loss(&mix, &profiles);
    // 4 × 0.03 × 15000 × 12
    assert!((loss - 21_600.0).abs() < 1e-6, "loss={loss}");
    assert_eq!(annual_reliability_loss(&mix, &[]), 0.0);
}

#[test]
fn worst_brand_in_reference_data() {
    let profiles = reference_db::reliability_profiles();
    let worst = worst_brand(&profiles).expect("profiles");
    assert_eq!(worst.brand, "Ford Trucks");
    assert!(worst_brand(&[]).is_none());
}

#[test]
fn snapshot_adds_recommendation() {
    let fleet = reference_db::fleet_snapshot();
    let mut add = EquipmentMix::new();
    add.add_trailers(TrailerClass::Frigo, 2);
    let next = fleet.with_additions(&add);
    assert_eq!(
        next.owned.trailer(TrailerClass::Frigo),
        fleet.owned.trailer(TrailerClass::Frigo) + 2
    );
    assert_eq!(next.owned.total_tractors(), fleet.owned.total_tractors());
}

#[test]
fn huge_growth_saturates_counts() {
    let gap = MarketGap::new(85.0, 120.0, 0.18);
    let mix = recommend_mix(Region::Ege, Sector::FoodFruit, 1e12, &gap);
    assert_eq!(mix.trailer(TrailerClass::Frigo), 2_147_483_649);
    assert_eq!(mix.total_trailers(), u32::MAX);

    let mut m = EquipmentMix::new();
    m.add_tractors(TractorClass::Kirkayak, u32::MAX);
    m.add_tractors(TractorClass::Kirkayak, 5);
    m.add_tractors(TractorClass::FourByTwo500Hp, 7);
    assert_eq!(m.tractor(TractorClass::Kirkayak), u32::MAX);
    assert_eq!(m.total_tractors(), u32::MAX);
}
