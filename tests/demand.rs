use fleet_planning_toolbox::demand::{
    cagr, compound, demand_increase_percent, DemandBook, DemandError, DemandSeries,
};
use fleet_planning_toolbox::market::{Region, Sector};
use fleet_planning_toolbox::reference_db;

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn cagr_matches_closed_form() {
    let r = cagr(100.0, 121.0, 2);
    assert!(approx(r, 0.10, 1e-12), "r={r}");
    assert!(approx(compound(100.0, r, 2), 121.0, 1e-9));
}

#[test]
fn cagr_degenerate_inputs_are_zero() {
    assert_eq!(cagr(0.0, 50.0, 3), 0.0);
    assert_eq!(cagr(50.0, 80.0, 0), 0.0);
}

#[test]
fn demand_increase_uses_last_history_and_projected_mean() {
    let s = DemandSeries::new(
        Region::Marmara,
        Sector::Heavy,
        vec![120.0, 135.0, 150.0],
        vec![165.0, 180.0],
    );
    let inc = demand_increase_percent(&s).expect("increase");
    assert!(approx(inc, 15.0, 1e-9), "inc={inc}");
    assert!(approx(s.average_projected().unwrap(), 172.5, 1e-12));
}

#[test]
fn declining_demand_is_negative() {
    let s = DemandSeries::new(Region::Ege, Sector::Standard, vec![100.0], vec![80.0, 90.0]);
    let inc = demand_increase_percent(&s).unwrap();
    assert!(approx(inc, -15.0, 1e-9));
}

#[test]
fn zero_baseline_is_reported() {
    let s = DemandSeries::new(Region::Ege, Sector::Standard, vec![10.0, 0.0], vec![5.0]);
    assert_eq!(demand_increase_percent(&s), Err(DemandError::ZeroBaseline));
}

#[test]
fn empty_series_are_rejected() {
    let no_hist = DemandSeries::new(Region::Ege, Sector::Standard, vec![], vec![5.0]);
    assert_eq!(demand_increase_percent(&no_hist), Err(DemandError::EmptyHistorical));
    let no_proj = DemandSeries::new(Region::Ege, Sector::Standard, vec![5.0], vec![]);
    assert_eq!(demand_increase_percent(&no_proj), Err(DemandError::EmptyProjected));
}

#[test]
fn book_lookup_by_region_and_sector() {
    let book = reference_db::demand_book();
    let s = book.find(Region::Marmara, Sector::Heavy).unwrap();
    assert_eq!(s.historical, vec![120.0, 135.0, 150.0]);

    let empty = DemandBook::default();
    assert_eq!(
        empty.find(Region::Akdeniz, Sector::Heavy),
        Err(DemandError::NotFound {
            region: Region::Akdeniz,
            sector: Sector::Heavy
        })
    );
}

#[test]
fn region_and_sector_parse_loosely() {
    assert_eq!("İç Anadolu".parse::<Region>().unwrap(), Region::IcAnadolu);
    assert_eq!("marmara".parse::<Region>().unwrap(), Region::Marmara);
    assert_eq!("Food/Fruit".parse::<Sector>().unwrap(), Sector::FoodFruit);
    assert_eq!("standart".parse::<Sector>().unwrap(), Sector::Standard);
    assert!("atlantis".parse::<Region>().is_err());
}

#[test]
fn non_finite_or_negative_values_are_rejected() {
    let series = |hist: Vec<f64>, proj: Vec<f64>| {
        DemandSeries::new(Region::Ege, Sector::Standard, hist, proj)
    };
    for (hist, proj) in [
        (vec![f64::NAN], vec![100.0]),
        (vec![100.0], vec![f64::INFINITY]),
        (vec![f64::NEG_INFINITY, 50.0], vec![100.0]),
        (vec![-50.0], vec![100.0]),
        (vec![50.0], vec![100.0, -1.0]),
    ] {
        let s = series(hist, proj);
        assert!(
            matches!(demand_increase_percent(&s), Err(DemandError::InvalidValue(_))),
            "{s:?}"
        );
    }
}

#[test]
fn subnormal_baseline_does_not_yield_infinity() {
    let s = DemandSeries::new(Region::Ege, Sector::Standard, vec![1e-310], vec![1e300]);
    assert_eq!(demand_increase_percent(&s), Err(DemandError::NonFiniteIncrease));
}
