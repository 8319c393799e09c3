//! 대시보드 샘플 데이터(단가, 브랜드 신뢰성, 수요 시계열, 시장 부족분, 창고 이력).
//! 값은 참고용이며 실제 의사결정 전에는 최신 자료로 교체해야 한다.
use crate::demand::{DemandBook, DemandSeries};
use crate::equipment::{EquipmentMix, FleetSnapshot, PriceTable, TractorClass, TrailerClass};
use crate::fleet::ReliabilityProfile;
use crate::market::{fold_key, MarketGap, Region, Sector};
use crate::warehouse::{Depot, ProjectionError, UtilizationRecord};

struct SeriesRow {
    region: Region,
    sector: Sector,
    historical: &'static [f64],
    projected: &'static [f64],
}

const DEMAND_ROWS: &[SeriesRow] = &[
    SeriesRow {
        region: Region::Marmara,
        sector: Sector::Heavy,
        historical: &[120.0, 135.0, 150.0],
        projected: &[165.0, 180.0],
    },
    SeriesRow {
        region: Region::Marmara,
        sector: Sector::FoodFruit,
        historical: &[80.0, 84.0, 90.0],
        projected: &[96.0, 104.0],
    },
    SeriesRow {
        region: Region::Marmara,
        sector: Sector::Standard,
        historical: &[210.0, 225.0, 240.0],
        projected: &[258.0, 275.0],
    },
    SeriesRow {
        region: Region::Marmara,
        sector: Sector::Industrial,
        historical: &[175.0, 182.0, 190.0],
        projected: &[199.0, 210.0],
    },
    SeriesRow {
        region: Region::Ege,
        sector: Sector::FoodFruit,
        historical: &[140.0, 155.0, 170.0],
        projected: &[190.0, 212.0],
    },
    SeriesRow {
        region: Region::Ege,
        sector: Sector::Standard,
        historical: &[95.0, 99.0, 104.0],
        projected: &[108.0, 113.0],
    },
    SeriesRow {
        region: Region::IcAnadolu,
        sector: Sector::Industrial,
        historical: &[130.0, 138.0, 147.0],
        projected: &[158.0, 170.0],
    },
    SeriesRow {
        region: Region::IcAnadolu,
        sector: Sector::Heavy,
        historical: &[60.0, 64.0, 70.0],
        projected: &[74.0, 79.0],
    },
    SeriesRow {
        region: Region::Akdeniz,
        sector: Sector::FoodFruit,
        historical: &[160.0, 178.0, 195.0],
        projected: &[215.0, 236.0],
    },
    SeriesRow {
        region: Region::Karadeniz,
        sector: Sector::Standard,
        historical: &[45.0, 46.0, 47.0],
        projected: &[48.0, 49.0],
    },
];

/// 지역/섹터별 샘플 수요 시계열.
pub fn demand_book() -> DemandBook {
    DemandBook::new(
        DEMAND_ROWS
            .iter()
            .map(|r| DemandSeries::new(r.region, r.sector, r.historical.to_vec(), r.projected.to_vec()))
            .collect(),
    )
}

/// 장비 단가표 [TRY].
pub fn price_table() -> PriceTable {
    PriceTable::new()
        .with_price(TrailerClass::Frigo.code(), 2_350_000.0)
        .with_price(TrailerClass::Open.code(), 1_250_000.0)
        .with_price(TrailerClass::Closed.code(), 1_480_000.0)
        .with_price(TrailerClass::Heavy.code(), 2_100_000.0)
        .with_price(TractorClass::SixByFourHighHp.code(), 4_800_000.0)
        .with_price(TractorClass::FourByTwo500Hp.code(), 3_600_000.0)
        .with_price(TractorClass::Kirkayak.code(), 2_900_000.0)
}

/// 트랙터 브랜드별 신뢰성.
pub fn reliability_profiles() -> Vec<ReliabilityProfile> {
    vec![
        ReliabilityProfile::new("Mercedes-Benz", 0.04, 6.0, 18_000.0),
        ReliabilityProfile::new("Volvo", 0.035, 5.5, 17_500.0),
        ReliabilityProfile::new("Scania", 0.03, 5.0, 19_000.0),
        ReliabilityProfile::new("MAN", 0.05, 7.0, 16_000.0),
        ReliabilityProfile::new("DAF", 0.045, 6.5, 15_500.0),
        ReliabilityProfile::new("Ford Trucks", 0.06, 8.0, 14_000.0),
    ]
}

/// 냉장 트레일러 시장 부족분.
pub fn frigo_market_gap() -> MarketGap {
    MarketGap::new(85.0, 120.0, 0.18)
}

/// 현재 보유 차량.
pub fn fleet_snapshot() -> FleetSnapshot {
    let mut owned = EquipmentMix::new();
    owned.add_trailers(TrailerClass::Frigo, 14);
    owned.add_trailers(TrailerClass::Open, 22);
    owned.add_trailers(TrailerClass::Closed, 31);
    owned.add_trailers(TrailerClass::Heavy, 9);
    owned.add_tractors(TractorClass::SixByFourHighHp, 12);
    owned.add_tractors(TractorClass::FourByTwo500Hp, 38);
    owned.add_tractors(TractorClass::Kirkayak, 7);
    FleetSnapshot::new(owned)
}

fn history(values: [f64; 6]) -> Vec<UtilizationRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| UtilizationRecord {
            year: 2020 + i as i32,
            utilization_percent: *v,
        })
        .collect()
}

/// 창고별 2020~2025 가동률 이력.
pub fn depots() -> Vec<Depot> {
    vec![
        Depot::new("İstanbul Hadımköy", 12_000.0, history([68.0, 72.0, 77.0, 82.0, 86.0, 91.0])),
        Depot::new("İzmir Kemalpaşa", 8_000.0, history([55.0, 58.0, 62.0, 65.0, 69.0, 72.0])),
        Depot::new("Ankara Sincan", 6_500.0, history([48.0, 50.0, 51.0, 53.0, 55.0, 57.0])),
        Depot::new("Mersin Liman", 5_000.0, history([74.0, 79.0, 83.0, 88.0, 92.0, 95.0])),
    ]
}

/// 이름 일부로 창고를 찾는다. 대소문자와 터키어 특수문자는 구분하지 않는다.
pub fn find_depot(name: &str) -> Result<Depot, ProjectionError> {
    let key = fold_key(name);
    depots()
        .into_iter()
        .find(|d| !key.is_empty() && fold_key(&d.name).contains(&key))
        .ok_or_else(|| ProjectionError::UnknownDepot(name.to_string()))
}
