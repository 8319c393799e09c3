use tracing::debug;

use crate::equipment::{EquipmentMix, TractorClass, TrailerClass};
use crate::market::{MarketGap, Region, Sector};

/// Marmara 과일 수송 회랑의 냉장 비중 억제 계수.
pub const MARMARA_FRIGO_FACTOR: f64 = 0.3;
/// 시장 부족분 보정에 쓰는 비율.
pub const MARKET_GAP_SHARE: f64 = 0.3;
/// 시장 부족분 보정으로 더할 수 있는 최대 냉장 대수.
pub const MARKET_GAP_CAP: u32 = 2;

/// 트레일러 기준 대수: 수요 10% 당 1대.
pub fn base_trailer_units(demand_increase_percent: f64) -> u32 {
    positive_ceil(demand_increase_percent / 10.0)
}

/// 트랙터 기준 대수: 수요 8% 당 1대.
pub fn base_tractor_units(demand_increase_percent: f64) -> u32 {
    positive_ceil(demand_increase_percent / 8.0)
}

fn positive_ceil(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.ceil() as u32
    } else {
        0
    }
}

/// max(floor(base * weight), min_units)
fn weighted(base: u32, weight: f64, min_units: u32) -> u32 {
    ((base as f64 * weight).floor() as u32).max(min_units)
}

/// 수요 증가율, 지역, 섹터, 시장 부족분으로 추가 장비 구성을 추천한다.
///
/// 최적화가 아니라 섹터별 가중치 규칙이다. 성장이 감지되면 섹터의 주력 장비는
/// 최소 대수(1 또는 2) 이상이 보장된다.
pub fn recommend_mix(
    region: Region,
    sector: Sector,
    demand_increase_percent: f64,
    market_gap: &MarketGap,
) -> EquipmentMix {
    let mut mix = EquipmentMix::new();
    let trailers = base_trailer_units(demand_increase_percent);
    let tractors = base_tractor_units(demand_increase_percent);

    if trailers > 0 || tractors > 0 {
        match sector {
            Sector::Heavy => {
                mix.add_trailers(TrailerClass::Heavy, weighted(trailers, 0.7, 2));
                mix.add_trailers(TrailerClass::Open, weighted(trailers, 0.3, 1));
                mix.add_tractors(TractorClass::SixByFourHighHp, weighted(tractors, 0.7, 2));
                mix.add_tractors(TractorClass::FourByTwo500Hp, weighted(tractors, 0.3, 1));
            }
            Sector::FoodFruit => {
                let frigo = if region == Region::Marmara {
                    weighted(trailers, 0.5 * MARMARA_FRIGO_FACTOR, 1)
                } else {
                    weighted(trailers, 0.5, 2)
                };
                mix.add_trailers(TrailerClass::Frigo, frigo);
                mix.add_trailers(TrailerClass::Open, weighted(trailers, 0.5, 1));
                mix.add_tractors(TractorClass::Kirkayak, weighted(tractors, 0.6, 2));
                mix.add_tractors(TractorClass::FourByTwo500Hp, weighted(tractors, 0.4, 1));
            }
            Sector::Standard => {
                mix.add_trailers(TrailerClass::Closed, weighted(trailers, 0.6, 2));
                mix.add_trailers(TrailerClass::Open, weighted(trailers, 0.4, 1));
                mix.add_tractors(TractorClass::FourByTwo500Hp, weighted(tractors, 0.8, 2));
            }
            Sector::Industrial => {
                mix.add_trailers(TrailerClass::Closed, weighted(trailers, 0.5, 2));
                mix.add_trailers(TrailerClass::Heavy, weighted(trailers, 0.5, 1));
                mix.add_tractors(TractorClass::FourByTwo500Hp, weighted(tractors, 0.5, 1));
                mix.add_tractors(TractorClass::SixByFourHighHp, weighted(tractors, 0.5, 1));
            }
        }
    }

    let extra_frigo = market_gap_frigo(sector, market_gap);
    mix.add_trailers(TrailerClass::Frigo, extra_frigo);

    debug!(
        %region,
        %sector,
        demand_increase_percent,
        trailers = mix.total_trailers(),
        tractors = mix.total_tractors(),
        extra_frigo,
        "fleet mix recommended"
    );
    mix
}

/// 시장 부족분 보정 냉장 대수. 중량물 섹터는 보정하지 않는다.
pub fn market_gap_frigo(sector: Sector, market_gap: &MarketGap) -> u32 {
    if sector == Sector::Heavy || !market_gap.has_gap() {
        return 0;
    }
    positive_ceil(market_gap.gap * MARKET_GAP_SHARE).min(MARKET_GAP_CAP)
}
