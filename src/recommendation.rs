use serde::{Deserialize, Serialize};

use crate::equipment::{EquipmentMix, TractorClass, TrailerClass};
use crate::fleet::{market_gap_frigo, worst_brand, ReliabilityProfile};
use crate::i18n::{keys, Translator};
use crate::market::{MarketGap, Region, Sector};

/// 메시지 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Success,
}

/// 규칙 기반 조치 권고.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// 중량물 섹터의 6x4 고마력 트랙터 구매
    HeavyTractorPurchase { units: u32 },
    /// Marmara 과일 회랑은 냉장 비중을 낮춤
    MarmaraFrigoSuppressed,
    /// 냉장 시장 부족분 일부 해소
    MarketGapClosure { added: u32, gap: f64 },
    /// 시장(hal) 물류용 kırkayak 추천
    KirkayakForProduce { units: u32 },
    /// 고장률이 가장 높은 브랜드 경고
    UnreliableBrand { brand: String, breakdown_rate: f64 },
    /// 표준 섹터의 4x2 트랙터 추천
    StandardTractor { units: u32 },
    /// 과거 수요 기준값이 0이라 성장 신호 없음
    NoGrowthSignal,
    /// 투자 회수가 되지 않음
    PaybackNever,
    /// 시나리오 위험 점수가 높음
    HighRisk { score: u32 },
}

impl Advisory {
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::HeavyTractorPurchase { .. } => Severity::Info,
            Advisory::MarmaraFrigoSuppressed => Severity::Info,
            Advisory::MarketGapClosure { .. } => Severity::Success,
            Advisory::KirkayakForProduce { .. } => Severity::Info,
            Advisory::UnreliableBrand { .. } => Severity::Warning,
            Advisory::StandardTractor { .. } => Severity::Info,
            Advisory::NoGrowthSignal => Severity::Warning,
            Advisory::PaybackNever => Severity::Warning,
            Advisory::HighRisk { .. } => Severity::Warning,
        }
    }

    /// 현재 언어로 문장을 만든다.
    pub fn render(&self, tr: &Translator) -> String {
        match self {
            Advisory::HeavyTractorPurchase { units } => {
                tr.format(keys::ADVICE_HEAVY_TRACTOR, &[("units", units.to_string())])
            }
            Advisory::MarmaraFrigoSuppressed => tr.t(keys::ADVICE_MARMARA_FRIGO).to_string(),
            Advisory::MarketGapClosure { added, gap } => tr.format(
                keys::ADVICE_MARKET_GAP,
                &[("added", added.to_string()), ("gap", format!("{gap:.0}"))],
            ),
            Advisory::KirkayakForProduce { units } => {
                tr.format(keys::ADVICE_KIRKAYAK, &[("units", units.to_string())])
            }
            Advisory::UnreliableBrand {
                brand,
                breakdown_rate,
            } => tr.format(
                keys::ADVICE_UNRELIABLE_BRAND,
                &[
                    ("brand", brand.clone()),
                    ("rate", format!("{:.1}", breakdown_rate * 100.0)),
                ],
            ),
            Advisory::StandardTractor { units } => {
                tr.format(keys::ADVICE_STANDARD_TRACTOR, &[("units", units.to_string())])
            }
            Advisory::NoGrowthSignal => tr.t(keys::ADVICE_NO_GROWTH_SIGNAL).to_string(),
            Advisory::PaybackNever => tr.t(keys::ADVICE_PAYBACK_NEVER).to_string(),
            Advisory::HighRisk { score } => {
                tr.format(keys::ADVICE_HIGH_RISK, &[("score", score.to_string())])
            }
        }
    }
}

/// 추천 구성과 시장/신뢰성 정보로 조치 권고를 만든다.
///
/// 규칙 평가 순서가 곧 출력 순서다.
pub fn synthesize(
    mix: &EquipmentMix,
    market_gap: &MarketGap,
    profiles: &[ReliabilityProfile],
    region: Region,
    sector: Sector,
) -> Vec<Advisory> {
    let mut out = Vec::new();

    let heavy_tractors = mix.tractor(TractorClass::SixByFourHighHp);
    if sector == Sector::Heavy && heavy_tractors > 0 {
        out.push(Advisory::HeavyTractorPurchase {
            units: heavy_tractors,
        });
    }

    if sector == Sector::FoodFruit && region == Region::Marmara {
        out.push(Advisory::MarmaraFrigoSuppressed);
    }

    if sector != Sector::Heavy && market_gap.has_gap() && mix.trailer(TrailerClass::Frigo) > 0 {
        out.push(Advisory::MarketGapClosure {
            added: market_gap_frigo(sector, market_gap),
            gap: market_gap.gap,
        });
    }

    let kirkayak = mix.tractor(TractorClass::Kirkayak);
    if sector == Sector::FoodFruit && kirkayak > 0 {
        out.push(Advisory::KirkayakForProduce { units: kirkayak });
    }

    if let Some(worst) = worst_brand(profiles) {
        out.push(Advisory::UnreliableBrand {
            brand: worst.brand.clone(),
            breakdown_rate: worst.breakdown_rate,
        });
    }

    let standard = mix.tractor(TractorClass::FourByTwo500Hp);
    if sector == Sector::Standard && standard > 0 {
        out.push(Advisory::StandardTractor { units: standard });
    }

    out
}
