use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentMix;

/// 브랜드별 고장 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityProfile {
    pub brand: String,
    /// 월간 고장률(0~1)
    pub breakdown_rate: f64,
    /// 고장당 평균 지연 [h]
    pub avg_delay_hours: f64,
    /// 고장당 손실액
    pub loss_per_breakdown: f64,
}

impl ReliabilityProfile {
    pub fn new(brand: &str, breakdown_rate: f64, avg_delay_hours: f64, loss_per_breakdown: f64) -> Self {
        Self {
            brand: brand.to_string(),
            breakdown_rate,
            avg_delay_hours,
            loss_per_breakdown,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// 추천 트랙터의 연간 고장 손실을 추정한다.
///
/// 대당 브랜드를 배정하지 않고 등록된 전체 브랜드의 평균 고장률/평균 손실을 쓰는 근사치다.
pub fn annual_reliability_loss(mix: &EquipmentMix, profiles: &[ReliabilityProfile]) -> f64 {
    let units = mix.total_tractors() as f64;
    let avg_rate = mean(profiles.iter().map(|p| p.breakdown_rate));
    let avg_loss = mean(profiles.iter().map(|p| p.loss_per_breakdown));
    units * avg_rate * avg_loss * 12.0
}

/// 고장률이 가장 높은 브랜드.
pub fn worst_brand(profiles: &[ReliabilityProfile]) -> Option<&ReliabilityProfile> {
    profiles
        .iter()
        .max_by(|a, b| a.breakdown_rate.total_cmp(&b.breakdown_rate))
}
