use tracing::debug;

use crate::equipment::{EquipmentMix, PriceTable};

/// 추천 장비 구성의 총 취득비를 계산한다.
///
/// 단가표에 없는 장비 코드는 0으로 취급한다.
pub fn investment_cost(mix: &EquipmentMix, prices: &PriceTable) -> f64 {
    mix.entries()
        .into_iter()
        .map(|(code, count)| match prices.unit_price(code) {
            Some(price) => count as f64 * price,
            None => {
                debug!(code, count, "no unit price; counted as zero");
                0.0
            }
        })
        .sum()
}
