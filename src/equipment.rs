use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 트레일러 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrailerClass {
    /// 냉장(frigo)
    Frigo,
    /// 오픈(평판)
    Open,
    /// 박스형
    Closed,
    /// 중량물
    Heavy,
}

/// 트랙터 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TractorClass {
    /// 6x4 고마력
    SixByFourHighHp,
    /// 4x2 500마력
    FourByTwo500Hp,
    /// 시장(hal) 물류용 kırkayak
    Kirkayak,
}

impl TrailerClass {
    pub const ALL: [TrailerClass; 4] = [
        TrailerClass::Frigo,
        TrailerClass::Open,
        TrailerClass::Closed,
        TrailerClass::Heavy,
    ];

    /// 가격표 등에서 쓰는 코드.
    pub fn code(&self) -> &'static str {
        match self {
            TrailerClass::Frigo => "frigo",
            TrailerClass::Open => "open",
            TrailerClass::Closed => "closed",
            TrailerClass::Heavy => "heavy",
        }
    }
}

impl TractorClass {
    pub const ALL: [TractorClass; 3] = [
        TractorClass::SixByFourHighHp,
        TractorClass::FourByTwo500Hp,
        TractorClass::Kirkayak,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TractorClass::SixByFourHighHp => "6x4-high-hp",
            TractorClass::FourByTwo500Hp => "4x2-500hp",
            TractorClass::Kirkayak => "kirkayak",
        }
    }
}

impl fmt::Display for TrailerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for TractorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 장비 종류별 대수. 추천 결과(증분)와 보유 현황 모두 이 형태를 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentMix {
    pub trailers: BTreeMap<TrailerClass, u32>,
    pub tractors: BTreeMap<TractorClass, u32>,
}

impl EquipmentMix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trailer(&self, class: TrailerClass) -> u32 {
        self.trailers.get(&class).copied().unwrap_or(0)
    }

    pub fn tractor(&self, class: TractorClass) -> u32 {
        self.tractors.get(&class).copied().unwrap_or(0)
    }

    pub fn add_trailers(&mut self, class: TrailerClass, count: u32) {
        if count > 0 {
            let n = self.trailers.entry(class).or_insert(0);
            *n = n.saturating_add(count);
        }
    }

    pub fn add_tractors(&mut self, class: TractorClass, count: u32) {
        if count > 0 {
            let n = self.tractors.entry(class).or_insert(0);
            *n = n.saturating_add(count);
        }
    }

    pub fn total_trailers(&self) -> u32 {
        self.trailers.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn total_tractors(&self) -> u32 {
        self.tractors.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.total_trailers() == 0 && self.total_tractors() == 0
    }

    /// (코드, 대수) 목록. 트레일러 다음 트랙터 순.
    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        self.trailers
            .iter()
            .map(|(c, n)| (c.code(), *n))
            .chain(self.tractors.iter().map(|(c, n)| (c.code(), *n)))
            .collect()
    }
}

/// 현재 보유 차량 현황. 엔진은 읽기만 하고 증분만 제안한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub owned: EquipmentMix,
}

impl FleetSnapshot {
    pub fn new(owned: EquipmentMix) -> Self {
        Self { owned }
    }

    /// 추천 증분을 더한 새 현황을 만든다. 기존 값은 바뀌지 않는다.
    pub fn with_additions(&self, additions: &EquipmentMix) -> FleetSnapshot {
        let mut owned = self.owned.clone();
        for (class, n) in &additions.trailers {
            owned.add_trailers(*class, *n);
        }
        for (class, n) in &additions.tractors {
            owned.add_tractors(*class, *n);
        }
        FleetSnapshot { owned }
    }
}

/// 장비 코드별 단가표.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    pub prices: BTreeMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, code: &str, unit_price: f64) -> Self {
        self.prices.insert(code.to_string(), unit_price);
        self
    }

    pub fn unit_price(&self, code: &str) -> Option<f64> {
        self.prices.get(code).copied()
    }
}
