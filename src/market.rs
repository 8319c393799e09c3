use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 운송 수요가 집계되는 지역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Marmara,
    Ege,
    IcAnadolu,
    Akdeniz,
    Karadeniz,
    DoguAnadolu,
    GuneydoguAnadolu,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Marmara,
        Region::Ege,
        Region::IcAnadolu,
        Region::Akdeniz,
        Region::Karadeniz,
        Region::DoguAnadolu,
        Region::GuneydoguAnadolu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Marmara => "Marmara",
            Region::Ege => "Ege",
            Region::IcAnadolu => "İç Anadolu",
            Region::Akdeniz => "Akdeniz",
            Region::Karadeniz => "Karadeniz",
            Region::DoguAnadolu => "Doğu Anadolu",
            Region::GuneydoguAnadolu => "Güneydoğu Anadolu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 문자열을 지역/섹터로 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMarketError(pub String);

impl fmt::Display for ParseMarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "알 수 없는 값: {}", self.0)
    }
}

impl std::error::Error for ParseMarketError {}

/// 터키어 특수문자와 공백/구분자를 걷어낸 비교용 키.
pub(crate) fn fold_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_' && *c != '/')
        .map(|c| match c {
            'ı' | 'İ' | 'I' => 'i',
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ö' | 'Ö' => 'o',
            'ş' | 'Ş' => 's',
            'ü' | 'Ü' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Region {
    type Err = ParseMarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_key(s);
        Region::ALL
            .into_iter()
            .find(|r| fold_key(r.name()) == key)
            .ok_or_else(|| ParseMarketError(s.to_string()))
    }
}

/// 화물 섹터. 섹터에 따라 추천 장비 구성이 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Heavy,
    FoodFruit,
    Standard,
    Industrial,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Heavy,
        Sector::FoodFruit,
        Sector::Standard,
        Sector::Industrial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sector::Heavy => "Heavy",
            Sector::FoodFruit => "Food/Fruit",
            Sector::Standard => "Standard",
            Sector::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sector {
    type Err = ParseMarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "heavy" | "agir" => Ok(Sector::Heavy),
            "foodfruit" | "food" | "fruit" | "gidameyve" => Ok(Sector::FoodFruit),
            "standard" | "standart" => Ok(Sector::Standard),
            "industrial" | "sanayi" => Ok(Sector::Industrial),
            _ => Err(ParseMarketError(s.to_string())),
        }
    }
}

/// 구조적 장비 부족(예: 냉장 트레일러)을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketGap {
    /// 현재 시장 보유 대수
    pub current: f64,
    /// 필요 대수
    pub required: f64,
    /// 부족분 = max(0, required - current)
    pub gap: f64,
    /// 시장 연간 성장률(소수)
    pub market_growth: f64,
}

impl MarketGap {
    /// 현재/필요 대수로 부족분을 계산해 생성한다.
    pub fn new(current: f64, required: f64, market_growth: f64) -> Self {
        Self {
            current,
            required,
            gap: (required - current).max(0.0),
            market_growth,
        }
    }

    /// 부족분이 없는 시장.
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn has_gap(&self) -> bool {
        self.gap > 0.0
    }
}
