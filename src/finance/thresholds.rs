use serde::{Deserialize, Serialize};
use std::fmt;

/// 위험 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// 임계값 비교 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    /// value >= x
    AtLeast(f64),
    /// value > x
    Above(f64),
}

impl Cutoff {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Cutoff::AtLeast(x) => value >= x,
            Cutoff::Above(x) => value > x,
        }
    }
}

/// 임계값 하나와 해당 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule<T> {
    pub cutoff: Cutoff,
    pub outcome: T,
}

impl<T> ThresholdRule<T> {
    pub const fn at_least(x: f64, outcome: T) -> Self {
        Self {
            cutoff: Cutoff::AtLeast(x),
            outcome,
        }
    }

    pub const fn above(x: f64, outcome: T) -> Self {
        Self {
            cutoff: Cutoff::Above(x),
            outcome,
        }
    }
}

/// 규칙을 순서대로 검사해 처음 만족하는 결과를 돌려준다. 없으면 `fallback`.
///
/// 규칙은 높은 임계값부터 나열해야 한다.
pub fn classify_by_thresholds<T: Copy>(value: f64, rules: &[ThresholdRule<T>], fallback: T) -> T {
    rules
        .iter()
        .find(|r| r.cutoff.admits(value))
        .map(|r| r.outcome)
        .unwrap_or(fallback)
}
