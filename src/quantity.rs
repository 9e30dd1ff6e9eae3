use crate::units::{PowerUnit, TimeUnit};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Power,
    Duration,
}

/// 값과 단위 태그의 쌍.
///
/// 크기는 검증하지 않는다. 음수나 NaN 의 거부는 입력을 받는 쪽의 몫이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Power { value: f64, unit: PowerUnit },
    Duration { value: f64, unit: TimeUnit },
}

impl Measurement {
    pub fn power(value: f64, unit: PowerUnit) -> Self {
        Measurement::Power { value, unit }
    }

    pub fn duration(value: f64, unit: TimeUnit) -> Self {
        Measurement::Duration { value, unit }
    }

    pub fn kind(&self) -> QuantityKind {
        match self {
            Measurement::Power { .. } => QuantityKind::Power,
            Measurement::Duration { .. } => QuantityKind::Duration,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Measurement::Power { value, .. } | Measurement::Duration { value, .. } => value,
        }
    }
}

/// 숫자 문자열을 유한한 값으로 해석한다. `NaN`, `inf` 등은 `None`.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
