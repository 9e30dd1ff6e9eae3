use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 1 HP 에 해당하는 와트 값.
pub const WATTS_PER_HP: f64 = 745.7;

/// 전력 단위. 토큰은 대소문자를 구분한다 (`W`, `kW`, `HP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUnit {
    #[serde(rename = "W")]
    Watt,
    #[serde(rename = "kW")]
    Kilowatt,
    #[serde(rename = "HP")]
    Horsepower,
}

impl PowerUnit {
    pub fn token(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Horsepower => "HP",
        }
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PowerUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(PowerUnit::Watt),
            "kW" => Ok(PowerUnit::Kilowatt),
            "HP" => Ok(PowerUnit::Horsepower),
            _ => Err(UnitParseError {
                kind: "power",
                token: s.to_string(),
            }),
        }
    }
}

/// 직접 지원되는 단위 쌍의 배율을 돌려준다. 테이블에 없는 쌍은 `None`.
///
/// 테이블은 W↔kW, HP↔W 네 방향뿐이며 같은 단위 쌍이나 HP→kW 같은
/// 경유 변환은 포함하지 않는다.
pub fn power_factor(from: PowerUnit, to: PowerUnit) -> Option<f64> {
    match (from, to) {
        (PowerUnit::Watt, PowerUnit::Kilowatt) => Some(0.001),
        (PowerUnit::Kilowatt, PowerUnit::Watt) => Some(1000.0),
        (PowerUnit::Horsepower, PowerUnit::Watt) => Some(WATTS_PER_HP),
        (PowerUnit::Watt, PowerUnit::Horsepower) => Some(1.0 / WATTS_PER_HP),
        _ => None,
    }
}

/// 전력을 변환한다. 테이블에 없는 쌍은 입력값을 그대로 돌려준다 (항등 폴백).
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    match power_factor(from, to) {
        Some(factor) => value * factor,
        None => {
            log::debug!("no direct power conversion {from} -> {to}; value kept as is");
            value
        }
    }
}
