use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 시간 단위. 토큰은 `seconds`, `minutes`, `hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub fn token(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds" => Ok(TimeUnit::Seconds),
            "minutes" => Ok(TimeUnit::Minutes),
            "hours" => Ok(TimeUnit::Hours),
            _ => Err(UnitParseError {
                kind: "time",
                token: s.to_string(),
            }),
        }
    }
}

/// 인접한 단위 사이의 배율만 돌려준다. seconds↔hours 는 테이블에 없다.
pub fn time_factor(from: TimeUnit, to: TimeUnit) -> Option<f64> {
    match (from, to) {
        (TimeUnit::Seconds, TimeUnit::Minutes) => Some(1.0 / 60.0),
        (TimeUnit::Minutes, TimeUnit::Seconds) => Some(60.0),
        (TimeUnit::Minutes, TimeUnit::Hours) => Some(1.0 / 60.0),
        (TimeUnit::Hours, TimeUnit::Minutes) => Some(60.0),
        _ => None,
    }
}

/// 시간을 변환한다. 테이블에 없는 쌍은 입력값을 그대로 돌려준다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    match time_factor(from, to) {
        Some(factor) => value * factor,
        None => {
            log::debug!("no direct time conversion {from} -> {to}; value kept as is");
            value
        }
    }
}
