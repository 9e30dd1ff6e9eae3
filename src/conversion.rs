use crate::quantity::QuantityKind;
use crate::units::{convert_power, convert_time, PowerUnit, TimeUnit};

/// 문자열 단위 토큰으로 전력을 변환한다.
///
/// 토큰은 `W`, `kW`, `HP` 만 인식한다. 인식하지 못한 토큰이 섞인 경우도
/// 지원하지 않는 단위 쌍과 똑같이 입력값을 그대로 돌려준다.
pub fn convert_power_units(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match (from_unit.parse::<PowerUnit>(), to_unit.parse::<PowerUnit>()) {
        (Ok(from), Ok(to)) => convert_power(value, from, to),
        _ => {
            log::debug!("unrecognized power units {from_unit:?} -> {to_unit:?}; value kept as is");
            value
        }
    }
}

/// 문자열 단위 토큰으로 시간을 변환한다. 폴백 규칙은 전력과 같다.
pub fn convert_time_units(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match (from_unit.parse::<TimeUnit>(), to_unit.parse::<TimeUnit>()) {
        (Ok(from), Ok(to)) => convert_time(value, from, to),
        _ => {
            log::debug!("unrecognized time units {from_unit:?} -> {to_unit:?}; value kept as is");
            value
        }
    }
}

/// 물리량 종류에 따라 알맞은 변환 함수로 보낸다.
pub fn convert(kind: QuantityKind, value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match kind {
        QuantityKind::Power => convert_power_units(value, from_unit, to_unit),
        QuantityKind::Duration => convert_time_units(value, from_unit, to_unit),
    }
}
