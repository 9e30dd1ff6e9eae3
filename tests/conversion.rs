//! 전력/시간 변환 테이블과 항등 폴백 회귀 테스트.
use energy_cost_calculator::conversion::{convert, convert_power_units, convert_time_units};
use energy_cost_calculator::quantity::{parse_finite, Measurement, QuantityKind};
use energy_cost_calculator::session::to_base;
use energy_cost_calculator::units::{
    convert_power, convert_time, power_factor, time_factor, PowerUnit, TimeUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol * expected.abs().max(1.0),
        "{label} expected {expected} got {actual} (diff {diff}, tol {tol})"
    );
}

#[test]
fn kilowatt_and_watt_are_exact() {
    assert_eq!(convert_power_units(1.0, "kW", "W"), 1000.0);
    assert_eq!(convert_power_units(1000.0, "W", "kW"), 1.0);
}

#[test]
fn kilowatt_watt_round_trip() {
    for x in [0.0, 0.075, 1.5, 3.0, 1234.5] {
        let back = convert_power_units(convert_power_units(x, "kW", "W"), "W", "kW");
        assert_close("round trip", back, x, 1e-12);
    }
}

#[test]
fn horsepower_to_watt_and_back() {
    assert_close("HP->W", convert_power_units(2.0, "HP", "W"), 1491.4, 1e-12);
    assert_close("W->HP", convert_power_units(745.7, "W", "HP"), 1.0, 1e-12);
}

#[test]
fn horsepower_to_kilowatt_is_not_chained() {
    for x in [0.0, 1.0, 2.5, -4.0, 1e6] {
        assert_eq!(convert_power_units(x, "HP", "kW"), x);
        assert_eq!(convert_power(x, PowerUnit::Horsepower, PowerUnit::Kilowatt), x);
    }
}

#[test]
fn same_unit_and_unknown_tokens_keep_value() {
    assert_eq!(convert_power_units(42.0, "kW", "kW"), 42.0);
    assert_eq!(convert_power_units(1000.0, "ABC", "kW"), 1000.0);
    // 토큰은 대소문자를 구분한다
    assert_eq!(convert_power_units(1.0, "kw", "W"), 1.0);
    assert_eq!(convert_time_units(5.0, "days", "hours"), 5.0);
}

#[test]
fn adjacent_time_units_convert() {
    assert_close("s->min", convert_time_units(120.0, "seconds", "minutes"), 2.0, 1e-12);
    assert_eq!(convert_time_units(2.0, "minutes", "seconds"), 120.0);
    assert_close("min->h", convert_time_units(90.0, "minutes", "hours"), 1.5, 1e-12);
    assert_eq!(convert_time_units(1.5, "hours", "minutes"), 90.0);
}

#[test]
fn seconds_and_hours_are_not_directly_linked() {
    assert_eq!(convert_time_units(3600.0, "seconds", "hours"), 3600.0);
    assert_eq!(convert_time_units(2.0, "hours", "seconds"), 2.0);
    assert_eq!(convert_time(3600.0, TimeUnit::Seconds, TimeUnit::Hours), 3600.0);
}

#[test]
fn factor_tables_list_only_direct_pairs() {
    assert_eq!(power_factor(PowerUnit::Kilowatt, PowerUnit::Watt), Some(1000.0));
    assert_eq!(power_factor(PowerUnit::Kilowatt, PowerUnit::Kilowatt), None);
    assert_eq!(power_factor(PowerUnit::Kilowatt, PowerUnit::Horsepower), None);
    assert_eq!(time_factor(TimeUnit::Hours, TimeUnit::Minutes), Some(60.0));
    assert_eq!(time_factor(TimeUnit::Seconds, TimeUnit::Hours), None);
}

#[test]
fn dispatch_by_quantity_kind() {
    assert_close(
        "duration",
        convert(QuantityKind::Duration, 30.0, "minutes", "hours"),
        0.5,
        1e-12,
    );
    assert_eq!(convert(QuantityKind::Power, 3.0, "kW", "W"), 3000.0);
}

#[test]
fn unit_tokens_parse_exactly() {
    assert_eq!("HP".parse::<PowerUnit>(), Ok(PowerUnit::Horsepower));
    assert_eq!("minutes".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
    let err = "w".parse::<PowerUnit>().unwrap_err();
    assert_eq!(err.token, "w");
    assert_eq!(err.to_string(), "unknown power unit: w");
    assert_eq!(PowerUnit::Kilowatt.to_string(), "kW");
    assert_eq!(TimeUnit::Seconds.to_string(), "seconds");
}

#[test]
fn measurements_carry_kind_and_value() {
    let power = Measurement::power(745.7, PowerUnit::Horsepower);
    assert_eq!(power.kind(), QuantityKind::Power);
    assert_eq!(power.value(), 745.7);
    let time = Measurement::duration(-30.0, TimeUnit::Minutes);
    assert_eq!(time.kind(), QuantityKind::Duration);
    assert_close("base hours", to_base(time), -0.5, 1e-12);
    assert_close("base kW", to_base(Measurement::power(250.0, PowerUnit::Watt)), 0.25, 1e-12);
}

#[test]
fn only_finite_numbers_parse() {
    assert_eq!(parse_finite("1.5"), Some(1.5));
    assert_eq!(parse_finite("-2"), Some(-2.0));
    for raw in ["NaN", "inf", "-infinity", "abc", ""] {
        assert_eq!(parse_finite(raw), None, "{raw}");
    }
}
