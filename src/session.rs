//! 입력값을 계산기 기준 단위(kW, h)로 맞춘 뒤 계산까지 이어주는 파이프라인.
//!
//! 변환 테이블은 인접 단위만 다루므로 HP→kW, seconds→hours 는 여기서
//! 테이블 한 단계씩을 차례로 적용해 만든다.

use chrono::{DateTime, Local};

use crate::calculator::EnergyCalculator;
use crate::quantity::Measurement;
use crate::report::ReportRecord;
use crate::tariff::TariffTable;
use crate::units::{convert_power, convert_time, PowerUnit, TimeUnit};

/// 전력을 kW 로 맞춘다.
pub fn power_to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => convert_power(value, PowerUnit::Watt, PowerUnit::Kilowatt),
        PowerUnit::Horsepower => {
            let watts = convert_power(value, PowerUnit::Horsepower, PowerUnit::Watt);
            convert_power(watts, PowerUnit::Watt, PowerUnit::Kilowatt)
        }
    }
}

/// 시간을 h 로 맞춘다.
pub fn time_to_hours(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Hours => value,
        TimeUnit::Minutes => convert_time(value, TimeUnit::Minutes, TimeUnit::Hours),
        TimeUnit::Seconds => {
            let minutes = convert_time(value, TimeUnit::Seconds, TimeUnit::Minutes);
            convert_time(minutes, TimeUnit::Minutes, TimeUnit::Hours)
        }
    }
}

/// 측정값을 계산기 기준 단위 값으로 바꾼다 (전력=kW, 시간=h).
pub fn to_base(measurement: Measurement) -> f64 {
    match measurement {
        Measurement::Power { value, unit } => power_to_kw(value, unit),
        Measurement::Duration { value, unit } => time_to_hours(value, unit),
    }
}

/// 사용 세션 한 건의 원시 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInput {
    pub appliance: String,
    pub power: f64,
    pub power_unit: PowerUnit,
    pub time: f64,
    pub time_unit: TimeUnit,
    /// 사용자가 입력한 그대로의 회사 식별자
    pub company: String,
}

impl SessionInput {
    pub fn power_measurement(&self) -> Measurement {
        Measurement::power(self.power, self.power_unit)
    }

    pub fn time_measurement(&self) -> Measurement {
        Measurement::duration(self.time, self.time_unit)
    }
}

/// 계산이 끝난 세션 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub appliance: String,
    pub company: String,
    pub power_kw: f64,
    pub time_hours: f64,
    pub energy_kwh: f64,
    pub cost: f64,
    /// 요금표에 있는 회사였는지 여부
    pub known_company: bool,
}

impl Estimate {
    /// 리포트 레코드로 옮긴다. 회사 이름은 입력한 그대로 기록한다.
    pub fn to_record(&self, timestamp: DateTime<Local>) -> ReportRecord {
        ReportRecord {
            timestamp,
            appliance: self.appliance.clone(),
            energy_kwh: self.energy_kwh,
            cost: self.cost,
            company: self.company.clone(),
        }
    }
}

/// 입력을 정규화하고 요금까지 계산한다.
pub fn estimate(input: &SessionInput, tariffs: &TariffTable) -> Estimate {
    let power_kw = to_base(input.power_measurement());
    let time_hours = to_base(input.time_measurement());
    let calculator = EnergyCalculator::with_tariffs(
        power_kw,
        time_hours,
        input.appliance.as_str(),
        &input.company,
        tariffs,
    );
    let result = calculator.result();
    log::debug!(
        "estimate for {:?}: {power_kw} kW x {time_hours} h = {} kWh, cost {}",
        input.appliance,
        result.energy_kwh,
        result.cost
    );
    Estimate {
        appliance: input.appliance.clone(),
        company: input.company.clone(),
        power_kw,
        time_hours,
        energy_kwh: result.energy_kwh,
        cost: result.cost,
        known_company: calculator.is_known_company(),
    }
}
