use crate::tariff::TariffTable;

/// 사용량/요금 계산 결과. 저장하지 않고 요청마다 새로 계산한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 소비 에너지 [kWh]
    pub energy_kwh: f64,
    /// 예상 요금 [통화]
    pub cost: f64,
}

/// 가전 한 대의 사용 세션에 대한 에너지/요금 계산기.
///
/// 전력은 kW, 시간은 h 로 이미 환산된 값을 받는다. 음수나 0 도 검증 없이
/// 그대로 곱한다.
#[derive(Debug, Clone)]
pub struct EnergyCalculator<'t> {
    power_kw: f64,
    time_hours: f64,
    appliance: String,
    company: String,
    tariffs: &'t TariffTable,
}

impl EnergyCalculator<'static> {
    /// 기본 요금표로 계산기를 만든다. 회사 식별자는 대문자로 정규화한다.
    pub fn new(
        power_kw: f64,
        time_hours: f64,
        appliance: impl Into<String>,
        company: &str,
    ) -> Self {
        EnergyCalculator::with_tariffs(
            power_kw,
            time_hours,
            appliance,
            company,
            TariffTable::builtin(),
        )
    }
}

impl<'t> EnergyCalculator<'t> {
    /// 주입한 요금표로 계산기를 만든다.
    pub fn with_tariffs(
        power_kw: f64,
        time_hours: f64,
        appliance: impl Into<String>,
        company: &str,
        tariffs: &'t TariffTable,
    ) -> Self {
        Self {
            power_kw,
            time_hours,
            appliance: appliance.into(),
            company: company.to_uppercase(),
            tariffs,
        }
    }

    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }

    pub fn time_hours(&self) -> f64 {
        self.time_hours
    }

    pub fn appliance(&self) -> &str {
        &self.appliance
    }

    /// 대문자로 정규화된 회사 식별자.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// 요금표에 없는 회사인지 확인한다. 이 경우 요금은 항상 0 이다.
    pub fn is_known_company(&self) -> bool {
        self.tariffs.contains(&self.company)
    }

    /// 적용되는 kWh 단가. 모르는 회사는 0.
    pub fn rate(&self) -> f64 {
        self.tariffs.rate_for(&self.company)
    }

    /// 소비 에너지 [kWh] = 전력 [kW] × 시간 [h].
    pub fn calculate_energy(&self) -> f64 {
        self.power_kw * self.time_hours
    }

    /// 예상 요금 = 소비 에너지 × 단가.
    pub fn calculate_cost(&self) -> f64 {
        self.calculate_energy() * self.rate()
    }

    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            energy_kwh: self.calculate_energy(),
            cost: self.calculate_cost(),
        }
    }
}
