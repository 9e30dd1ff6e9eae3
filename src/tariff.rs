use std::collections::BTreeMap;
use std::sync::OnceLock;

/// 기본 제공 요금표 [통화 / kWh].
pub const BUILTIN_RATES: [(&str, f64); 2] = [("BATELEC", 11.8569), ("MERALCO", 12.0262)];

/// 전력 회사 식별자별 kWh 단가를 담는 불변 요금표.
///
/// 키는 생성 시 대문자로 정규화되며 조회는 정확히 일치하는 키만 찾는다.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    rates: BTreeMap<String, f64>,
}

impl TariffTable {
    /// 회사/단가 쌍으로 요금표를 만든다.
    pub fn new<I, S>(rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let rates = rates
            .into_iter()
            .map(|(company, rate)| (company.as_ref().to_uppercase(), rate))
            .collect();
        Self { rates }
    }

    /// 프로세스 전체에서 공유하는 기본 요금표.
    pub fn builtin() -> &'static TariffTable {
        static TABLE: OnceLock<TariffTable> = OnceLock::new();
        TABLE.get_or_init(|| TariffTable::new(BUILTIN_RATES))
    }

    /// 등록된 회사면 단가를, 아니면 `None` 을 돌려준다.
    pub fn get(&self, company: &str) -> Option<f64> {
        self.rates.get(company).copied()
    }

    /// 단가를 조회한다. 모르는 회사는 오류 없이 0 으로 취급한다.
    pub fn rate_for(&self, company: &str) -> f64 {
        match self.get(company) {
            Some(rate) => rate,
            None => {
                log::debug!("no tariff for provider {company:?}; using zero rate");
                0.0
            }
        }
    }

    pub fn contains(&self, company: &str) -> bool {
        self.rates.contains_key(company)
    }

    /// 등록된 회사 식별자 (정렬됨).
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}
