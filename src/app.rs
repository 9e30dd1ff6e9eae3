use std::io::{self, Write};

use chrono::Local;

use crate::appliance::ApplianceCatalog;
use crate::config::{Config, ConfigError};
use crate::preferences::{PreferencesError, UserPreferences};
use crate::report::{self, ReportError};
use crate::session::{self, Estimate, SessionInput};
use crate::tariff::TariffTable;
use crate::ui_cli::Console;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("preferences error: {0}")]
    Preferences(#[from] PreferencesError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    /// 카탈로그에 없는 가전 이름
    #[error("unknown appliance: {0}")]
    UnknownAppliance(String),
}

/// 메뉴 기반 대화형 화면을 표준 입출력으로 실행한다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let preferences = UserPreferences::load_or_default(&config.preferences_path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        config,
        preferences,
        TariffTable::builtin(),
    );
    console.run()
}

/// 계산 결과를 출력한다. 요금표에 없는 회사면 0 단가 안내를 덧붙인다.
pub fn write_estimate(
    out: &mut impl Write,
    estimate: &Estimate,
    currency_symbol: &str,
) -> Result<(), AppError> {
    writeln!(out, "Appliance: {}", estimate.appliance)?;
    writeln!(out, "Energy Consumed: {:.2} kWh", estimate.energy_kwh)?;
    writeln!(out, "Estimated Cost: {currency_symbol}{:.2}", estimate.cost)?;
    if !estimate.known_company {
        writeln!(
            out,
            "Note: no tariff for provider '{}'; cost uses a zero rate.",
            estimate.company
        )?;
    }
    Ok(())
}

/// CSV/텍스트 리포트를 저장하고 저장 위치를 알린다.
pub fn save_reports(
    config: &Config,
    estimate: &Estimate,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let record = estimate.to_record(Local::now());
    report::write_csv(&config.report.csv_path, &record)?;
    report::write_text(&config.report.text_path, &record, &config.currency_symbol)?;
    writeln!(out, "\nReport saved as '{}'.", config.report.csv_path.display())?;
    writeln!(out, "\nReport saved as '{}'.", config.report.text_path.display())?;
    Ok(())
}

/// 한 건의 세션을 계산하고, 필요하면 리포트를 남긴다.
pub fn run_estimate(
    config: &Config,
    input: &SessionInput,
    write_reports: bool,
    out: &mut impl Write,
) -> Result<Estimate, AppError> {
    let estimate = session::estimate(input, TariffTable::builtin());
    write_estimate(out, &estimate, &config.currency_symbol)?;
    if write_reports {
        save_reports(config, &estimate, out)?;
    }
    Ok(estimate)
}

/// 가전 이름으로 기본 소비전력[kW]을 찾는다.
pub fn appliance_power_kw(name: &str) -> Result<f64, AppError> {
    ApplianceCatalog::builtin()
        .find(name)
        .map(|p| p.power_kw)
        .ok_or_else(|| AppError::UnknownAppliance(name.to_string()))
}

/// 가전 목록을 번호와 함께 출력한다.
pub fn print_appliances(out: &mut impl Write) -> Result<(), AppError> {
    for (i, profile) in ApplianceCatalog::builtin().profiles().iter().enumerate() {
        writeln!(out, "{:>2}. {:<18} {} kW", i + 1, profile.name, profile.power_kw)?;
    }
    Ok(())
}
