use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

/// 리포트 타임스탬프 형식.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV 리포트 헤더.
pub const CSV_HEADER: [&str; 5] = [
    "Timestamp",
    "Appliance",
    "Energy Consumed",
    "Company",
    "Estimated Cost",
];

/// 리포트 한 건에 기록되는 값.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    pub timestamp: DateTime<Local>,
    pub appliance: String,
    pub energy_kwh: f64,
    pub cost: f64,
    pub company: String,
}

impl ReportRecord {
    fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    fn csv_row(&self) -> [String; 5] {
        [
            self.formatted_timestamp(),
            self.appliance.clone(),
            format!("{:.2} kWh", self.energy_kwh),
            self.company.clone(),
            format!("{:.2}", self.cost),
        ]
    }
}

/// 리포트 저장 중 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}

/// 텍스트 리포트 본문을 만든다.
pub fn render_text(record: &ReportRecord, currency_symbol: &str) -> String {
    format!(
        "Timestamp: {}\nAppliance: {}\nEnergy Consumed: {:.2} kWh\nCompany: {}\nEstimated Cost: {}{:.2}\n",
        record.formatted_timestamp(),
        record.appliance,
        record.energy_kwh,
        record.company,
        currency_symbol,
        record.cost
    )
}

/// CSV 리포트를 쓴다. 기존 파일은 덮어쓴다.
pub fn write_csv(path: &Path, record: &ReportRecord) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    writer.write_record(record.csv_row())?;
    writer.flush()?;
    log::info!("CSV report written to {}", path.display());
    Ok(())
}

/// 텍스트 리포트를 쓴다. 기존 파일은 덮어쓴다.
pub fn write_text(
    path: &Path,
    record: &ReportRecord,
    currency_symbol: &str,
) -> Result<(), ReportError> {
    fs::write(path, render_text(record, currency_symbol))?;
    log::info!("text report written to {}", path.display());
    Ok(())
}
