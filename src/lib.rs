//! 단위 변환과 전기 요금 계산 로직을 라이브러리로 분리하여 CLI 와 테스트에서 함께 쓴다.

pub mod app;
pub mod appliance;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod logger;
pub mod preferences;
pub mod quantity;
pub mod report;
pub mod session;
pub mod tariff;
pub mod ui_cli;
pub mod units;
