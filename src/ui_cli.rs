use std::io::{BufRead, Write};

use crate::app::{self, AppError};
use crate::appliance::ApplianceCatalog;
use crate::config::Config;
use crate::preferences::UserPreferences;
use crate::quantity::parse_finite;
use crate::session::{self, Estimate, SessionInput};
use crate::tariff::TariffTable;
use crate::units::{PowerUnit, TimeUnit};

const RULE_HEAVY: &str = "=================================";
const RULE_LIGHT: &str = "---------------------------------";

pub const MSG_CANCELLED: &str = "Returning to main menu...";
pub const MSG_GOODBYE: &str = "Exiting program. Goodbye!";
pub const MSG_INVALID_SELECTION: &str = "Invalid selection. Try again.";
pub const MSG_INVALID_INPUT: &str = "Invalid input. Try again.";
pub const MSG_INVALID_TIME: &str = "Invalid time input. Try again.";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualPower,
    ChooseAppliance,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// 메뉴 입력을 해석한다. 취소 입력(`None`)은 종료로 본다.
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            None | Some("3") => MenuChoice::Exit,
            Some("1") => MenuChoice::ManualPower,
            Some("2") => MenuChoice::ChooseAppliance,
            Some(_) => MenuChoice::Invalid,
        }
    }
}

/// 프롬프트 응답이 취소 요청인지 확인한다 (`cancel` 또는 `0`).
pub fn is_cancel(input: &str) -> bool {
    input.eq_ignore_ascii_case("cancel") || input == "0"
}

/// 메뉴 기반 대화형 화면. 입출력 핸들을 받아 스크립트 입력으로도 구동할 수 있다.
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
    preferences: UserPreferences,
    tariffs: &'a TariffTable,
    catalog: ApplianceCatalog,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        config: &'a Config,
        preferences: UserPreferences,
        tariffs: &'a TariffTable,
    ) -> Self {
        Self {
            input,
            output,
            config,
            preferences,
            tariffs,
            catalog: ApplianceCatalog::builtin(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 종료를 선택할 때까지 메인 메뉴를 반복한다.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.print_main_menu()?;
            let choice = self.get_input("Select an option: ")?;
            let input = match MenuChoice::from_input(choice.as_deref()) {
                MenuChoice::Exit => {
                    self.say(MSG_GOODBYE)?;
                    break;
                }
                MenuChoice::ManualPower => self.manual_power()?,
                MenuChoice::ChooseAppliance => self.choose_appliance()?,
                MenuChoice::Invalid => {
                    self.say(MSG_INVALID_SELECTION)?;
                    continue;
                }
            };
            let Some((appliance, power, power_unit)) = input else {
                continue;
            };
            let Some(session_input) = self.complete_session(appliance, power, power_unit)? else {
                continue;
            };
            let estimate = session::estimate(&session_input, self.tariffs);
            self.print_estimate(&estimate)?;
            self.save_reports(&estimate)?;
        }
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<(), AppError> {
        self.say(&format!("\n{RULE_HEAVY}"))?;
        self.say("Welcome to the Energy Calculator!")?;
        self.say(RULE_HEAVY)?;
        self.say("1. Enter power manually")?;
        self.say("2. Choose an appliance")?;
        self.say("3. Exit")?;
        self.say(RULE_LIGHT)?;
        Ok(())
    }

    fn choose_appliance(&mut self) -> Result<Option<(String, f64, PowerUnit)>, AppError> {
        self.say(&format!("\n{RULE_HEAVY}"))?;
        self.say("Available appliances:")?;
        self.say(RULE_HEAVY)?;
        for (i, profile) in self.catalog.profiles().iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, profile.name))?;
        }
        self.say(RULE_LIGHT)?;

        let Some(sel) = self.get_input("Choose an appliance by number (Press 0 to cancel): ")?
        else {
            return Ok(None);
        };
        // 부호나 공백 없이 숫자만 허용한다
        let profile = Some(sel.as_str())
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<usize>().ok())
            .and_then(|n| self.catalog.by_number(n));
        match profile {
            Some(profile) => Ok(Some((
                profile.name.to_string(),
                profile.power_kw,
                PowerUnit::Kilowatt,
            ))),
            None => {
                self.say(MSG_INVALID_SELECTION)?;
                Ok(None)
            }
        }
    }

    fn manual_power(&mut self) -> Result<Option<(String, f64, PowerUnit)>, AppError> {
        self.say(&format!("\n{RULE_HEAVY}"))?;
        self.say("Press 0 to cancel at any time.")?;
        let Some(appliance) = self.get_input("Enter the appliance name (Press 0 to cancel): ")?
        else {
            return Ok(None);
        };
        let Some(raw_power) = self.get_input("Enter power value (Press 0 to cancel): ")? else {
            return Ok(None);
        };
        let Some(power) = parse_finite(&raw_power) else {
            self.say(MSG_INVALID_INPUT)?;
            return Ok(None);
        };
        let prompt = format!(
            "Enter power unit (W, kW, HP) [{}] (Press 0 to cancel): ",
            self.preferences.preferred_power_unit
        );
        let Some(raw_unit) = self.get_input(&prompt)? else {
            return Ok(None);
        };
        let power_unit = if raw_unit.is_empty() {
            self.preferences.preferred_power_unit
        } else {
            match raw_unit.parse::<PowerUnit>() {
                Ok(unit) => unit,
                Err(err) => {
                    log::debug!("{err}");
                    self.say(MSG_INVALID_INPUT)?;
                    return Ok(None);
                }
            }
        };
        Ok(Some((appliance, power, power_unit)))
    }

    /// 시간과 회사 입력을 받아 세션 입력을 완성한다.
    fn complete_session(
        &mut self,
        appliance: String,
        power: f64,
        power_unit: PowerUnit,
    ) -> Result<Option<SessionInput>, AppError> {
        self.say(&format!("\n{RULE_HEAVY}"))?;
        let Some(raw_time) = self.get_input("Enter time value (Press 0 to cancel): ")? else {
            return Ok(None);
        };
        let Some(time) = parse_finite(&raw_time) else {
            self.say(MSG_INVALID_TIME)?;
            return Ok(None);
        };
        let prompt = format!(
            "Enter time unit (seconds, minutes, hours) [{}] (Press 0 to cancel): ",
            self.preferences.preferred_time_unit
        );
        let Some(raw_unit) = self.get_input(&prompt)? else {
            return Ok(None);
        };
        let time_unit = if raw_unit.is_empty() {
            self.preferences.preferred_time_unit
        } else {
            match raw_unit.parse::<TimeUnit>() {
                Ok(unit) => unit,
                Err(err) => {
                    log::debug!("{err}");
                    self.say(MSG_INVALID_TIME)?;
                    return Ok(None);
                }
            }
        };

        let providers: Vec<&str> = self.tariffs.companies().collect();
        let prompt = format!(
            "Enter your electricity provider ({}) (Press 0 to cancel): ",
            providers.join("/")
        );
        let Some(company) = self.get_input(&prompt)? else {
            return Ok(None);
        };

        Ok(Some(SessionInput {
            appliance,
            power,
            power_unit,
            time,
            time_unit,
            company,
        }))
    }

    fn print_estimate(&mut self, estimate: &Estimate) -> Result<(), AppError> {
        let config = self.config;
        self.say(&format!("\n{RULE_HEAVY}"))?;
        app::write_estimate(&mut self.output, estimate, &config.currency_symbol)?;
        self.say(RULE_HEAVY)?;
        Ok(())
    }

    fn save_reports(&mut self, estimate: &Estimate) -> Result<(), AppError> {
        let config = self.config;
        app::save_reports(config, estimate, &mut self.output)
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 취소 입력이나 입력 종료(EOF)면 `None`.
    fn get_input(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            log::debug!("input closed");
            return Ok(None);
        }
        let answer = buf.trim();
        if is_cancel(answer) {
            self.say(MSG_CANCELLED)?;
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
