use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::{self, AppError};
use crate::config::{self, DEFAULT_CONFIG_PATH};
use crate::conversion;
use crate::logger;
use crate::preferences::UserPreferences;
use crate::quantity::{parse_finite, QuantityKind};
use crate::session::SessionInput;
use crate::units::{PowerUnit, TimeUnit};

#[derive(Parser)]
#[command(name = "energy-cost", version)]
#[command(about = "Estimate the electricity cost of running an appliance")]
pub struct Cli {
    /// Path to the TOML config file (created with defaults when missing)
    #[arg(long = "config", global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Interactive,
    /// Estimate energy and cost for one appliance session
    Estimate {
        /// Power draw; taken from the appliance catalog when omitted
        #[arg(
            long,
            allow_negative_numbers = true,
            required_unless_present = "appliance",
            value_parser = parse_finite_f64
        )]
        power: Option<f64>,
        /// Power unit (W, kW, HP); defaults to the preferred unit
        #[arg(long = "power-unit", requires = "power")]
        power_unit: Option<PowerUnit>,
        /// Usage duration
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite_f64)]
        time: f64,
        /// Time unit (seconds, minutes, hours); defaults to the preferred unit
        #[arg(long = "time-unit")]
        time_unit: Option<TimeUnit>,
        /// Electricity provider (e.g. MERALCO, BATELEC)
        #[arg(long)]
        company: String,
        /// Appliance name
        #[arg(long)]
        appliance: Option<String>,
        /// Skip writing the CSV/text reports
        #[arg(long = "no-report")]
        no_report: bool,
    },
    /// List the built-in appliance catalog
    Appliances,
    /// Convert a value with the power/time conversion tables
    Convert {
        kind: ConvertKind,
        #[arg(allow_negative_numbers = true, value_parser = parse_finite_f64)]
        value: f64,
        from: String,
        to: String,
    },
    /// Show or update the preferred units
    Preferences {
        #[arg(long = "power-unit")]
        power_unit: Option<PowerUnit>,
        #[arg(long = "time-unit")]
        time_unit: Option<TimeUnit>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertKind {
    Power,
    Time,
}

impl From<ConvertKind> for QuantityKind {
    fn from(kind: ConvertKind) -> Self {
        match kind {
            ConvertKind::Power => QuantityKind::Power,
            ConvertKind::Time => QuantityKind::Duration,
        }
    }
}

/// 유한한 숫자만 받는다. `NaN`, `inf` 는 계산 전에 거부한다.
pub fn parse_finite_f64(s: &str) -> Result<f64, String> {
    parse_finite(s).ok_or_else(|| format!("expected a finite number, got {s:?}"))
}

pub fn run<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    logger::init(cli.verbose);
    let cfg = config::load_or_default(&cli.config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            drop(out);
            app::run(&cfg)?;
        }
        Commands::Estimate {
            power,
            power_unit,
            time,
            time_unit,
            company,
            appliance,
            no_report,
        } => {
            let prefs = UserPreferences::load_or_default(&cfg.preferences_path)?;
            let (power, power_unit) = match power {
                Some(power) => (power, power_unit.unwrap_or(prefs.preferred_power_unit)),
                None => {
                    let name = appliance.as_deref().unwrap_or_default();
                    (app::appliance_power_kw(name)?, PowerUnit::Kilowatt)
                }
            };
            let input = SessionInput {
                appliance: appliance.unwrap_or_else(|| "Appliance".to_string()),
                power,
                power_unit,
                time,
                time_unit: time_unit.unwrap_or(prefs.preferred_time_unit),
                company,
            };
            app::run_estimate(&cfg, &input, !no_report, &mut out)?;
        }
        Commands::Appliances => app::print_appliances(&mut out)?,
        Commands::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let result = conversion::convert(kind.into(), value, &from, &to);
            writeln!(out, "{result} {to}")?;
        }
        Commands::Preferences {
            power_unit,
            time_unit,
        } => {
            let mut prefs = UserPreferences::load_or_default(&cfg.preferences_path)?;
            if power_unit.is_some() || time_unit.is_some() {
                if let Some(unit) = power_unit {
                    prefs.preferred_power_unit = unit;
                }
                if let Some(unit) = time_unit {
                    prefs.preferred_time_unit = unit;
                }
                prefs.save(&cfg.preferences_path)?;
            }
            writeln!(out, "Preferred power unit: {}", prefs.preferred_power_unit)?;
            writeln!(out, "Preferred time unit: {}", prefs.preferred_time_unit)?;
        }
    }
    Ok(())
}
