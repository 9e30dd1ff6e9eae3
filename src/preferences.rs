use std::fs;
use std::io;
use std::path::Path;

use crate::units::{PowerUnit, TimeUnit, UnitParseError};

/// 선호 단위 저장/로드 시 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("preferences file I/O error: {0}")]
    Io(#[from] io::Error),
    /// 두 줄 형식이 아님
    #[error("preferences file is malformed: expected 2 lines, found {0}")]
    Malformed(usize),
    #[error("preferences file contains {0}")]
    UnknownUnit(#[from] UnitParseError),
}

/// 입력 화면에서 기본값으로 쓰는 선호 단위.
///
/// 파일 형식은 평문 두 줄이다. 첫 줄은 전력 단위, 둘째 줄은 시간 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPreferences {
    pub preferred_power_unit: PowerUnit,
    pub preferred_time_unit: TimeUnit,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_power_unit: PowerUnit::Kilowatt,
            preferred_time_unit: TimeUnit::Hours,
        }
    }
}

impl UserPreferences {
    pub fn new(preferred_power_unit: PowerUnit, preferred_time_unit: TimeUnit) -> Self {
        Self {
            preferred_power_unit,
            preferred_time_unit,
        }
    }

    /// 파일 내용을 해석한다. 각 줄의 앞뒤 공백은 무시한다.
    pub fn parse(content: &str) -> Result<Self, PreferencesError> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < 2 {
            return Err(PreferencesError::Malformed(lines.len()));
        }
        Ok(Self {
            preferred_power_unit: lines[0].trim().parse()?,
            preferred_time_unit: lines[1].trim().parse()?,
        })
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", self.preferred_power_unit, self.preferred_time_unit)
    }

    /// 파일에서 읽는다. 파일이 없으면 기본값을 돌려준다.
    pub fn load_or_default(path: &Path) -> Result<Self, PreferencesError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no preferences at {}; using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        fs::write(path, self.render())?;
        log::info!("preferences saved to {}", path.display());
        Ok(())
    }
}
