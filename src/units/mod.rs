//! 단위 정의 및 변환 테이블 모음.

pub mod power;
pub mod time;

pub use power::{convert_power, power_factor, PowerUnit, WATTS_PER_HP};
pub use time::{convert_time, time_factor, TimeUnit};

/// 단위 토큰을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} unit: {token}")]
pub struct UnitParseError {
    /// 물리량 이름 (power, time)
    pub kind: &'static str,
    /// 입력된 원본 토큰
    pub token: String,
}
