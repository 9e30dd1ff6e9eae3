//! Logging setup.

use std::io::Write;

/// 로거를 초기화한다. `RUST_LOG` 가 없으면 warn, `verbose` 면 debug 로 연다.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Warn);
    }
    // 테스트처럼 여러 번 호출되는 경우 첫 설정을 유지한다.
    let _ = builder.try_init();
}
