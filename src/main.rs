use std::env;

/// 프로그램의 엔트리 포인트. 명령행을 해석해 해당 기능을 실행한다.
fn main() {
    if let Err(err) = energy_cost_calculator::cli::run(env::args_os()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
