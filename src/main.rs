use clap::Parser;
use log::error;
use std::process::ExitCode;
use ufh_loop_toolbox::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match app::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
