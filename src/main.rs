use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match pointer::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Pointer error: {}", e);
            ExitCode::FAILURE
        }
    }
}
