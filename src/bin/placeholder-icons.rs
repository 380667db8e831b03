use focus_icon_gen::placeholder;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = focus_icon_gen::logger::init() {
        eprintln!("{}", e);
    }

    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    match placeholder::write_placeholder_icons(&dir) {
        Ok(_) => {
            log::info!("Done! Icons generated.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
