use focus_icon_gen::{config::API_KEY_VAR, GeminiClient, GeneratorConfig, IconGenerator};
use std::env;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = focus_icon_gen::logger::init() {
        eprintln!("{}", e);
    }

    let config = GeneratorConfig::from_env();
    let client = GeminiClient::new(config.gemini.clone());
    let generator = IconGenerator::new(client, config);

    if generator.generate_icon(env::var(API_KEY_VAR).ok()).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
