//! Live Translate - Chinese/Japanese translation from the command line
//!
//! This is the CLI entry point for the live-translate tool.
//! Run with: cargo run --bin live-translate

use live_translate::{AppSettings, GeminiClient, Locale, TargetLanguage, TranslationService};
use std::env;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage:
  live-translate translate <ja|zh|auto> <text...>
  live-translate interpret <text...>
  live-translate             (interactive interpretation)";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let settings = AppSettings::load().with_env_overrides();
    let locale = settings.locale();
    let retry = settings.retry_policy();

    if settings.api_key.is_empty() {
        eprintln!("⚠️  No API key configured. Set GEMINI_API_KEY or add it to settings.json.");
    }

    let service = TranslationService::gemini(settings.model_config(), retry);

    println!("🌐 Live Translate");
    println!("================================================");
    println!("Model: {} @ {}", settings.model_name, settings.base_url);
    println!("Language: {}", locale);
    println!(
        "Retry: max {} retries, {}ms base delay, {}ms cap",
        retry.max_retries,
        retry.base_delay.as_millis(),
        retry.max_delay.as_millis()
    );
    println!("================================================\n");

    match args.first().map(String::as_str) {
        None => run_interactive(&service, locale).await?,
        Some("translate") => {
            let (lang, text) = match args.get(1) {
                Some(lang) if args.len() > 2 => (lang.as_str(), args[2..].join(" ")),
                _ => anyhow::bail!("{}", USAGE),
            };
            let result = if lang.eq_ignore_ascii_case("auto") {
                service.translate_auto(&text).await
            } else {
                let target: TargetLanguage = lang.parse()?;
                service.translate(&text, target).await
            };
            print_result(result, locale);
        }
        Some("interpret") => {
            let text = args[1..].join(" ");
            print_result(service.interpret(&text).await, locale);
        }
        Some(_) => anyhow::bail!("{}", USAGE),
    }

    Ok(())
}

fn print_result(result: Result<String, live_translate::ServiceError>, locale: Locale) {
    match result {
        Ok(text) => println!("✅ {}", text),
        Err(e) => eprintln!("❌ {}", e.user_message(locale)),
    }
}

/// Interpret each line typed by the user until `quit` or `exit`.
async fn run_interactive(
    service: &TranslationService<GeminiClient>,
    locale: Locale,
) -> anyhow::Result<()> {
    println!("Interactive mode. Type a chat message and press Enter.");
    println!("Type 'quit' or 'exit' to exit.\n");

    let stdin = io::stdin();
    loop {
        print!("💬 ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            println!("Goodbye! 👋");
            break;
        }

        print_result(service.interpret(input).await, locale);
        println!();
    }

    Ok(())
}
