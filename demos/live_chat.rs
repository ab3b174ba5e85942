//! Simulated live-stream chat with the interpreter switched on.
//!
//! Viewer messages arrive on a fixed interval and each one is interpreted in
//! its own task, so a slow or retrying request never holds up the chat.

use std::sync::Arc;
use std::time::Duration;

use live_translate::{AppSettings, TranslationService};
use tokio::task::JoinSet;

const INCOMING: &[(&str, &str)] = &[
    ("sato", "This is great! 素晴らしい！"),
    ("chen", "すごいですね！ What is this?"),
    ("sato", "主播今天在哪里直播？"),
    ("chen", "   "),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let settings = AppSettings::load().with_env_overrides();
    let locale = settings.locale();
    let service = Arc::new(TranslationService::gemini(
        settings.model_config(),
        settings.retry_policy(),
    ));

    let mut tasks = JoinSet::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(2));

    for (user, text) in INCOMING {
        ticker.tick().await;
        println!("📺 {}: {}", user, text);

        let service = Arc::clone(&service);
        tasks.spawn(async move { (*user, *text, service.interpret(text).await) });
    }

    while let Some(joined) = tasks.join_next().await {
        let (user, text, result) = joined?;
        match result {
            Ok(interpretation) => println!("🗣️  {} \"{}\" → {}", user, text, interpretation),
            Err(e) => eprintln!("❌ {} \"{}\": {}", user, text, e.user_message(locale)),
        }
    }

    Ok(())
}
