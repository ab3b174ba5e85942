//! Basic usage example for Live Translate.

use live_translate::{AppSettings, TargetLanguage, TranslationService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    // Settings file first, then environment (GEMINI_API_KEY etc.)
    let settings = AppSettings::load().with_env_overrides();
    let locale = settings.locale();

    let service = TranslationService::gemini(settings.model_config(), settings.retry_policy());

    let post = "今天的樱花开得真漂亮";
    println!("📝 Post: {}\n", post);

    match service.translate(post, TargetLanguage::Japanese).await {
        Ok(text) => println!("✅ Translation: {}", text),
        Err(e) => eprintln!("❌ {}", e.user_message(locale)),
    }

    // Comments: direction picked from each comment's script
    let comments = ["Looks amazing!", "桜がきれいですね"];
    for comment in comments {
        match service.translate_auto(comment).await {
            Ok(text) => println!("💬 {} → {}", comment, text),
            Err(e) => eprintln!("❌ {}", e.user_message(locale)),
        }
    }

    Ok(())
}
