use nutricompare::{ChatTranscript, Config, NutriClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    nutricompare::logger::init_with_config(
        nutricompare::logger::LoggerConfig::development()
            .with_level(nutricompare::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking API environment...");

    match (env::var("FDC_API_KEY"), env::var("GEMINI_API_KEY")) {
        (Ok(fdc), Ok(gemini)) => {
            log::info!("✅ API keys found in environment");
            log::debug!("FDC key starts with: {}...", &fdc[..4.min(fdc.len())]);
            log::debug!("Gemini key length: {}", gemini.len());
        }
        _ => {
            log::error!("❌ FDC_API_KEY and GEMINI_API_KEY must be set");
            return Err("missing API keys".into());
        }
    }

    let client = match NutriClient::new(Config::from_env()) {
        Ok(client) => {
            log::info!("✅ Nutricompare client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize client: {}", e);
            return Err(e.into());
        }
    };

    // Test 1: side-by-side comparison
    log::info!("🥗 Comparing Apple (100 g) with Banana (150 g)...");
    match client.compare("Apple", 100.0, "Banana", 150.0).await {
        Ok((a, b)) => {
            for food in [&a, &b] {
                log::info!(
                    "📝 {}: {} kcal, {} g protein, {} g carbs, {} g fat, {} g fiber",
                    food.name,
                    food.nutrients.calories,
                    food.nutrients.protein,
                    food.nutrients.carbs,
                    food.nutrients.fat,
                    food.nutrients.fiber
                );
            }
        }
        Err(e) => log::error!("❌ Comparison failed: {}", e),
    }

    // Test 2: catalog load
    log::info!("📚 Loading the food catalog...");
    let catalog = client.catalog().load_catalog().await;
    for category in &catalog {
        log::info!("  {} - {} foods resolved", category.name, category.foods.len());
    }

    // Test 3: chat
    let mut transcript = ChatTranscript::new();
    let question = "How much protein should I eat per day?";
    log::info!("💬 Asking: {}", question);
    transcript.push_user(question);

    match client.chat().ask(question).await {
        Ok(reply) => {
            transcript.push_reply(&reply);
            log::info!("🤖 {}", reply);
        }
        Err(e) => log::error!("❌ Chat request failed: {}", e),
    }

    log::info!("🏁 Done ({} transcript messages)", transcript.len());
    Ok(())
}
