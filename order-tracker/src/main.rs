use anyhow::Context;
use order_tracker::{Config, JsonFileOrderStore, ReminderService, TrackerError, init_logger_with_file};
use shared::parse_iso_date;

/// Usage: order-tracker [YYYY-MM-DD]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env) and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_json, config.log_dir.as_deref());

    // 2. Evaluation date: argument or local today
    let today = match std::env::args().nth(1) {
        Some(arg) => parse_iso_date(&arg).ok_or(TrackerError::InvalidDate(arg))?,
        None => chrono::Local::now().date_naive(),
    };

    tracing::info!("📒 Order tracker: EMI reminders for {}", today);

    // 3. Collaborators
    let holidays = config
        .holiday_client_config()
        .build_client()
        .map_err(TrackerError::from)
        .context("Failed to build holiday client")?;
    let store = JsonFileOrderStore::new(&config.orders_file);

    // 4. Render
    let service = ReminderService::new(store, holidays);
    for reminder in service.reminders_for(today).await {
        println!("{}", reminder);
    }

    Ok(())
}
