use fintrack_core::utils::today_local;
use fintrack_server::{build_state, config::Config, init_tracing, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config).await?;
    let summary = seed::seed_demo_data(&state, today_local()).await?;
    tracing::info!(
        "Created {} categories, {} transactions and {} budgets. Log in as {} / {}",
        summary.categories,
        summary.transactions,
        summary.budgets,
        seed::DEMO_EMAIL,
        seed::DEMO_PASSWORD
    );
    Ok(())
}
