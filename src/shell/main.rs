use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use timesheet::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use timesheet::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use timesheet::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use timesheet::shared::core::primitives::SystemClock;
use timesheet::shell::config::AppConfig;
use timesheet::shell::http::router;
use timesheet::shell::seed::seed_demo_data;
use timesheet::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("loading configuration")?;

    // In-memory deps for now
    let employees = Arc::new(InMemoryEmployeeStore::new());
    let projects = Arc::new(InMemoryProjectStore::new());
    let entries = Arc::new(InMemoryTimeEntryStore::new());

    if config.seed_demo_data {
        seed_demo_data(employees.as_ref(), projects.as_ref(), entries.as_ref())
            .await
            .context("seeding demo data")?;
    }

    let state = AppState::new(employees, projects, entries, Arc::new(SystemClock));
    let app = router(state);

    tracing::info!("REST endpoint: http://{}/api/v1", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
