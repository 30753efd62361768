//! Charsheet Player - composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsheet_player::config::StoreConfig;
use charsheet_player::runner::{self, RunnerDeps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root before reading any configuration.
    load_dotenv_from_repo_root();

    // Logs go to stderr so they don't interleave with the sheet on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet_player=info,charsheet_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Charsheet Player");

    let config = StoreConfig::from_env()?;

    runner::run(RunnerDeps { config }).await
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
