use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::SheetSessionService;
use crate::config::StoreConfig;
use crate::infrastructure::HttpRecordStore;
use crate::ports::outbound::RecordStorePort;
use crate::ui::ConsoleSession;

pub struct RunnerDeps {
    pub config: StoreConfig,
}

/// Load the build and drive the console over stdin/stdout until `quit` or EOF.
pub async fn run(deps: RunnerDeps) -> anyhow::Result<()> {
    let RunnerDeps { config } = deps;

    let store = HttpRecordStore::new(&config);
    tracing::info!(url = %store.record_url(), "Using record store");
    let store: Arc<dyn RecordStorePort> = Arc::new(store);

    let mut console = ConsoleSession::start(SheetSessionService::new(store)).await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let intro = format!(
        "{}\n{}",
        crate::ui::console::render_sheet(console.build()),
        crate::ui::console::render_help()
    );
    stdout.write_all(intro.as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = console.handle_line(&line).await;
        if !reply.text.is_empty() {
            stdout.write_all(reply.text.as_bytes()).await?;
            if !reply.text.ends_with('\n') {
                stdout.write_all(b"\n").await?;
            }
        }
        if reply.quit {
            break;
        }
    }

    stdout.flush().await?;
    Ok(())
}
