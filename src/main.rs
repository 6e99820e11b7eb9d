//! Aura Interview - terminal client.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};

use aura_interview::adapters::console;
use aura_interview::adapters::http::{
    BackendClient, BackendClientConfig, HttpOntologyCompiler, HttpProcessStore,
};
use aura_interview::adapters::memory::{InMemoryProcessStore, RuleBasedCompiler};
use aura_interview::application::WizardController;
use aura_interview::config::{AppConfig, LogFormat, LoggingConfig};
use aura_interview::ports::{OntologyCompiler, ProcessStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let (store, compiler): (Arc<dyn ProcessStore>, Arc<dyn OntologyCompiler>) =
        if config.backend.is_local() {
            info!("using in-memory store and local compiler");
            (
                Arc::new(InMemoryProcessStore::new()),
                Arc::new(RuleBasedCompiler::new()),
            )
        } else {
            let client = BackendClient::new(
                BackendClientConfig::new(&config.backend.base_url)
                    .with_timeout(config.backend.timeout()),
            )?;
            info!(base_url = %client.base_url(), "using remote backend");
            (
                Arc::new(HttpProcessStore::new(client.clone())),
                Arc::new(HttpOntologyCompiler::new(client)),
            )
        };

    let controller = WizardController::new(store, compiler);
    let (loaded, examples) =
        futures::join!(controller.load_processes(), controller.load_examples());
    if let Err(e) = loaded {
        warn!(error = %e, "initial process load failed");
    }
    if let Err(e) = examples {
        warn!(error = %e, "example placeholders unavailable");
    }

    console::run(&controller, &console::stdio()).await?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
