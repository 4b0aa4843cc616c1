use km_core::logger::init_logger;
use kitchenmate::runner::ollama::OllamaRunner;
use kitchenmate::server;
use std::sync::Arc;
use tracing::error;

fn main() {
    init_logger();
    let runner = Arc::new(OllamaRunner::from_env());

    if let Err(err) = server::http_server::http_server(runner) {
        error!("{err}");
        std::process::exit(1);
    }
}
