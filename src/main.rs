use std::sync::Arc;

use mock_site::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Worker threads follow `server.workers`, default is one per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg, &state.roots);

    server::serve(listener, state, server::signal::shutdown_signal()).await;
    logger::log_info("Server stopped");
    Ok(())
}
