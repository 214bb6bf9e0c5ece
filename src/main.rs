use std::sync::Arc;

mod api;
mod config;
mod filter;
mod logger;
mod roster;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the thread pool from the workers setting
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
    let listener = server::bind_listener(addr)?;

    // The roster is generated once here and never mutated afterwards
    let roster = roster::Roster::generate(&cfg.dataset);
    if roster.is_empty() {
        logger::log_warning("Roster is empty; every filter request will return no students");
    }
    logger::log_roster_ready(roster.len(), cfg.dataset.seed);
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, roster));

    // Connection tasks use spawn_local, which requires a LocalSet
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}
