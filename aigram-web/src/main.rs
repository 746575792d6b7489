use aigram_core::Config;
use aigram_web::App;
use dioxus::prelude::*;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    configure_logging();

    let config = Config::load();

    LaunchBuilder::new()
        .with_context_provider(move || Box::new(config.clone()))
        .launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
