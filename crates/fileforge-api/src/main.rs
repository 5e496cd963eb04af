use fileforge_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside
// containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    fileforge_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (scratch storage, state, routes)
    let (_state, router) = fileforge_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    fileforge_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
