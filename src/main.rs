use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use registry_mock::app::AppState;
use registry_mock::fixtures::{
    CrateBuilder, DependencyBuilder, FixtureStore, UserBuilder, VersionBuilder,
    VersionDownloadBuilder,
};
use registry_mock::router::build_axum_router;

#[derive(Debug, Parser)]
#[command(about = "Serves a mock crates.io API from in-memory fixtures")]
struct Opts {
    /// Address to listen on.
    #[arg(long, env = "REGISTRY_MOCK_ADDR", default_value = "127.0.0.1:8888")]
    addr: SocketAddr,

    /// Start with an empty store instead of the demo fixtures.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();

    let store = if opts.empty {
        FixtureStore::new()
    } else {
        demo_store()
    };

    let state = AppState::new(store);
    let router = build_axum_router(state);

    let listener = tokio::net::TcpListener::bind(opts.addr).await?;
    info!("listening on http://{}", opts.addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
}

/// A small deterministic data set so that a frontend pointed at the mock
/// has something to render out of the box.
fn demo_store() -> FixtureStore {
    let mut store = FixtureStore::new();

    let user = UserBuilder::default().name("John Doe").build(&mut store);

    let rand = CrateBuilder::new("rand").build(&mut store);
    let serde = CrateBuilder::new("serde")
        .description("A generic serialization/deserialization framework")
        .build(&mut store);

    VersionBuilder::new(rand.id).num("1.0.0").build(&mut store);
    let rand_110 = VersionBuilder::new(rand.id)
        .num("1.1.0")
        .published_by(&user)
        .build(&mut store);
    let serde_100 = VersionBuilder::new(serde.id).num("1.0.0").build(&mut store);

    DependencyBuilder::new(serde_100.id, "rand").build(&mut store);
    VersionDownloadBuilder::new(rand_110.id, "2020-01-13").build(&mut store);
    VersionDownloadBuilder::new(rand_110.id, "2020-01-14").build(&mut store);

    store.add_user_owner(&rand, &user);
    store.follow(user.id, rand.id);

    store
}
