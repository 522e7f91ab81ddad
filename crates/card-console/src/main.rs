#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use card_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| config::DEFAULT_PATH.into())
    } else {
        config::DEFAULT_PATH.into()
    };

    // The subscriber isn't up yet, so hold on to the load error until it is
    let (appConfig, loadError) = match config::load(&configPath) {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&appConfig.log.filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match loadError {
        Some(e) => tracing::warn!("{e}, using defaults"),
        None => tracing::info!(
            "loaded config from {configPath}: bind={}:{}",
            appConfig.server.bind,
            appConfig.server.port
        ),
    }

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    leptosOptions.site_addr = appConfig
        .socket_addr()
        .unwrap_or_else(|e| panic!("invalid server address: {e}"));
    let addr = leptosOptions.site_addr;

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
