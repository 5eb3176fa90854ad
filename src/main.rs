use axum::extract::Request;
use axum::ServiceExt;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;

mod content;
mod image_url;
mod post;
mod render;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let config = content::Config::from_env();
    if config.project_id.is_none() || config.dataset.is_none() {
        println!("SANITY_PROJECT_ID/SANITY_DATASET not set, post lookups will fail");
    }

    let state = std::sync::Arc::new(state::State::new(config));

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let app = NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .merge(routes::page::route())
            .with_state(state)
            .layer(cors),
    );

    let listener = tokio::net::TcpListener::bind(std::net::SocketAddr::from(([0, 0, 0, 0], 8010)))
        .await
        .expect("error binding address");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("Error serving app")
}
