use axum::ServiceExt;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;

mod blog;
mod routes;
mod state;
mod store;
mod upload;

#[tokio::main]
async fn main() {
    let state = std::sync::Arc::new(state::State::new());
    prepare_store(&state)
        .await
        .expect("error preparing blog store");

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let app = NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .nest("/blog", routes::blog::route())
            .with_state(state)
            .layer(cors),
    );

    let listener = tokio::net::TcpListener::bind(std::net::SocketAddr::from(([0, 0, 0, 0], 8010)))
        .await
        .expect("error binding listener");
    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .expect("Error serving app")
}

async fn prepare_store(state: &state::State) -> std::io::Result<()> {
    for collection in ["post", "comment", "user"] {
        tokio::fs::create_dir_all(state.store.root.join(collection)).await?;
    }
    tokio::fs::create_dir_all(&state.uploads_dir).await?;

    Ok(())
}
