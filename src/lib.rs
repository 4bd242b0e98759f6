#![warn(clippy::all)]
pub use handle_errors;
use tokio::sync::{oneshot, oneshot::Sender};
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{Filter, Reply, http::Method};

pub mod config;
pub mod routes;
pub mod store;
pub mod types;
mod views;

use routes::quiz::{detail_page, list_page, upload_quiz};
use store::Store;

pub struct OneshotHandler {
    pub sender: Sender<i32>,
}

async fn build_routes(store: Store) -> impl Filter<Extract = impl Reply> + Clone {
    let store_filter = warp::any().map(move || store.clone());
    let id_filter = warp::any().map(|| uuid::Uuid::new_v4().to_string());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST]);

    let list_page = warp::get()
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(list_page)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "list_page_request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let detail_page = warp::get()
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(detail_page);

    let upload_quiz = warp::post()
        .and(warp::path("api"))
        .and(warp::path("upload"))
        .and(warp::path::end())
        .and(id_filter)
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(upload_quiz);

    list_page
        .or(detail_page)
        .or(upload_quiz)
        .with(cors)
        .with(warp::trace::request())
        .recover(handle_errors::return_error)
}

pub fn setup_store(config: &config::Config) -> Store {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},quiz_shelf={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        // Use the filter we built above to determine which traces to record.
        .with_env_filter(log_filter)
        // Record an event when each span closes.
        // This can be used to time our
        // routes' durations!
        .with_span_events(FmtSpan::CLOSE)
        .init();

    Store::new(&config.storage_root)
}

pub async fn run(config: config::Config, store: Store) {
    let routes = build_routes(store).await;
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}

pub async fn oneshot(store: Store) -> OneshotHandler {
    let routes = build_routes(store).await;
    let (tx, rx) = oneshot::channel::<i32>();

    let socket: std::net::SocketAddr = "127.0.0.1:3030"
        .to_string()
        .parse()
        .expect("Not a valid address");

    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(socket, async {
        rx.await.ok();
    });

    tokio::task::spawn(server);

    OneshotHandler { sender: tx }
}
