use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use film_browser::catalog::FetchPoll;
use film_browser::{FetchFailure, FetchHandle, HttpCatalog};
use serde_json::json;
use tokio::net::TcpListener;

async fn films_payload() -> impl IntoResponse {
    Json(json!({
        "count": 3,
        "next": null,
        "previous": null,
        "results": [
            {
                "title": "A New Hope",
                "episode_id": 4,
                "opening_crawl": "It is a period of civil war.\r\nRebel spaceships...",
                "director": "George Lucas",
                "producer": "Gary Kurtz, Rick McCallum",
                "release_date": "1977-05-25"
            },
            {
                "title": "The Empire Strikes Back",
                "episode_id": 5,
                "opening_crawl": "It is a dark time for the\r\nRebellion.",
                "director": "Irvin Kershner",
                "producer": "Gary Kurtz, Rick McCallum",
                "release_date": "1980-05-17"
            },
            {
                "title": "The Phantom Menace",
                "episode_id": 1,
                "opening_crawl": "Turmoil has engulfed the\r\nGalactic Republic.",
                "director": "George Lucas",
                "producer": "Rick McCallum",
                "release_date": "1999-05-19"
            }
        ]
    }))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn catalog_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/films/?format=json")
}

#[tokio::test]
async fn fetch_all_decodes_results() {
    let addr = serve(Router::new().route("/api/films/", get(films_payload))).await;
    let catalog = HttpCatalog::new(catalog_url(addr));

    let films = catalog.fetch_all().await.unwrap();
    let titles: Vec<&str> = films.iter().map(|film| film.title.as_str()).collect();
    assert_eq!(titles, ["A New Hope", "The Empire Strikes Back", "The Phantom Menace"]);
    assert_eq!(films[1].director, "Irvin Kershner");
}

#[tokio::test]
async fn error_status_is_a_request_failure() {
    let router = Router::new().route(
        "/api/films/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(router).await;

    let err = HttpCatalog::new(catalog_url(addr)).fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchFailure::Request(_)));
}

#[tokio::test]
async fn html_body_is_a_decode_failure() {
    let router = Router::new().route("/api/films/", get(|| async { "<html>maintenance</html>" }));
    let addr = serve(router).await;

    let err = HttpCatalog::new(catalog_url(addr)).fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchFailure::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_request_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpCatalog::new(catalog_url(addr)).fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchFailure::Request(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn background_fetch_delivers_films() {
    let addr = serve(Router::new().route("/api/films/", get(films_payload))).await;
    let handle = FetchHandle::spawn(HttpCatalog::new(catalog_url(addr)));

    let deadline = Instant::now() + Duration::from_secs(10);
    let films = loop {
        match handle.poll() {
            FetchPoll::Ready(result) => break result.unwrap(),
            FetchPoll::Pending if Instant::now() < deadline => {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
            FetchPoll::Pending => panic!("fetch did not finish in time"),
            FetchPoll::Closed => panic!("fetch worker exited without a result"),
        }
    };
    assert_eq!(films.len(), 3);
}
