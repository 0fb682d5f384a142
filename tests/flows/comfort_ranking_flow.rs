#[path = "../common/mod.rs"]
mod common;

use common::{TestCities, TestServer, TestServerBuilder, UpstreamMock};
use serde_json::json;

// ============================================================================
// Ranking
// ============================================================================

#[tokio::test]
async fn test_ranking_end_to_end() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;

    let (status, body) = server.client().get("/api/weather/comfortindex").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            {"city": "Lisbon", "temperature": 24.0, "humidity": 50, "windSpeed": 3.0,
             "weather": "clear sky", "comfortIndex": 100, "rank": 1},
            {"city": "Oslo", "temperature": 12.0, "humidity": 70, "windSpeed": 6.0,
             "weather": "clear sky", "comfortIndex": 39, "rank": 2},
            {"city": "Colombo", "temperature": 30.0, "humidity": 80, "windSpeed": 10.0,
             "weather": "clear sky", "comfortIndex": 32, "rank": 3}
        ])
    );

    server.shutdown();
}

#[tokio::test]
async fn test_repeated_ranking_is_served_from_cache() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;
    let client = server.client();

    let (_, first) = client.get("/api/weather/comfortindex").await;
    let (_, second) = client.get("/api/weather/comfortindex").await;
    let (_, third) = client.get("/api/weather/comfortindex").await;

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(UpstreamMock::request_count(server.upstream()).await, 3);

    let (_, cache) = client.get("/api/cache-status").await;
    assert_eq!(cache["processedCache"]["hits"], 2);
    assert_eq!(cache["processedCache"]["misses"], 1);

    server.shutdown();
}

#[tokio::test]
async fn test_concurrent_rankings_share_one_refresh() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = server.client();
        handles.push(tokio::spawn(async move {
            client.get("/api/weather/comfortindex").await
        }));
    }
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    for id in TestCities::all() {
        assert_eq!(UpstreamMock::requests_for(server.upstream(), id).await, 1);
    }

    server.shutdown();
}

#[tokio::test]
async fn test_ranking_reuses_observations_from_weather_endpoint() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;
    let client = server.client();

    let (status, weather) = client.get("/api/weather").await;
    assert_eq!(status, 200);
    assert_eq!(weather.as_array().unwrap().len(), 3);

    let (status, ranking) = client.get("/api/weather/comfortindex").await;
    assert_eq!(status, 200);
    assert_eq!(ranking[0]["city"], "Lisbon");
    assert_eq!(UpstreamMock::request_count(server.upstream()).await, 3);

    let (_, cache) = client.get("/api/cache-status").await;
    assert_eq!(cache["rawCache"]["misses"], 3);
    assert_eq!(cache["rawCache"]["hits"], 3);

    server.shutdown();
}

#[tokio::test]
async fn test_expired_caches_refetch_upstream() {
    let server = TestServerBuilder::new()
        .with_ttls(1, 1)
        .start()
        .await
        .expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;
    let client = server.client();

    client.get("/api/weather/comfortindex").await;
    tokio::time::sleep(std::time::Duration::from_millis(1_200)).await;
    let (status, body) = client.get("/api/weather/comfortindex").await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(UpstreamMock::request_count(server.upstream()).await, 6);

    server.shutdown();
}

#[tokio::test]
async fn test_duplicate_city_codes_are_fetched_once() {
    let server = TestServerBuilder::new()
        .with_cities(vec![
            TestCities::lisbon(),
            TestCities::oslo(),
            TestCities::lisbon(),
        ])
        .start()
        .await
        .expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;

    let (_, body) = server.client().get("/api/weather/comfortindex").await;

    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(
        UpstreamMock::requests_for(server.upstream(), TestCities::lisbon()).await,
        1
    );

    server.shutdown();
}

// ============================================================================
// Weather
// ============================================================================

#[tokio::test]
async fn test_weather_carries_full_observation() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;

    let (status, body) = server.client().get("/api/weather").await;

    assert_eq!(status, 200);
    let oslo = body
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["city"] == "Oslo")
        .cloned()
        .unwrap();
    assert_eq!(oslo["cityId"], TestCities::oslo());
    assert_eq!(oslo["humidity"], 70);
    assert_eq!(oslo["cloudiness"], 75);
    assert_eq!(oslo["weatherMain"], "Clear");
    assert_eq!(oslo["icon"], "01d");

    server.shutdown();
}

// ============================================================================
// Bearer token
// ============================================================================

#[tokio::test]
async fn test_token_gate_end_to_end() {
    let server = TestServerBuilder::new()
        .with_api_token("s3cret")
        .start()
        .await
        .expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;
    let client = server.client();

    let (status, body) = client.get("/api/weather/comfortindex").await;
    assert_eq!(status, 401);
    assert_eq!(body, json!({"message": "Unauthorized"}));

    let (status, _) = client
        .get_with_token("/api/weather/comfortindex", "wrong")
        .await;
    assert_eq!(status, 401);
    assert_eq!(UpstreamMock::request_count(server.upstream()).await, 0);

    let (status, body) = client
        .get_with_token("/api/weather/comfortindex", "s3cret")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = client.get("/api/weather").await;
    assert_eq!(status, 200);

    server.shutdown();
}

// ============================================================================
// Cache status and health
// ============================================================================

#[tokio::test]
async fn test_cache_status_after_ranking() {
    let server = TestServer::start().await.expect("Failed to start server");
    UpstreamMock::three_cities(server.upstream()).await;
    let client = server.client();

    let (_, before) = client.get("/api/cache-status").await;
    assert_eq!(before["rawCache"]["size"], 0);
    assert_eq!(before["processedCache"]["hasData"], false);
    assert_eq!(before["processedCache"]["expiresAt"], 0);

    client.get("/api/weather/comfortindex").await;
    let (status, after) = client.get("/api/cache-status").await;

    assert_eq!(status, 200);
    assert_eq!(
        after["rawCache"]["keys"],
        json!([TestCities::colombo(), TestCities::lisbon(), TestCities::oslo()])
    );
    assert_eq!(after["rawCache"]["size"], 3);
    assert_eq!(after["rawCache"]["ttl_ms"], 300_000);
    assert_eq!(after["processedCache"]["ttl_ms"], 300_000);
    assert_eq!(after["processedCache"]["hasData"], true);
    assert_eq!(after["processedCache"]["isValid"], true);
    assert!(after["processedCache"]["expiresAt"].as_i64().unwrap() > 0);

    server.shutdown();
}

#[tokio::test]
async fn test_cors_follows_configured_origins() {
    let server = TestServerBuilder::new()
        .with_cors_origins(&["http://localhost:5173"])
        .start()
        .await
        .expect("Failed to start server");
    let client = server.client();

    assert_eq!(
        client.allowed_origin("/api/health", "http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(client.allowed_origin("/api/health", "http://localhost:3000").await, None);

    server.shutdown();
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await.expect("Failed to start server");

    let (status, body) = server.client().get("/api/health").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!("OK"));

    server.shutdown();
}
