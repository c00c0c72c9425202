use nutricompare::{FdcConfig, FoodClient, NutriError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FoodClient {
    FoodClient::new(
        FdcConfig::new()
            .with_api_key("test-key")
            .with_base_url(server.uri()),
    )
    .unwrap()
}

fn apple_payload() -> serde_json::Value {
    json!({
        "foods": [{
            "fdcId": 1,
            "description": "Apple, raw",
            "foodNutrients": [
                { "nutrientId": 1008, "value": 52 },
                { "nutrientId": 1003, "value": 0.3 }
            ]
        }]
    })
}

async fn mount_search(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_at_100g_returns_raw_per_100g_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("query", "Apple"))
        .and(query_param("pageSize", "5"))
        .and(query_param("dataType", "Survey (FNDDS)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_payload()))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("Apple", 100.0).await.unwrap();
    assert_eq!(result.name, "Apple, raw");
    assert_eq!(result.nutrients.calories, 52);
    assert_eq!(result.nutrients.protein, 0);
    assert_eq!(result.nutrients.carbs, 0);
    assert_eq!(result.nutrients.fat, 0);
    assert_eq!(result.nutrients.fiber, 0);
}

#[tokio::test]
async fn lookup_at_200g_doubles_values() {
    let server = MockServer::start().await;
    mount_search(&server, apple_payload()).await;

    let result = client_for(&server).lookup("Apple", 200.0).await.unwrap();
    assert_eq!(result.nutrients.calories, 104);
    assert_eq!(result.nutrients.protein, 1);
}

#[tokio::test]
async fn lookup_always_uses_the_first_candidate() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        json!({
            "foods": [
                {
                    "fdcId": 10,
                    "description": "Banana, raw",
                    "foodNutrients": [{ "nutrientId": 1008, "value": 89 }]
                },
                {
                    "fdcId": 11,
                    "description": "Banana chips",
                    "foodNutrients": [{ "nutrientId": 1008, "value": 519 }]
                }
            ]
        }),
    )
    .await;

    let result = client_for(&server).lookup("Banana", 100.0).await.unwrap();
    assert_eq!(result.name, "Banana, raw");
    assert_eq!(result.nutrients.calories, 89);
}

#[tokio::test]
async fn empty_search_result_is_no_match() {
    let server = MockServer::start().await;
    mount_search(&server, json!({ "foods": [] })).await;

    let result = client_for(&server).lookup("Zzzznotfood", 100.0).await;
    assert!(matches!(result, Err(NutriError::NoMatch(_))));
}

#[tokio::test]
async fn server_error_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("Apple", 100.0).await;
    assert!(matches!(result, Err(NutriError::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn unparseable_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("Apple", 100.0).await;
    assert!(matches!(result, Err(NutriError::MalformedResponse(_))));
}

#[tokio::test]
async fn resolve_requests_a_single_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("pageSize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_payload()))
        .mount(&server)
        .await;

    let food = client_for(&server).resolve("Apple").await.unwrap();
    assert_eq!(food.id, 1);
    assert_eq!(food.name, "Apple, raw");
}
