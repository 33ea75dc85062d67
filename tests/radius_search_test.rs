use httpmock::prelude::*;
use naver_map_search::config::{GeocodeApiConfig, MapConfig, SearchApiConfig};
use naver_map_search::core::radius_search::MAX_PAGES;
use naver_map_search::{NaverMapService, NaverMapsClient, RadiusSearchRequest, ToolOutcome};
use serde_json::{json, Value};

const SEARCH_PATH: &str = "/v1/search/local.json";

/// 市廳：126.9780, 37.5660；mapy 為正北方距離對應的縮放值
const CITY_HALL_MAPX: &str = "1269780000";
const MAPY_100M: &str = "375668993";
const MAPY_240M: &str = "375681584";
const MAPY_900M: &str = "375740939";
const MAPY_2KM: &str = "375839864";
const MAPY_3KM: &str = "375929796";
const MAPY_5KM: &str = "376109661";

fn item(title: &str, mapy: &str) -> Value {
    json!({
        "title": title,
        "link": "",
        "category": "카페,디저트>카페",
        "description": "",
        "telephone": "",
        "address": "서울특별시 중구",
        "roadAddress": "서울특별시 중구 세종대로",
        "mapx": CITY_HALL_MAPX,
        "mapy": mapy
    })
}

fn page(total: u64, start: u32, items: Vec<Value>) -> Value {
    json!({
        "lastBuildDate": "Mon, 01 Sep 2025 10:00:00 +0900",
        "total": total,
        "start": start,
        "display": items.len(),
        "items": items
    })
}

fn service_for(server: &MockServer) -> NaverMapService<NaverMapsClient, NaverMapsClient> {
    let mut search = SearchApiConfig::new("search-id", "search-secret");
    search.base_url = server.base_url();
    let mut geocode = GeocodeApiConfig::new("maps-id", "maps-secret");
    geocode.base_url = server.base_url();

    let client = NaverMapsClient::new(&MapConfig::new(search, geocode)).unwrap();
    NaverMapService::new(client.clone(), client)
}

fn city_hall(query: &str) -> RadiusSearchRequest {
    RadiusSearchRequest::new(query, 126.9780, 37.5660)
}

#[tokio::test]
async fn test_city_hall_quota_met_after_first_page() {
    let server = MockServer::start();
    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "시청 카페")
            .query_param("start", "1")
            .query_param("display", "5");
        then.status(200).json_body(page(
            40,
            1,
            vec![
                item("240m 카페", MAPY_240M),
                item("900m 카페", MAPY_900M),
                item("1.5km+ 카페", MAPY_2KM),
            ],
        ));
    });

    let service = service_for(&server);
    let request = city_hall("시청 카페").with_radius(500).with_display(5).with_min_results(1);
    let outcome = service.local_search_by_coordinate(&request).await;

    first_page.assert_hits(1);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["total"], json!(1));
    assert_eq!(json["start"], json!(1));
    assert_eq!(json["display"], json!(1));
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["title"], json!("240m 카페"));
}

#[tokio::test]
async fn test_pages_until_quota_preserving_discovery_order() {
    let server = MockServer::start();
    let first_page = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH).query_param("start", "1");
        then.status(200).json_body(page(
            7,
            1,
            vec![
                item("p1 900m", MAPY_900M),
                item("p1 240m", MAPY_240M),
                item("p1 3km", MAPY_3KM),
            ],
        ));
    });
    let second_page = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH).query_param("start", "4");
        then.status(200).json_body(page(
            7,
            4,
            vec![
                item("p2 100m", MAPY_100M),
                item("p2 2km", MAPY_2KM),
                item("p2 5km", MAPY_5KM),
            ],
        ));
    });

    let service = service_for(&server);
    let request = city_hall("카페")
        .with_radius(500)
        .with_display(3)
        .with_min_results(2);
    let response = service
        .local_search_by_coordinate(&request)
        .await
        .success()
        .unwrap();

    first_page.assert_hits(1);
    second_page.assert_hits(1);
    let titles: Vec<&str> = response.items.iter().map(|i| i.title.as_str()).collect();
    // 240m 在前，100m 在後：依發現順序而非距離
    assert_eq!(titles, vec!["p1 240m", "p2 100m"]);
    assert_eq!(response.total, 2);
    assert_eq!(response.display, 2);
}

#[tokio::test]
async fn test_reported_total_reached_stops_paging() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(page(
            5,
            1,
            vec![
                item("a", MAPY_900M),
                item("b", MAPY_2KM),
                item("c", MAPY_3KM),
                item("d", MAPY_5KM),
                item("e", MAPY_5KM),
            ],
        ));
    });

    let service = service_for(&server);
    let request = city_hall("카페").with_radius(500).with_display(5);
    let response = service
        .local_search_by_coordinate(&request)
        .await
        .success()
        .unwrap();

    api_mock.assert_hits(1);
    assert_eq!(response.total, 0);
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn test_empty_first_page() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(page(0, 1, vec![]));
    });

    let service = service_for(&server);
    let response = service
        .local_search_by_coordinate(&city_hall("존재하지 않는 장소"))
        .await
        .success()
        .unwrap();

    api_mock.assert_hits(1);
    assert_eq!(response.total, 0);
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn test_never_more_than_ten_page_fetches() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(page(
            1_000,
            1,
            vec![item("far", MAPY_5KM), item("far", MAPY_5KM)],
        ));
    });

    let service = service_for(&server);
    let request = city_hall("카페")
        .with_radius(100)
        .with_display(2)
        .with_min_results(2);
    let response = service
        .local_search_by_coordinate(&request)
        .await
        .success()
        .unwrap();

    api_mock.assert_hits(MAX_PAGES as usize);
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn test_backend_failure_is_reported_as_data() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(429).json_body(json!({
            "errorMessage": "Rate limit exceeded",
            "errorCode": "012"
        }));
    });

    let service = service_for(&server);
    let outcome = service.local_search_by_coordinate(&city_hall("카페")).await;

    api_mock.assert_hits(1);
    match &outcome {
        ToolOutcome::Failure(failure) => {
            assert!(!failure.success);
            assert!(failure.error.contains("429"));
        }
        ToolOutcome::Success(response) => panic!("unexpected success: {:?}", response),
    }
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], json!(false));
}

#[tokio::test]
async fn test_invalid_request_makes_no_http_call() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(page(0, 1, vec![]));
    });

    let service = service_for(&server);
    let outcome = service
        .local_search_by_coordinate(&city_hall("카페").with_radius(0))
        .await;

    api_mock.assert_hits(0);
    assert!(outcome.error().unwrap().contains("radius"));
}
