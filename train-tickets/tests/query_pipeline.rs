//! End-to-end tests of the query pipeline against a mock ticketing API.

use httpmock::prelude::*;
use serde_json::json;

use train_tickets::api::{ApiError, TicketClient, TicketClientConfig};
use train_tickets::domain::{
    CategoryFilter, PLACEHOLDER, SeatCategory, Telecode, TrainCategory, TravelDate,
    format_duration,
};
use train_tickets::enrich::EnrichConfig;
use train_tickets::query::{QueryError, QueryPlan, fetch_trains};
use train_tickets::render::{DisplayMode, RenderConfig, render_trains};

/// Build an availability record with 36 fields.
///
/// Seat counts sit at fixed offsets from the end: business is 5th from the
/// end, then first, second, ... down to no-seat 14th from the end. The
/// seat-type code is 2nd from the end.
fn record(code: &str, train_no: &str, duration: &str, second_seats: &str) -> String {
    let mut fields = vec![String::new(); 36];
    let n = fields.len();
    fields[1] = "预订".into();
    fields[2] = train_no.into();
    fields[3] = code.into();
    fields[6] = "VNP".into();
    fields[7] = "AOH".into();
    fields[8] = "09:00".into();
    fields[9] = "13:28".into();
    fields[10] = duration.into();
    fields[13] = "20240315".into();
    fields[16] = "01".into();
    fields[17] = "05".into();
    fields[n - 2] = "OM9".into();
    fields[n - 7] = second_seats.into();
    fields.join("|")
}

fn availability_body() -> serde_json::Value {
    json!({
        "httpstatus": 200,
        "status": true,
        "messages": "",
        "data": {
            "flag": "1",
            "map": {"VNP": "北京南", "AOH": "上海虹桥"},
            "result": [
                record("G101", "240000G1010C", "04:28", "有"),
                record("D202", "240000D2020C", "00:35", "12"),
                record("K303", "240000K3030C", "12:30", ""),
            ]
        }
    })
}

fn client(server: &MockServer) -> TicketClient {
    TicketClient::new(TicketClientConfig::new().with_base_url(server.url("/otn"))).unwrap()
}

fn plan(flags: &[TrainCategory], mode: DisplayMode) -> QueryPlan {
    QueryPlan {
        from: Telecode::parse("VNP").unwrap(),
        to: Telecode::parse("AOH").unwrap(),
        date: TravelDate::parse("2024-3-15").unwrap(),
        filter: flags.iter().copied().collect::<CategoryFilter>(),
        mode,
    }
}

#[tokio::test]
async fn filters_and_prices_matching_trains() {
    let server = MockServer::start_async().await;

    let availability = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/query")
                .query_param("leftTicketDTO.train_date", "2024-03-15")
                .query_param("leftTicketDTO.from_station", "VNP")
                .query_param("leftTicketDTO.to_station", "AOH")
                .query_param("purpose_codes", "ADULT");
            then.status(200).json_body(availability_body());
        })
        .await;

    let g101 = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000G1010C")
                .query_param("from_station_no", "01")
                .query_param("to_station_no", "05")
                .query_param("seat_types", "OM9")
                .query_param("train_date", "2024-03-15");
            then.status(200).json_body(json!({
                "status": true,
                "data": {"A9": "¥1748.0", "M": "¥933.0", "O": "¥553.0", "OT": [], "train_no": "240000G1010C"}
            }));
        })
        .await;

    let d202 = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000D2020C");
            then.status(200).json_body(json!({
                "status": true,
                "data": {"p": "¥600.0", "O": "¥300.0", "WZ": "¥300.0"}
            }));
        })
        .await;

    let k303 = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000K3030C");
            then.status(200).json_body(json!({"data": {"A1": "¥156.5"}}));
        })
        .await;

    let plan = plan(
        &[TrainCategory::Emu, TrainCategory::HighSpeed],
        DisplayMode::Priced,
    );
    let trains = fetch_trains(&client(&server), &plan, &EnrichConfig::default())
        .await
        .unwrap();

    availability.assert_async().await;
    g101.assert_async().await;
    d202.assert_async().await;
    k303.assert_hits_async(0).await;

    let codes: Vec<_> = trains.iter().map(|t| t.train_code.as_str()).collect();
    assert_eq!(codes, ["G101", "D202"]);

    let g = &trains[0];
    assert_eq!(g.from_station.as_deref(), Some("北京南"));
    assert_eq!(g.to_station.as_deref(), Some("上海虹桥"));
    assert_eq!(g.seats.get(SeatCategory::Second), "有");
    assert_eq!(g.seats.get(SeatCategory::Business), PLACEHOLDER);
    assert_eq!(format_duration(&g.duration), "4小时28分");
    assert_eq!(g.prices.get(SeatCategory::Business), "¥1748.0");
    assert_eq!(g.prices.get(SeatCategory::First), "¥933.0");
    assert_eq!(g.prices.get(SeatCategory::Second), "¥553.0");
    assert_eq!(g.prices.get(SeatCategory::NoSeat), PLACEHOLDER);

    let d = &trains[1];
    assert_eq!(format_duration(&d.duration), "35分");
    assert_eq!(d.prices.get(SeatCategory::Business), "¥600.0");
    assert_eq!(d.prices.get(SeatCategory::NoSeat), "¥300.0");
    assert_eq!(d.prices.get(SeatCategory::HardSeat), PLACEHOLDER);

    let table = render_trains(
        &trains,
        &RenderConfig::default().with_color(false),
    );
    assert!(table.contains("G101"));
    assert!(table.contains("¥553.0"));
    assert!(!table.contains("K303"));
}

#[tokio::test]
async fn failed_price_lookup_degrades_to_placeholders() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/query");
            then.status(200).json_body(availability_body());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000D2020C");
            then.status(500).body("internal error");
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000K3030C");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/otn/leftTicket/queryTicketPrice")
                .query_param("train_no", "240000G1010C");
            then.status(200).json_body(json!({"data": {"O": "¥553.0"}}));
        })
        .await;

    let trains = fetch_trains(
        &client(&server),
        &plan(&[], DisplayMode::Priced),
        &EnrichConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(trains.len(), 3);
    assert_eq!(trains[0].prices.get(SeatCategory::Second), "¥553.0");
    assert!(trains[1].prices.is_all_placeholder());
    assert!(trains[2].prices.is_all_placeholder());
}

#[tokio::test]
async fn basic_mode_makes_no_price_requests() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/query");
            then.status(200).json_body(availability_body());
        })
        .await;

    let prices = server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/queryTicketPrice");
            then.status(200).json_body(json!({"data": {}}));
        })
        .await;

    let trains = fetch_trains(
        &client(&server),
        &plan(&[TrainCategory::Fast], DisplayMode::Basic),
        &EnrichConfig::default(),
    )
    .await
    .unwrap();

    prices.assert_hits_async(0).await;
    assert_eq!(trains.len(), 1);
    assert_eq!(trains[0].train_code, "K303");
    assert_eq!(trains[0].seats.get(SeatCategory::Second), PLACEHOLDER);
}

#[tokio::test]
async fn malformed_records_are_skipped() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/query");
            then.status(200).json_body(json!({
                "status": true,
                "data": {
                    "map": {"VNP": "北京南"},
                    "result": ["too|short", record("G101", "240000G1010C", "04:28", "有")]
                }
            }));
        })
        .await;

    let trains = fetch_trains(
        &client(&server),
        &plan(&[], DisplayMode::Basic),
        &EnrichConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(trains.len(), 1);
    assert_eq!(trains[0].from_station.as_deref(), Some("北京南"));
    // AOH is missing from the map
    assert_eq!(trains[0].to_station, None);
}

#[tokio::test]
async fn availability_without_data_is_fatal() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/query");
            then.status(200)
                .json_body(json!({"status": false, "messages": ["查询失败"]}));
        })
        .await;

    let err = fetch_trains(
        &client(&server),
        &plan(&[], DisplayMode::Priced),
        &EnrichConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Api(ApiError::MissingData { message: Some(ref m) }) if m == "查询失败"
    ));
}

#[tokio::test]
async fn availability_http_error_is_fatal() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/query");
            then.status(302).header("Location", "/otn/error");
        })
        .await;

    let err = fetch_trains(
        &client(&server),
        &plan(&[], DisplayMode::Priced),
        &EnrichConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, QueryError::Api(_)));
}

#[tokio::test]
async fn custom_query_path() {
    let server = MockServer::start_async().await;

    let queried = server
        .mock_async(|when, then| {
            when.method(GET).path("/otn/leftTicket/queryZ");
            then.status(200).json_body(availability_body());
        })
        .await;

    let config = TicketClientConfig::new()
        .with_base_url(server.url("/otn/"))
        .with_query_path("/leftTicket/queryZ");
    let client = TicketClient::new(config).unwrap();

    let trains = fetch_trains(
        &client,
        &plan(&[], DisplayMode::Basic),
        &EnrichConfig::default(),
    )
    .await
    .unwrap();

    queried.assert_async().await;
    assert_eq!(trains.len(), 3);
}
