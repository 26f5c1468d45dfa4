//! End-to-end MCP protocol tests against a stubbed upstream service
//!
//! Drives the server through `handle_message` exactly as a client on the
//! other end of stdio would, with wiremock standing in for
//! data.police.uk.

use std::time::Duration;

use police_api::PoliceClient;
use police_mcp::{PoliceMcpServer, get_tool_definitions};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_against(upstream: &MockServer, timeout: Duration) -> PoliceMcpServer {
    let client = PoliceClient::with_base_url(&upstream.uri(), timeout).unwrap();
    let mut server = PoliceMcpServer::new(client);
    server.initialize();
    server
}

async fn call_tool(server: &PoliceMcpServer, tool: &str, arguments: Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": tool, "arguments": arguments}
    });
    let response = server
        .handle_message(&serde_json::to_string(&request).unwrap())
        .await
        .unwrap();
    serde_json::from_str(&response).unwrap()
}

/// The text content of a tool-call response, parsed back into JSON
fn payload_of(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn tools_list_returns_full_catalog() {
    let upstream = MockServer::start().await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let request = r#"{"jsonrpc":"2.0","id":7,"method":"tools/list","params":{}}"#;
    let response: Value =
        serde_json::from_str(&server.handle_message(request).await.unwrap()).unwrap();

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 21);
    assert_eq!(tools[0]["name"], "get_street_level_crimes");
    assert!(tools[0]["inputSchema"]["properties"]["lat"].is_object());
}

#[tokio::test]
async fn every_tool_survives_an_empty_argument_bag() {
    // A catch-all 200 keeps tools whose required fields are present from
    // failing on transport; tools with missing required fields must still
    // come back as an envelope, never a protocol error.
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    for tool in get_tool_definitions() {
        let response = call_tool(&server, &tool.name, json!({})).await;
        assert!(
            response.get("result").is_some(),
            "{} must return a tool result, got {response}",
            tool.name
        );
        assert!(
            response.get("error").is_none(),
            "{} must not raise a protocol error",
            tool.name
        );
    }
}

#[tokio::test]
async fn unknown_tool_reports_error_flag_in_envelope() {
    let upstream = MockServer::start().await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(&server, "not_a_real_tool", json!({})).await;
    // The flag rides under the camel-case wire key; the Rust field name
    // must never leak into the envelope.
    assert_eq!(response["result"]["isError"], json!(true));
    assert!(response["result"].get("is_error").is_none());
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Unknown tool: not_a_real_tool"));
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn underspecified_geo_query_degrades_without_network_traffic() {
    let upstream = MockServer::start().await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(&server, "get_street_level_crimes", json!({})).await;
    assert_eq!(payload_of(&response), json!([]));
    assert!(response["result"].get("isError").is_none());
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn street_crimes_hits_all_crime_path_with_coordinates() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crimes-street/all-crime"))
        .and(query_param("lat", "52.6"))
        .and(query_param("lng", "-1.1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"category": "burglary"}])),
        )
        .expect(1)
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(
        &server,
        "get_street_level_crimes",
        json!({"lat": 52.6, "lng": -1.1}),
    )
    .await;
    assert_eq!(payload_of(&response), json!([{"category": "burglary"}]));
}

#[tokio::test]
async fn location_id_wins_over_coordinates_for_outcomes() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outcomes-at-location"))
        .and(query_param("location_id", "123"))
        .and(query_param("date", "2024-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    call_tool(
        &server,
        "get_street_level_outcomes",
        json!({"location_id": 123, "lat": 52.6, "lng": -1.1, "date": "2024-02"}),
    )
    .await;

    let requests = upstream.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("lat"));
    assert!(!query.contains("lng"));
}

#[tokio::test]
async fn upstream_timeout_degrades_to_empty_list() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "kent"}]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&upstream)
        .await;
    // Client gives up after 200ms; the stalled response must surface as
    // an empty list, not an error envelope.
    let server = server_against(&upstream, Duration::from_millis(200));

    let response = call_tool(&server, "get_list_of_forces", json!({})).await;
    assert_eq!(payload_of(&response), json!([]));
    assert!(response["result"].get("isError").is_none());
}

#[tokio::test]
async fn last_updated_extracts_the_date_scalar() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crime-last-updated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"date": "2024-06-01"})))
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(&server, "get_last_updated", json!({})).await;
    assert_eq!(payload_of(&response), json!("2024-06-01"));
}

#[tokio::test]
async fn locate_neighbourhood_sends_comma_joined_coordinates() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locate-neighbourhood"))
        .and(query_param("q", "51.5,-0.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"force": "metropolitan", "neighbourhood": "00BK17N"})),
        )
        .expect(1)
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(
        &server,
        "locate_neighbourhood",
        json!({"lat": 51.5, "lng": -0.1}),
    )
    .await;
    assert_eq!(
        payload_of(&response),
        json!({"force": "metropolitan", "neighbourhood": "00BK17N"})
    );
}

#[tokio::test]
async fn neighbourhood_path_embeds_both_identifiers() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leicestershire/NC04/priorities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"issue": "speeding"}])))
        .expect(1)
        .mount(&upstream)
        .await;
    let server = server_against(&upstream, Duration::from_secs(1));

    let response = call_tool(
        &server,
        "get_neighbourhood_priorities",
        json!({"force_id": "leicestershire", "neighbourhood_id": "NC04"}),
    )
    .await;
    assert_eq!(payload_of(&response), json!([{"issue": "speeding"}]));
}
