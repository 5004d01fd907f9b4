//! Integration tests for pixela-client crate.
//!
//! These drive the public client API against fake transports and check the
//! exact requests that would go over the wire.

use mockall::{mock, predicate::always};
use parking_lot::Mutex;
use pixela_client::{GraphTrackerClient, Operation, PixelaResponse, SilentReporter};
use pixela_common::test_utils::{init_test_logging, success_body, RecordingTransport};
use pixela_common::{
    ApiRequest, ApiResponse, GraphColor, HttpMethod, PixelaError, Result, Transport, ValueType,
    USER_TOKEN_HEADER,
};
use pixela_config::{Credentials, PixelaConfig};
use proptest::prelude::*;
use serde_json::json;

mock! {
    pub Wire {}

    impl Transport for Wire {
        fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
    }
}

fn config() -> PixelaConfig {
    PixelaConfig::new(Credentials::new("thisissecret", "alice"))
}

#[test]
fn test_record_update_delete_round_trip() {
    init_test_logging();
    let transport = RecordingTransport::new();
    let client = GraphTrackerClient::with_transport(config(), &transport).unwrap();

    let (graph, _) = client
        .create_graph(
            1,
            "Spanish Words That I have learnt.",
            "Words",
            ValueType::Int,
            GraphColor::Shibafu,
        )
        .unwrap();
    assert_eq!(graph.as_str(), "graph1");

    client.record_pixel(&graph, 2025, 9, 20, "10").unwrap();
    client.update_pixel(&graph, 2025, 9, 20, "20").unwrap();
    client.delete_pixel(&graph, 2025, 9, 20).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    let pixel_requests = &requests[1..];

    let graph_url = "https://pixe.la/v1/users/alice/graphs/graph1";
    let pixel_url = "https://pixe.la/v1/users/alice/graphs/graph1/20250920";

    assert_eq!(pixel_requests[0].method, HttpMethod::Post);
    assert_eq!(pixel_requests[0].url, graph_url);
    assert_eq!(pixel_requests[0].body, Some(json!({"date": "20250920", "quantity": "10"})));

    assert_eq!(pixel_requests[1].method, HttpMethod::Put);
    assert_eq!(pixel_requests[1].url, pixel_url);
    assert_eq!(pixel_requests[1].body, Some(json!({"quantity": "20"})));

    assert_eq!(pixel_requests[2].method, HttpMethod::Delete);
    assert_eq!(pixel_requests[2].url, pixel_url);
    assert_eq!(pixel_requests[2].body, None);

    for request in pixel_requests {
        assert_eq!(request.header_value(USER_TOKEN_HEADER), Some("thisissecret"));
    }
}

#[test]
fn test_all_operations_return_body_unmodified() {
    let odd = json!({"message": "Success.", "isSuccess": true, "unexpected": {"nested": [1, 2]}});
    let transport = RecordingTransport::new()
        .with_response(200, odd.clone())
        .with_response(200, odd.clone())
        .with_response(200, odd.clone())
        .with_response(200, odd.clone())
        .with_response(200, odd.clone());
    let client = GraphTrackerClient::with_transport(config(), &transport).unwrap();

    assert_eq!(client.create_account().unwrap().into_inner(), odd);
    let (graph, response) = client
        .create_graph(3, "Runs", "km", ValueType::Float, GraphColor::Momiji)
        .unwrap();
    assert_eq!(response.into_inner(), odd);
    assert_eq!(client.record_pixel(&graph, 2025, 1, 5, "4.2").unwrap().into_inner(), odd);
    assert_eq!(client.update_pixel(&graph, 2025, 1, 5, "5.0").unwrap().into_inner(), odd);
    assert_eq!(client.delete_pixel(&graph, 2025, 1, 5).unwrap().into_inner(), odd);
}

#[test]
fn test_invalid_date_makes_no_transport_call() {
    let mut wire = MockWire::new();
    wire.expect_execute().with(always()).times(0);
    let client = GraphTrackerClient::with_transport(config(), wire).unwrap();

    let error = client.record_pixel("graph1", 2025, 2, 30, "10").unwrap_err();
    assert!(matches!(error, PixelaError::Validation { .. }));
    assert!(client.update_pixel("graph1", 2025, 2, 30, "10").unwrap_err().is_validation());
    assert!(client.delete_pixel("graph1", 2025, 2, 30).unwrap_err().is_validation());
}

#[test]
fn test_server_error_status_surfaces_as_error() {
    let mut wire = MockWire::new();
    wire.expect_execute().times(1).returning(|_| {
        let body = json!({"message": "Service Unavailable", "isSuccess": false});
        Ok(ApiResponse::new(503, body))
    });
    let client = GraphTrackerClient::with_transport(config(), wire).unwrap();

    let error = client.create_account().unwrap_err();
    assert_eq!(error.status_code(), Some(503));
}

#[test]
fn test_gateway_error_page_surfaces_as_status() {
    let mut wire = MockWire::new();
    wire.expect_execute()
        .times(1)
        .returning(|_| Ok(ApiResponse::new(502, json!("<html>Bad Gateway</html>"))));
    let client = GraphTrackerClient::with_transport(config(), wire).unwrap();

    let error = client.delete_pixel("graph1", 2025, 1, 15).unwrap_err();
    assert_eq!(error.status_code(), Some(502));
    assert!(error.to_string().ends_with("<html>Bad Gateway</html>"));
}

#[test]
fn test_reporter_sees_each_response_once() {
    let seen: Mutex<Vec<(Operation, Option<String>)>> = Mutex::new(Vec::new());
    let transport = RecordingTransport::new();
    let client = GraphTrackerClient::with_transport(config(), &transport)
        .unwrap()
        .with_reporter(|operation: Operation, response: &PixelaResponse| {
            seen.lock().push((operation, response.message().map(str::to_string)));
        });

    client.create_account().unwrap();
    client.delete_pixel("graph1", 2025, 9, 20).unwrap();
    drop(client);

    let seen = seen.into_inner();
    assert_eq!(
        seen,
        vec![
            (Operation::CreateAccount, Some("Success.".to_string())),
            (Operation::DeletePixel, Some("Success.".to_string())),
        ]
    );
}

#[test]
fn test_reporter_not_called_on_error_status() {
    let calls = Mutex::new(0usize);
    let transport =
        RecordingTransport::new().with_response(400, json!({"message": "bad", "isSuccess": false}));
    let client = GraphTrackerClient::with_transport(config(), &transport)
        .unwrap()
        .with_reporter(|_: Operation, _: &PixelaResponse| *calls.lock() += 1);

    assert!(client.create_account().is_err());
    drop(client);
    assert_eq!(calls.into_inner(), 0);
}

#[test]
fn test_silent_reporter_client() {
    let transport = RecordingTransport::new();
    let client = GraphTrackerClient::with_transport(config(), &transport)
        .unwrap()
        .with_reporter(SilentReporter);
    assert_eq!(client.create_account().unwrap().into_inner(), success_body());
}

proptest! {
    #[test]
    fn test_graph_id_follows_sequence_number(sequence in 1u32..=100_000) {
        let transport = RecordingTransport::new();
        let client = GraphTrackerClient::with_transport(config(), &transport)
            .unwrap()
            .with_reporter(SilentReporter);
        let (graph, _) = client
            .create_graph(sequence, "X", "u", ValueType::Int, GraphColor::Shibafu)
            .unwrap();
        prop_assert_eq!(graph.to_string(), format!("graph{sequence}"));
        let body = transport.last_request().unwrap().body.unwrap();
        prop_assert_eq!(&body["id"], &json!(format!("graph{sequence}")));
    }
}
