//! MCP tool dispatch
//!
//! Maps a tool name and argument bag to one `police-api` call. The bag is
//! deserialized into the tool's typed argument struct at this boundary;
//! a required field missing from the bag fails here as `InvalidArguments`
//! before any network access. Transport faults never reach this layer:
//! the client already absorbed them into each tool's empty default, so
//! the only errors dispatch can produce are `UnknownTool` and
//! `InvalidArguments`.

use police_api::{
    CrimesAtLocationArgs, DateArg, ForceArgs, LocateArgs, NeighbourhoodArgs, NoLocationArgs,
    OutcomesArgs, PersistentIdArg, PoliceClient, StopsAreaArgs, StopsLocationArgs,
    StreetCrimesArgs,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Deserialize the argument bag into a tool's typed argument struct
///
/// A null bag is treated as an empty object, so tools with only optional
/// arguments accept a call with no arguments at all.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments(e.to_string()))
}

/// Handle a tool call by dispatching to the matching upstream operation
pub async fn handle_tool_call(
    client: &PoliceClient,
    tool_name: &str,
    arguments: Value,
) -> Result<Value> {
    match tool_name {
        // Crimes
        "get_street_level_crimes" => {
            let args: StreetCrimesArgs = parse_args(arguments)?;
            Ok(client.street_level_crimes(&args).await)
        }
        "get_street_level_outcomes" => {
            let args: OutcomesArgs = parse_args(arguments)?;
            Ok(client.street_level_outcomes(&args).await)
        }
        "get_crimes_at_location" => {
            let args: CrimesAtLocationArgs = parse_args(arguments)?;
            Ok(client.crimes_at_location(&args).await)
        }
        "get_crimes_no_location" => {
            let args: NoLocationArgs = parse_args(arguments)?;
            Ok(client.crimes_no_location(&args).await)
        }
        "get_crime_categories" => {
            let args: DateArg = parse_args(arguments)?;
            Ok(client.crime_categories(&args).await)
        }
        "get_last_updated" => Ok(client.last_updated().await),
        "get_outcomes_for_crime" => {
            let args: PersistentIdArg = parse_args(arguments)?;
            Ok(client.outcomes_for_crime(&args).await)
        }

        // Forces
        "get_list_of_forces" => Ok(client.forces().await),
        "get_force_details" => {
            let args: ForceArgs = parse_args(arguments)?;
            Ok(client.force_details(&args).await)
        }
        "get_senior_officers" => {
            let args: ForceArgs = parse_args(arguments)?;
            Ok(client.senior_officers(&args).await)
        }

        // Neighbourhoods
        "get_neighbourhoods" => {
            let args: ForceArgs = parse_args(arguments)?;
            Ok(client.neighbourhoods(&args).await)
        }
        "get_neighbourhood_details" => {
            let args: NeighbourhoodArgs = parse_args(arguments)?;
            Ok(client.neighbourhood_details(&args).await)
        }
        "get_neighbourhood_boundary" => {
            let args: NeighbourhoodArgs = parse_args(arguments)?;
            Ok(client.neighbourhood_boundary(&args).await)
        }
        "get_neighbourhood_team" => {
            let args: NeighbourhoodArgs = parse_args(arguments)?;
            Ok(client.neighbourhood_team(&args).await)
        }
        "get_neighbourhood_events" => {
            let args: NeighbourhoodArgs = parse_args(arguments)?;
            Ok(client.neighbourhood_events(&args).await)
        }
        "get_neighbourhood_priorities" => {
            let args: NeighbourhoodArgs = parse_args(arguments)?;
            Ok(client.neighbourhood_priorities(&args).await)
        }
        "locate_neighbourhood" => {
            let args: LocateArgs = parse_args(arguments)?;
            Ok(client.locate_neighbourhood(&args).await)
        }

        // Stop and search
        "get_stop_searches_by_area" => {
            let args: StopsAreaArgs = parse_args(arguments)?;
            Ok(client.stop_searches_by_area(&args).await)
        }
        "get_stop_searches_by_location" => {
            let args: StopsLocationArgs = parse_args(arguments)?;
            Ok(client.stop_searches_by_location(&args).await)
        }
        "get_stop_searches_no_location" => {
            let args: ForceArgs = parse_args(arguments)?;
            Ok(client.stop_searches_no_location(&args).await)
        }
        "get_stop_searches_by_force" => {
            let args: ForceArgs = parse_args(arguments)?;
            Ok(client.stop_searches_by_force(&args).await)
        }

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn stub_client(server: &MockServer) -> PoliceClient {
        PoliceClient::with_base_url(&server.uri(), police_api::DEFAULT_TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_without_network_access() {
        let server = MockServer::start().await;
        let client = stub_client(&server).await;

        let result = handle_tool_call(&client, "not_a_real_tool", json!({})).await;
        match result {
            Err(Error::UnknownTool(name)) => assert_eq!(name, "not_a_real_tool"),
            other => panic!("expected UnknownTool, got {other:?}"),
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_message_names_the_tool() {
        let server = MockServer::start().await;
        let client = stub_client(&server).await;

        let err = handle_tool_call(&client, "not_a_real_tool", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: not_a_real_tool");
    }

    #[tokio::test]
    async fn geo_tools_accept_empty_bag_and_return_empty_list() {
        let server = MockServer::start().await;
        let client = stub_client(&server).await;

        for tool in [
            "get_street_level_crimes",
            "get_street_level_outcomes",
            "get_crimes_at_location",
            "get_stop_searches_by_area",
        ] {
            let result = handle_tool_call(&client, tool, json!({})).await.unwrap();
            assert_eq!(result, json!([]), "{tool} should degrade to empty list");
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn null_arguments_are_treated_as_empty_bag() {
        let server = MockServer::start().await;
        let client = stub_client(&server).await;

        let result = handle_tool_call(&client, "get_street_level_crimes", Value::Null)
            .await
            .unwrap();
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn missing_required_field_is_invalid_arguments() {
        let server = MockServer::start().await;
        let client = stub_client(&server).await;

        let result = handle_tool_call(&client, "get_force_details", json!({})).await;
        assert!(matches!(result, Err(Error::InvalidArguments(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn street_crimes_dispatches_with_default_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crimes-street/all-crime"))
            .and(query_param("lat", "52.6"))
            .and(query_param("lng", "-1.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = stub_client(&server).await;
        let result = handle_tool_call(
            &client,
            "get_street_level_crimes",
            json!({"lat": 52.6, "lng": -1.1}),
        )
        .await
        .unwrap();
        assert_eq!(result, json!([{"id": 9}]));
    }

    #[tokio::test]
    async fn last_updated_returns_bare_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crime-last-updated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"date": "2024-06-01"})))
            .mount(&server)
            .await;

        let client = stub_client(&server).await;
        let result = handle_tool_call(&client, "get_last_updated", json!({}))
            .await
            .unwrap();
        assert_eq!(result, json!("2024-06-01"));
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_as_empty_default_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forces"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = stub_client(&server).await;
        let result = handle_tool_call(&client, "get_list_of_forces", json!({}))
            .await
            .unwrap();
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn every_registered_tool_dispatches() {
        // Catch-all stub: whatever path a tool builds, respond with a list.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = stub_client(&server).await;
        let args = json!({
            "lat": 52.6,
            "lng": -1.1,
            "category": "all-crime",
            "force": "leicestershire",
            "force_id": "leicestershire",
            "neighbourhood_id": "NC04",
            "persistent_id": "abc123",
            "location_id": 884227
        });

        for tool in crate::tools::get_tool_definitions() {
            let result = handle_tool_call(&client, &tool.name, args.clone()).await;
            assert!(result.is_ok(), "{} should dispatch", tool.name);
        }
    }
}
