//! MCP tool registry
//!
//! Static catalog of the 21 tools the server exposes, one per upstream
//! endpoint of the crime-data API, plus the result envelope types.
//! Definitions are pure data; dispatch lives in [`crate::handlers`].
//!
//! # Tool Categories
//!
//! ## Crimes
//! - `get_street_level_crimes` - Crimes by coordinates or polygon
//! - `get_street_level_outcomes` - Outcomes by location id, coordinates, or polygon
//! - `get_crimes_at_location` - Crimes at or nearest to a location
//! - `get_crimes_no_location` - Crimes that could not be mapped
//! - `get_crime_categories` - Valid crime categories
//! - `get_last_updated` - Month the data was last updated
//! - `get_outcomes_for_crime` - Outcomes for one crime by persistent id
//!
//! ## Forces
//! - `get_list_of_forces` - All police forces
//! - `get_force_details` - One force's details
//! - `get_senior_officers` - One force's senior officers
//!
//! ## Neighbourhoods
//! - `get_neighbourhoods` - Neighbourhoods of a force
//! - `get_neighbourhood_details` / `_boundary` / `_team` / `_events` / `_priorities`
//! - `locate_neighbourhood` - Policing team covering a coordinate pair
//!
//! ## Stop and search
//! - `get_stop_searches_by_area` / `_by_location` / `_no_location` / `_by_force`

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions, in fixed declaration order
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        // Crimes
        ToolDefinition {
            name: "get_street_level_crimes".to_string(),
            description: "Retrieve street-level crimes by lat/lng or custom polygon area"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the requested crime area"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the requested crime area"
                    },
                    "poly": {
                        "type": "string",
                        "description": "Lat/lng pairs defining the boundary of the custom area"
                    },
                    "date": {
                        "type": "string",
                        "description": "Limit results to a specific month (YYYY-MM)"
                    },
                    "category": {
                        "type": "string",
                        "description": "The crime category (defaults to 'all-crime')"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_street_level_outcomes".to_string(),
            description: "Retrieve outcomes by lat/lng, custom polygon, or location ID"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the requested area"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the requested area"
                    },
                    "poly": {
                        "type": "string",
                        "description": "Lat/lng pairs defining the boundary of the custom area"
                    },
                    "location_id": {
                        "type": "number",
                        "description": "The ID of the location"
                    },
                    "date": {
                        "type": "string",
                        "description": "Limit results to a specific month (YYYY-MM)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_crimes_at_location".to_string(),
            description: "Retrieve crimes at a specific location by ID or nearest to lat/lng"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the requested crime area"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the requested crime area"
                    },
                    "location_id": {
                        "type": "number",
                        "description": "The ID of the location"
                    },
                    "date": {
                        "type": "string",
                        "description": "Limit results to a specific month (YYYY-MM)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_crimes_no_location".to_string(),
            description: "Retrieve crimes that could not be mapped to a location".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "The category of the crimes"
                    },
                    "force": {
                        "type": "string",
                        "description": "Specific police force"
                    },
                    "date": {
                        "type": "string",
                        "description": "Limit results to a specific month (YYYY-MM)"
                    }
                },
                "required": ["category", "force"]
            }),
        },
        ToolDefinition {
            name: "get_crime_categories".to_string(),
            description: "Retrieve valid crime categories for a given date".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "Specific month (YYYY-MM)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_last_updated".to_string(),
            description: "Retrieve the date when crime data was last updated".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "get_outcomes_for_crime".to_string(),
            description: "Retrieve outcomes for a specific crime by persistent ID".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "persistent_id": {
                        "type": "string",
                        "description": "The 64-character unique identifier for the crime"
                    }
                },
                "required": ["persistent_id"]
            }),
        },
        // Forces
        ToolDefinition {
            name: "get_list_of_forces".to_string(),
            description: "Retrieve a list of all police forces".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "get_force_details".to_string(),
            description: "Retrieve details for a specific police force".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    }
                },
                "required": ["force_id"]
            }),
        },
        ToolDefinition {
            name: "get_senior_officers".to_string(),
            description: "Retrieve senior officers for a specific police force".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    }
                },
                "required": ["force_id"]
            }),
        },
        // Neighbourhoods
        ToolDefinition {
            name: "get_neighbourhoods".to_string(),
            description: "Retrieve a list of neighbourhoods for a specific police force"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    }
                },
                "required": ["force_id"]
            }),
        },
        ToolDefinition {
            name: "get_neighbourhood_details".to_string(),
            description: "Retrieve details for a specific neighbourhood within a force"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "neighbourhood_id": {
                        "type": "string",
                        "description": "The unique identifier for the neighbourhood"
                    }
                },
                "required": ["force_id", "neighbourhood_id"]
            }),
        },
        ToolDefinition {
            name: "get_neighbourhood_boundary".to_string(),
            description: "Retrieve the boundary coordinates for a specific neighbourhood"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "neighbourhood_id": {
                        "type": "string",
                        "description": "The unique identifier for the neighbourhood"
                    }
                },
                "required": ["force_id", "neighbourhood_id"]
            }),
        },
        ToolDefinition {
            name: "get_neighbourhood_team".to_string(),
            description: "Retrieve the team members for a specific neighbourhood".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "neighbourhood_id": {
                        "type": "string",
                        "description": "The unique identifier for the neighbourhood"
                    }
                },
                "required": ["force_id", "neighbourhood_id"]
            }),
        },
        ToolDefinition {
            name: "get_neighbourhood_events".to_string(),
            description: "Retrieve events scheduled for a specific neighbourhood".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "neighbourhood_id": {
                        "type": "string",
                        "description": "The unique identifier for the neighbourhood"
                    }
                },
                "required": ["force_id", "neighbourhood_id"]
            }),
        },
        ToolDefinition {
            name: "get_neighbourhood_priorities".to_string(),
            description: "Retrieve policing priorities for a specific neighbourhood".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "neighbourhood_id": {
                        "type": "string",
                        "description": "The unique identifier for the neighbourhood"
                    }
                },
                "required": ["force_id", "neighbourhood_id"]
            }),
        },
        ToolDefinition {
            name: "locate_neighbourhood".to_string(),
            description: "Find the neighbourhood policing team for a given latitude and longitude"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the location"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the location"
                    }
                },
                "required": ["lat", "lng"]
            }),
        },
        // Stop and search
        ToolDefinition {
            name: "get_stop_searches_by_area".to_string(),
            description: "Retrieve stop and searches within a 1-mile radius or custom area"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the centre point"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the centre point"
                    },
                    "poly": {
                        "type": "string",
                        "description": "Lat/lng pairs defining a polygon"
                    },
                    "date": {
                        "type": "string",
                        "description": "Specific month (YYYY-MM)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_stop_searches_by_location".to_string(),
            description: "Retrieve stop and searches at a specific location by ID".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "location_id": {
                        "type": "number",
                        "description": "The ID of the location"
                    },
                    "date": {
                        "type": "string",
                        "description": "Specific month (YYYY-MM)"
                    }
                },
                "required": ["location_id"]
            }),
        },
        ToolDefinition {
            name: "get_stop_searches_no_location".to_string(),
            description: "Retrieve stop and searches that could not be mapped to a location"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "date": {
                        "type": "string",
                        "description": "Specific month (YYYY-MM)"
                    }
                },
                "required": ["force_id"]
            }),
        },
        ToolDefinition {
            name: "get_stop_searches_by_force".to_string(),
            description: "Retrieve stop and searches reported by a specific force".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "force_id": {
                        "type": "string",
                        "description": "The unique identifier for the force"
                    },
                    "date": {
                        "type": "string",
                        "description": "Specific month (YYYY-MM)"
                    }
                },
                "required": ["force_id"]
            }),
        },
    ]
}
