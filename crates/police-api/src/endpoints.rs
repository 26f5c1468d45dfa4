//! The 21 upstream operations
//!
//! Each method is a short pure mapping: resolve the location precedence
//! (or read required identifiers) -> build the endpoint path and query
//! parameters -> one GET -> absorb faults into the tool's empty default.
//! An under-specified geographic query returns its empty default without
//! touching the network at all.

use serde_json::Value;

use crate::args::{
    CrimesAtLocationArgs, DateArg, ForceArgs, GeoQuery, LocateArgs, NeighbourhoodArgs,
    NoLocationArgs, OutcomesArgs, PersistentIdArg, StopsAreaArgs, StopsLocationArgs,
    StreetCrimesArgs, push_date,
};
use crate::client::PoliceClient;
use crate::shape::{ResponseShape, or_empty};

impl PoliceClient {
    /// Street-level crimes by coordinate pair or custom polygon
    pub async fn street_level_crimes(&self, args: &StreetCrimesArgs) -> Value {
        let Some(geo) = GeoQuery::resolve(None, args.lat, args.lng, args.poly.as_deref()) else {
            return ResponseShape::List.empty();
        };
        let mut params = Vec::new();
        push_date(&mut params, args.date.as_deref());
        geo.push_params(&mut params);

        let category = match args.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "all-crime",
        };
        let endpoint = format!("crimes-street/{category}");
        or_empty(self.get(&endpoint, &params).await, ResponseShape::List)
    }

    /// Outcomes by location id, coordinate pair, or custom polygon
    pub async fn street_level_outcomes(&self, args: &OutcomesArgs) -> Value {
        let Some(geo) = GeoQuery::resolve(args.location_id, args.lat, args.lng, args.poly.as_deref())
        else {
            return ResponseShape::List.empty();
        };
        let mut params = Vec::new();
        push_date(&mut params, args.date.as_deref());
        geo.push_params(&mut params);
        or_empty(
            self.get("outcomes-at-location", &params).await,
            ResponseShape::List,
        )
    }

    /// Crimes at a specific location by id or nearest to a coordinate pair
    pub async fn crimes_at_location(&self, args: &CrimesAtLocationArgs) -> Value {
        // No polygon arm for this endpoint.
        let Some(geo) = GeoQuery::resolve(args.location_id, args.lat, args.lng, None) else {
            return ResponseShape::List.empty();
        };
        let mut params = Vec::new();
        push_date(&mut params, args.date.as_deref());
        geo.push_params(&mut params);
        or_empty(
            self.get("crimes-at-location", &params).await,
            ResponseShape::List,
        )
    }

    /// Crimes that could not be mapped to a location
    pub async fn crimes_no_location(&self, args: &NoLocationArgs) -> Value {
        let mut params = vec![
            ("category".to_string(), args.category.clone()),
            ("force".to_string(), args.force.clone()),
        ];
        push_date(&mut params, args.date.as_deref());
        or_empty(
            self.get("crimes-no-location", &params).await,
            ResponseShape::List,
        )
    }

    /// Valid crime categories for a given month
    pub async fn crime_categories(&self, args: &DateArg) -> Value {
        let mut params = Vec::new();
        push_date(&mut params, args.date.as_deref());
        or_empty(
            self.get("crime-categories", &params).await,
            ResponseShape::List,
        )
    }

    /// The month the crime data was last updated, as a bare string
    pub async fn last_updated(&self) -> Value {
        let body = or_empty(
            self.get("crime-last-updated", &[]).await,
            ResponseShape::Object,
        );
        let date = body.get("date").and_then(Value::as_str).unwrap_or_default();
        Value::String(date.to_string())
    }

    /// Outcomes for a single crime by persistent id
    pub async fn outcomes_for_crime(&self, args: &PersistentIdArg) -> Value {
        let endpoint = format!("outcomes-for-crime/{}", args.persistent_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::Object)
    }

    /// All police forces
    pub async fn forces(&self) -> Value {
        or_empty(self.get("forces", &[]).await, ResponseShape::List)
    }

    /// Details for one force
    pub async fn force_details(&self, args: &ForceArgs) -> Value {
        let endpoint = format!("forces/{}", args.force_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::Object)
    }

    /// Senior officers of one force
    pub async fn senior_officers(&self, args: &ForceArgs) -> Value {
        let endpoint = format!("forces/{}/people", args.force_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// Neighbourhoods of one force
    pub async fn neighbourhoods(&self, args: &ForceArgs) -> Value {
        let endpoint = format!("{}/neighbourhoods", args.force_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// Details for one neighbourhood
    pub async fn neighbourhood_details(&self, args: &NeighbourhoodArgs) -> Value {
        let endpoint = format!("{}/{}", args.force_id, args.neighbourhood_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::Object)
    }

    /// Boundary coordinates of one neighbourhood
    pub async fn neighbourhood_boundary(&self, args: &NeighbourhoodArgs) -> Value {
        let endpoint = format!("{}/{}/boundary", args.force_id, args.neighbourhood_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// Policing team of one neighbourhood
    pub async fn neighbourhood_team(&self, args: &NeighbourhoodArgs) -> Value {
        let endpoint = format!("{}/{}/people", args.force_id, args.neighbourhood_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// Scheduled events of one neighbourhood
    pub async fn neighbourhood_events(&self, args: &NeighbourhoodArgs) -> Value {
        let endpoint = format!("{}/{}/events", args.force_id, args.neighbourhood_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// Policing priorities of one neighbourhood
    pub async fn neighbourhood_priorities(&self, args: &NeighbourhoodArgs) -> Value {
        let endpoint = format!("{}/{}/priorities", args.force_id, args.neighbourhood_id);
        or_empty(self.get(&endpoint, &[]).await, ResponseShape::List)
    }

    /// The neighbourhood policing team covering a coordinate pair
    pub async fn locate_neighbourhood(&self, args: &LocateArgs) -> Value {
        let params = vec![("q".to_string(), format!("{},{}", args.lat, args.lng))];
        or_empty(
            self.get("locate-neighbourhood", &params).await,
            ResponseShape::Object,
        )
    }

    /// Stop and searches within a 1-mile radius or custom polygon
    pub async fn stop_searches_by_area(&self, args: &StopsAreaArgs) -> Value {
        let Some(geo) = GeoQuery::resolve(None, args.lat, args.lng, args.poly.as_deref()) else {
            return ResponseShape::List.empty();
        };
        let mut params = Vec::new();
        push_date(&mut params, args.date.as_deref());
        geo.push_params(&mut params);
        or_empty(self.get("stops-street", &params).await, ResponseShape::List)
    }

    /// Stop and searches at a known location
    pub async fn stop_searches_by_location(&self, args: &StopsLocationArgs) -> Value {
        let mut params = vec![("location_id".to_string(), args.location_id.to_string())];
        push_date(&mut params, args.date.as_deref());
        or_empty(
            self.get("stops-at-location", &params).await,
            ResponseShape::List,
        )
    }

    /// Stop and searches that could not be mapped to a location
    pub async fn stop_searches_no_location(&self, args: &ForceArgs) -> Value {
        let mut params = vec![("force".to_string(), args.force_id.clone())];
        push_date(&mut params, args.date.as_deref());
        or_empty(
            self.get("stops-no-location", &params).await,
            ResponseShape::List,
        )
    }

    /// Stop and searches reported by one force
    pub async fn stop_searches_by_force(&self, args: &ForceArgs) -> Value {
        let mut params = vec![("force".to_string(), args.force_id.clone())];
        push_date(&mut params, args.date.as_deref());
        or_empty(self.get("stops-force", &params).await, ResponseShape::List)
    }
}
