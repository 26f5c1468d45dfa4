//! Empty-default policy for upstream responses
//!
//! Callers of this API are agents, not operators: "no data found" and
//! "upstream hiccup" are deliberately indistinguishable to them. Every
//! transport fault is absorbed into a shape-preserving placeholder, with
//! the fault itself kept visible on the diagnostic stream.

use serde_json::Value;

use crate::Result;

/// The JSON shape a tool's successful response takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// A sequence of records; placeholder `[]`
    List,
    /// A single record; placeholder `{}`
    Object,
    /// A bare string; placeholder `""`
    Scalar,
}

impl ResponseShape {
    /// The placeholder value for this shape
    pub fn empty(&self) -> Value {
        match self {
            Self::List => Value::Array(Vec::new()),
            Self::Object => Value::Object(serde_json::Map::new()),
            Self::Scalar => Value::String(String::new()),
        }
    }
}

/// Apply the empty-default mapping as one auditable step
///
/// `Ok(null)` counts as missing data, since the upstream service returns
/// literal `null` bodies for some empty results.
pub fn or_empty(result: Result<Value>, shape: ResponseShape) -> Value {
    match result {
        Ok(Value::Null) => shape.empty(),
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "upstream request failed, returning empty default");
            shape.empty()
        }
    }
}
