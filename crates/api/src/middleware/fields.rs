//! # Request Fields
//!
//! Collects named request parameters from the query string and the body into
//! one bag, the way a form-oriented web framework exposes them. A name present
//! in the query string wins over the same name in the body.
//!
//! Bodies are read according to `Content-Type`:
//!
//! - `application/json`: a JSON object
//! - `application/x-www-form-urlencoded`: form pairs
//! - anything else: ignored
//!
//! A body that cannot be read in the declared format contributes no fields.
//! Extraction never rejects a request, so handlers decide what a missing
//! field means.

use std::collections::HashMap;
use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};
use slotbook_core::{
    coerce::{value_to_int, value_to_text},
    errors::ClinicResult,
};

#[derive(Debug, Clone, Default)]
pub struct RequestFields(Map<String, Value>);

impl RequestFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Field as text; absent and `null` are both `None`.
    pub fn text(&self, name: &str) -> ClinicResult<Option<String>> {
        match self.get(name) {
            Some(value) => value_to_text(value),
            None => Ok(None),
        }
    }

    /// Field as an integer; absent or non-numeric is `0`.
    pub fn int(&self, name: &str) -> i64 {
        self.get(name).map(value_to_int).unwrap_or(0)
    }
}

#[async_trait]
impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(query)| query)
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let mut fields = if content_type.starts_with("application/json") {
            match Bytes::from_request(req, state).await {
                Ok(body) => json_fields(&body),
                Err(e) => {
                    tracing::debug!("Ignoring unreadable request body: {}", e);
                    Map::new()
                }
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(form)) => form
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect(),
                Err(e) => {
                    tracing::debug!("Ignoring invalid form body: {}", e);
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        for (name, value) in query {
            fields.insert(name, Value::String(value));
        }

        Ok(Self(fields))
    }
}

/// Fields of a JSON object body; anything else yields none.
fn json_fields(body: &[u8]) -> Map<String, Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::debug!("Ignoring JSON body that is not an object");
            Map::new()
        }
        Err(e) => {
            tracing::debug!("Ignoring invalid JSON body: {}", e);
            Map::new()
        }
    }
}
