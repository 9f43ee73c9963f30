// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Normalization of the heterogeneous records returned by the catalog.
//!
//! Records are dispatched on `wrapperType` first, then on `kind == "ebook"`.
//! Anything else is dropped silently. A record of a known shape that lacks
//! a required field is dropped with a warning; the rest of the batch is kept.

use crate::domain::models::SearchResult;
use crate::domain::search::engine::CatalogError;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Known upstream record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    Track,
    Audiobook,
    Software,
    Ebook,
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordShape::Track => "track",
            RecordShape::Audiobook => "audiobook",
            RecordShape::Software => "software",
            RecordShape::Ebook => "ebook",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("{shape} record is missing required field `{field}`")]
    MissingField {
        shape: RecordShape,
        field: &'static str,
    },
    #[error("{shape} record field `{field}` is not a string")]
    InvalidField {
        shape: RecordShape,
        field: &'static str,
    },
}

/// Source keys for one record shape.
struct FieldMap {
    name: &'static str,
    store_url: &'static str,
    /// `None` means the kind is the fixed literal of the shape.
    kind: Option<&'static str>,
    price: &'static str,
}

impl RecordShape {
    fn field_map(self) -> FieldMap {
        match self {
            // The upstream track price key is read as `trakePrice`.
            RecordShape::Track => FieldMap {
                name: "trackName",
                store_url: "trackViewUrl",
                kind: Some("kind"),
                price: "trakePrice",
            },
            RecordShape::Audiobook => FieldMap {
                name: "collectionName",
                store_url: "collectionViewUrl",
                kind: None,
                price: "collectionPrice",
            },
            RecordShape::Software | RecordShape::Ebook => FieldMap {
                name: "trackName",
                store_url: "trackViewUrl",
                kind: Some("kind"),
                price: "price",
            },
        }
    }

    /// Classify a record, or `None` for shapes this parser does not know.
    pub fn classify(record: &Map<String, Value>) -> Option<Self> {
        match record.get("wrapperType").and_then(Value::as_str) {
            Some("track") => Some(RecordShape::Track),
            Some("audiobook") => Some(RecordShape::Audiobook),
            Some("software") => Some(RecordShape::Software),
            Some(_) => None,
            None => match record.get("kind").and_then(Value::as_str) {
                Some("ebook") => Some(RecordShape::Ebook),
                _ => None,
            },
        }
    }
}

fn required<'a>(
    record: &'a Map<String, Value>,
    shape: RecordShape,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { shape, field }),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ParseError::InvalidField { shape, field }),
    }
}

fn optional_price(record: &Map<String, Value>, field: &str) -> f64 {
    record
        .get(field)
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

fn genre(record: &Map<String, Value>, shape: RecordShape) -> String {
    match shape {
        RecordShape::Ebook => record
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default(),
        _ => record
            .get("primaryGenreName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Normalize one record of a known shape.
pub fn normalize(
    record: &Map<String, Value>,
    shape: RecordShape,
) -> Result<SearchResult, ParseError> {
    let fields = shape.field_map();

    let kind = match fields.kind {
        Some(key) => required(record, shape, key)?.to_string(),
        None => shape.to_string(),
    };

    Ok(SearchResult {
        name: required(record, shape, fields.name)?.to_string(),
        artist_name: required(record, shape, "artistName")?.to_string(),
        artwork_small_url: required(record, shape, "artworkUrl60")?.to_string(),
        artwork_large_url: required(record, shape, "artworkUrl100")?.to_string(),
        store_url: required(record, shape, fields.store_url)?.to_string(),
        kind,
        currency: required(record, shape, "currency")?.to_string(),
        price: optional_price(record, fields.price),
        genre: genre(record, shape),
    })
}

/// Normalize a single raw element. `None` means the element has no known
/// shape and should be dropped without complaint.
pub fn parse_record(value: &Value) -> Option<Result<SearchResult, ParseError>> {
    let record = value.as_object()?;
    let shape = RecordShape::classify(record)?;
    Some(normalize(record, shape))
}

/// Normalize the `results` array of a decoded payload, in encounter order.
///
/// A missing or non-array `results` key yields an empty list.
pub fn parse_results(payload: &Map<String, Value>) -> Vec<SearchResult> {
    let Some(records) = payload.get("results").and_then(Value::as_array) else {
        debug!("Payload has no `results` array, treating as zero results");
        return Vec::new();
    };

    let mut results = Vec::with_capacity(records.len());
    for (index, value) in records.iter().enumerate() {
        match parse_record(value) {
            Some(Ok(result)) => results.push(result),
            Some(Err(e)) => warn!(index, error = %e, "Skipping malformed catalog record"),
            None => debug!(index, "Skipping catalog record of unknown shape"),
        }
    }
    results
}

/// Decode a response body into a JSON object and normalize it.
pub fn parse_body(body: &[u8]) -> Result<Vec<SearchResult>, CatalogError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| CatalogError::InvalidBody(e.to_string()))?;
    match value {
        Value::Object(payload) => Ok(parse_results(&payload)),
        _ => Err(CatalogError::InvalidBody(
            "top-level JSON value is not an object".to_string(),
        )),
    }
}
