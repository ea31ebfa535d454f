//! Shared request parsing helpers for the HTTP handlers.

use std::str::FromStr;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::domain::Error;

const INVALID_BODY: &str = "Invalid request body";
const INVALID_PRICE: &str = "Price must be a valid number";

/// JSON request body extractor.
///
/// An empty (or whitespace-only) payload reads as `{}`, so a bodiless request
/// reaches the handler's own field validation. Anything else must parse as
/// JSON, otherwise the request fails with `400 {"error": "Invalid request body"}`.
/// The content type is not inspected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Unwrap the parsed body.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Parse raw body bytes, treating an empty payload as the default value.
pub(crate) fn parse_body<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(error = %err, "rejected request body");
        Error::invalid_request(INVALID_BODY)
    })
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = fut.await.map_err(|err| {
                debug!(error = %err, "failed to read request body");
                Error::invalid_request(INVALID_BODY)
            })?;
            Ok(Self(parse_body(&bytes)?))
        })
    }
}

/// Parse a path segment into an identifier.
///
/// A malformed identifier cannot match any record, so it reports the same
/// not-found message as a well-formed unknown one.
pub(crate) fn parse_path_id<T: FromStr>(raw: &str, not_found: &'static str) -> Result<T, Error> {
    raw.parse().map_err(|_| Error::not_found(not_found))
}

/// Return the value when present and non-empty.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Pair with `#[serde(default)]`: an absent key yields `None`, `null` yields
/// `Some(None)`, and a value yields `Some(Some(v))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a price field so that an explicit `null` is kept as a value.
///
/// Pair with `#[serde(default)]`: an absent key yields `None`, while `null`
/// becomes `Some(PriceInput::Other(Null))` and fails [`PriceInput::parse`].
pub(crate) fn price_field<'de, D>(deserializer: D) -> Result<Option<PriceInput>, D::Error>
where
    D: Deserializer<'de>,
{
    PriceInput::deserialize(deserializer).map(Some)
}

/// Price as supplied by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PriceInput {
    /// Convert to a finite `f64`.
    pub fn parse(self) -> Result<f64, Error> {
        let value = match self {
            Self::Number(value) => value,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::invalid_request(INVALID_PRICE))?,
            Self::Other(_) => return Err(Error::invalid_request(INVALID_PRICE)),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::invalid_request(INVALID_PRICE))
        }
    }
}
