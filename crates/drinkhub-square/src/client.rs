//! HTTP client for the Square REST API.
//!
//! Wraps `reqwest` with bearer authentication, the pinned `Square-Version`
//! header, and typed response deserialization. Non-2xx responses surface as
//! [`SquareError::Api`] carrying the status and raw vendor payload — nothing
//! is swallowed at this layer.

use std::time::Duration;

use drinkhub_core::{PosClientSettings, PosOrder};
use rand::distr::Alphanumeric;
use rand::Rng;
use reqwest::Client;

use crate::error::SquareError;
use crate::types::{CatalogListResponse, CatalogObject, Location, LocationResponse,
    LocationsResponse, Order, OrderResponse};

const PRODUCTION_BASE_URL: &str = "https://connect.squareup.com";
const SANDBOX_BASE_URL: &str = "https://connect.squareupsandbox.com";

/// Pinned Square API version, sent on every request.
const API_VERSION: &str = "2024-06-04";

/// Returns `true` when the access token is a Square production token.
///
/// Production tokens start with the literal prefix `sq0atp-` or `sq0csp-`;
/// sandbox tokens start with `EAA`/`EAAA`. Exact prefix matching — a token
/// merely containing one of the prefixes elsewhere still selects sandbox.
/// Known fragility: a Square token-format change silently flips new tokens
/// to sandbox. Kept as-is for compatibility with the existing merchant base.
#[must_use]
pub fn is_production_token(token: &str) -> bool {
    token.starts_with("sq0atp-") || token.starts_with("sq0csp-")
}

/// Client for the Square REST API.
///
/// The base URL is selected from the access token's prefix (see
/// [`is_production_token`]). Use [`SquareClient::with_base_url`] to point at
/// a mock server in tests.
pub struct SquareClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl SquareClient {
    /// Creates a client pointed at the environment implied by the token.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: &str, settings: &PosClientSettings) -> Result<Self, SquareError> {
        let base_url = if is_production_token(access_token) {
            PRODUCTION_BASE_URL
        } else {
            SANDBOX_BASE_URL
        };
        Self::with_base_url(access_token, settings, base_url)
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        access_token: &str,
        settings: &PosClientSettings,
        base_url: &str,
    ) -> Result<Self, SquareError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Lists all locations visible to the access token.
    ///
    /// # Errors
    ///
    /// - [`SquareError::Api`] on a non-2xx response.
    /// - [`SquareError::Http`] on network failure.
    /// - [`SquareError::Deserialize`] if the body does not match.
    pub async fn list_locations(&self) -> Result<Vec<Location>, SquareError> {
        let response: LocationsResponse = self.get("/v2/locations", None).await?;
        Ok(response.locations)
    }

    /// Fetches a single location by id.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::NotFound`] when Square has no such location,
    /// plus the usual [`SquareError::Api`]/[`SquareError::Http`] failures.
    pub async fn get_location(&self, location_id: &str) -> Result<Location, SquareError> {
        let path = format!("/v2/locations/{location_id}");
        let response: LocationResponse = self
            .get(&path, Some(("location", location_id)))
            .await?;
        Ok(response.location)
    }

    /// Pulls the full catalog as a flat list of typed objects.
    ///
    /// Requests only the four types the normalizer understands. Each object
    /// is deserialized individually; entries that fail to parse are skipped
    /// with a debug log rather than failing the pull. A catalog with no
    /// objects yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`SquareError::Api`] on a non-2xx response.
    /// - [`SquareError::Http`] on network failure.
    /// - [`SquareError::Deserialize`] if the envelope does not match.
    pub async fn list_catalog(&self) -> Result<Vec<CatalogObject>, SquareError> {
        let response: CatalogListResponse = self
            .get(
                "/v2/catalog/list?types=ITEM,MODIFIER_LIST,MODIFIER,CATEGORY",
                None,
            )
            .await?;

        let Some(objects) = response.objects else {
            return Ok(Vec::new());
        };

        let parsed = objects
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<CatalogObject>(value) {
                Ok(object) => Some(object),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unparseable catalog object");
                    None
                }
            })
            .collect();
        Ok(parsed)
    }

    /// Creates an order at the given location.
    ///
    /// Uses the order's `external_id` as the idempotency key when present;
    /// otherwise synthesizes one from a timestamp and random suffix so blind
    /// retries are not rejected as duplicates. Returns the Square order id.
    ///
    /// # Errors
    ///
    /// - [`SquareError::Api`] when Square rejects the order.
    /// - [`SquareError::Http`] on network failure.
    /// - [`SquareError::Deserialize`] if the body does not match.
    pub async fn create_order(
        &self,
        order: &PosOrder,
        location_id: &str,
    ) -> Result<String, SquareError> {
        let idempotency_key = order
            .external_id
            .clone()
            .unwrap_or_else(generate_idempotency_key);

        let line_items: Vec<serde_json::Value> = order
            .line_items
            .iter()
            .map(|item| {
                let mut line = serde_json::json!({
                    "catalog_object_id": item.catalog_item_id,
                    "quantity": item.quantity.to_string(),
                });
                if let Some(variation_id) = &item.variation_id {
                    line["variation_name"] = serde_json::json!(variation_id);
                }
                if let Some(modifiers) = &item.modifiers {
                    let mapped: Vec<serde_json::Value> = modifiers
                        .iter()
                        .map(|modifier| {
                            serde_json::json!({
                                "catalog_object_id": modifier.catalog_item_id,
                                "quantity": modifier.quantity.unwrap_or(1).to_string(),
                            })
                        })
                        .collect();
                    line["modifiers"] = serde_json::json!(mapped);
                }
                if let Some(note) = &item.note {
                    line["note"] = serde_json::json!(note);
                }
                line
            })
            .collect();

        let body = serde_json::json!({
            "idempotency_key": idempotency_key,
            "order": {
                "location_id": location_id,
                "line_items": line_items,
                "state": "OPEN",
            },
        });

        let response: OrderResponse = self.post("/v2/orders", &body).await?;
        Ok(response.order.id)
    }

    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::NotFound`] when Square has no such order, plus
    /// the usual [`SquareError::Api`]/[`SquareError::Http`] failures.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, SquareError> {
        let path = format!("/v2/orders/{order_id}");
        let response: OrderResponse = self.get(&path, Some(("order", order_id))).await?;
        Ok(response.order)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        not_found: Option<(&'static str, &str)>,
    ) -> Result<T, SquareError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Square-Version", API_VERSION)
            .send()
            .await?;
        Self::parse_response(response, &url, not_found).await
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, SquareError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("Square-Version", API_VERSION)
            .json(body)
            .send()
            .await?;
        Self::parse_response(response, &url, None).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
        not_found: Option<(&'static str, &str)>,
    ) -> Result<T, SquareError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some((resource, id)) = not_found {
                return Err(SquareError::NotFound {
                    resource,
                    id: id.to_owned(),
                });
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SquareError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SquareError::Deserialize {
            context: url.to_owned(),
            source: e,
        })
    }
}

/// Synthesizes an idempotency key: millisecond timestamp plus a short
/// random alphanumeric suffix.
fn generate_idempotency_key() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), suffix)
}
