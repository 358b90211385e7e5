//! PostgREST-style HTTP implementation of [`TableStore`].

use super::{StoreError, TableStore};
use crate::config::AppConfig;
use async_trait::async_trait;
use serde_json::Value;

/// REST client over the managed Postgres service.
///
/// Every request carries the service-role credential (`apikey` header plus
/// bearer token), so the backend's row-level access checks are bypassed.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl RestStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.service_url.trim_end_matches('/').to_string(),
            service_role_key: config.service_role_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    /// Pulls the backend's own message out of a non-2xx response body.
    /// Falls back to the raw body, then to the status line.
    async fn backend_error(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or(body);
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };
        StoreError::Backend { message }
    }

    /// The service returns representations as arrays even for single rows.
    fn first_row(body: Value) -> Value {
        match body {
            Value::Array(mut rows) if !rows.is_empty() => rows.remove(0),
            Value::Array(_) => Value::Null,
            other => other,
        }
    }
}

#[async_trait]
impl TableStore for RestStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(table, "select all");
        let response = self
            .request(reqwest::Method::GET, self.table_url(table))
            .query(&[("select", "*")])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        tracing::debug!(table, "insert");
        let response = self
            .request(reqwest::Method::POST, self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        Ok(Self::first_row(response.json().await?))
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreError> {
        tracing::debug!(table, id, "update");
        let response = self
            .request(reqwest::Method::PATCH, self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        Ok(Self::first_row(response.json().await?))
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        tracing::debug!(table, id, "delete");
        let response = self
            .request(reqwest::Method::DELETE, self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        Ok(())
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let response = self
            .request(reqwest::Method::GET, format!("{}/rest/v1/", self.base_url))
            .header("Accept", "application/openapi+json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        let description: Value = response.json().await?;
        let properties = description
            .get("definitions")
            .and_then(|d| d.get(table))
            .and_then(|t| t.get("properties"))
            .and_then(Value::as_object)
            .ok_or_else(|| StoreError::Backend {
                message: format!("no schema description for table {table}"),
            })?;
        Ok(properties.keys().cloned().collect())
    }
}
