//! Stripe REST client.
//!
//! Talks to the provider's form-encoded REST API directly with `reqwest`.
//! The API base is configurable so tests can point at a local stub server.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::config::StripeConfig;

use super::types::ListEnvelope;
use super::{
    CheckoutSession, CreateSessionRequest, PaymentProvider, PaymentsError, ProviderPrice,
    ProviderProduct,
};

/// Maximum page size accepted by the provider's list endpoints.
const LIST_LIMIT: u32 = 100;

/// HTTP client for the payment provider API.
///
/// Cheaply cloneable; holds the API credentials and a pooled
/// `reqwest::Client`.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<StripeClientInner>,
}

struct StripeClientInner {
    http: reqwest::Client,
    api_base: String,
    secret_key: SecretString,
}

impl StripeClient {
    /// Create a client from provider configuration.
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            inner: Arc::new(StripeClientInner {
                http: reqwest::Client::new(),
                api_base: config.api_base.trim_end_matches('/').to_string(),
                secret_key: config.secret_key.clone(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.api_base)
    }

    async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, PaymentsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .inner
            .http
            .get(self.url(path))
            .bearer_auth(self.inner.secret_key.expose_secret())
            .query(&[("limit", LIST_LIMIT)])
            .send()
            .await?;

        let envelope: ListEnvelope<T> = read_json(response).await?;
        Ok(envelope.data)
    }
}

impl PaymentProvider for StripeClient {
    async fn list_products(&self) -> Result<Vec<ProviderProduct>, PaymentsError> {
        self.get_list("/v1/products").await
    }

    async fn list_prices(&self) -> Result<Vec<ProviderPrice>, PaymentsError> {
        self.get_list("/v1/prices").await
    }

    async fn create_checkout_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CheckoutSession, PaymentsError> {
        let response = self
            .inner
            .http
            .post(self.url("/v1/checkout/sessions"))
            .bearer_auth(self.inner.secret_key.expose_secret())
            .form(&session_form(request))
            .send()
            .await?;

        read_json(response).await
    }
}

/// Read a provider response, mapping non-success statuses to
/// [`PaymentsError::Api`] with the response body as the message.
async fn read_json<T>(response: reqwest::Response) -> Result<T, PaymentsError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(PaymentsError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Flatten a session request into the provider's bracketed form encoding.
fn session_form(request: &CreateSessionRequest) -> Vec<(String, String)> {
    let mut form = Vec::with_capacity(request.line_items.len() * 2 + 4);

    form.push((
        "payment_method_types[0]".to_string(),
        "card".to_string(),
    ));
    for (i, item) in request.line_items.iter().enumerate() {
        form.push((format!("line_items[{i}][price]"), item.price.clone()));
        form.push((
            format!("line_items[{i}][quantity]"),
            item.quantity.to_string(),
        ));
    }
    form.push(("mode".to_string(), "payment".to_string()));
    form.push(("success_url".to_string(), request.success_url.clone()));
    form.push(("cancel_url".to_string(), request.cancel_url.clone()));

    form
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::LineItem;
    use super::*;

    #[test]
    fn test_session_form_encoding() {
        let request = CreateSessionRequest {
            line_items: vec![
                LineItem {
                    price: "price_abc".to_string(),
                    quantity: 1,
                },
                LineItem {
                    price: "price_def".to_string(),
                    quantity: 2,
                },
            ],
            success_url: "https://shop.test/success?session_id={CHECKOUT_SESSION_ID}".to_string(),
            cancel_url: "https://shop.test/".to_string(),
        };

        let form = session_form(&request);

        assert_eq!(
            form,
            vec![
                ("payment_method_types[0]".to_string(), "card".to_string()),
                (
                    "line_items[0][price]".to_string(),
                    "price_abc".to_string()
                ),
                ("line_items[0][quantity]".to_string(), "1".to_string()),
                (
                    "line_items[1][price]".to_string(),
                    "price_def".to_string()
                ),
                ("line_items[1][quantity]".to_string(), "2".to_string()),
                ("mode".to_string(), "payment".to_string()),
                (
                    "success_url".to_string(),
                    "https://shop.test/success?session_id={CHECKOUT_SESSION_ID}".to_string()
                ),
                ("cancel_url".to_string(), "https://shop.test/".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = StripeConfig {
            public_key: "pk_test_abc".to_string(),
            secret_key: SecretString::from("sk_test_abc"),
            api_base: "http://localhost:12111/".to_string(),
        };
        let client = StripeClient::new(&config);
        assert_eq!(client.url("/v1/products"), "http://localhost:12111/v1/products");
    }

    #[test]
    fn test_list_envelope_deserializes() {
        let json = r#"{"object":"list","data":[{"id":"price_1","product":"prod_1","currency":"usd"}],"has_more":false}"#;
        let envelope: ListEnvelope<ProviderPrice> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "price_1");
        assert_eq!(envelope.data[0].product_id, "prod_1");
    }
}
