//! HTTP client for the Tapsilat API

use crate::config::ClientConfig;
use crate::types::*;
use crate::validators::validate_gsm_number;
use crate::{Result, TapsilatError};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Characters escaped when an identifier is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Client for the Tapsilat payment API
#[derive(Clone)]
pub struct TapsilatClient {
    /// Connection settings
    config: ClientConfig,
    /// HTTP client
    client: Client,
}

impl std::fmt::Debug for TapsilatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapsilatClient")
            .field("endpoint", &self.config.endpoint)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl TapsilatClient {
    /// Create a client for the default endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client for a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token).with_endpoint(endpoint))
    }

    /// Create a client from environment variables, see [`ClientConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TapsilatError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Get the API endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(method = "GET", path, "sending Tapsilat request");
        self.send(path, self.client.get(self.url(path))).await
    }

    async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "GET", path, "sending Tapsilat request");
        self.send(path, self.client.get(self.url(path)).query(query)).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "POST", path, "sending Tapsilat request");
        self.send(path, self.client.post(self.url(path)).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            warn!(path, status = status.as_u16(), "Tapsilat API returned an error status");
            return Err(TapsilatError::api(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Create an order.
    ///
    /// A non-empty buyer GSM number is validated and replaced with its cleaned
    /// form; an invalid number aborts the call before anything is sent. When
    /// the API returns a reference id the checkout URL is looked up as well;
    /// failing that lookup leaves `checkout_url` empty rather than failing
    /// the call.
    pub async fn create_order(&self, mut order: Order) -> Result<OrderResponse> {
        if !order.buyer.gsm_number.is_empty() {
            order.buyer.gsm_number = validate_gsm_number(&order.buyer.gsm_number)?;
        }

        let mut response: OrderResponse = self.post("/order/create", &order).await?;

        if !response.reference_id.is_empty() {
            match self.get_checkout_url(&response.reference_id).await {
                Ok(checkout_url) if !checkout_url.is_empty() => {
                    response.checkout_url = checkout_url;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        reference_id = %response.reference_id,
                        error = %e,
                        "could not fetch checkout URL for new order"
                    );
                }
            }
        }

        Ok(response)
    }

    /// Get an order by reference id
    pub async fn get_order(&self, reference_id: &str) -> Result<OrderDetail> {
        self.get(&format!("/order/{}", segment(reference_id))).await
    }

    /// Get an order by the caller's conversation id
    pub async fn get_order_by_conversation_id(&self, conversation_id: &str) -> Result<OrderDetail> {
        self.get(&format!("/order/conversation/{}", segment(conversation_id))).await
    }

    /// List orders, optionally for a single buyer
    pub async fn get_orders(
        &self,
        page: u32,
        per_page: u32,
        buyer_id: Option<&str>,
    ) -> Result<PaginatedData> {
        let mut query = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(buyer_id) = buyer_id.filter(|id| !id.is_empty()) {
            query.push(("buyer_id", buyer_id.to_string()));
        }
        self.get_with_query("/order/list", &query).await
    }

    /// List orders with date, organization or related-reference filters
    pub async fn get_order_list(&self, query: &OrderListQuery) -> Result<PaginatedData> {
        self.get_with_query("/order/list", query).await
    }

    /// List sub-merchant orders
    pub async fn get_order_submerchants(&self, page: u32, per_page: u32) -> Result<PaginatedData> {
        self.get_with_query(
            "/order/submerchants",
            &[("page", page.to_string()), ("per_page", per_page.to_string())],
        )
        .await
    }

    /// Checkout URL of an order
    pub async fn get_checkout_url(&self, reference_id: &str) -> Result<String> {
        let order = self.get_order(reference_id).await?;
        Ok(order.checkout_url)
    }

    /// Current status of an order
    pub async fn get_order_status(&self, reference_id: &str) -> Result<OrderStatus> {
        self.get(&format!("/order/{}/status", segment(reference_id))).await
    }

    /// Payment details, looked up by reference id when given, otherwise by
    /// conversation id
    pub async fn get_order_payment_details(
        &self,
        reference_id: Option<&str>,
        conversation_id: Option<&str>,
    ) -> Result<JsonObject> {
        let path = "/order/payment-details";
        let reference_id = reference_id.filter(|id| !id.is_empty());
        let conversation_id = conversation_id.filter(|id| !id.is_empty());

        match (reference_id, conversation_id) {
            (Some(id), _) => self.get_with_query(path, &[("reference_id", id)]).await,
            (None, Some(id)) => self.get_with_query(path, &[("conversation_id", id)]).await,
            (None, None) => self.get(path).await,
        }
    }

    /// Transactions recorded for an order
    pub async fn get_order_transactions(&self, reference_id: &str) -> Result<Vec<JsonObject>> {
        self.get(&format!("/order/{}/transactions", segment(reference_id))).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, request: &CancelOrder) -> Result<RefundCancelOrderResponse> {
        self.post("/order/cancel", request).await
    }

    /// Refund part of an order
    pub async fn refund_order(&self, request: &RefundOrder) -> Result<RefundCancelOrderResponse> {
        self.post("/order/refund", request).await
    }

    /// Refund the full order amount
    pub async fn refund_all_order(&self, reference_id: &str) -> Result<RefundCancelOrderResponse> {
        self.refund_order(&RefundOrder {
            reference_id: reference_id.to_string(),
            ..RefundOrder::default()
        })
        .await
    }

    /// Get a payment term
    pub async fn get_order_term(&self, term_reference_id: &str) -> Result<JsonObject> {
        self.get(&format!("/order/term/{}", segment(term_reference_id))).await
    }

    /// Add a payment term to an order
    pub async fn create_order_term(&self, term: &OrderPaymentTermCreateDTO) -> Result<JsonObject> {
        self.post("/order/term/create", term).await
    }

    /// Remove a payment term from an order
    pub async fn delete_order_term(
        &self,
        order_id: &str,
        term_reference_id: &str,
    ) -> Result<JsonObject> {
        self.post(
            "/order/term/delete",
            &json!({
                "order_id": order_id,
                "term_reference_id": term_reference_id,
            }),
        )
        .await
    }

    /// Update a payment term
    pub async fn update_order_term(&self, term: &OrderPaymentTermUpdateDTO) -> Result<JsonObject> {
        self.post("/order/term/update", term).await
    }

    /// Refund a payment term
    pub async fn refund_order_term(&self, request: &OrderTermRefundRequest) -> Result<JsonObject> {
        self.post("/order/term/refund", request).await
    }

    /// Terminate an order
    pub async fn order_terminate(&self, reference_id: &str) -> Result<JsonObject> {
        self.post("/order/terminate", &json!({ "reference_id": reference_id })).await
    }

    /// Ask the API to replay the merchant callback for an order
    pub async fn order_manual_callback(
        &self,
        reference_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<JsonObject> {
        let mut payload = json!({ "reference_id": reference_id });
        if let Some(conversation_id) = conversation_id.filter(|id| !id.is_empty()) {
            payload["conversation_id"] = Value::from(conversation_id);
        }
        self.post("/order/manual-callback", &payload).await
    }

    /// Link an order to a related reference
    pub async fn order_related_update(
        &self,
        reference_id: &str,
        related_reference_id: &str,
    ) -> Result<JsonObject> {
        self.post(
            "/order/related-update",
            &json!({
                "reference_id": reference_id,
                "related_reference_id": related_reference_id,
            }),
        )
        .await
    }

    /// Organization-wide settings
    pub async fn get_organization_settings(&self) -> Result<OrganizationSettings> {
        self.get("/organization/settings").await
    }

    /// Get a subscription
    pub async fn get_subscription(
        &self,
        request: &SubscriptionGetRequest,
    ) -> Result<SubscriptionDetail> {
        self.post("/subscription", request).await
    }

    /// Cancel a subscription
    pub async fn cancel_subscription(&self, request: &SubscriptionCancelRequest) -> Result<()> {
        let _: Value = self.post("/subscription/cancel", request).await?;
        Ok(())
    }

    /// Create a subscription
    pub async fn create_subscription(
        &self,
        request: &SubscriptionCreateRequest,
    ) -> Result<SubscriptionCreateResponse> {
        self.post("/subscription/create", request).await
    }

    /// List subscriptions
    pub async fn list_subscriptions(&self, page: u32, per_page: u32) -> Result<PaginatedData> {
        self.get_with_query(
            "/subscription/list",
            &[("page", page.to_string()), ("per_page", per_page.to_string())],
        )
        .await
    }

    /// Get the redirect URL for a subscription's payment page
    pub async fn redirect_subscription(
        &self,
        request: &SubscriptionRedirectRequest,
    ) -> Result<SubscriptionRedirectResponse> {
        self.post("/subscription/redirect", request).await
    }
}
