//! Request and response types for the Tapsilat API

use crate::error::ValidationError;
use crate::validators::validate_installments;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped JSON object returned by endpoints without a fixed schema
pub type JsonObject = serde_json::Map<String, Value>;

/// Order creation payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Checkout locale (e.g., "tr", "en")
    pub locale: String,
    /// Total order amount
    pub amount: f64,
    /// Tax portion of the amount
    pub tax_amount: f64,
    /// ISO currency code (e.g., "TRY")
    pub currency: String,
    /// Caller-side identifier echoed back by the API
    pub conversation_id: String,
    pub buyer: OrderBuyer,
    pub shipping_address: OrderShippingAddress,
    pub billing_address: OrderBillingAddress,
    pub basket_items: Vec<OrderBasketItem>,
    pub submerchants: Vec<OrderSubmerchant>,
    pub checkout_design: OrderCheckoutDesign,
    /// Whether alternative payment methods are offered
    pub payment_methods: bool,
    /// Payment options shown at checkout (e.g., "credit_card", "cash")
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_options: Vec<String>,
    /// Installment counts the buyer may choose from
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enabled_installments: Vec<u32>,
    pub payment_failure_url: String,
    pub payment_success_url: String,
    pub pf_sub_merchant: OrderPfSubMerchant,
    pub three_d_force: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<OrderMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_terms: Vec<OrderPaymentTerm>,
}

impl Order {
    /// Create an order with the essential fields set
    pub fn new(amount: f64, currency: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Set the buyer
    pub fn with_buyer(mut self, buyer: OrderBuyer) -> Self {
        self.buyer = buyer;
        self
    }

    /// Add a basket item
    pub fn with_basket_item(mut self, item: OrderBasketItem) -> Self {
        self.basket_items.push(item);
        self
    }

    /// Parse and store a comma-separated installment list such as `"2,3,6"`.
    ///
    /// An empty string enables a single payment.
    pub fn set_enabled_installments(&mut self, installments: &str) -> Result<(), ValidationError> {
        self.enabled_installments = validate_installments(installments)?;
        Ok(())
    }

    /// Builder form of [`Order::set_enabled_installments`]
    pub fn with_enabled_installments(
        mut self,
        installments: &str,
    ) -> Result<Self, ValidationError> {
        self.set_enabled_installments(installments)?;
        Ok(self)
    }
}

/// Payment facilitator sub-merchant details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPfSubMerchant {
    pub address: String,
    pub city: String,
    pub country: String,
    pub country_iso_code: String,
    pub id: String,
    pub mcc: String,
    pub name: String,
    pub org_id: String,
    pub postal_code: String,
    pub terminal_no: String,
}

/// Buyer information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBuyer {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// Mobile number; cleaned by the client before the order is sent
    pub gsm_number: String,
    pub identity_number: String,
    pub registration_date: String,
    pub registration_address: String,
    pub last_login_date: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
    pub ip: String,
    /// Birth date; the API spells the key `birdth_date`
    #[serde(rename = "birdth_date")]
    pub birth_date: String,
}

impl OrderBuyer {
    /// Create a buyer with name and email
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set the GSM number
    pub fn with_gsm_number(mut self, gsm_number: impl Into<String>) -> Self {
        self.gsm_number = gsm_number.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShippingAddress {
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub tracking_code: String,
    pub shipping_date: String,
}

/// Billing address; `billing_type` is "PERSONAL" or "BUSINESS"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBillingAddress {
    pub billing_type: String,
    /// ISO 3166-1 alpha-2 country code
    pub citizenship: String,
    /// Legal title
    pub title: String,
    pub tax_office: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub district: String,
    pub country: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub vat_number: String,
}

/// Party paying for a single basket item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBasketItemPayer {
    pub address: String,
    pub reference_id: String,
    pub tax_office: String,
    pub title: String,
    /// "PERSONAL" or "BUSINESS"
    #[serde(rename = "type")]
    pub payer_type: String,
    pub vat: String,
}

/// Line item of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBasketItem {
    pub id: String,
    pub price: f64,
    pub name: String,
    pub category1: String,
    pub category2: String,
    /// "PHYSICAL" or "VIRTUAL"
    pub item_type: String,
    pub status: u64,
    pub refunded_amount: f64,
    pub refundable_amount: f64,
    pub paid_amount: f64,
    pub paidable_amount: f64,
    pub coupon: String,
    pub coupon_discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<OrderBasketItemPayer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub item_payments: Vec<OrderItemPayment>,
}

impl OrderBasketItem {
    /// Create a basket item
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        item_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            item_type: item_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSubmerchant {
    pub amount: f64,
    pub order_basket_item_id: String,
    pub merchant_reference_id: String,
}

/// Checkout page styling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCheckoutDesign {
    pub logo: String,
    pub input_background_color: String,
    pub pay_button_color: String,
    pub input_text_color: String,
    pub label_text_color: String,
    pub left_background_color: String,
    pub right_background_color: String,
    pub text_color: String,
    pub order_detail_html: String,
    pub redirect_url: String,
}

/// Checkout styling as returned in order details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCheckoutDesignDTO {
    pub logo: String,
    pub input_background_color: String,
    pub input_text_color: String,
    pub label_text_color: String,
    pub left_background_color: String,
    pub right_background_color: String,
    pub text_color: String,
    pub placeholder_color: String,
    pub order_detail_html: String,
}

/// Free-form key/value attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderMetadata {
    pub key: String,
    pub value: String,
}

/// Payment term submitted with a new order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPaymentTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_sequence: Option<u32>,
    pub status: String,
    pub term_reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Payment recorded against a basket item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemPayment {
    pub id: String,
    pub amount: f64,
    pub paid_date: String,
    pub masked_bin: String,
    pub card_brand: String,
    pub refunded_amount: f64,
    pub refundable_amount: f64,
    pub refunded: bool,
    pub status: u64,
}

/// Payment recorded against a payment term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTermPayment {
    pub id: String,
    pub term_id: String,
    pub amount: f64,
    pub paid_date: String,
    pub masked_bin: String,
    pub card_brand: String,
    pub refunded_amount: f64,
    pub refundable_amount: f64,
    pub refunded: bool,
    pub status: u64,
    /// Payment channel (credit card, bank transfer, ...)
    #[serde(rename = "type")]
    pub payment_type: u64,
}

/// Payment term as returned in order details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPaymentTermDTO {
    pub id: String,
    pub hash_id: String,
    pub term_sequence: u64,
    pub required: bool,
    pub due_date: String,
    pub paid_date: String,
    pub amount: f64,
    pub term_reference_id: String,
    pub status: String,
    pub payments: Vec<OrderTermPayment>,
    pub data: String,
}

/// Full order as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetail {
    pub locale: String,
    pub error: String,
    pub code: i64,
    pub reference_id: String,
    pub amount: String,
    pub total: String,
    pub paid_amount: String,
    pub refunded_amount: String,
    pub created_at: String,
    pub currency: String,
    /// Numeric status, see [`order_status_name`]
    pub status: i32,
    pub status_enum: String,
    pub buyer: OrderBuyer,
    pub shipping_address: OrderShippingAddress,
    pub checkout_design: OrderCheckoutDesignDTO,
    pub billing_address: OrderBillingAddress,
    pub basket_items: Vec<OrderBasketItem>,
    pub submerchants: Vec<OrderSubmerchant>,
    pub payment_terms: Vec<OrderPaymentTermDTO>,
    pub item_payments: Vec<OrderItemPayment>,
    pub payment_failure_url: String,
    pub payment_success_url: String,
    pub checkout_url: String,
    pub conversation_id: String,
    pub payment_options: Vec<String>,
}

impl OrderDetail {
    /// Human-readable name of the numeric status
    pub fn status_name(&self) -> Option<&'static str> {
        u32::try_from(self.status).ok().and_then(order_status_name)
    }
}

/// Result of order creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderResponse {
    pub order_id: String,
    pub reference_id: String,
    /// Filled by the client from the created order's details
    pub checkout_url: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatus {
    pub status: String,
    pub error: String,
}

/// Refund request; an empty amount refunds the whole order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundOrder {
    pub reference_id: String,
    pub amount: String,
}

impl RefundOrder {
    /// Refund part of an order
    pub fn new(reference_id: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelOrder {
    pub reference_id: String,
}

impl CancelOrder {
    pub fn new(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
        }
    }
}

/// Outcome of a cancel or refund call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundCancelOrderResponse {
    pub status: String,
    pub message: String,
    pub is_success: bool,
    pub error: String,
}

/// One page of a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatedData {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    /// Raw rows; use [`PaginatedData::rows_as`] for typed access
    pub rows: Value,
    pub error: String,
}

impl PaginatedData {
    /// Decode the rows into a typed vector. Missing rows decode as empty.
    pub fn rows_as<T: DeserializeOwned>(&self) -> crate::Result<Vec<T>> {
        if self.rows.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(self.rows.clone())?)
    }
}

/// Filters for [`TapsilatClient::get_order_list`](crate::TapsilatClient::get_order_list)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_reference_id: Option<String>,
}

impl OrderListQuery {
    /// Create a query for one page
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            start_date: None,
            end_date: None,
            organization_id: None,
            related_reference_id: None,
        }
    }

    /// Only orders created on or after this date
    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Only orders created on or before this date
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Only orders of this organization
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Only orders linked to this related reference
    pub fn with_related_reference_id(mut self, related_reference_id: impl Into<String>) -> Self {
        self.related_reference_id = Some(related_reference_id.into());
        self
    }
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// New payment term for an existing order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPaymentTermCreateDTO {
    pub order_id: String,
    pub term_reference_id: String,
    pub amount: f64,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_sequence: Option<u32>,
    pub required: bool,
    pub status: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
}

/// Partial update of a payment term; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPaymentTermUpdateDTO {
    pub term_reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_sequence: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub data: String,
}

/// Refund against one payment term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTermRefundRequest {
    pub term_reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_payment_id: Option<String>,
}

/// Merchant-wide checkout settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSettings {
    pub ttl: i64,
    pub retry_count: i64,
    pub allow_payment: bool,
    pub session_ttl: i64,
    pub custom_checkout: bool,
    pub domain_address: String,
    pub checkout_domain: String,
    pub subscription_domain: String,
}

/// Lookup of a subscription by either identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionGetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<String>,
}

/// Cancellation of a subscription by either identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionBilling {
    pub address: String,
    pub city: String,
    pub contact_name: String,
    pub country: String,
    pub vat_number: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub identity_number: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

/// New recurring payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCreateRequest {
    pub amount: f64,
    pub currency: String,
    pub title: String,
    /// Days between charges
    pub period: u32,
    /// Number of charges; 0 means open-ended
    pub cycle: u32,
    /// Day of the month the charge is taken
    pub payment_date: u32,
    pub external_reference_id: String,
    pub success_url: String,
    pub failure_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    pub billing: SubscriptionBilling,
    pub user: SubscriptionUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionCreateResponse {
    pub code: i64,
    pub message: String,
    pub reference_id: String,
    pub order_reference_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionPayment {
    pub id: String,
    pub paid_date: String,
    pub period: u32,
    pub amount: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionDetail {
    pub external_reference_id: String,
    pub title: String,
    pub amount: String,
    pub currency: String,
    pub period: u32,
    pub cycle: u32,
    pub payment_date: u32,
    pub is_active: bool,
    pub payment_status: String,
    pub due_date: String,
    pub payments: Vec<SubscriptionPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRedirectRequest {
    pub subscription_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionRedirectResponse {
    pub url: String,
}

/// Entry of the order status table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStatusEntry {
    pub id: u32,
    pub status: &'static str,
}

/// Numeric order statuses reported in [`OrderDetail::status`]
pub const ORDER_STATUSES: [OrderStatusEntry; 20] = [
    OrderStatusEntry { id: 1, status: "Received" },
    OrderStatusEntry { id: 2, status: "Unpaid" },
    OrderStatusEntry { id: 3, status: "Paid" },
    OrderStatusEntry { id: 4, status: "Processing" },
    OrderStatusEntry { id: 5, status: "Shipped" },
    OrderStatusEntry { id: 6, status: "On hold" },
    OrderStatusEntry { id: 7, status: "Waiting for payment" },
    OrderStatusEntry { id: 8, status: "Cancelled" },
    OrderStatusEntry { id: 9, status: "Completed" },
    OrderStatusEntry { id: 10, status: "Refunded" },
    OrderStatusEntry { id: 11, status: "Fraud" },
    OrderStatusEntry { id: 12, status: "Rejected" },
    OrderStatusEntry { id: 13, status: "Failure" },
    OrderStatusEntry { id: 14, status: "Retrying" },
    OrderStatusEntry { id: 15, status: "Partially refunded" },
    OrderStatusEntry { id: 16, status: "Sub merchant payment approved" },
    OrderStatusEntry { id: 17, status: "Sub merchant payment disapproved" },
    OrderStatusEntry { id: 18, status: "Sub merchant payment errored" },
    OrderStatusEntry { id: 19, status: "Still has unpaid installments" },
    OrderStatusEntry { id: 20, status: "Still has unpaid terms" },
];

/// Name of a numeric order status
pub fn order_status_name(id: u32) -> Option<&'static str> {
    ORDER_STATUSES
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.status)
}

/// Numeric id of a status name, compared case-insensitively
pub fn order_status_id(name: &str) -> Option<u32> {
    ORDER_STATUSES
        .iter()
        .find(|entry| entry.status.eq_ignore_ascii_case(name))
        .map(|entry| entry.id)
}
