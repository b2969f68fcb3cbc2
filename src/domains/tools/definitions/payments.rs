//! Payment tools: integration providers, orders, fulfillments,
//! transactions, subscriptions, coupons and custom providers.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "payments";

fn page_query(endpoint: Endpoint) -> Endpoint {
    endpoint
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
}

fn coupon_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Coupon name")
        .body("code", Kind::String, "Coupon code")
        .body("discountType", Kind::String, "percentage or amount")
        .body("discountValue", Kind::Number, "Discount value")
        .body("startDate", Kind::String, "Valid from (ISO 8601)")
        .body("endDate", Kind::String, "Valid until (ISO 8601)")
        .body("usageLimit", Kind::Integer, "Maximum redemptions")
        .body("productIds", Kind::Array, "Products the coupon applies to")
        .body("applyToFuturePayments", Kind::Boolean, "Apply to recurring payments")
        .body("limitPerCustomer", Kind::Boolean, "One use per customer")
}

fn custom_provider_config(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("live", Kind::Object, "Live keys: {apiKey, publishableKey}")
        .body("test", Kind::Object, "Test keys: {apiKey, publishableKey}")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        // Integration providers
        Endpoint::post(
            "create_whitelabel_integration_provider",
            "Create a white-label payment integration provider",
            "/payments/integrations/provider/whitelabel",
        )
        .body_required("uniqueName", Kind::String, "Unique provider name")
        .body_required("title", Kind::String, "Display title")
        .body_required("provider", Kind::String, "Underlying provider, e.g. authorize-net or nmi")
        .body_required("description", Kind::String, "Description")
        .body_required("imageUrl", Kind::String, "Logo URL")
        .alt_location_body(),
        page_query(Endpoint::get(
            "list_whitelabel_integration_providers",
            "List white-label payment integration providers",
            "/payments/integrations/provider/whitelabel",
        ))
        .alt_location_query(),
        // Orders
        page_query(Endpoint::get("list_orders", "List orders", "/payments/orders"))
            .alt_location_query()
            .query("status", Kind::String, "Order status filter")
            .query("paymentMode", Kind::String, "live or test")
            .query("startAt", Kind::String, "Range start (YYYY-MM-DD)")
            .query("endAt", Kind::String, "Range end (YYYY-MM-DD)")
            .query("search", Kind::String, "Search text")
            .query("contactId", Kind::String, "Filter by contact")
            .query("funnelProductIds", Kind::String, "Comma-separated funnel product IDs"),
        Endpoint::get(
            "get_order_by_id",
            "Get an order by ID",
            "/payments/orders/{orderId}",
        )
        .path_param("orderId", "Order ID")
        .alt_location_query(),
        // Fulfillments
        Endpoint::post(
            "create_order_fulfillment",
            "Record a fulfillment for an order",
            "/payments/orders/{orderId}/fulfillments",
        )
        .path_param("orderId", "Order ID")
        .body_required("trackings", Kind::Array, "Tracking entries")
        .body_required("items", Kind::Array, "Fulfilled items: [{priceId, qty}]")
        .body("notifyCustomer", Kind::Boolean, "Email the customer")
        .alt_location_body(),
        Endpoint::get(
            "list_order_fulfillments",
            "List the fulfillments of an order",
            "/payments/orders/{orderId}/fulfillments",
        )
        .path_param("orderId", "Order ID")
        .alt_location_query(),
        // Transactions
        page_query(Endpoint::get(
            "list_transactions",
            "List payment transactions",
            "/payments/transactions",
        ))
        .alt_location_query()
        .query("paymentMode", Kind::String, "live or test")
        .query("startAt", Kind::String, "Range start (YYYY-MM-DD)")
        .query("endAt", Kind::String, "Range end (YYYY-MM-DD)")
        .query("entitySourceType", Kind::String, "Source type filter")
        .query("entitySourceId", Kind::String, "Source ID filter")
        .query("subscriptionId", Kind::String, "Filter by subscription")
        .query("contactId", Kind::String, "Filter by contact")
        .query("search", Kind::String, "Search text"),
        Endpoint::get(
            "get_transaction_by_id",
            "Get a transaction by ID",
            "/payments/transactions/{transactionId}",
        )
        .path_param("transactionId", "Transaction ID")
        .alt_location_query(),
        // Subscriptions
        page_query(Endpoint::get(
            "list_subscriptions",
            "List subscriptions",
            "/payments/subscriptions",
        ))
        .alt_location_query()
        .query("entityId", Kind::String, "Filter by entity")
        .query("paymentMode", Kind::String, "live or test")
        .query("startAt", Kind::String, "Range start (YYYY-MM-DD)")
        .query("endAt", Kind::String, "Range end (YYYY-MM-DD)")
        .query("contactId", Kind::String, "Filter by contact")
        .query("search", Kind::String, "Search text"),
        Endpoint::get(
            "get_subscription_by_id",
            "Get a subscription by ID",
            "/payments/subscriptions/{subscriptionId}",
        )
        .path_param("subscriptionId", "Subscription ID")
        .alt_location_query(),
        // Coupons
        page_query(Endpoint::get("list_coupons", "List coupons", "/payments/coupon/list"))
            .alt_location_query()
            .query("status", Kind::String, "scheduled, active or expired")
            .query("search", Kind::String, "Search text"),
        coupon_fields(Endpoint::post("create_coupon", "Create a coupon", "/payments/coupon"))
            .alt_location_body(),
        coupon_fields(Endpoint::put("update_coupon", "Update a coupon", "/payments/coupon"))
            .body_required("id", Kind::String, "Coupon ID")
            .alt_location_body(),
        Endpoint::delete("delete_coupon", "Delete a coupon", "/payments/coupon")
            .body_required("id", Kind::String, "Coupon ID")
            .alt_location_body(),
        Endpoint::get("get_coupon", "Get a coupon by ID or code", "/payments/coupon")
            .query_required("id", Kind::String, "Coupon ID")
            .query("code", Kind::String, "Coupon code")
            .alt_location_query(),
        // Custom payment providers
        Endpoint::post(
            "create_custom_provider_integration",
            "Register a custom payment provider",
            "/payments/custom-provider/provider",
        )
        .location_query()
        .body_required("name", Kind::String, "Provider name")
        .body_required("description", Kind::String, "Description")
        .body_required("paymentsUrl", Kind::String, "Checkout iframe URL")
        .body_required("queryUrl", Kind::String, "Verification callback URL")
        .body_required("imageUrl", Kind::String, "Logo URL"),
        Endpoint::delete(
            "delete_custom_provider_integration",
            "Remove a custom payment provider",
            "/payments/custom-provider/provider",
        )
        .location_query(),
        Endpoint::get(
            "get_custom_provider_config",
            "Get the configuration of a custom payment provider",
            "/payments/custom-provider/connect",
        )
        .location_query(),
        custom_provider_config(Endpoint::post(
            "create_custom_provider_config",
            "Connect a custom payment provider configuration",
            "/payments/custom-provider/connect",
        ))
        .location_query(),
        Endpoint::post(
            "disconnect_custom_provider_config",
            "Disconnect a custom payment provider configuration",
            "/payments/custom-provider/disconnect",
        )
        .location_query()
        .body_required("liveMode", Kind::Boolean, "Disconnect the live (true) or test (false) config"),
    ]
}
