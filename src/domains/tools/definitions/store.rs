//! Store tools: shipping zones, rates, carriers and store settings.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "store";

fn zone_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Zone name")
        .body("countries", Kind::Array, "Countries: [{code, states}]")
}

fn rate_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Rate name")
        .body("description", Kind::String, "Rate description")
        .body("currency", Kind::String, "Currency code")
        .body("amount", Kind::Number, "Price")
        .body("conditionType", Kind::String, "none, price, weight")
        .body("minCondition", Kind::Number, "Lower condition bound")
        .body("maxCondition", Kind::Number, "Upper condition bound")
        .body("isCarrierRate", Kind::Boolean, "Rate comes from a carrier")
        .body("shippingCarrierId", Kind::String, "Carrier ID")
        .body("percentageOfRateFee", Kind::Number, "Carrier fee percentage")
        .body("shippingCarrierServices", Kind::Array, "Carrier services")
}

fn carrier_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Carrier name")
        .body("callbackUrl", Kind::String, "Rate callback URL")
        .body("services", Kind::Array, "Carrier services")
        .body("allowsMultipleServiceSelection", Kind::Boolean, "Allow several services")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        // Shipping zones
        zone_fields(Endpoint::post(
            "ghl_create_shipping_zone",
            "Create a shipping zone",
            "/store/shipping-zone",
        ))
        .alt_location_body(),
        Endpoint::get(
            "ghl_list_shipping_zones",
            "List shipping zones",
            "/store/shipping-zone",
        )
        .alt_location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
        .query("withShippingRate", Kind::Boolean, "Include shipping rates"),
        Endpoint::get(
            "ghl_get_shipping_zone",
            "Get a shipping zone by ID",
            "/store/shipping-zone/{shippingZoneId}",
        )
        .path_param("shippingZoneId", "Shipping zone ID")
        .alt_location_query()
        .query("withShippingRate", Kind::Boolean, "Include shipping rates"),
        zone_fields(Endpoint::put(
            "ghl_update_shipping_zone",
            "Update a shipping zone",
            "/store/shipping-zone/{shippingZoneId}",
        ))
        .path_param("shippingZoneId", "Shipping zone ID")
        .alt_location_body(),
        Endpoint::delete(
            "ghl_delete_shipping_zone",
            "Delete a shipping zone",
            "/store/shipping-zone/{shippingZoneId}",
        )
        .path_param("shippingZoneId", "Shipping zone ID")
        .alt_location_query(),
        // Shipping rates
        Endpoint::post(
            "ghl_get_available_shipping_rates",
            "Compute the shipping rates available for an order",
            "/store/shipping-zone/shipping-rates",
        )
        .body_required("country", Kind::String, "Destination country code")
        .body("address", Kind::Object, "Destination address")
        .body("totalOrderAmount", Kind::Number, "Order total")
        .body("totalOrderWeight", Kind::Number, "Order weight")
        .body("source", Kind::Object, "Order source")
        .body("products", Kind::Array, "Order line items")
        .body("couponCode", Kind::String, "Applied coupon")
        .alt_location_body(),
        rate_fields(Endpoint::post(
            "ghl_create_shipping_rate",
            "Create a shipping rate in a zone",
            "/store/shipping-zone/{shippingZoneId}/shipping-rate",
        ))
        .path_param("shippingZoneId", "Shipping zone ID")
        .alt_location_body(),
        Endpoint::get(
            "ghl_list_shipping_rates",
            "List the shipping rates of a zone",
            "/store/shipping-zone/{shippingZoneId}/shipping-rate",
        )
        .path_param("shippingZoneId", "Shipping zone ID")
        .alt_location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip"),
        Endpoint::get(
            "ghl_get_shipping_rate",
            "Get a shipping rate by ID",
            "/store/shipping-zone/{shippingZoneId}/shipping-rate/{shippingRateId}",
        )
        .path_param("shippingZoneId", "Shipping zone ID")
        .path_param("shippingRateId", "Shipping rate ID")
        .alt_location_query(),
        rate_fields(Endpoint::put(
            "ghl_update_shipping_rate",
            "Update a shipping rate",
            "/store/shipping-zone/{shippingZoneId}/shipping-rate/{shippingRateId}",
        ))
        .path_param("shippingZoneId", "Shipping zone ID")
        .path_param("shippingRateId", "Shipping rate ID")
        .alt_location_body(),
        Endpoint::delete(
            "ghl_delete_shipping_rate",
            "Delete a shipping rate",
            "/store/shipping-zone/{shippingZoneId}/shipping-rate/{shippingRateId}",
        )
        .path_param("shippingZoneId", "Shipping zone ID")
        .path_param("shippingRateId", "Shipping rate ID")
        .alt_location_query(),
        // Shipping carriers
        carrier_fields(Endpoint::post(
            "ghl_create_shipping_carrier",
            "Register a shipping carrier",
            "/store/shipping-carrier",
        ))
        .alt_location_body(),
        Endpoint::get(
            "ghl_list_shipping_carriers",
            "List shipping carriers",
            "/store/shipping-carrier",
        )
        .alt_location_query(),
        Endpoint::get(
            "ghl_get_shipping_carrier",
            "Get a shipping carrier by ID",
            "/store/shipping-carrier/{shippingCarrierId}",
        )
        .path_param("shippingCarrierId", "Shipping carrier ID")
        .alt_location_query(),
        carrier_fields(Endpoint::put(
            "ghl_update_shipping_carrier",
            "Update a shipping carrier",
            "/store/shipping-carrier/{shippingCarrierId}",
        ))
        .path_param("shippingCarrierId", "Shipping carrier ID")
        .alt_location_body(),
        Endpoint::delete(
            "ghl_delete_shipping_carrier",
            "Delete a shipping carrier",
            "/store/shipping-carrier/{shippingCarrierId}",
        )
        .path_param("shippingCarrierId", "Shipping carrier ID")
        .alt_location_query(),
        // Store settings
        Endpoint::post(
            "ghl_create_store_setting",
            "Create or update the store settings",
            "/store/store-setting",
        )
        .body("shippingOrigin", Kind::Object, "Ship-from address")
        .body("storeOrderNotification", Kind::Object, "Order notification settings")
        .body("storeOrderFulfillmentNotification", Kind::Object, "Fulfillment notification settings")
        .alt_location_body(),
        Endpoint::get(
            "ghl_get_store_setting",
            "Get the store settings",
            "/store/store-setting",
        )
        .alt_location_query(),
    ]
}
