//! Product catalogue tools: products, prices, inventory and collections.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "products";

fn product_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("description", Kind::String, "Product description")
        .body("image", Kind::String, "Image URL")
        .body("statementDescriptor", Kind::String, "Statement descriptor")
        .body("availableInStore", Kind::Boolean, "Show in the online store")
        .body("medias", Kind::Array, "Product media")
        .body("variants", Kind::Array, "Product variants")
        .body("collectionIds", Kind::Array, "Collection IDs")
        .body("isTaxesEnabled", Kind::Boolean, "Apply taxes")
        .body("slug", Kind::String, "URL slug")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        product_fields(Endpoint::post(
            "ghl_create_product",
            "Create a product",
            "/products/",
        ))
        .body_required("name", Kind::String, "Product name")
        .body_required("productType", Kind::String, "DIGITAL, PHYSICAL, SERVICE or PHYSICAL/DIGITAL")
        .location_body(),
        Endpoint::get("ghl_list_products", "List products", "/products/")
            .location_query()
            .query("limit", Kind::Integer, "Maximum results")
            .query("offset", Kind::Integer, "Results to skip")
            .query("search", Kind::String, "Search text")
            .query("collectionIds", Kind::String, "Comma-separated collection IDs")
            .query("availableInStore", Kind::Boolean, "Only store products"),
        Endpoint::get("ghl_get_product", "Get a product by ID", "/products/{productId}")
            .path_param("productId", "Product ID")
            .location_query(),
        product_fields(Endpoint::put(
            "ghl_update_product",
            "Update a product",
            "/products/{productId}",
        ))
        .path_param("productId", "Product ID")
        .body("name", Kind::String, "Product name")
        .body("productType", Kind::String, "DIGITAL, PHYSICAL, SERVICE or PHYSICAL/DIGITAL")
        .location_body(),
        Endpoint::delete(
            "ghl_delete_product",
            "Delete a product",
            "/products/{productId}",
        )
        .path_param("productId", "Product ID")
        .location_query(),
        Endpoint::post(
            "ghl_create_price",
            "Create a price for a product",
            "/products/{productId}/price",
        )
        .path_param("productId", "Product ID")
        .body_required("name", Kind::String, "Price name")
        .body_required("type", Kind::String, "one_time or recurring")
        .body_required("currency", Kind::String, "Currency code")
        .body_required("amount", Kind::Number, "Amount")
        .body("recurring", Kind::Object, "Interval and interval count")
        .body("description", Kind::String, "Price description")
        .body("compareAtPrice", Kind::Number, "Compare-at price")
        .body("trialPeriod", Kind::Integer, "Trial period in days")
        .body("totalCycles", Kind::Integer, "Billing cycles")
        .body("setupFee", Kind::Number, "Setup fee")
        .body("sku", Kind::String, "SKU")
        .body("trackInventory", Kind::Boolean, "Track inventory")
        .body("availableQuantity", Kind::Integer, "Stock level")
        .body("allowOutOfStockPurchases", Kind::Boolean, "Allow backorders")
        .location_body(),
        Endpoint::get(
            "ghl_list_prices",
            "List the prices of a product",
            "/products/{productId}/price",
        )
        .path_param("productId", "Product ID")
        .location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
        .query("ids", Kind::String, "Comma-separated price IDs"),
        Endpoint::get("ghl_list_inventory", "List inventory levels", "/products/inventory")
            .alt_location_query()
            .query("limit", Kind::Integer, "Maximum results")
            .query("offset", Kind::Integer, "Results to skip")
            .query("search", Kind::String, "Search text"),
        Endpoint::post(
            "ghl_create_product_collection",
            "Create a product collection",
            "/products/collections",
        )
        .body_required("name", Kind::String, "Collection name")
        .body_required("slug", Kind::String, "URL slug")
        .body("image", Kind::String, "Image URL")
        .body("seo", Kind::Object, "SEO title and description")
        .alt_location_body(),
        Endpoint::get(
            "ghl_list_product_collections",
            "List product collections",
            "/products/collections",
        )
        .alt_location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("offset", Kind::Integer, "Results to skip")
        .query("name", Kind::String, "Filter by name"),
    ]
}
