//! Invoice tools: templates, schedules, invoices and estimates.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "invoices";

/// Fields shared by invoices, invoice templates, schedules and estimates.
fn document_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("name", Kind::String, "Document name")
        .body("businessDetails", Kind::Object, "Issuer details")
        .body("currency", Kind::String, "Currency code")
        .body("items", Kind::Array, "Line items")
        .body("discount", Kind::Object, "Discount: {type, value}")
        .body("termsNotes", Kind::String, "Terms and notes")
        .body("title", Kind::String, "Document title")
        .body("contactDetails", Kind::Object, "Recipient details")
}

fn list_query(endpoint: Endpoint) -> Endpoint {
    endpoint
        .alt_location_query()
        .query("limit", Kind::String, "Maximum results")
        .query("offset", Kind::String, "Results to skip")
        .query("status", Kind::String, "Status filter")
        .query("search", Kind::String, "Search text")
        .query("startAt", Kind::String, "Range start (YYYY-MM-DD)")
        .query("endAt", Kind::String, "Range end (YYYY-MM-DD)")
}

fn send_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body_required("userId", Kind::String, "Sending user ID")
        .body("action", Kind::String, "sms_and_email, send_manually, email or sms")
        .body("liveMode", Kind::Boolean, "Send in live mode")
        .body("sentFrom", Kind::Object, "Sender details")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        // Invoice templates
        document_fields(Endpoint::post(
            "create_invoice_template",
            "Create an invoice template",
            "/invoices/template",
        ))
        .body("internal", Kind::Boolean, "Internal template")
        .alt_location_body(),
        list_query(Endpoint::get(
            "list_invoice_templates",
            "List invoice templates",
            "/invoices/template",
        )),
        Endpoint::get(
            "get_invoice_template",
            "Get an invoice template by ID",
            "/invoices/template/{templateId}",
        )
        .path_param("templateId", "Template ID")
        .alt_location_query(),
        document_fields(Endpoint::put(
            "update_invoice_template",
            "Update an invoice template",
            "/invoices/template/{templateId}",
        ))
        .path_param("templateId", "Template ID")
        .alt_location_body(),
        Endpoint::delete(
            "delete_invoice_template",
            "Delete an invoice template",
            "/invoices/template/{templateId}",
        )
        .path_param("templateId", "Template ID")
        .alt_location_query(),
        Endpoint::patch(
            "update_invoice_template_late_fees",
            "Configure late fees on an invoice template",
            "/invoices/template/{templateId}/late-fees-configuration",
        )
        .path_param("templateId", "Template ID")
        .body_required("lateFeesConfiguration", Kind::Object, "Late fee rules")
        .alt_location_body(),
        Endpoint::patch(
            "update_invoice_template_payment_methods",
            "Configure payment methods on an invoice template",
            "/invoices/template/{templateId}/payment-methods-configuration",
        )
        .path_param("templateId", "Template ID")
        .body_required("paymentMethods", Kind::Object, "Payment method settings")
        .alt_location_body(),
        // Invoice schedules
        document_fields(Endpoint::post(
            "create_invoice_schedule",
            "Create a recurring invoice schedule",
            "/invoices/schedule",
        ))
        .body_required("schedule", Kind::Object, "Recurrence rule")
        .body("liveMode", Kind::Boolean, "Live mode")
        .alt_location_body(),
        list_query(Endpoint::get(
            "list_invoice_schedules",
            "List invoice schedules",
            "/invoices/schedule",
        )),
        Endpoint::get(
            "get_invoice_schedule",
            "Get an invoice schedule by ID",
            "/invoices/schedule/{scheduleId}",
        )
        .path_param("scheduleId", "Schedule ID")
        .alt_location_query(),
        document_fields(Endpoint::put(
            "update_invoice_schedule",
            "Update an invoice schedule",
            "/invoices/schedule/{scheduleId}",
        ))
        .path_param("scheduleId", "Schedule ID")
        .body("schedule", Kind::Object, "Recurrence rule")
        .alt_location_body(),
        Endpoint::delete(
            "delete_invoice_schedule",
            "Delete an invoice schedule",
            "/invoices/schedule/{scheduleId}",
        )
        .path_param("scheduleId", "Schedule ID")
        .alt_location_query(),
        Endpoint::post(
            "schedule_invoice_schedule",
            "Start sending invoices from a schedule",
            "/invoices/schedule/{scheduleId}/schedule",
        )
        .path_param("scheduleId", "Schedule ID")
        .body("liveMode", Kind::Boolean, "Live mode")
        .body("autoPayment", Kind::Object, "Auto-payment settings")
        .alt_location_body(),
        Endpoint::post(
            "auto_payment_invoice_schedule",
            "Configure automatic payment for a schedule",
            "/invoices/schedule/{scheduleId}/auto-payment",
        )
        .path_param("scheduleId", "Schedule ID")
        .body_required("id", Kind::String, "Schedule ID")
        .body_required("autoPayment", Kind::Object, "Auto-payment settings")
        .alt_location_body(),
        Endpoint::post(
            "cancel_invoice_schedule",
            "Cancel an active invoice schedule",
            "/invoices/schedule/{scheduleId}/cancel",
        )
        .path_param("scheduleId", "Schedule ID")
        .alt_location_body(),
        // Invoices
        document_fields(Endpoint::post(
            "create_invoice",
            "Create an invoice",
            "/invoices/",
        ))
        .body("invoiceNumber", Kind::String, "Invoice number")
        .body("issueDate", Kind::String, "Issue date (YYYY-MM-DD)")
        .body("dueDate", Kind::String, "Due date (YYYY-MM-DD)")
        .body("sentTo", Kind::Object, "Recipient emails and phone numbers")
        .body("liveMode", Kind::Boolean, "Live mode")
        .alt_location_body(),
        list_query(Endpoint::get("list_invoices", "List invoices", "/invoices/"))
            .query("contactId", Kind::String, "Filter by contact"),
        Endpoint::get("get_invoice", "Get an invoice by ID", "/invoices/{invoiceId}")
            .path_param("invoiceId", "Invoice ID")
            .alt_location_query(),
        document_fields(Endpoint::put(
            "update_invoice",
            "Update an invoice",
            "/invoices/{invoiceId}",
        ))
        .path_param("invoiceId", "Invoice ID")
        .body("issueDate", Kind::String, "Issue date (YYYY-MM-DD)")
        .body("dueDate", Kind::String, "Due date (YYYY-MM-DD)")
        .alt_location_body(),
        Endpoint::delete(
            "delete_invoice",
            "Delete an invoice",
            "/invoices/{invoiceId}",
        )
        .path_param("invoiceId", "Invoice ID")
        .alt_location_query(),
        Endpoint::post(
            "void_invoice",
            "Void an invoice",
            "/invoices/{invoiceId}/void",
        )
        .path_param("invoiceId", "Invoice ID")
        .alt_location_body(),
        send_fields(Endpoint::post(
            "send_invoice",
            "Send an invoice to its recipient",
            "/invoices/{invoiceId}/send",
        ))
        .path_param("invoiceId", "Invoice ID")
        .alt_location_body(),
        Endpoint::post(
            "record_invoice_payment",
            "Record a manual payment against an invoice",
            "/invoices/{invoiceId}/record-payment",
        )
        .path_param("invoiceId", "Invoice ID")
        .body_required("mode", Kind::String, "cash, card, cheque, bank_transfer or other")
        .body("card", Kind::Object, "Card details")
        .body("cheque", Kind::Object, "Cheque details")
        .body("notes", Kind::String, "Payment notes")
        .body("amount", Kind::Number, "Amount paid")
        .alt_location_body(),
        Endpoint::get(
            "generate_invoice_number",
            "Generate the next invoice number",
            "/invoices/generate-invoice-number",
        )
        .alt_location_query(),
        document_fields(Endpoint::post(
            "text2pay_invoice",
            "Create an invoice and send a payment link by text",
            "/invoices/text2pay",
        ))
        .body_required("action", Kind::String, "draft or send")
        .body_required("userId", Kind::String, "Sending user ID")
        .body("id", Kind::String, "Existing invoice to send")
        .body("issueDate", Kind::String, "Issue date (YYYY-MM-DD)")
        .body("sentTo", Kind::Object, "Recipient emails and phone numbers")
        .body("liveMode", Kind::Boolean, "Live mode")
        .alt_location_body(),
        Endpoint::patch(
            "update_invoice_last_visited",
            "Record that invoices were last viewed now",
            "/invoices/stats/last-visited-at",
        )
        .body_required("invoiceId", Kind::String, "Invoice ID"),
        // Estimates
        document_fields(Endpoint::post(
            "create_estimate",
            "Create an estimate",
            "/invoices/estimate",
        ))
        .body("estimateNumber", Kind::Integer, "Estimate number")
        .body("issueDate", Kind::String, "Issue date (YYYY-MM-DD)")
        .body("expiryDate", Kind::String, "Expiry date (YYYY-MM-DD)")
        .body("frequencySettings", Kind::Object, "Recurrence settings")
        .body("liveMode", Kind::Boolean, "Live mode")
        .alt_location_body(),
        list_query(Endpoint::get(
            "list_estimates",
            "List estimates",
            "/invoices/estimate/list",
        ))
        .query("contactId", Kind::String, "Filter by contact"),
        document_fields(Endpoint::put(
            "update_estimate",
            "Update an estimate",
            "/invoices/estimate/{estimateId}",
        ))
        .path_param("estimateId", "Estimate ID")
        .body("issueDate", Kind::String, "Issue date (YYYY-MM-DD)")
        .body("expiryDate", Kind::String, "Expiry date (YYYY-MM-DD)")
        .body("estimateStatus", Kind::String, "Estimate status")
        .alt_location_body(),
        Endpoint::delete(
            "delete_estimate",
            "Delete an estimate",
            "/invoices/estimate/{estimateId}",
        )
        .path_param("estimateId", "Estimate ID")
        .alt_location_body(),
        send_fields(Endpoint::post(
            "send_estimate",
            "Send an estimate to its recipient",
            "/invoices/estimate/{estimateId}/send",
        ))
        .path_param("estimateId", "Estimate ID")
        .body("estimateName", Kind::String, "Estimate name")
        .alt_location_body(),
        Endpoint::post(
            "create_invoice_from_estimate",
            "Turn an accepted estimate into an invoice",
            "/invoices/estimate/{estimateId}/invoice",
        )
        .path_param("estimateId", "Estimate ID")
        .body("markAsInvoiced", Kind::Boolean, "Mark the estimate as invoiced")
        .body("version", Kind::String, "v1 or v2")
        .alt_location_body(),
        Endpoint::get(
            "generate_estimate_number",
            "Generate the next estimate number",
            "/invoices/estimate/number/generate",
        )
        .alt_location_query(),
        Endpoint::patch(
            "update_estimate_last_visited",
            "Record that estimates were last viewed now",
            "/invoices/estimate/stats/last-visited-at",
        )
        .body_required("estimateId", Kind::String, "Estimate ID"),
        // Estimate templates
        list_query(Endpoint::get(
            "list_estimate_templates",
            "List estimate templates",
            "/invoices/estimate/template",
        )),
        document_fields(Endpoint::post(
            "create_estimate_template",
            "Create an estimate template",
            "/invoices/estimate/template",
        ))
        .alt_location_body(),
        document_fields(Endpoint::put(
            "update_estimate_template",
            "Update an estimate template",
            "/invoices/estimate/template/{templateId}",
        ))
        .path_param("templateId", "Template ID")
        .alt_location_body(),
        Endpoint::delete(
            "delete_estimate_template",
            "Delete an estimate template",
            "/invoices/estimate/template/{templateId}",
        )
        .path_param("templateId", "Template ID")
        .alt_location_body(),
        Endpoint::get(
            "preview_estimate_template",
            "Preview an estimate template",
            "/invoices/estimate/template/preview",
        )
        .query_required("templateId", Kind::String, "Template ID")
        .alt_location_query(),
    ]
}
