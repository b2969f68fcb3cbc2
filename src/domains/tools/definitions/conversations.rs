//! Conversation and messaging tools.

use serde_json::Value;

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "conversations";

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::post(
            "send_sms",
            "Send an SMS message to a contact",
            "/conversations/messages",
        )
        .body_required("contactId", Kind::String, "Contact ID")
        .body_required("message", Kind::String, "Message text")
        .body("fromNumber", Kind::String, "Sending phone number")
        .body("toNumber", Kind::String, "Recipient phone number")
        .fixed_body("type", Value::from("SMS")),
        Endpoint::post(
            "send_email",
            "Send an email to a contact",
            "/conversations/messages",
        )
        .body_required("contactId", Kind::String, "Contact ID")
        .body_required("subject", Kind::String, "Email subject")
        .body("message", Kind::String, "Plain-text body")
        .body("html", Kind::String, "HTML body")
        .body("emailFrom", Kind::String, "Sender address")
        .body("emailCc", Kind::Array, "CC addresses")
        .body("emailBcc", Kind::Array, "BCC addresses")
        .body("attachments", Kind::Array, "Attachment URLs")
        .fixed_body("type", Value::from("Email")),
        Endpoint::get(
            "search_conversations",
            "Search conversations in the location",
            "/conversations/search",
        )
        .location_query()
        .query("contactId", Kind::String, "Filter by contact")
        .query("query", Kind::String, "Search text")
        .query("status", Kind::String, "all, read, unread, starred or recents")
        .query("assignedTo", Kind::String, "Filter by assigned user")
        .query("limit", Kind::Integer, "Maximum results")
        .query("startAfterDate", Kind::Number, "Pagination cursor (epoch ms)"),
        Endpoint::get(
            "get_conversation",
            "Get a conversation by ID",
            "/conversations/{conversationId}",
        )
        .path_param("conversationId", "Conversation ID"),
        Endpoint::post(
            "create_conversation",
            "Create a conversation for a contact",
            "/conversations/",
        )
        .body_required("contactId", Kind::String, "Contact ID")
        .location_body(),
        Endpoint::put(
            "update_conversation",
            "Update a conversation",
            "/conversations/{conversationId}",
        )
        .path_param("conversationId", "Conversation ID")
        .body("unreadCount", Kind::Integer, "Unread message count")
        .body("starred", Kind::Boolean, "Starred flag")
        .body("feedback", Kind::Object, "Feedback payload")
        .location_body(),
        Endpoint::delete(
            "delete_conversation",
            "Delete a conversation",
            "/conversations/{conversationId}",
        )
        .path_param("conversationId", "Conversation ID"),
        Endpoint::get(
            "get_recent_messages",
            "List the messages of a conversation",
            "/conversations/{conversationId}/messages",
        )
        .path_param("conversationId", "Conversation ID")
        .query("limit", Kind::Integer, "Maximum results")
        .query("lastMessageId", Kind::String, "Pagination cursor")
        .query("type", Kind::String, "Message type filter"),
        Endpoint::get(
            "get_email_message",
            "Get an email message by ID",
            "/conversations/messages/email/{emailMessageId}",
        )
        .path_param("emailMessageId", "Email message ID"),
        Endpoint::get(
            "get_message",
            "Get a message by ID",
            "/conversations/messages/{messageId}",
        )
        .path_param("messageId", "Message ID"),
        Endpoint::post(
            "upload_message_attachments",
            "Upload attachments for a conversation message",
            "/conversations/messages/upload",
        )
        .body_required("conversationId", Kind::String, "Conversation ID")
        .body_required("attachmentUrls", Kind::Array, "Attachment URLs")
        .location_body(),
        Endpoint::put(
            "update_message_status",
            "Update the delivery status of a message",
            "/conversations/messages/{messageId}/status",
        )
        .path_param("messageId", "Message ID")
        .body_required("status", Kind::String, "delivered, failed, pending or read")
        .body("error", Kind::Object, "Error details")
        .body("emailMessageId", Kind::String, "Email message ID")
        .body("recipients", Kind::Array, "Recipients"),
        Endpoint::post(
            "add_inbound_message",
            "Record an inbound message in a conversation",
            "/conversations/messages/inbound",
        )
        .body_required("type", Kind::String, "Message type (SMS, Email, WhatsApp, ...)")
        .body_required("conversationId", Kind::String, "Conversation ID")
        .body_required("conversationProviderId", Kind::String, "Conversation provider ID")
        .body("message", Kind::String, "Message text")
        .body("attachments", Kind::Array, "Attachment URLs")
        .body("html", Kind::String, "HTML body")
        .body("subject", Kind::String, "Email subject")
        .body("emailFrom", Kind::String, "Sender address")
        .body("emailTo", Kind::String, "Recipient address")
        .body("date", Kind::String, "Message date (ISO 8601)"),
        Endpoint::post(
            "add_outbound_call",
            "Record an outbound call in a conversation",
            "/conversations/messages/outbound",
        )
        .body_required("conversationId", Kind::String, "Conversation ID")
        .body_required("conversationProviderId", Kind::String, "Conversation provider ID")
        .body_required("to", Kind::String, "Called number")
        .body_required("from", Kind::String, "Calling number")
        .body_required("status", Kind::String, "Call status")
        .body("attachments", Kind::Array, "Attachment URLs")
        .body("date", Kind::String, "Call date (ISO 8601)")
        .fixed_body("type", Value::from("Call")),
        Endpoint::get(
            "get_message_recording",
            "Get the recording of a call message",
            "/conversations/messages/{messageId}/locations/{locationId}/recording",
        )
        .path_param("messageId", "Message ID")
        .path_param("locationId", "Location ID"),
        Endpoint::get(
            "get_message_transcription",
            "Get the transcription of a call message",
            "/conversations/locations/{locationId}/messages/{messageId}/transcription",
        )
        .path_param("locationId", "Location ID")
        .path_param("messageId", "Message ID"),
        Endpoint::get(
            "download_transcription",
            "Download the transcription of a call message",
            "/conversations/locations/{locationId}/messages/{messageId}/transcription/download",
        )
        .path_param("locationId", "Location ID")
        .path_param("messageId", "Message ID"),
        Endpoint::delete(
            "cancel_scheduled_message",
            "Cancel a scheduled message",
            "/conversations/messages/{messageId}/schedule",
        )
        .path_param("messageId", "Message ID"),
        Endpoint::delete(
            "cancel_scheduled_email",
            "Cancel a scheduled email",
            "/conversations/messages/email/{emailMessageId}/schedule",
        )
        .path_param("emailMessageId", "Email message ID"),
        Endpoint::post(
            "live_chat_typing",
            "Show or hide the typing indicator in a live chat",
            "/conversations/providers/live-chat/typing",
        )
        .body_required("visitorId", Kind::String, "Visitor ID")
        .body_required("conversationId", Kind::String, "Conversation ID")
        .body_required("isTyping", Kind::Boolean, "Typing state")
        .location_body(),
    ]
}
