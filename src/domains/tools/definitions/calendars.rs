//! Calendar, appointment and blocked-slot tools.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "calendars";

fn calendar_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("description", Kind::String, "Calendar description")
        .body("calendarType", Kind::String, "round_robin, event, class_booking, collective or personal")
        .body("groupId", Kind::String, "Calendar group ID")
        .body("slotDuration", Kind::Integer, "Slot duration in minutes")
        .body("slotInterval", Kind::Integer, "Slot interval in minutes")
        .body("slotBuffer", Kind::Integer, "Buffer between slots in minutes")
        .body("teamMembers", Kind::Array, "Team member assignments")
        .body("openHours", Kind::Array, "Weekly open hours")
        .body("autoConfirm", Kind::Boolean, "Confirm bookings automatically")
        .body("isActive", Kind::Boolean, "Active flag")
}

fn appointment_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("endTime", Kind::String, "End time (ISO 8601)")
        .body("title", Kind::String, "Appointment title")
        .body("appointmentStatus", Kind::String, "new, confirmed, cancelled, showed, noshow or invalid")
        .body("assignedUserId", Kind::String, "Assigned user ID")
        .body("address", Kind::String, "Meeting location")
        .body("ignoreDateRange", Kind::Boolean, "Skip minimum scheduling notice checks")
        .body("toNotify", Kind::Boolean, "Send notifications")
}

fn block_slot_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("calendarId", Kind::String, "Calendar ID")
        .body("startTime", Kind::String, "Start time (ISO 8601)")
        .body("endTime", Kind::String, "End time (ISO 8601)")
        .body("title", Kind::String, "Block title")
        .body("assignedUserId", Kind::String, "User whose time is blocked")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_calendar_groups",
            "List calendar groups",
            "/calendars/groups",
        )
        .location_query(),
        Endpoint::get("get_calendars", "List calendars", "/calendars/")
            .location_query()
            .query("groupId", Kind::String, "Filter by calendar group")
            .query("showDrafted", Kind::Boolean, "Include drafted calendars"),
        calendar_fields(Endpoint::post(
            "create_calendar",
            "Create a calendar",
            "/calendars/",
        ))
        .body_required("name", Kind::String, "Calendar name")
        .location_body(),
        Endpoint::get("get_calendar", "Get a calendar by ID", "/calendars/{calendarId}")
            .path_param("calendarId", "Calendar ID"),
        calendar_fields(Endpoint::put(
            "update_calendar",
            "Update a calendar",
            "/calendars/{calendarId}",
        ))
        .path_param("calendarId", "Calendar ID")
        .body("name", Kind::String, "Calendar name"),
        Endpoint::delete(
            "delete_calendar",
            "Delete a calendar",
            "/calendars/{calendarId}",
        )
        .path_param("calendarId", "Calendar ID"),
        Endpoint::get(
            "get_calendar_events",
            "List appointments in a time range",
            "/calendars/events",
        )
        .location_query()
        .query_required("startTime", Kind::String, "Range start (epoch ms)")
        .query_required("endTime", Kind::String, "Range end (epoch ms)")
        .query("calendarId", Kind::String, "Filter by calendar")
        .query("userId", Kind::String, "Filter by user")
        .query("groupId", Kind::String, "Filter by calendar group"),
        Endpoint::get(
            "get_free_slots",
            "List bookable slots of a calendar",
            "/calendars/{calendarId}/free-slots",
        )
        .path_param("calendarId", "Calendar ID")
        .query_required("startDate", Kind::Integer, "Range start (epoch ms)")
        .query_required("endDate", Kind::Integer, "Range end (epoch ms)")
        .query("timezone", Kind::String, "Timezone for the returned slots")
        .query("userId", Kind::String, "Restrict to one user"),
        appointment_fields(Endpoint::post(
            "create_appointment",
            "Book an appointment",
            "/calendars/events/appointments",
        ))
        .body_required("calendarId", Kind::String, "Calendar ID")
        .body_required("contactId", Kind::String, "Contact ID")
        .body_required("startTime", Kind::String, "Start time (ISO 8601)")
        .location_body(),
        Endpoint::get(
            "get_appointment",
            "Get an appointment by ID",
            "/calendars/events/appointments/{appointmentId}",
        )
        .path_param("appointmentId", "Appointment ID"),
        appointment_fields(Endpoint::put(
            "update_appointment",
            "Update an appointment",
            "/calendars/events/appointments/{appointmentId}",
        ))
        .path_param("appointmentId", "Appointment ID")
        .body("startTime", Kind::String, "Start time (ISO 8601)"),
        Endpoint::delete(
            "delete_appointment",
            "Delete an appointment",
            "/calendars/events/{appointmentId}",
        )
        .path_param("appointmentId", "Appointment ID"),
        block_slot_fields(Endpoint::post(
            "create_block_slot",
            "Block time on a calendar",
            "/calendars/events/block-slots",
        ))
        .location_body(),
        block_slot_fields(Endpoint::put(
            "update_block_slot",
            "Update a blocked time slot",
            "/calendars/events/block-slots/{eventId}",
        ))
        .path_param("eventId", "Block slot event ID")
        .location_body(),
    ]
}
