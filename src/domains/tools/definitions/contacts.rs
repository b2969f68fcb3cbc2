//! Contact management tools: contacts, tasks, notes, followers, campaigns
//! and workflow enrollment.

use crate::domains::tools::endpoint::{Endpoint, ParamKind as Kind};

pub const GROUP_ID: &str = "contacts";

/// Contact fields accepted on create, update and upsert.
fn contact_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("firstName", Kind::String, "First name")
        .body("lastName", Kind::String, "Last name")
        .body("name", Kind::String, "Full name")
        .body("email", Kind::String, "Email address")
        .body("phone", Kind::String, "Phone number in E.164 format")
        .body("companyName", Kind::String, "Company name")
        .body("address1", Kind::String, "Street address")
        .body("city", Kind::String, "City")
        .body("state", Kind::String, "State")
        .body("postalCode", Kind::String, "Postal code")
        .body("country", Kind::String, "Country code")
        .body("website", Kind::String, "Website")
        .body("timezone", Kind::String, "Timezone")
        .body("source", Kind::String, "Lead source")
        .body("assignedTo", Kind::String, "User ID of the owner")
        .body("tags", Kind::Array, "Tags to apply")
        .body("customFields", Kind::Array, "Custom field values: [{id, value}]")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        contact_fields(Endpoint::post(
            "create_contact",
            "Create a new contact in the location",
            "/contacts/",
        ))
        .location_body(),
        Endpoint::post(
            "search_contacts",
            "Search contacts by free text and filters",
            "/contacts/search",
        )
        .location_body()
        .body("query", Kind::String, "Free-text search (name, email, phone)")
        .body("pageLimit", Kind::Integer, "Results per page (max 100)")
        .body("page", Kind::Integer, "Page number")
        .body("filters", Kind::Array, "Advanced filter groups")
        .body("sort", Kind::Array, "Sort clauses"),
        Endpoint::get("get_contact", "Get a contact by ID", "/contacts/{contactId}")
            .path_param("contactId", "Contact ID"),
        contact_fields(Endpoint::put(
            "update_contact",
            "Update an existing contact",
            "/contacts/{contactId}",
        ))
        .path_param("contactId", "Contact ID"),
        Endpoint::post(
            "add_contact_tags",
            "Add tags to a contact",
            "/contacts/{contactId}/tags",
        )
        .path_param("contactId", "Contact ID")
        .body_required("tags", Kind::Array, "Tags to add"),
        Endpoint::delete(
            "remove_contact_tags",
            "Remove tags from a contact",
            "/contacts/{contactId}/tags",
        )
        .path_param("contactId", "Contact ID")
        .body_required("tags", Kind::Array, "Tags to remove"),
        Endpoint::delete("delete_contact", "Delete a contact", "/contacts/{contactId}")
            .path_param("contactId", "Contact ID"),
        // Tasks
        Endpoint::get(
            "get_contact_tasks",
            "List all tasks for a contact",
            "/contacts/{contactId}/tasks",
        )
        .path_param("contactId", "Contact ID"),
        Endpoint::post(
            "create_contact_task",
            "Create a task for a contact",
            "/contacts/{contactId}/tasks",
        )
        .path_param("contactId", "Contact ID")
        .body_required("title", Kind::String, "Task title")
        .body_required("dueDate", Kind::String, "Due date (ISO 8601)")
        .body("body", Kind::String, "Task description")
        .body("completed", Kind::Boolean, "Completion status")
        .body("assignedTo", Kind::String, "Assigned user ID"),
        Endpoint::get(
            "get_contact_task",
            "Get a single task of a contact",
            "/contacts/{contactId}/tasks/{taskId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("taskId", "Task ID"),
        Endpoint::put(
            "update_contact_task",
            "Update a task of a contact",
            "/contacts/{contactId}/tasks/{taskId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("taskId", "Task ID")
        .body("title", Kind::String, "Task title")
        .body("body", Kind::String, "Task description")
        .body("dueDate", Kind::String, "Due date (ISO 8601)")
        .body("completed", Kind::Boolean, "Completion status")
        .body("assignedTo", Kind::String, "Assigned user ID"),
        Endpoint::delete(
            "delete_contact_task",
            "Delete a task of a contact",
            "/contacts/{contactId}/tasks/{taskId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("taskId", "Task ID"),
        Endpoint::put(
            "update_task_completion",
            "Mark a contact task as completed or not completed",
            "/contacts/{contactId}/tasks/{taskId}/completed",
        )
        .path_param("contactId", "Contact ID")
        .path_param("taskId", "Task ID")
        .body_required("completed", Kind::Boolean, "Completion status"),
        // Notes
        Endpoint::get(
            "get_contact_notes",
            "List all notes for a contact",
            "/contacts/{contactId}/notes",
        )
        .path_param("contactId", "Contact ID"),
        Endpoint::post(
            "create_contact_note",
            "Add a note to a contact",
            "/contacts/{contactId}/notes",
        )
        .path_param("contactId", "Contact ID")
        .body_required("body", Kind::String, "Note content")
        .body("userId", Kind::String, "Author user ID"),
        Endpoint::get(
            "get_contact_note",
            "Get a single note of a contact",
            "/contacts/{contactId}/notes/{noteId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("noteId", "Note ID"),
        Endpoint::put(
            "update_contact_note",
            "Update a note of a contact",
            "/contacts/{contactId}/notes/{noteId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("noteId", "Note ID")
        .body_required("body", Kind::String, "Note content")
        .body("userId", Kind::String, "Author user ID"),
        Endpoint::delete(
            "delete_contact_note",
            "Delete a note of a contact",
            "/contacts/{contactId}/notes/{noteId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("noteId", "Note ID"),
        // Advanced operations
        contact_fields(Endpoint::post(
            "upsert_contact",
            "Create a contact or update the one matching email/phone",
            "/contacts/upsert",
        ))
        .location_body(),
        Endpoint::get(
            "get_duplicate_contact",
            "Find an existing contact by email or phone",
            "/contacts/search/duplicate",
        )
        .location_query()
        .query("email", Kind::String, "Email to match")
        .query("number", Kind::String, "Phone number to match"),
        Endpoint::get(
            "get_contacts_by_business",
            "List contacts linked to a business",
            "/contacts/business/{businessId}",
        )
        .path_param("businessId", "Business ID")
        .location_query()
        .query("limit", Kind::Integer, "Maximum results")
        .query("skip", Kind::Integer, "Results to skip")
        .query("query", Kind::String, "Search text"),
        Endpoint::get(
            "get_contact_appointments",
            "List appointments booked for a contact",
            "/contacts/{contactId}/appointments",
        )
        .path_param("contactId", "Contact ID"),
        // Bulk operations
        Endpoint::post(
            "bulk_update_contact_tags",
            "Add or remove tags on many contacts at once",
            "/contacts/tags/bulk/update/{type}",
        )
        .path_param("type", "Operation: 'add' or 'remove'")
        .body_required("contacts", Kind::Array, "Contact IDs")
        .body_required("tags", Kind::Array, "Tags")
        .body("removeAllTags", Kind::Boolean, "Remove every tag (remove only)")
        .location_body(),
        Endpoint::post(
            "bulk_update_contact_business",
            "Attach many contacts to a business, or detach them",
            "/contacts/business/bulk",
        )
        .body_required("ids", Kind::Array, "Contact IDs")
        .body("businessId", Kind::String, "Business ID (null to detach)")
        .location_body(),
        // Followers
        Endpoint::post(
            "add_contact_followers",
            "Add followers to a contact",
            "/contacts/{contactId}/followers",
        )
        .path_param("contactId", "Contact ID")
        .body_required("followers", Kind::Array, "User IDs"),
        Endpoint::delete(
            "remove_contact_followers",
            "Remove followers from a contact",
            "/contacts/{contactId}/followers",
        )
        .path_param("contactId", "Contact ID")
        .body_required("followers", Kind::Array, "User IDs"),
        // Campaigns
        Endpoint::post(
            "add_contact_to_campaign",
            "Add a contact to a campaign",
            "/contacts/{contactId}/campaigns/{campaignId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("campaignId", "Campaign ID"),
        Endpoint::delete(
            "remove_contact_from_campaign",
            "Remove a contact from a campaign",
            "/contacts/{contactId}/campaigns/{campaignId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("campaignId", "Campaign ID"),
        Endpoint::delete(
            "remove_contact_from_all_campaigns",
            "Remove a contact from every campaign",
            "/contacts/{contactId}/campaigns/removeAll",
        )
        .path_param("contactId", "Contact ID"),
        // Workflows
        Endpoint::post(
            "add_contact_to_workflow",
            "Enroll a contact in a workflow",
            "/contacts/{contactId}/workflow/{workflowId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("workflowId", "Workflow ID")
        .body("eventStartTime", Kind::String, "Start time (ISO 8601)"),
        Endpoint::delete(
            "remove_contact_from_workflow",
            "Remove a contact from a workflow",
            "/contacts/{contactId}/workflow/{workflowId}",
        )
        .path_param("contactId", "Contact ID")
        .path_param("workflowId", "Workflow ID"),
    ]
}
