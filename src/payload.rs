//! Webhook payload formatting.
//!
//! This module maps an [`EvaluationResult`] into the JSON body the outbound
//! webhook consumer expects. It is a pure presentation step: the wire shape
//! (`type` / `priority` / `message`) and the message text are stable for
//! downstream parsers, but carry no evaluation logic of their own.

use serde::{Deserialize, Serialize};

use crate::models::{EvaluationResult, Notification};

/// The date format used in message text.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The notification category on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// An initial 90-day test warning.
    Initial,
    /// A recurring 5-month follow-up reminder.
    Followup,
}

/// The delivery priority on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    /// Initial-test warnings are delivered at high priority.
    High,
    /// Follow-up reminders are delivered at medium priority.
    Medium,
}

/// One formatted notification in the webhook body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookNotification {
    /// The notification category.
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    /// The delivery priority.
    pub priority: NotificationPriority,
    /// The human-readable multi-line message.
    pub message: String,
}

/// The complete webhook request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// All formatted notifications, initial tests first.
    pub notifications: Vec<WebhookNotification>,
}

/// Builds the webhook payload for an evaluation result.
///
/// Initial-test warnings map to `type: "initial"` at high priority;
/// follow-up reminders map to `type: "followup"` at medium priority. Every
/// message contains the employee's name, id, effective start date, and
/// deadline as literal substrings.
///
/// # Examples
///
/// ```
/// use compliance_engine::models::EvaluationResult;
/// use compliance_engine::payload::build_payload;
///
/// let payload = build_payload(&EvaluationResult::default());
/// assert!(payload.notifications.is_empty());
/// ```
pub fn build_payload(result: &EvaluationResult) -> WebhookPayload {
    let mut notifications = Vec::with_capacity(result.len());

    for notification in &result.initial_tests {
        notifications.push(WebhookNotification {
            category: NotificationCategory::Initial,
            priority: NotificationPriority::High,
            message: initial_message(notification),
        });
    }

    for notification in &result.followup_tests {
        notifications.push(WebhookNotification {
            category: NotificationCategory::Followup,
            priority: NotificationPriority::Medium,
            message: followup_message(notification),
        });
    }

    WebhookPayload { notifications }
}

/// Formats the message for an initial-test warning.
fn initial_message(notification: &Notification) -> String {
    format!(
        "INITIAL TEST NOTIFICATION - {}\n\
         Employee: {} (ID: {})\n\
         Hire Date: {}\n\
         Test Deadline: {}",
        notification.kind.title(),
        notification.employee_name,
        notification.employee_id,
        notification.effective_start_date.format(DATE_FORMAT),
        notification.deadline.format(DATE_FORMAT),
    )
}

/// Formats the message for a follow-up reminder.
fn followup_message(notification: &Notification) -> String {
    format!(
        "5-MONTH FOLLOW-UP TEST DUE\n\
         Employee: {} (ID: {})\n\
         Last Hire/Rehire Date: {}\n\
         Test Deadline: {}",
        notification.employee_name,
        notification.employee_id,
        notification.effective_start_date.format(DATE_FORMAT),
        notification.deadline.format(DATE_FORMAT),
    )
}
