use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{NotificationType, Priority, TicketCategory, TicketStatus, ensure_opt},
    core::app_error::AppError,
};

// Notifications

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NotificationEntity {
    pub id: i32,
    pub recipient_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub is_read: bool,
    pub is_sent: bool,
    pub send_email: bool,
    pub send_sms: bool,
    pub send_push: bool,
    pub related_object_id: String,
    pub action_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::notifications)]
pub struct CreateNotificationEntity {
    pub recipient_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub send_email: Option<bool>,
    pub send_sms: Option<bool>,
    pub send_push: Option<bool>,
    pub related_object_id: Option<String>,
    pub action_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::notifications)]
pub struct UpdateNotificationEntity {
    pub title: Option<String>,
    pub message: Option<String>,
    pub notification_type: Option<String>,
    pub is_read: Option<bool>,
    pub is_sent: Option<bool>,
    pub send_email: Option<bool>,
    pub send_sms: Option<bool>,
    pub send_push: Option<bool>,
    pub related_object_id: Option<String>,
    pub action_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sent_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub read_at: Option<Option<DateTime<Utc>>>,
}

impl Prepare for CreateNotificationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<NotificationType>(Some(&self.notification_type))
    }
}

impl Prepare for UpdateNotificationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<NotificationType>(self.notification_type.as_ref())
    }
}

// Support tickets

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::support_tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SupportTicketEntity {
    pub id: i32,
    pub ticket_number: String,
    pub user_id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub assigned_to_id: Option<Uuid>,
    pub attachments: Value,
    pub resolution: String,
    pub satisfaction_rating: Option<i32>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::support_tickets)]
pub struct CreateSupportTicketEntity {
    pub ticket_number: String,
    pub user_id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to_id: Option<Uuid>,
    pub attachments: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::support_tickets)]
pub struct UpdateSupportTicketEntity {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to_id: Option<Option<Uuid>>,
    pub attachments: Option<Value>,
    pub resolution: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub satisfaction_rating: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub resolved_at: Option<Option<DateTime<Utc>>>,
}

impl Prepare for CreateSupportTicketEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<TicketCategory>(Some(&self.category))?;
        ensure_opt::<Priority>(self.priority.as_ref())?;
        ensure_opt::<TicketStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateSupportTicketEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<TicketCategory>(self.category.as_ref())?;
        ensure_opt::<Priority>(self.priority.as_ref())?;
        ensure_opt::<TicketStatus>(self.status.as_ref())
    }
}

// Messages

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageEntity {
    pub id: i32,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub parent_message_id: Option<i32>,
    pub attachments: Value,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::messages)]
pub struct CreateMessageEntity {
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub subject: Option<String>,
    pub content: String,
    pub parent_message_id: Option<i32>,
    pub attachments: Option<Value>,
}

/// `read_at` is not writable directly; it follows `is_read`.
#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::messages)]
pub struct UpdateMessageEntity {
    pub subject: Option<String>,
    pub content: Option<String>,
    pub is_read: Option<bool>,
    pub attachments: Option<Value>,
    #[serde(skip)]
    pub read_at: Option<Option<DateTime<Utc>>>,
}

impl Prepare for CreateMessageEntity {}

impl Prepare for UpdateMessageEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        self.read_at = match self.is_read {
            Some(true) => Some(Some(Utc::now())),
            Some(false) => Some(None),
            None => None,
        };
        Ok(())
    }
}

// Ticket messages

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::ticket_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TicketMessageEntity {
    pub id: i32,
    pub ticket_id: i32,
    pub sender_id: Uuid,
    pub message: String,
    pub attachments: Value,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::ticket_messages)]
pub struct CreateTicketMessageEntity {
    pub ticket_id: i32,
    pub sender_id: Uuid,
    pub message: String,
    pub attachments: Option<Value>,
    pub is_internal: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::ticket_messages)]
pub struct UpdateTicketMessageEntity {
    pub message: Option<String>,
    pub attachments: Option<Value>,
    pub is_internal: Option<bool>,
}

impl Prepare for CreateTicketMessageEntity {}
impl Prepare for UpdateTicketMessageEntity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_a_message_stamps_read_at() {
        let mut read: UpdateMessageEntity = serde_json::from_str(r#"{"is_read": true}"#).unwrap();
        read.prepare().unwrap();
        assert!(matches!(read.read_at, Some(Some(_))));

        let mut unread: UpdateMessageEntity = serde_json::from_str(r#"{"is_read": false}"#).unwrap();
        unread.prepare().unwrap();
        assert_eq!(unread.read_at, Some(None));
    }

    #[test]
    fn read_at_cannot_be_set_from_the_payload() {
        let mut edit: UpdateMessageEntity =
            serde_json::from_str(r#"{"subject": "Maize", "read_at": "2025-01-10T09:00:00Z"}"#)
                .unwrap();
        edit.prepare().unwrap();
        assert_eq!(edit.read_at, None);
        assert_eq!(edit.subject.as_deref(), Some("Maize"));
    }
}
