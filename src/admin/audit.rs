//! Audit trail for admin writes and exports.

use std::fmt::Display;

use anyhow::Context;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::{
    choices::{AuditAction, Choice},
    core::{app_error::AppError, middleware::AuditContext},
    models::CreateAuditLogEntity,
    schema::audit_logs,
};

const REPR_MAX_CHARS: usize = 200;

#[derive(Debug)]
pub struct Entry {
    action: AuditAction,
    object_type: String,
    object_id: String,
    object_repr: String,
    changes: Value,
}

impl Entry {
    pub fn new(action: AuditAction, object_type: &str) -> Self {
        Entry {
            action,
            object_type: object_type.to_string(),
            object_id: String::new(),
            object_repr: String::new(),
            changes: json!({}),
        }
    }

    /// Identifies the row, using `repr_field` of its serialized form as the display text.
    pub fn object<T: Serialize>(mut self, id: impl Display, row: &T, repr_field: &str) -> Self {
        self.object_id = id.to_string();
        self.object_repr = repr(&snapshot(row), repr_field).unwrap_or_else(|| self.object_id.clone());
        self
    }

    pub fn changes(mut self, changes: Value) -> Self {
        self.changes = changes;
        self
    }
}

/// Inserts one `audit_logs` row on `conn`, normally inside the write's transaction.
pub async fn record(
    conn: &mut AsyncPgConnection,
    ctx: &AuditContext,
    entry: Entry,
) -> Result<(), AppError> {
    let row = CreateAuditLogEntity {
        user_id: ctx.user_id,
        action: entry.action.as_str().to_string(),
        object_type: entry.object_type,
        object_id: entry.object_id,
        object_repr: entry.object_repr,
        changes: entry.changes,
        ip_address: ctx.ip_address.clone(),
        user_agent: ctx.user_agent.clone(),
    };

    diesel::insert_into(audit_logs::table)
        .values(&row)
        .execute(conn)
        .await?;

    tracing::debug!(
        action = %entry.action,
        object_type = %row.object_type,
        object_id = %row.object_id,
        "Recorded admin audit entry"
    );
    Ok(())
}

pub fn snapshot<T: Serialize>(row: &T) -> Value {
    serde_json::to_value(row)
        .context("Failed to snapshot row")
        .unwrap_or_else(|err| {
            tracing::warn!("{:?}", err);
            Value::Null
        })
}

fn repr(row: &Value, field: &str) -> Option<String> {
    let text = match row.get(field)? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(text.chars().take(REPR_MAX_CHARS).collect())
}

/// Field-level changes between two snapshots as `{field: {from, to}}`.
pub fn diff(before: &Value, after: &Value) -> Value {
    let (Value::Object(before), Value::Object(after)) = (before, after) else {
        return json!({});
    };

    let changed: Map<String, Value> = after
        .iter()
        .filter(|(key, value)| before.get(*key) != Some(*value))
        .filter(|(key, _)| key.as_str() != "updated_at")
        .map(|(key, value)| {
            let from = before.get(key).cloned().unwrap_or(Value::Null);
            (key.clone(), json!({ "from": from, "to": value }))
        })
        .collect();

    Value::Object(changed)
}

/// Change record for a replaced set of links, as `{field: {from, to, added, removed}}`.
pub fn link_changes(field: &str, before: &[i32], after: &[i32]) -> Value {
    let added: Vec<i32> = after.iter().filter(|id| !before.contains(id)).copied().collect();
    let removed: Vec<i32> = before.iter().filter(|id| !after.contains(id)).copied().collect();

    let mut changes = Map::new();
    changes.insert(
        field.to_string(),
        json!({ "from": before, "to": after, "added": added, "removed": removed }),
    );
    Value::Object(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct County {
        id: i32,
        name: String,
        population: Option<i32>,
    }

    #[test]
    fn diff_lists_only_changed_fields() {
        let before = json!({"id": 1, "name": "Nakuru", "population": null, "updated_at": "a"});
        let after = json!({"id": 1, "name": "Nakuru", "population": 2162202, "updated_at": "b"});

        assert_eq!(
            diff(&before, &after),
            json!({"population": {"from": null, "to": 2162202}})
        );
        assert_eq!(diff(&before, &before), json!({}));
    }

    #[test]
    fn object_repr_uses_display_field() {
        let county = County {
            id: 7,
            name: "Kiambu".into(),
            population: None,
        };

        let entry = Entry::new(AuditAction::Update, "counties").object(county.id, &county, "name");
        assert_eq!(entry.object_id, "7");
        assert_eq!(entry.object_repr, "Kiambu");

        let entry = Entry::new(AuditAction::Update, "counties").object(county.id, &county, "population");
        assert_eq!(entry.object_repr, "7");
    }

    #[test]
    fn link_changes_list_added_and_removed_ids() {
        assert_eq!(
            link_changes("service_areas", &[1, 4, 7], &[4, 7, 12]),
            json!({"service_areas": {
                "from": [1, 4, 7],
                "to": [4, 7, 12],
                "added": [12],
                "removed": [1],
            }})
        );
        assert_eq!(
            link_changes("counties", &[], &[]),
            json!({"counties": {"from": [], "to": [], "added": [], "removed": []}})
        );
    }

    #[test]
    fn object_repr_is_truncated() {
        let long = json!({"title": "x".repeat(500)});
        assert_eq!(repr(&long, "title").map(|s| s.len()), Some(REPR_MAX_CHARS));
    }
}
