use anyhow::Context;
use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::{
    ToSchema,
    openapi::{RefOr, Schema},
};

use crate::core::app_error::AppError;

/// Field names of `T` in declaration order, read from its OpenAPI schema.
pub fn field_names<T: ToSchema>() -> Vec<String> {
    match T::schema() {
        RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Renders rows as CSV under a header of `fields`, written even when there are no rows.
/// Nested JSON is written as JSON text.
pub fn to_csv<T: Serialize>(fields: &[String], rows: &[T]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(fields)
        .context("Failed to write CSV header")?;

    for row in rows {
        let Value::Object(values) = serde_json::to_value(row).context("Failed to serialize row")?
        else {
            return Err(AppError::Other(anyhow::anyhow!(
                "Exported rows must serialize to JSON objects"
            )));
        };

        writer
            .write_record(
                fields
                    .iter()
                    .map(|field| values.get(field).map(cell).unwrap_or_default()),
            )
            .context("Failed to write CSV row")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV")?;
    String::from_utf8(bytes)
        .context("CSV output is not UTF-8")
        .map_err(AppError::from)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

/// Wraps a CSV body as a file download named after the resource.
pub fn attachment(resource: &str, body: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}.csv", resource),
            ),
        ],
        body,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize, ToSchema)]
    struct Row {
        id: i32,
        name: String,
        code: Option<String>,
        tags: Value,
        is_active: bool,
    }

    #[test]
    fn header_follows_field_order() {
        let rows = vec![
            Row {
                id: 1,
                name: "Nakuru".into(),
                code: Some("032".into()),
                tags: json!(["maize", "dairy"]),
                is_active: true,
            },
            Row {
                id: 2,
                name: "Kiambu, Central".into(),
                code: None,
                tags: json!({}),
                is_active: false,
            },
        ];

        let csv = to_csv(&field_names::<Row>(), &rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,name,code,tags,is_active");
        assert_eq!(lines[1], r#"1,Nakuru,032,"[""maize"",""dairy""]",true"#);
        assert_eq!(lines[2], r#"2,"Kiambu, Central",,{},false"#);
    }

    #[test]
    fn empty_export_still_has_the_header() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(
            to_csv(&field_names::<Row>(), &rows).unwrap(),
            "id,name,code,tags,is_active\n"
        );
    }

    #[test]
    fn cells_follow_the_header_not_the_row() {
        let fields = vec!["name".to_string(), "missing".to_string(), "id".to_string()];
        let csv = to_csv(&fields, &[json!({ "id": 7, "name": "Kisii" })]).unwrap();
        assert_eq!(csv, "name,missing,id\nKisii,,7\n");
    }

    #[test]
    fn attachment_sets_download_headers() {
        let response = attachment("counties", "id\n1\n".into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=counties.csv"
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
    }
}
