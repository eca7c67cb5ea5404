use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::core::app_error::AppError;

pub const BUYER_ID_HEADER: &str = "x-buyer-id";
pub const ADMIN_USER_HEADER: &str = "x-admin-user";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Who performed an admin operation, as recorded in the audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditContext {
    pub user_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub user_agent: String,
}

/// Resolves the buyer identity forwarded by the gateway into `Extension<Uuid>`.
pub async fn buyers_authorization(mut req: Request, next: Next) -> Result<Response, AppError> {
    let buyer_id = parse_uuid_header(req.headers(), BUYER_ID_HEADER)?
        .ok_or_else(|| AppError::BadRequest("Missing X-Buyer-Id header".into()))?;

    req.extensions_mut().insert(buyer_id);
    Ok(next.run(req).await)
}

/// Attaches an [`AuditContext`] to every admin request.
pub async fn admin_context(mut req: Request, next: Next) -> Result<Response, AppError> {
    let headers = req.headers();
    let ctx = AuditContext {
        user_id: parse_uuid_header(headers, ADMIN_USER_HEADER)?,
        ip_address: headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(header_str)
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
        user_agent: headers
            .get(axum::http::header::USER_AGENT)
            .and_then(header_str)
            .unwrap_or_default()
            .to_string(),
    };

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

fn header_str(value: &HeaderValue) -> Option<&str> {
    value.to_str().ok()
}

fn parse_uuid_header(headers: &HeaderMap, name: &str) -> Result<Option<Uuid>, AppError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => header_str(value)
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Header {} must be a UUID", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_is_none() {
        let headers = HeaderMap::new();
        assert!(parse_uuid_header(&headers, BUYER_ID_HEADER).unwrap().is_none());
    }

    #[test]
    fn malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(BUYER_ID_HEADER, HeaderValue::from_static("buyer-42"));
        assert!(matches!(
            parse_uuid_header(&headers, BUYER_ID_HEADER),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn well_formed_header_is_parsed() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            ADMIN_USER_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );
        assert_eq!(parse_uuid_header(&headers, ADMIN_USER_HEADER).unwrap(), Some(id));
    }
}
