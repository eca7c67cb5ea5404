use anyhow::Result;
use axum::Router;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::app_state::AppState;

pub fn create_swagger_ui(openapi: OpenApi) -> Result<Router<AppState>> {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);
    Ok(Router::new().merge(swagger_ui))
}
