//! OpenAPI documentation for the N-Min Finder API
//!
//! This module provides auto-generated Swagger/OpenAPI documentation for
//! the REST endpoints.

use utoipa::OpenApi;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::handlers::health::HealthResponse;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "N-Min Finder API",
        version = "1.0.0",
        description = "Finds the N-th minimum number in the first column of an Excel spreadsheet",
        license(name = "MIT")
    ),
    tags(
        (name = "minimum", description = "N-th minimum lookup APIs"),
        (name = "health", description = "Health check APIs")
    ),
    paths(
        crate::handlers::minimum::find_nth_minimum,
        crate::handlers::health::health_check,
    ),
    components(schemas(HealthResponse, ErrorResponse, ErrorDetail))
)]
pub struct ApiDoc;

/// Swagger UI router serving the interactive documentation
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}
