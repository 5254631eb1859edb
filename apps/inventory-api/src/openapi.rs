//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Product inventory management API with JWT authentication",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/products", api = domain_products::ApiDoc),
        (path = "/api/v1/auth", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product inventory endpoints"),
        (name = "Auth", description = "Registration, login, and profile endpoints")
    )
)]
pub struct ApiDoc;
