//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Product Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "Product catalog CRUD with field validation and uniform JSON errors",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
