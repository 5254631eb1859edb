//! HTTP handlers for the Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, ProductNotFoundResponse,
        UnauthorizedResponse,
    },
    require_auth, ApiResponse, JwtAuth, ValidatedJson, ValidatedQuery,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CategoryStats, CreateProduct, OverallStats, ProductResponse, ProductStats, UpdateProduct,
};
use crate::query::ProductListQuery;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        product_stats,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            ProductResponse, CreateProduct, UpdateProduct,
            ProductStats, OverallStats, CategoryStats
        ),
        responses(
            ProductNotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product inventory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// Reads are public; create/update/delete sit behind the bearer-token guard.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    jwt: JwtAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_products::<R>))
        .route("/stats", get(product_stats::<R>))
        .route("/{id}", get(get_product::<R>));

    let protected = Router::new()
        .route("/", post(create_product::<R>))
        .route(
            "/{id}",
            put(update_product::<R>).delete(delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(jwt, require_auth));

    public.merge(protected).with_state(shared_service)
}

/// List products with filtering, search, sorting, and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Paginated list of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ProductListQuery>,
) -> ProductResult<Json<ApiResponse<Vec<ProductResponse>>>> {
    let (products, pagination) = service.list_products(query).await?;
    let items: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::new(items).with_pagination(pagination)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(ProductResponse::from(product))),
    ))
}

/// Statistics over the entire product collection
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Overall and per-category statistics", body = ApiResponse<ProductStats>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ApiResponse<ProductStats>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::new(stats)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponse>),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ApiResponse<ProductResponse>>> {
    let product = service.get_product(&id).await?;
    Ok(Json(ApiResponse::new(ProductResponse::from(product))))
}

/// Update a product (partial, at least one field)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ApiResponse<ProductResponse>>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(ApiResponse::new(ProductResponse::from(product))))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
