//! Product catalog pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::catalog::{Category, Product};
use crate::error::AppError;
use crate::routes::helpers::{render_error, render_template, site_context};
use crate::state::AppState;

/// A category with its products, for the overview page.
#[derive(Serialize)]
struct CategoryListing<'a> {
    #[serde(flatten)]
    category: &'a Category,
    products: Vec<&'a Product>,
}

/// Create the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(overview))
        .route("/products/{category_slug}", get(category_page))
        .route("/product/{product_slug}", get(product_page))
}

/// GET /products
async fn overview(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();
    let listings: Vec<CategoryListing<'_>> = catalog
        .categories()
        .iter()
        .map(|category| CategoryListing {
            category,
            products: catalog.products_in(&category.slug),
        })
        .collect();

    let mut context = site_context(&state, "/products", "Products");
    context.insert("listings", &listings);
    render_template(&state, "products.html", &context, StatusCode::OK)
}

/// GET /products/{category_slug}
async fn category_page(
    State(state): State<AppState>,
    Path(category_slug): Path<String>,
) -> Response {
    let catalog = state.catalog();
    let Some(category) = catalog.lookup_category(&category_slug) else {
        return render_error(&state, AppError::NotFound);
    };

    let mut context = site_context(&state, "/products", &category.name);
    context.insert("category", category);
    context.insert("products", &catalog.products_in(&category.slug));
    render_template(&state, "category.html", &context, StatusCode::OK)
}

/// GET /product/{product_slug}
async fn product_page(
    State(state): State<AppState>,
    Path(product_slug): Path<String>,
) -> Response {
    let catalog = state.catalog();
    let Some(product) = catalog.lookup_product(&product_slug) else {
        return render_error(&state, AppError::NotFound);
    };

    let mut context = site_context(&state, "/products", &product.name);
    context.insert("product", product);
    context.insert("category", &catalog.lookup_category(&product.category));
    render_template(&state, "product.html", &context, StatusCode::OK)
}
