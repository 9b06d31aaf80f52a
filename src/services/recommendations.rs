use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    services::similarity::{generate_recommendations, Recommendation},
};

/// Finds products similar to `product_name` in the processed catalog
///
/// The TF-IDF pass is CPU-bound, so it runs on the blocking pool.
pub async fn similar_products(
    catalog: Arc<Catalog>,
    product_name: String,
    top_n: usize,
) -> AppResult<Vec<Recommendation>> {
    tokio::task::spawn_blocking(move || {
        generate_recommendations(catalog.processed(), &product_name, top_n)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Recommendation task failed: {}", e)))
}
