use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Extension, Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{NewLoginAttempt, NewRegistration},
    services::{accounts, recommendations, Showcase},
};

use super::views::{render, DashboardTemplate, IndexTemplate, NO_RECOMMENDATIONS_MESSAGE, TRENDING_COUNT};
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationForm {
    /// Title of the product to find neighbours for
    #[serde(default)]
    pub prod: String,
    /// How many recommendations to return
    pub nbr: usize,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Homepage with trending products
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    homepage(&state, None)
}

/// Recommendation search page
pub async fn dashboard() -> AppResult<Html<String>> {
    render(&DashboardTemplate::empty())
}

/// Stores a registration and returns to the homepage
pub async fn user_register(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(registration): Form<NewRegistration>,
) -> AppResult<Html<String>> {
    tracing::info!(request_id = %request_id, user_name = %registration.name, "Processing registration");
    accounts::register_user(state.accounts.as_ref(), registration).await?;
    homepage(&state, Some("Registration successful!"))
}

/// Records a login attempt and returns to the homepage
pub async fn user_login(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(attempt): Form<NewLoginAttempt>,
) -> AppResult<Html<String>> {
    tracing::info!(request_id = %request_id, login_name = %attempt.name, "Processing login");
    accounts::record_login(state.accounts.as_ref(), attempt).await?;
    homepage(&state, Some("Login successful!"))
}

/// Similar-products lookup
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<RecommendationForm>,
) -> AppResult<Html<String>> {
    tracing::info!(
        request_id = %request_id,
        product = %form.prod,
        requested = form.nbr,
        "Processing recommendation request"
    );

    let found = recommendations::similar_products(state.catalog.clone(), form.prod, form.nbr).await?;

    tracing::info!(request_id = %request_id, found = found.len(), "Recommendations computed");

    if found.is_empty() {
        return render(&DashboardTemplate::with_message(NO_RECOMMENDATIONS_MESSAGE));
    }

    let showcase = Showcase::random(&mut rand::thread_rng(), state.catalog.popular().len());
    render(&DashboardTemplate::with_recommendations(&found, &showcase))
}

fn homepage(state: &AppState, message: Option<&str>) -> AppResult<Html<String>> {
    let showcase = Showcase::random(&mut rand::thread_rng(), state.catalog.popular().len());
    let page = IndexTemplate::new(
        state.catalog.trending(TRENDING_COUNT),
        &showcase,
        message.map(str::to_string),
    );
    render(&page)
}
