use askama::Template;
use axum::response::Html;

use crate::{
    catalog::shorten_text,
    error::AppResult,
    models::Product,
    services::{Recommendation, Showcase},
};

/// Number of trending products shown on the homepage
pub const TRENDING_COUNT: usize = 8;

/// Characters of a product title shown on a card
pub const TITLE_PREVIEW_LEN: usize = 12;

pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found for this product.";

/// A product as rendered on a card
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub title: String,
    pub short_title: String,
    pub brand: String,
    pub review_count: String,
    pub rating: String,
    pub image_url: String,
    pub decor_image: &'static str,
    pub score: Option<String>,
}

impl ProductCard {
    pub fn new(product: &Product, decor_image: &'static str) -> Self {
        Self {
            title: product.title.clone(),
            short_title: shorten_text(&product.title, TITLE_PREVIEW_LEN),
            brand: product.brand.clone(),
            review_count: product.review_count_display(),
            rating: product.rating_display(),
            image_url: product.image_url.clone(),
            decor_image,
            score: None,
        }
    }

    pub fn from_recommendation(recommendation: &Recommendation, decor_image: &'static str) -> Self {
        Self {
            score: Some(format!("{:.2}", recommendation.score)),
            ..Self::new(&recommendation.product, decor_image)
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub trending: Vec<ProductCard>,
    pub price: u32,
    pub message: Option<String>,
}

impl IndexTemplate {
    pub fn new(trending: &[Product], showcase: &Showcase, message: Option<String>) -> Self {
        Self {
            trending: trending
                .iter()
                .enumerate()
                .map(|(i, product)| ProductCard::new(product, showcase.image(i)))
                .collect(),
            price: showcase.price,
            message,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub recommendations: Vec<ProductCard>,
    pub price: u32,
    pub message: Option<String>,
}

impl DashboardTemplate {
    pub fn empty() -> Self {
        Self {
            recommendations: Vec::new(),
            price: 0,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty()
        }
    }

    pub fn with_recommendations(recommendations: &[Recommendation], showcase: &Showcase) -> Self {
        Self {
            recommendations: recommendations
                .iter()
                .enumerate()
                .map(|(i, r)| ProductCard::from_recommendation(r, showcase.image(i)))
                .collect(),
            price: showcase.price,
            message: None,
        }
    }
}

/// Renders a template into an HTML response body
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
