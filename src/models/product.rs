use serde::{Deserialize, Serialize};

/// A single catalog row, as stored in the product CSV files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "ProductTitle")]
    pub title: String,

    /// Free text describing the product, used for similarity scoring.
    /// `popular_products` does not carry this column.
    #[serde(rename = "ProductTags", default)]
    pub tags: String,

    #[serde(rename = "ReviewCount", default, deserialize_with = "csv::invalid_option")]
    pub review_count: Option<f64>,

    #[serde(rename = "Brand", default)]
    pub brand: String,

    #[serde(rename = "ImageURL", default)]
    pub image_url: String,

    #[serde(rename = "Rating", default, deserialize_with = "csv::invalid_option")]
    pub rating: Option<f64>,
}

impl Product {
    /// Review count as a whole number for display
    pub fn review_count_display(&self) -> String {
        match self.review_count {
            Some(count) => format!("{:.0}", count),
            None => "0".to_string(),
        }
    }

    /// Rating with one decimal place for display
    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => "-".to_string(),
        }
    }
}
