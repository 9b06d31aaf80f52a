pub mod accounts;
pub mod recommendations;
pub mod showcase;
pub mod similarity;

mod stop_words;

pub use showcase::Showcase;
pub use similarity::{generate_recommendations, Recommendation};
