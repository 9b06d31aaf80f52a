//! Decorative data for product cards.
//!
//! Images and prices shown next to products are picked at random per request
//! and carry no meaning for ranking.

use rand::seq::SliceRandom;
use rand::Rng;

pub const IMAGE_PATHS: [&str; 8] = [
    "/static/assets/img_1.png",
    "/static/assets/img_2.png",
    "/static/assets/img_3.png",
    "/static/assets/img_4.png",
    "/static/assets/img_5.png",
    "/static/assets/img_6.png",
    "/static/assets/img_7.png",
    "/static/assets/img_8.png",
];

pub const PRICE_LIST: [u32; 10] = [40, 50, 60, 70, 100, 122, 106, 50, 30, 50];

/// Random card decorations for one rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    pub images: Vec<&'static str>,
    pub price: u32,
}

impl Showcase {
    /// Picks `count` images (with repetition) and a single price
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let images = (0..count)
            .map(|_| *IMAGE_PATHS.choose(rng).unwrap_or(&IMAGE_PATHS[0]))
            .collect();
        let price = *PRICE_LIST.choose(rng).unwrap_or(&PRICE_LIST[0]);
        Self { images, price }
    }

    /// Image for the card at `index`, cycling when there are fewer images than cards
    pub fn image(&self, index: usize) -> &'static str {
        if self.images.is_empty() {
            IMAGE_PATHS[0]
        } else {
            self.images[index % self.images.len()]
        }
    }
}
