use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

use crate::models::Product;

/// Read-only product catalog, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    popular: Vec<Product>,
    processed: Vec<Product>,
}

impl Catalog {
    pub fn new(popular: Vec<Product>, processed: Vec<Product>) -> Self {
        Self { popular, processed }
    }

    /// Loads both catalog CSV files from disk
    pub fn load(popular_path: impl AsRef<Path>, processed_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let popular_path = popular_path.as_ref();
        let processed_path = processed_path.as_ref();

        let popular = File::open(popular_path)
            .with_context(|| format!("Failed to open {}", popular_path.display()))?;
        let processed = File::open(processed_path)
            .with_context(|| format!("Failed to open {}", processed_path.display()))?;

        let catalog = Self::from_readers(popular, processed)?;
        tracing::info!(
            popular = catalog.popular.len(),
            processed = catalog.processed.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses both catalogs from CSV readers with a header row
    pub fn from_readers<P: Read, D: Read>(popular: P, processed: D) -> anyhow::Result<Self> {
        let popular = read_products(popular).context("Failed to parse popular products")?;
        let processed = read_products(processed).context("Failed to parse processed catalog")?;
        Ok(Self::new(popular, processed))
    }

    /// Every trending product, in file order
    pub fn popular(&self) -> &[Product] {
        &self.popular
    }

    /// The tagged catalog used for similarity lookups
    pub fn processed(&self) -> &[Product] {
        &self.processed
    }

    /// The first `n` trending products
    pub fn trending(&self, n: usize) -> &[Product] {
        &self.popular[..n.min(self.popular.len())]
    }
}

fn read_products<R: Read>(reader: R) -> anyhow::Result<Vec<Product>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut products = Vec::new();
    for (row, record) in reader.deserialize::<Product>().enumerate() {
        let product = record.with_context(|| format!("Invalid catalog row {}", row + 1))?;
        products.push(product);
    }
    Ok(products)
}

/// Truncates `content` to `max_length` characters, appending "..." when cut
pub fn shorten_text(content: &str, max_length: usize) -> String {
    match content.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POPULAR: &str = "\
,ProductTitle,ReviewCount,Brand,ImageURL,Rating
0,Nail Polish Red,120,OPI,https://img.example/1.jpg,4.5
1,Moisturizer,,Cetaphil,https://img.example/2.jpg,
";

    const PROCESSED: &str = "\
ProductTitle,ProductTags,ReviewCount,Brand,ImageURL,Rating
Nail Polish Red,nail polish red glossy,120.0,OPI,https://img.example/1.jpg,4.5
Lip Balm,lip balm moisturizing,8,Burt's Bees,https://img.example/3.jpg,n/a
";

    #[test]
    fn test_from_readers_parses_both_files() {
        let catalog = Catalog::from_readers(POPULAR.as_bytes(), PROCESSED.as_bytes()).unwrap();

        assert_eq!(catalog.popular().len(), 2);
        assert_eq!(catalog.processed().len(), 2);

        let first = &catalog.popular()[0];
        assert_eq!(first.title, "Nail Polish Red");
        assert_eq!(first.review_count, Some(120.0));
        assert_eq!(first.rating, Some(4.5));
        assert_eq!(first.tags, "");

        let lip_balm = &catalog.processed()[1];
        assert_eq!(lip_balm.tags, "lip balm moisturizing");
        assert_eq!(lip_balm.rating, None);
    }

    #[test]
    fn test_empty_numeric_fields_load_as_none() {
        let catalog = Catalog::from_readers(POPULAR.as_bytes(), PROCESSED.as_bytes()).unwrap();
        let moisturizer = &catalog.popular()[1];
        assert_eq!(moisturizer.review_count, None);
        assert_eq!(moisturizer.rating, None);
    }

    #[test]
    fn test_missing_title_column_is_an_error() {
        let bad = "Brand,Rating\nOPI,4.0\n";
        assert!(Catalog::from_readers(bad.as_bytes(), PROCESSED.as_bytes()).is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Catalog::load("/nonexistent/popular.csv", "/nonexistent/processed.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/popular.csv"));
    }

    #[test]
    fn test_trending_is_capped_by_catalog_size() {
        let catalog = Catalog::from_readers(POPULAR.as_bytes(), PROCESSED.as_bytes()).unwrap();
        assert_eq!(catalog.trending(8).len(), 2);
        assert_eq!(catalog.trending(1).len(), 1);
        assert!(catalog.trending(0).is_empty());
    }

    #[test]
    fn test_shorten_text() {
        assert_eq!(shorten_text("short", 10), "short");
        assert_eq!(shorten_text("exactly10!", 10), "exactly10!");
        assert_eq!(shorten_text("this title is too long", 8), "this tit...");
        assert_eq!(shorten_text("", 3), "");
    }

    #[test]
    fn test_shorten_text_respects_char_boundaries() {
        assert_eq!(shorten_text("crème brûlée", 4), "crèm...");
    }
}
