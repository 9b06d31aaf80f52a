//! Content-based "similar products" lookup.
//!
//! Every product's tag string is turned into a TF-IDF vector and products are
//! ranked by cosine similarity to the queried product. The vectorization is
//! rebuilt from the full catalog on every call; nothing is indexed or cached.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::Product;
use crate::services::stop_words::ENGLISH_STOP_WORDS;

/// Tokens are runs of two or more word characters
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern compiles"));

/// Sparse document vector: `(term index, weight)` pairs sorted by term index
pub type SparseVector = Vec<(usize, f64)>;

/// A product similar to the queried one, with its cosine score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub product: Product,
    pub score: f64,
}

/// Splits text into lowercase terms, dropping English stop words
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !ENGLISH_STOP_WORDS.contains(*token))
        .map(str::to_string)
        .collect()
}

/// TF-IDF weighting fitted over a set of documents.
///
/// Term frequencies are raw counts, IDF is smoothed
/// (`ln((1 + n) / (1 + df)) + 1`) and every row is L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocabulary = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                vocabulary.entry(token.clone()).or_insert(0);
            }
        }
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let counts: Vec<HashMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf = HashMap::new();
                for token in tokens {
                    if let Some(&index) = vocabulary.get(token) {
                        *tf.entry(index).or_insert(0) += 1;
                    }
                }
                tf
            })
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &index in tf.keys() {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|tf| {
                let mut row: SparseVector = tf
                    .into_iter()
                    .map(|(index, count)| (index, count as f64 * idf[index]))
                    .collect();
                row.sort_unstable_by_key(|&(index, _)| index);
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, idf, rows }
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// Smoothed IDF weight of `term`, if it occurs in any document
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }
}

fn l2_normalize(row: &mut SparseVector) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, weight) in row.iter_mut() {
            *weight /= norm;
        }
    }
}

/// Cosine similarity of two L2-normalized sparse vectors
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        let (ai, aw) = a[i];
        let (bj, bw) = b[j];
        match ai.cmp(&bj) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += aw * bw;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Returns up to `top_n` products most similar to `product_name`.
///
/// Unknown titles yield an empty list. Rows sharing the query title are never
/// returned, and equal scores keep catalog order.
pub fn generate_recommendations(
    catalog: &[Product],
    product_name: &str,
    top_n: usize,
) -> Vec<Recommendation> {
    let Some(query_index) = catalog.iter().position(|p| p.title == product_name) else {
        tracing::debug!(product = %product_name, "Product not in catalog");
        return Vec::new();
    };
    if top_n == 0 {
        return Vec::new();
    }

    let tags: Vec<&str> = catalog.iter().map(|p| p.tags.as_str()).collect();
    let matrix = TfidfMatrix::fit_transform(tags.as_slice());
    let query = &matrix.rows()[query_index];

    let mut ranked: Vec<(usize, f64)> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| (index, cosine_similarity(query, row)))
        .collect();
    // sort_by is stable: ties stay in catalog order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .filter(|&(index, _)| catalog[index].title != product_name)
        .take(top_n)
        .map(|(index, score)| Recommendation {
            product: catalog[index].clone(),
            score,
        })
        .collect()
}
