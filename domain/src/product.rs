use serde::{Deserialize, Serialize};
use shared::utils::split_terms;

/// Maximum number of entries `recommend` returns.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(name: &str, description: &str, category: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: None,
        }
    }

    /// Lowercased `name description category`, the text every matcher runs on.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.category).to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub score: usize,
}

/// Score products by how many comma-separated preference terms occur as
/// substrings of their search text.
///
/// Only products with a positive score are returned, best first, ties in
/// input order, at most [`MAX_RECOMMENDATIONS`]. A preference string with no
/// terms returns the first products unscored.
pub fn recommend(preferences: &str, products: &[Product]) -> Vec<ScoredProduct> {
    let terms = split_terms(preferences);
    if terms.is_empty() {
        return products
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|p| ScoredProduct {
                product: p.clone(),
                score: 0,
            })
            .collect();
    }

    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .filter_map(|p| {
            let text = p.search_text();
            let score = terms.iter().filter(|t| text.contains(t.as_str())).count();
            (score > 0).then(|| ScoredProduct {
                product: p.clone(),
                score,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

/// Case-insensitive substring match over name, description and category.
/// A blank term keeps everything.
pub fn filter_by_search_term<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Case-insensitive substring match on category; `"all"` matches everything.
pub fn in_category(product: &Product, category: &str) -> bool {
    let wanted = category.trim().to_lowercase();
    wanted == ALL_CATEGORIES || product.category.to_lowercase().contains(&wanted)
}

pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| in_category(p, category)).collect()
}

/// Fixed in-memory product list the page filters run over.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self.products.iter().map(|p| p.category.clone()).collect();
        cats.sort();
        cats.dedup();
        cats
    }
}
