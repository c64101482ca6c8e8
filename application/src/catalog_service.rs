use domain::product::{
    filter_by_category, filter_by_search_term, in_category, recommend, Product, ProductCatalog,
    ScoredProduct, ALL_CATEGORIES,
};
use tracing::info;

pub struct CatalogService {
    catalog: ProductCatalog,
}

impl CatalogService {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn search(&self, term: &str) -> Vec<&Product> {
        filter_by_search_term(self.catalog.products(), term)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        filter_by_category(self.catalog.products(), category)
    }

    /// Products passing both the search and the category filter.
    pub fn browse(&self, term: Option<&str>, category: Option<&str>) -> Vec<&Product> {
        let by_term = self.search(term.unwrap_or(""));
        let category = category.unwrap_or(ALL_CATEGORIES);
        by_term
            .into_iter()
            .filter(|p| in_category(p, category))
            .collect()
    }

    pub fn recommend(&self, preferences: &str) -> Vec<ScoredProduct> {
        recommend(preferences, self.catalog.products())
    }

    pub fn track_view(&self, product_id: u64) {
        info!(product_id, "product viewed");
    }

    pub fn track_interaction(&self, product_id: u64, interaction: &str) {
        info!(product_id, interaction, "product interaction");
    }
}
