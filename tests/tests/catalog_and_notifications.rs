use application::catalog_service::CatalogService;
use application::notifier::Notifier;
use domain::notification::{Severity, DISPLAY_DURATION, FADE_DURATION};
use domain::product::{Product, ProductCatalog, MAX_RECOMMENDATIONS};
use fixtures::RecordingSink;
use std::sync::Arc;
use std::time::Duration;

fn catalog() -> CatalogService {
    let mut products = vec![
        Product::new("Walnut Bowl", "Hand-carved wood", "Woodwork"),
        Product::new("Ceramic Mug", "Stoneware ceramic", "Pottery"),
        Product::new("Wood & Ceramic Planter", "Ceramic pot on a wood stand", "Home"),
        Product::new("Wool Scarf", "Knitted wool", "Textiles"),
        Product::new("Brass Lamp", "Hand-beaten brass", "Metalwork"),
    ];
    for i in 0..8 {
        products.push(Product::new(&format!("Spoon {i}"), "carved from wood", "Woodwork"));
    }
    CatalogService::new(ProductCatalog::new(products))
}

#[test]
fn recommend_only_returns_matching_products_best_first() {
    let ranked = catalog().recommend("wood,ceramic");

    assert!(ranked.len() <= MAX_RECOMMENDATIONS);
    assert_eq!(ranked[0].product.name, "Wood & Ceramic Planter");
    assert_eq!(ranked[0].score, 2);
    for entry in &ranked {
        let text = entry.product.search_text();
        assert!(text.contains("wood") || text.contains("ceramic"));
        assert!(entry.score >= 1);
    }
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn recommend_is_deterministic() {
    let svc = catalog();
    assert_eq!(svc.recommend("wool, brass"), svc.recommend("wool, brass"));
    assert_eq!(svc.recommend("wool, brass").len(), 2);
}

#[test]
fn search_and_category_filters() {
    let svc = catalog();
    assert_eq!(svc.search("WALNUT").len(), 1);
    assert_eq!(svc.by_category("woodwork").len(), 9);
    assert_eq!(svc.browse(Some("carved"), Some("Woodwork")).len(), 9);
    assert_eq!(svc.browse(Some("ceramic"), Some("all")).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn notifications_dismiss_after_display_and_fade() {
    let sink = Arc::new(RecordingSink::default());
    let notifier = Notifier::new(sink.clone());

    let saved = notifier.notify("Saved", Severity::Success);
    let oops = notifier.notify("Oops", Severity::Error);
    assert_eq!(sink.shown().len(), 2);

    tokio::time::sleep(DISPLAY_DURATION).await;
    assert!(sink.removed().is_empty());

    tokio::time::sleep(FADE_DURATION + Duration::from_millis(1)).await;
    let mut removed = sink.removed();
    removed.sort();
    assert_eq!(removed, vec![saved, oops]);
}
