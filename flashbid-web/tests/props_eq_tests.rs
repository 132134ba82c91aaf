use std::rc::Rc;

use flashbid_core::{Catalog, PageConfig};
use flashbid_web::components::ui::product_card::ProductCardProps;
use flashbid_web::pages::listing::ListingPageProps;

const CATALOG_JSON: &str = r#"[
    {"id":1,"tag":"a","name":"A","price":10,"hasOnSale":true,"flashDealEndsIn":"2030-01-01"},
    {"id":2,"tag":"b","name":"B","price":20,"hasOnSale":false,"auctionEndsIn":"2030-01-01"}
]"#;

#[test]
fn card_props_use_pointer_equality() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("catalog parses");
    let listing = Rc::new(catalog.listings[0].clone());
    let twin = Rc::new(catalog.listings[0].clone());
    let config = Rc::new(PageConfig::default());

    let a = ProductCardProps {
        listing: listing.clone(),
        config: config.clone(),
    };
    let b = ProductCardProps {
        listing,
        config: config.clone(),
    };
    assert!(a == b);

    let c = ProductCardProps {
        listing: twin,
        config,
    };
    assert!(a != c);
}

#[test]
fn page_props_wrap_listings_once() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("catalog parses");
    let props = ListingPageProps::from_catalog(&catalog, PageConfig::default());
    assert_eq!(props.listings.len(), 2);
    assert!(props == props.clone());

    let rebuilt = ListingPageProps::from_catalog(&catalog, PageConfig::default());
    assert!(props != rebuilt);
}
