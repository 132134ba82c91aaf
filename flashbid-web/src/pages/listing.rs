use std::rc::Rc;

use flashbid_core::{Catalog, Listing, PageConfig};
use yew::prelude::*;

use crate::components::ui::ProductCard;

#[derive(Properties, Clone)]
pub struct ListingPageProps {
    pub listings: Rc<Vec<Rc<Listing>>>,
    pub config: Rc<PageConfig>,
}

impl ListingPageProps {
    /// Wrap each listing once so cards keep pointer-stable props across renders.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, config: PageConfig) -> Self {
        Self {
            listings: Rc::new(catalog.iter().cloned().map(Rc::new).collect()),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for ListingPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listings, &other.listings) && Rc::ptr_eq(&self.config, &other.config)
    }
}

#[function_component(ListingPage)]
pub fn listing_page(props: &ListingPageProps) -> Html {
    html! {
        <main id="main" role="main" class="container mx-auto p-4 md:p-6 lg:p-8" data-testid="listing-page">
            <section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8 lg:gap-12">
                { for props.listings.iter().map(|listing| html! {
                    <ProductCard
                        key={listing.id.to_string()}
                        listing={Rc::clone(listing)}
                        config={Rc::clone(&props.config)}
                    />
                }) }
            </section>
        </main>
    }
}
