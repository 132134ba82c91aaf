use yew::prelude::*;

use crate::data;
use crate::pages::listing::{ListingPage, ListingPageProps};

#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |()| match data::storefront() {
        Ok((catalog, config)) => Ok(ListingPageProps::from_catalog(catalog, config.clone())),
        Err(err) => {
            log::error!("Failed to load listings: {err}");
            Err(err.to_string())
        }
    });

    match &*page {
        Ok(props) => html! { <ListingPage ..props.clone() /> },
        Err(message) => html! {
            <main id="main" role="main" class="container mx-auto p-4">
                <div class="alert alert-error" role="alert" data-testid="load-error">
                    { format!("Listings are unavailable: {message}") }
                </div>
            </main>
        },
    }
}
