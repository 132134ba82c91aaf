use std::rc::Rc;

use flashbid_core::{Listing, ListingKind, PageConfig};
use yew::prelude::*;

use crate::components::daisy_ui::{Badge, Button, Card, DaisyColor};
use crate::components::ui::{AuctionPrice, CountdownPanel, LikeButton, SalePrice};
use crate::paths;

#[derive(Properties, Clone)]
pub struct ProductCardProps {
    pub listing: Rc<Listing>,
    pub config: Rc<PageConfig>,
}

impl PartialEq for ProductCardProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listing, &other.listing) && Rc::ptr_eq(&self.config, &other.config)
    }
}

fn kind_badge(kind: ListingKind) -> Html {
    let variant = match kind {
        ListingKind::FlashDeal => DaisyColor::Secondary,
        ListingKind::Auction => DaisyColor::Warning,
    };
    html! {
        <Badge outline=true variant={variant} class="text-white" label={AttrValue::from(kind.badge())} />
    }
}

fn actions(kind: ListingKind, name: &str) -> Html {
    match kind {
        ListingKind::FlashDeal => html! {
            <div class="flex w-full gap-2">
                <Button
                    block=true
                    outline=true
                    variant={DaisyColor::Neutral}
                    label="Add to cart"
                    aria_label={AttrValue::from(format!("Add {name} to cart"))}
                />
                <Button
                    block=true
                    variant={DaisyColor::Primary}
                    label="Buy now"
                    aria_label={AttrValue::from(format!("Buy {name} now"))}
                />
            </div>
        },
        ListingKind::Auction => html! {
            <Button
                block=true
                variant={DaisyColor::Primary}
                label="Bid now"
                aria_label={AttrValue::from(format!("Bid on {name}"))}
            />
        },
    }
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let listing = &props.listing;
    let config = &props.config;
    let kind = listing.kind();

    let header = html! {
        <>
            <Badge outline=true variant={DaisyColor::Neutral} label={AttrValue::from(config.hot_badge.clone())} />
            { kind_badge(kind) }
        </>
    };

    let price = match kind {
        ListingKind::FlashDeal => html! {
            <SalePrice
                price={listing.price}
                discount={listing.discount}
                sale={listing.sale_price()}
            />
        },
        ListingKind::Auction => html! { <AuctionPrice price={listing.price} /> },
    };

    html! {
        <Card
            class="product-card bg-blue-900"
            header={header}
            actions={actions(kind, &listing.name)}
        >
            <figure class="mt-4">
                <img
                    src={paths::image_src(&config.image_url)}
                    alt={listing.name.clone()}
                    class="h-48 w-full object-cover rounded-sm"
                />
            </figure>
            <div class="flex justify-between mt-4">
                <div class="flex flex-col items-start gap-0.5">
                    <h4 class="text-md font-medium text-white">{ listing.tag.clone() }</h4>
                    <span class="text-sm font-medium text-blue-500">{ listing.name.clone() }</span>
                </div>
                <LikeButton seed={listing.like_toggle()} />
            </div>
            <div class="flex gap-4 mt-6">
                { price }
                <CountdownPanel
                    kind={kind}
                    flash_deal_ends_in={listing.flash_deal_ends_in.clone().map(AttrValue::from)}
                    auction_ends_in={listing.auction_ends_in.clone().map(AttrValue::from)}
                    settings={config.countdown_settings()}
                />
            </div>
        </Card>
    }
}
