use flashbid_core::{discount_label, price_label};
use yew::prelude::*;

use crate::components::daisy_ui::{Badge, DaisyColor};

#[derive(Properties, Clone, PartialEq)]
pub struct SalePriceProps {
    pub price: f64,
    #[prop_or_default]
    pub discount: Option<f64>,
    /// Price after the discount.
    pub sale: f64,
}

/// Struck-through list price above the discounted price.
#[function_component(SalePrice)]
pub fn sale_price(props: &SalePriceProps) -> Html {
    html! {
        <div class="sale-price relative flex flex-col items-start gap-0.5 p-2 pr-12 border border-blue-600">
            <Badge
                class="absolute -top-2 left-1/2 -translate-x-1/2 uppercase text-white"
                variant={DaisyColor::Success}
                label={AttrValue::from(discount_label(props.discount))}
            />
            <span class="text-sm font-semibold line-through text-red-500" data-testid="list-price">
                { price_label(props.price) }
            </span>
            <span class="text-sm font-semibold text-white" data-testid="sale-price">
                { price_label(props.sale) }
            </span>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuctionPriceProps {
    pub price: f64,
}

#[function_component(AuctionPrice)]
pub fn auction_price(props: &AuctionPriceProps) -> Html {
    html! {
        <div class="auction-price flex flex-col items-start gap-0.5 p-2 border border-blue-600">
            <h4 class="text-xs uppercase text-green-500">{ "Highest Bid" }</h4>
            <span class="text-sm font-semibold text-white" data-testid="highest-bid">
                { price_label(props.price) }
            </span>
        </div>
    }
}
