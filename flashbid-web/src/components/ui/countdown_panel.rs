use flashbid_core::{CountdownSettings, Deadline, ListingKind};
use yew::prelude::*;

use crate::components::daisy_ui::Countdown;
use crate::hooks::use_countdown;

#[derive(Properties, Clone, PartialEq)]
pub struct CountdownPanelProps {
    pub kind: ListingKind,
    #[prop_or_default]
    pub flash_deal_ends_in: Option<AttrValue>,
    #[prop_or_default]
    pub auction_ends_in: Option<AttrValue>,
    #[prop_or_default]
    pub settings: CountdownSettings,
}

/// Time left until the sale or auction ends, refreshed by the card's own ticker.
#[function_component(CountdownPanel)]
pub fn countdown_panel(props: &CountdownPanelProps) -> Html {
    let deadline = Deadline::select(
        props.kind,
        props.flash_deal_ends_in.as_deref(),
        props.auction_ends_in.as_deref(),
    );
    let state = use_countdown(props.kind, deadline, props.settings.clone());

    html! {
        <Countdown
            class="grow p-2 border border-yellow-600"
            label={AttrValue::from(props.kind.countdown_heading())}
            display={AttrValue::from(state.display().to_string())}
            expired={state.is_expired()}
        />
    }
}
