use flashbid_core::LikeToggle;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct LikeButtonProps {
    pub seed: LikeToggle,
}

/// Heart toggle with a local counter seeded from the listing.
///
/// The seed is only read on mount; later prop changes do not reset the
/// local state.
#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let toggle = use_state_eq({
        let seed = props.seed;
        move || seed
    });

    let onclick = {
        let toggle = toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.set(toggle.toggled()))
    };

    let liked = toggle.liked();
    let icon_class = if liked { "text-pink-600" } else { "text-zinc-500" };
    let count_class = if liked { "text-white" } else { "text-zinc-500" };

    html! {
        <div class="like-button flex items-center gap-0.5">
            <button
                type="button"
                class={classes!("btn", "btn-xs", "btn-ghost", icon_class)}
                aria-label="like"
                aria-pressed={liked.to_string()}
                data-testid="like-toggle"
                {onclick}
            >
                { "\u{2665}" }
            </button>
            <span class={count_class} data-testid="like-count">{ toggle.count().to_string() }</span>
        </div>
    }
}
