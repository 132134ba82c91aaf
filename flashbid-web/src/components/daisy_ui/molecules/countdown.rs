use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct CountdownProps {
    /// Pre-formatted `DD:HH:MM:SS` text.
    pub display: f::AttrValue,
    #[prop_or_default]
    pub expired: bool,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> f::Html {
    let mut class = f::class_list(&["countdown", "flex", "flex-col", "items-center"], &props.class);
    if props.expired {
        class.push("countdown-expired");
    }
    let display = &props.display;
    f::html! {
        <div class={class} role="timer" aria-live="polite" data-expired={props.expired.to_string()}>
            { props.label.as_ref().map(|label| f::html! {
                <h4 class="text-xs uppercase">{ label.clone() }</h4>
            }).unwrap_or_default() }
            <span class="font-mono text-sm font-semibold" aria-label={format!("{display} remaining")}>
                { format!("{display}s") }
            </span>
        </div>
    }
}
