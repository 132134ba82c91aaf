use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub header: Option<f::Html>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "shadow-md", "rounded-md", "p-6"], &props.class);
    f::html! {
        <article class={class}>
            { props.header.clone().map(|header| f::html! {
                <header class="flex justify-between">{ header }</header>
            }).unwrap_or_default() }
            <div class="card-body p-0">
                { for props.children.iter() }
            </div>
            { props.actions.clone().map(|actions| f::html!{
                <footer class="card-actions mt-4">{ actions }</footer>
            }).unwrap_or_default() }
        </article>
    }
}
