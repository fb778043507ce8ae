use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &Props) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{&props.title}</div>
                <div class="stat-value text-primary">{&props.value}</div>
                {if let Some(description) = props.description.as_ref().filter(|d| !d.is_empty()) {
                    html! { <div class="stat-desc">{description}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
