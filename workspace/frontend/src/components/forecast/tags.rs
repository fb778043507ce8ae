use common::views::Tag;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub tags: Vec<Tag>,
}

#[function_component(TagList)]
pub fn tag_list(props: &Props) -> Html {
    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{&props.title}</h3>
                <ul class="flex flex-wrap gap-2">
                    { for props.tags.iter().map(|tag| html! {
                        <li key={tag.key.clone()} class="badge badge-outline badge-lg">{&tag.label}</li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
