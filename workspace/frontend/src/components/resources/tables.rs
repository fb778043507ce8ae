use common::views::{CountRow, ListRow, SupplyRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountGridProps {
    pub title: AttrValue,
    pub rows: Vec<CountRow>,
}

/// One inset card per row, in server order.
#[function_component(CountGrid)]
pub fn count_grid(props: &CountGridProps) -> Html {
    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{&props.title}</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    { for props.rows.iter().map(|row| html! {
                        <div key={row.key.clone()} class="stat bg-base-200 rounded-box">
                            <div class="stat-title">{&row.key}</div>
                            <div class="stat-value">{row.count}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SupplyTableProps {
    pub title: AttrValue,
    pub rows: Vec<SupplyRow>,
}

#[function_component(SupplyTable)]
pub fn supply_table(props: &SupplyTableProps) -> Html {
    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{&props.title}</h3>
                <table class="table">
                    <thead>
                        <tr><th>{"Item"}</th><th>{"Estimate"}</th></tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td>{&row.key}</td>
                                <td>{row.estimate.to_string()}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub rows: Vec<ListRow>,
}

/// Checklist-style list; rows are keyed by their own text.
#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    let list = html! {
        <ul class="list-disc list-inside space-y-1">
            { for props.rows.iter().map(|row| html! {
                <li key={row.key.clone()}>{&row.key}</li>
            }) }
        </ul>
    };

    match &props.title {
        Some(title) => html! {
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{title}</h3>
                    {list}
                </div>
            </section>
        },
        None => list,
    }
}
