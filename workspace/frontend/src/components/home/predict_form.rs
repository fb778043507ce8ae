//! Request form: owns the city/date selection and drives the forecast client.

use std::rc::Rc;

use chrono::NaiveDate;
use common::{settle_response, City, PredictionRequest, RequestForm, Settlement};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::prediction::request_prediction;
use crate::store::{PredictionHandle, StoreAction};

#[derive(Clone, PartialEq)]
struct FormState(RequestForm);

enum FormAction {
    SetCity(City),
    SetDate(NaiveDate),
    Begin,
    Conclude(Settlement),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::SetCity(city) => form.set_city(city),
            FormAction::SetDate(date) => form.set_date(date),
            FormAction::Begin => {
                form.begin();
            }
            FormAction::Conclude(settlement) => form.conclude(&settlement),
        }
        Rc::new(FormState(form))
    }
}

/// Local calendar date of the browser.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: PredictionHandle,
}

#[function_component(PredictForm)]
pub fn predict_form(props: &Props) -> Html {
    let form = use_reducer(|| FormState(RequestForm::new(today())));

    let on_city = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<City>() {
                Ok(city) => form.dispatch(FormAction::SetCity(city)),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                Ok(date) => form.dispatch(FormAction::SetDate(date)),
                Err(err) => log::warn!("Ignoring date {:?}: {}", input.value(), err),
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let store = props.store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.0.can_submit() {
                log::debug!("Submit ignored while a request is outstanding");
                return;
            }

            let request = PredictionRequest::new(form.0.city(), form.0.date());
            let ticket = store.store().begin_request();
            form.dispatch(FormAction::Begin);

            let form = form.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = request_prediction(&request).await;

                let mut next = store.store().clone();
                let settlement = settle_response(&mut next, ticket, result);
                if settlement == Settlement::Applied {
                    store.dispatch(StoreAction::Replace(next));
                }
                form.dispatch(FormAction::Conclude(settlement));
            });
        })
    };

    let selected = form.0.city();
    let label = if form.0.is_busy() { "Predicting..." } else { "Predict Hospital Load" };

    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Predict Hospital Load"}</h2>
                <p>{"Provide city and date to generate an AI-assisted surge plan."}</p>
                <form class="flex flex-col gap-4 max-w-md" onsubmit={on_submit}>
                    <label class="form-control">
                        <span class="label-text">{"City"}</span>
                        <select class="select select-bordered" onchange={on_city}>
                            { for City::ALL.iter().map(|city| html! {
                                <option key={city.as_str()} value={city.as_str()} selected={*city == selected}>
                                    {city.as_str()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Date"}</span>
                        <input
                            type="date"
                            class="input input-bordered"
                            value={form.0.date().format("%Y-%m-%d").to_string()}
                            onchange={on_date}
                        />
                    </label>
                    <button type="submit" class="btn btn-primary" disabled={!form.0.can_submit()}>
                        { label }
                    </button>
                    {if let Some(error) = form.0.error() {
                        html! {
                            <div class="alert alert-error">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{error}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </form>
            </div>
        </section>
    }
}
