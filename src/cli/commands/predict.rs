use anyhow::{bail, Result};
use chrono::NaiveDate;
use common::{City, PredictionStore, RequestForm, Settlement};
use tracing::{debug, info};

use crate::client::ForecastClient;
use crate::render::{render, ViewKind};

/// Issue one prediction request and render the requested view.
pub async fn predict(
    client: &ForecastClient,
    city: City,
    date: NaiveDate,
    view: ViewKind,
) -> Result<String> {
    let mut store = PredictionStore::new();
    let mut form = RequestForm::new(date);
    form.set_city(city);

    let request = form.begin();
    let ticket = store.begin_request();
    debug!("Requesting {} on {} from {}", request.city, request.date, client.api_base());

    let result = client.request_prediction(&request).await;
    match form.settle(&mut store, ticket, result) {
        Settlement::Applied => {
            info!("Prediction ready for {} on {}", city, date);
            Ok(render(&store, view))
        }
        Settlement::Failed(message) => bail!(message),
        Settlement::Superseded => bail!("request #{} was superseded", ticket.value()),
    }
}
