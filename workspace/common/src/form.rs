//! Input Controller state: city/date selection, busy flag and error slot.

use chrono::NaiveDate;
use std::rc::Rc;

use crate::error::ForecastError;
use crate::prediction::PredictionRecord;
use crate::request::{City, PredictionRequest};
use crate::store::{PredictionStore, RequestTicket, Resolution};

/// How a finished request affected the form and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Failed(String),
    /// A newer request was issued meanwhile; the response was dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestForm {
    city: City,
    date: NaiveDate,
    busy: bool,
    error: Option<String>,
}

impl RequestForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            city: City::default(),
            date: today,
            busy: false,
            error: None,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.busy
    }

    pub fn set_city(&mut self, city: City) {
        self.city = city;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Clear the previous error, mark busy and build the request body.
    pub fn begin(&mut self) -> PredictionRequest {
        self.error = None;
        self.busy = true;
        PredictionRequest::new(self.city, self.date)
    }

    /// Record the outcome of the latest request.
    pub fn finish(&mut self, error: Option<String>) {
        self.busy = false;
        self.error = error;
    }

    /// Update busy and error for a settled request. Superseded responses
    /// leave both alone: the busy flag belongs to the newer request.
    pub fn conclude(&mut self, settlement: &Settlement) {
        match settlement {
            Settlement::Applied => self.finish(None),
            Settlement::Failed(message) => self.finish(Some(message.clone())),
            Settlement::Superseded => {}
        }
    }

    /// Settle a response against the store, then conclude the form.
    pub fn settle(
        &mut self,
        store: &mut PredictionStore,
        ticket: RequestTicket,
        result: Result<PredictionRecord, ForecastError>,
    ) -> Settlement {
        let settlement = settle_response(store, ticket, result);
        self.conclude(&settlement);
        settlement
    }
}

/// Apply a response to the store if its ticket is still the latest issued.
///
/// Failures never touch the store, so a previously stored record survives.
pub fn settle_response(
    store: &mut PredictionStore,
    ticket: RequestTicket,
    result: Result<PredictionRecord, ForecastError>,
) -> Settlement {
    if !store.is_current(ticket) {
        tracing::debug!("Ignoring outcome of superseded request #{}", ticket.value());
        return Settlement::Superseded;
    }

    match result {
        Ok(record) => match store.resolve(ticket, Rc::new(record)) {
            Resolution::Applied => Settlement::Applied,
            Resolution::Superseded => Settlement::Superseded,
        },
        Err(err) => {
            tracing::warn!("Forecast request #{} failed: {}", ticket.value(), err);
            Settlement::Failed(err.user_message())
        }
    }
}
