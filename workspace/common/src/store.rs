//! Prediction Store: the single shared prediction record.
//!
//! The store holds zero or one record. A replacement fully overwrites the
//! previous record; nothing is merged and nothing is kept as history.
//! Clones share one [`RequestSequence`], so a ticket issued through any clone
//! is judged against the same counter.

use std::cell::Cell;
use std::rc::Rc;

use crate::prediction::PredictionRecord;

/// Identifies one issued forecast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonically increasing request counter.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
}

impl RequestSequence {
    pub fn issue(&self) -> RequestTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        RequestTicket(next)
    }

    /// True when no request was issued after `ticket`.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued.get()
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        match self.issued.get() {
            0 => None,
            n => Some(RequestTicket(n)),
        }
    }
}

/// Result of offering a response to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Superseded,
}

#[derive(Debug, Clone, Default)]
pub struct PredictionStore {
    record: Option<Rc<PredictionRecord>>,
    sequence: Rc<RequestSequence>,
    revision: u64,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Rc<PredictionRecord>> {
        self.record.as_ref()
    }

    /// Replace the record unconditionally.
    pub fn set(&mut self, record: PredictionRecord) {
        self.replace(Rc::new(record));
    }

    /// Bumped on every replacement so subscribers can tell records apart.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn begin_request(&self) -> RequestTicket {
        let ticket = self.sequence.issue();
        tracing::debug!("Issued forecast request #{}", ticket.value());
        ticket
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.sequence.is_current(ticket)
    }

    /// Apply a successful response only if its ticket is the latest issued.
    pub fn resolve(&mut self, ticket: RequestTicket, record: Rc<PredictionRecord>) -> Resolution {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding superseded response #{} (latest is #{:?})",
                ticket.value(),
                self.sequence.latest().map(|t| t.value())
            );
            return Resolution::Superseded;
        }
        self.replace(record);
        Resolution::Applied
    }

    fn replace(&mut self, record: Rc<PredictionRecord>) {
        self.revision += 1;
        tracing::info!(
            "Prediction store updated for {} on {} (revision {})",
            record.city,
            record.date,
            self.revision
        );
        self.record = Some(record);
    }
}
