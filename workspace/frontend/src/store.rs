//! Yew binding of the shared prediction store.
//!
//! The App component owns the reducer and hands the handle to each view as a
//! prop; dispatching a replacement re-renders every mounted view.

use std::rc::Rc;

use common::PredictionStore;
use yew::prelude::*;

pub type PredictionHandle = UseReducerHandle<StoreState>;

#[derive(Debug, Clone, Default)]
pub struct StoreState(PredictionStore);

impl StoreState {
    pub fn store(&self) -> &PredictionStore {
        &self.0
    }
}

// Records are immutable once stored, so the revision identifies the state.
impl PartialEq for StoreState {
    fn eq(&self, other: &Self) -> bool {
        self.0.revision() == other.0.revision()
    }
}

pub enum StoreAction {
    /// A store the request settled against, holding the new record.
    Replace(PredictionStore),
}

impl Reducible for StoreState {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StoreAction::Replace(next) if next.revision() > self.0.revision() => {
                Rc::new(StoreState(next))
            }
            StoreAction::Replace(next) => {
                log::debug!(
                    "Ignoring store at revision {} (current {})",
                    next.revision(),
                    self.0.revision()
                );
                self
            }
        }
    }
}
