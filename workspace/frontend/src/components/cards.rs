mod empty_state;
mod metric_card;

pub use empty_state::EmptyState;
pub use metric_card::MetricCard;
