mod chart;
mod stats;
mod tags;
mod view;

pub use view::Forecast;
