mod latest;
mod predict_form;
mod view;

pub use view::Home;
