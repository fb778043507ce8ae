mod tables;
mod view;

pub use view::Resources;
