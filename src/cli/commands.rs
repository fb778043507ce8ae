pub mod health;
pub mod predict;

pub use health::check_health;
pub use predict::predict;
