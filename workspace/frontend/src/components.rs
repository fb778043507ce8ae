pub mod cards;
pub mod forecast;
pub mod home;
pub mod layout;
pub mod resources;
