//! UI Components
//!
//! Navigation header and the pieces it is built from.

pub mod auth_form;
pub mod avatar;
pub mod icons;
pub mod navbar;
pub mod user_menu;

pub use navbar::Navbar;
