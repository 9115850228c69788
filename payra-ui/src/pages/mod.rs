//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
