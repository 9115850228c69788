//! State Management
//!
//! Local UI state for the navigation header, kept free of DOM access so it
//! can be tested natively.

pub mod dropdown;
pub mod nav;
pub mod timer;
pub mod user;

pub use dropdown::DropdownMenu;
pub use nav::{NavItem, NavModel};
pub use timer::BrowserTimer;
pub use user::{UserProfile, DEMO_USER};
