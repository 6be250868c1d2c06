//! Shared UI crate for Prepdeck. Most cross-platform logic and views live here.

pub mod core;
pub mod i18n;
pub mod profile;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
