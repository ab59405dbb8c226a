//! Page components, one per route.

pub mod admin;
pub mod admin_login;
pub mod home;
