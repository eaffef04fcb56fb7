#![forbid(unsafe_code)]

pub mod routes;
pub mod views;
pub mod vm;

pub use routes::{Section, UnknownSection, render_nav};
pub use views::ViewError;
