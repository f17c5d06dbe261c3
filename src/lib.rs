pub mod api;
pub mod client;
pub mod controller;
pub mod render;
pub mod shell;
pub mod status;

pub use client::DashboardClient;
pub use controller::{Action, DashboardController, TestMessage};
pub use render::{Banner, Severity};
pub use status::StatusRegion;
