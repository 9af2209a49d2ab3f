//! UI layer for the dashboard: app shell, list panels, and modal forms.

pub mod app;
pub mod forms;
pub mod panels;
