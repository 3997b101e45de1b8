//! Reusable UI components

pub mod badge;
pub mod dialogs;
pub mod scrollbar_helper;
pub mod sentiment_chart;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod headlines_component;
pub mod home_component;
pub mod navbar_component;
pub mod tester_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use headlines_component::HeadlinesComponent;
pub use home_component::HomeComponent;
pub use navbar_component::NavbarComponent;
pub use tester_component::TesterComponent;
