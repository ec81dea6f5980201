//! Common helper UI components

mod loading_spinner;

pub use loading_spinner::LoadingSpinner;
