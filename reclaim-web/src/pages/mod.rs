mod error;
mod settings;
#[cfg(all(test, target_arch = "wasm32"))]
mod settings_test;

pub use error::ErrorPage;
pub use settings::SettingsPage;
