pub mod settings;

pub use settings::{MissingSettings, MyobSettings, ServerSettings, Settings};
