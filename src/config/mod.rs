pub mod settings;

pub use settings::SourceDefaults;
