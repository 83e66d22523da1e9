pub mod expense;
pub mod settings;
