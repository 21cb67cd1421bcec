/// Tablut domain types and rules.
pub mod tablut;
