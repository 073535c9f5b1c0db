pub mod content;
pub mod diagnostics;
pub mod health;
pub mod registration;
