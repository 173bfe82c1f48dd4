pub mod cognito;
pub mod error;
pub mod prompt;
pub mod providers;
