/// App context
pub mod app_context;
/// Constants
pub mod constants;
/// Logger
pub mod logger;
/// Providers
pub mod providers;
