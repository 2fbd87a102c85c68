pub mod conf;
pub mod engine;
pub mod logging;
pub mod policy;
pub mod runtime;
