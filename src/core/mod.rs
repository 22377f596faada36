pub mod engine;
pub mod index;
pub mod record;
pub mod types;
