pub mod rank;
pub mod related;
pub mod stats;
pub mod symptoms;
