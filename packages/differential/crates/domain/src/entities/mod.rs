pub mod catalog;
pub mod disorder;
pub mod symptom;

pub use catalog::Catalog;
pub use disorder::Disorder;
pub use symptom::Symptom;

/// Key used for every symptom and disorder name lookup.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
