pub mod types;

pub use types::{Entry, Terminaro, Translation, Word};
