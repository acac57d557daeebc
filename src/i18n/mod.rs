pub mod catalog;

pub use catalog::{Args, Catalog, Translate};
