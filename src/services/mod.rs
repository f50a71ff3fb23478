pub mod catalog;
pub mod recommendations;
pub mod recommender;

pub use catalog::RecipeCatalog;
pub use recommender::{Recommender, ScalerFit};
