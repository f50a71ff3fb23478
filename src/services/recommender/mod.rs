//! Content-based recipe recommender.
//!
//! Recipes are encoded as numeric feature rows (difficulty, time, author and
//! one-hot categories/ingredients), min-max scaled, and compared by Euclidean
//! distance. Each favourite contributes its nearest neighbors from the
//! catalog; the union of those neighbors, minus the favourites themselves,
//! is the recommendation.
//!
//! Everything here is a pure function of its inputs and keeps no state
//! between calls.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Category, Ingredient, Recipe, RecipeId};

pub mod encoder;
pub mod error;
pub mod matrix;
pub mod neighbors;
pub mod scaler;

pub use encoder::{encode, EncodedCatalog};
pub use error::RecommenderError;
pub use matrix::FeatureMatrix;
pub use neighbors::{BruteForceIndex, Neighbor};
pub use scaler::{MinMaxScaler, ScalerFit};

/// Neighbors looked up per favourite, the favourite itself included
pub const DEFAULT_NEIGHBORS: usize = 3;

/// Recommends recipes similar to a user's favourites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommender {
    neighbors: usize,
    scaler_fit: ScalerFit,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            scaler_fit: ScalerFit::default(),
        }
    }
}

impl Recommender {
    /// Creates a recommender that looks up `neighbors` recipes per favourite
    ///
    /// The favourite counts as one of its own neighbors, so each favourite
    /// yields at most `neighbors - 1` recommendations.
    pub fn new(neighbors: usize, scaler_fit: ScalerFit) -> Result<Self, RecommenderError> {
        if neighbors < 2 {
            return Err(RecommenderError::InvalidNeighbors(neighbors));
        }
        Ok(Self {
            neighbors,
            scaler_fit,
        })
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn scaler_fit(&self) -> ScalerFit {
        self.scaler_fit
    }

    /// Finds recipes from `catalog` that resemble the `favourites`
    ///
    /// Favourites missing from the catalog are skipped. The result never
    /// contains a favourite and holds at most `(neighbors - 1)` recipes per
    /// favourite.
    pub fn recommend(
        &self,
        favourites: &[Recipe],
        catalog: &[Recipe],
        categories: &[Category],
        ingredients: &[Ingredient],
    ) -> Result<BTreeSet<RecipeId>, RecommenderError> {
        if favourites.is_empty() || catalog.is_empty() {
            tracing::debug!(
                favourites = favourites.len(),
                catalog = catalog.len(),
                "Nothing to recommend"
            );
            return Ok(BTreeSet::new());
        }

        // 1. Encode the whole catalog
        let encoded = encode(catalog, categories, ingredients)?;

        // 2. Locate the favourites among the catalog rows
        let mut reference_rows = Vec::with_capacity(favourites.len());
        for favourite in favourites {
            match encoded.row_of(favourite.id) {
                Some(row) if !reference_rows.contains(&row) => reference_rows.push(row),
                Some(_) => {}
                None => {
                    tracing::debug!(recipe = %favourite.id, "Favourite not in catalog, skipping");
                }
            }
        }

        if reference_rows.is_empty() {
            return Ok(BTreeSet::new());
        }

        // 3. Scale references and candidates
        let (references, candidates) = self.scale(&encoded.features, &reference_rows)?;

        // 4. Look up neighbors of each favourite and merge them
        let favourite_ids: HashSet<RecipeId> = favourites.iter().map(|r| r.id).collect();
        let index = BruteForceIndex::new(&candidates);
        let mut recommended = BTreeSet::new();

        for (i, &row) in reference_rows.iter().enumerate() {
            let neighbors = index.kneighbors(references.row(i), self.neighbors - 1, Some(row))?;

            tracing::debug!(
                recipe = %encoded.recipe_at(row),
                neighbors = ?neighbors.iter().map(|n| encoded.recipe_at(n.row)).collect::<Vec<_>>(),
                "Nearest recipes"
            );

            recommended.extend(
                neighbors
                    .iter()
                    .map(|n| encoded.recipe_at(n.row))
                    .filter(|id| !favourite_ids.contains(id)),
            );
        }

        tracing::debug!(
            favourites = reference_rows.len(),
            recommended = recommended.len(),
            "Recommendations computed"
        );

        Ok(recommended)
    }

    /// Returns `(references, candidates)` scaled according to `scaler_fit`
    fn scale(
        &self,
        features: &FeatureMatrix,
        reference_rows: &[usize],
    ) -> Result<(FeatureMatrix, FeatureMatrix), RecommenderError> {
        match self.scaler_fit {
            ScalerFit::Shared => {
                let candidates = MinMaxScaler::fit(features).transform(features)?;
                let references = candidates.select_rows(reference_rows);
                Ok((references, candidates))
            }
            ScalerFit::Independent => {
                let references = MinMaxScaler::fit_transform(&features.select_rows(reference_rows));
                let candidates = MinMaxScaler::fit_transform(features);
                Ok((references, candidates))
            }
        }
    }
}

/// Recommends with the default settings: three neighbors, shared scaling
pub fn recommend(
    favourites: &[Recipe],
    catalog: &[Recipe],
    categories: &[Category],
    ingredients: &[Ingredient],
) -> Result<BTreeSet<RecipeId>, RecommenderError> {
    Recommender::default().recommend(favourites, catalog, categories, ingredients)
}
