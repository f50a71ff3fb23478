use std::cmp::Ordering;

use super::{FeatureMatrix, RecommenderError};

/// A candidate row and its distance from the query vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f64,
}

/// Exact nearest-neighbor search over every candidate row
///
/// Catalogs are small, so each query scans all rows instead of going through
/// an approximate index.
pub struct BruteForceIndex<'a> {
    candidates: &'a FeatureMatrix,
}

impl<'a> BruteForceIndex<'a> {
    pub fn new(candidates: &'a FeatureMatrix) -> Self {
        Self { candidates }
    }

    /// Returns up to `k` candidates closest to `query`, nearest first
    ///
    /// Equal distances are ordered by row index. The `exclude` row, usually
    /// the query's own row, is never returned.
    pub fn kneighbors(
        &self,
        query: &[f64],
        k: usize,
        exclude: Option<usize>,
    ) -> Result<Vec<Neighbor>, RecommenderError> {
        if query.len() != self.candidates.cols() {
            return Err(RecommenderError::DimensionMismatch {
                expected: self.candidates.cols(),
                actual: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = (0..self.candidates.rows())
            .filter(|row| Some(*row) != exclude)
            .map(|row| Neighbor {
                row,
                distance: euclidean_distance(query, self.candidates.row(row)),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then(a.row.cmp(&b.row))
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
