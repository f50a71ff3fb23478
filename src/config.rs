use serde::Deserialize;

use crate::services::recommender::{Recommender, ScalerFit, DEFAULT_NEIGHBORS};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Neighbors looked up per favourite recipe, the favourite included
    #[serde(default = "default_recommender_neighbors")]
    pub recommender_neighbors: usize,

    /// `shared` or `independent` min-max scaling of favourites and catalog
    #[serde(default)]
    pub recommender_scaler: ScalerFit,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recommender_neighbors() -> usize {
    DEFAULT_NEIGHBORS
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Builds the recommender described by this configuration
    pub fn recommender(&self) -> anyhow::Result<Recommender> {
        Ok(Recommender::new(
            self.recommender_neighbors,
            self.recommender_scaler,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.recommender_neighbors, DEFAULT_NEIGHBORS);
        assert_eq!(config.recommender_scaler, ScalerFit::Shared);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("RECOMMENDER_NEIGHBORS", "5"),
            ("RECOMMENDER_SCALER", "independent"),
        ]);

        let recommender = config.recommender().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(recommender.neighbors(), 5);
        assert_eq!(recommender.scaler_fit(), ScalerFit::Independent);
    }

    #[test]
    fn test_rejects_single_neighbor() {
        let config = from_pairs(&[("RECOMMENDER_NEIGHBORS", "1")]);
        assert!(config.recommender().is_err());
    }
}
