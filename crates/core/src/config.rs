//! Evolution settings
//!
//! Read from ~/.config/aca/config.toml by the CLI and from JSON by the
//! browser front end. Missing keys take the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::automata::{rule_string_len, Dimension};
use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = r#"# aca configuration

# "1d" or "2d"
dimension = "2d"

# number of mating events (tournaments) to run
num_mevs = 10000
population_size = 100
tournament_size = 7

# states a cell can take, 0 is dead
num_states = 10
neighbourhood_size = 1

# size of the 1D board, or of one 2D layer
width = 201
height = 201
# layers grown for 2D automata, ignored in 1D
num_iters = 50

# first row (1D) or centre square (2D) of every board
start_population = [0, 1, 0, 1, 2, 1, 0, 1, 0]

max_cuts = 5
max_mutations = 15

output_file = "output.txt"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub dimension: Dimension,
    pub num_mevs: usize,
    pub population_size: usize,
    pub tournament_size: usize,
    pub num_states: usize,
    pub neighbourhood_size: u8,
    pub width: usize,
    pub height: usize,
    pub num_iters: usize,
    pub start_population: Vec<usize>,
    pub max_cuts: usize,
    pub max_mutations: usize,
    pub output_file: PathBuf,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Two,
            num_mevs: 10_000,
            population_size: 100,
            tournament_size: 7,
            num_states: 10,
            neighbourhood_size: 1,
            width: 201,
            height: 201,
            num_iters: 50,
            start_population: vec![0, 1, 0, 1, 2, 1, 0, 1, 0],
            max_cuts: 5,
            max_mutations: 15,
            output_file: PathBuf::from("output.txt"),
        }
    }
}

impl EvolutionConfig {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let path = Self::default_config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aca")
            .join("config.toml")
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write a commented default config if none exists yet
    pub fn create_default_if_missing() -> Result<()> {
        let path = Self::default_config_path();
        if path.exists() {
            return Ok(());
        }
        let io_err = |source| Error::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, DEFAULT_CONFIG).map_err(io_err)
    }

    /// Reject settings the engine would fail on halfway through a run
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::Config(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("board of {}x{} has no cells", self.width, self.height));
        }
        let rules = rule_string_len(self.dimension, self.num_states, self.neighbourhood_size)?;
        if let Some(state) = self.start_population.iter().find(|&&s| s >= self.num_states) {
            return invalid(format!(
                "start population state {state} exceeds {} states",
                self.num_states
            ));
        }
        if self.tournament_size < 2 || self.tournament_size > self.population_size {
            return invalid(format!(
                "tournament size {} must be between 2 and the population size {}",
                self.tournament_size, self.population_size
            ));
        }
        if self.max_cuts >= rules {
            return invalid(format!("max_cuts {} must be below the {rules} rules", self.max_cuts));
        }
        if self.max_mutations > rules {
            return invalid(format!(
                "max_mutations {} exceeds the {rules} rules",
                self.max_mutations
            ));
        }

        let len = self.start_population.len();
        match self.dimension {
            Dimension::One if len > self.width => {
                invalid(format!("start population of {len} cells is wider than {}", self.width))
            }
            Dimension::Two => {
                let side = (0..).find(|s: &usize| s * s >= len).unwrap_or_default();
                if side * side != len {
                    invalid(format!("2D start population of {len} cells is not a square"))
                } else if side > self.width || side > self.height {
                    invalid(format!(
                        "start square of side {side} does not fit {}x{}",
                        self.width, self.height
                    ))
                } else {
                    Ok(())
                }
            }
            Dimension::One => Ok(()),
        }
    }
}
