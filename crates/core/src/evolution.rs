//! Genetic search for apoptotic automata

use rand::Rng;

use crate::board::{make_boards, Board};
use crate::config::EvolutionConfig;
use crate::error::Result;
use crate::population::make_population;
use crate::tournament::tournament;

/// A population of grown boards evolving under tournament selection
pub struct Evolution<R> {
    config: EvolutionConfig,
    boards: Vec<Board>,
    mevs_run: usize,
    rng: R,
}

impl<R: Rng> Evolution<R> {
    /// Validate `config` and grow the initial random population
    pub fn new(config: EvolutionConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let population = make_population(
            config.dimension,
            config.population_size,
            config.num_states,
            config.neighbourhood_size,
            &mut rng,
        )?;
        let boards = make_boards(
            population,
            config.width,
            config.height,
            config.num_iters,
            &config.start_population,
        )?;
        tracing::info!(
            dimension = %config.dimension,
            population = boards.len(),
            apoptotic = boards.iter().filter(|b| b.apoptotic()).count(),
            "Initial population grown"
        );
        Ok(Self {
            config,
            boards,
            mevs_run: 0,
            rng,
        })
    }

    /// Run a single mating event
    pub fn step(&mut self) -> Result<()> {
        tournament(
            self.config.tournament_size,
            &mut self.boards,
            self.config.max_cuts,
            self.config.max_mutations,
            &self.config.start_population,
            self.config.num_iters,
            &mut self.rng,
        )?;
        self.mevs_run += 1;
        Ok(())
    }

    /// Run every configured mating event
    pub fn run(&mut self) -> Result<()> {
        let total = self.config.num_mevs;
        let report_every = (total / 10).max(1);
        for mev in 0..total {
            tracing::debug!(mev, "Mating event");
            self.step()?;
            if (mev + 1) % report_every == 0 {
                tracing::info!(
                    mev = mev + 1,
                    total,
                    best_fitness = self.best().map_or(0, Board::fitness),
                    "Evolution progress"
                );
            }
        }
        Ok(())
    }

    /// Fittest board, the earliest one on ties
    pub fn best(&self) -> Option<&Board> {
        self.boards
            .iter()
            .reduce(|best, b| if b.fitness() > best.fitness() { b } else { best })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub const fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub const fn mevs_run(&self) -> usize {
        self.mevs_run
    }

    /// Hand the random source back, e.g. to colour the result
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
