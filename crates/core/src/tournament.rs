//! Tournament selection
//!
//! One tournament is one mating event: the two fittest boards of a random
//! sample breed, and their children are grown in place of the two least fit.

use rand::seq::index;
use rand::Rng;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::mutation::{crossover, mutate};

/// Run one mating event over `population`
///
/// Ties between equally fit boards go to the earliest sample position when
/// choosing parents and to the latest when choosing who is replaced. With a
/// sample of two the children replace their parents.
pub fn tournament<R: Rng + ?Sized>(
    tournament_size: usize,
    population: &mut [Board],
    max_cuts: usize,
    max_mutations: usize,
    start_population: &[usize],
    num_iters: usize,
    rng: &mut R,
) -> Result<()> {
    if tournament_size < 2 || tournament_size > population.len() {
        return Err(Error::InvalidTournamentSize {
            size: tournament_size,
            population: population.len(),
        });
    }

    let sample = index::sample(rng, population.len(), tournament_size).into_vec();
    let fitness: Vec<usize> = sample.iter().map(|&i| population[i].fitness()).collect();

    let (best, second) = max_two_indices(&fitness);
    let mut child1 = population[sample[best]]
        .automata()
        .ok_or(Error::MissingAutomata)?
        .clone();
    let mut child2 = population[sample[second]]
        .automata()
        .ok_or(Error::MissingAutomata)?
        .clone();

    crossover(&mut child1, &mut child2, max_cuts, rng)?;
    mutate(&mut child1, max_mutations, rng)?;
    mutate(&mut child2, max_mutations, rng)?;

    let (worst, runner_up) = min_two_indices(&fitness);
    tracing::debug!(
        parents = ?(sample[best], sample[second]),
        replaced = ?(sample[worst], sample[runner_up]),
        "Tournament"
    );
    population[sample[worst]].run(child1, start_population, num_iters)?;
    population[sample[runner_up]].run(child2, start_population, num_iters)?;
    Ok(())
}

/// Indices of the two largest values, `(max1, max2)` with `s[max2] <= s[max1]`
///
/// Scans forwards, so among equal values the earliest win.
fn max_two_indices(s: &[usize]) -> (usize, usize) {
    debug_assert!(s.len() > 1);
    let (mut max1, mut max2) = if s[0] < s[1] { (1, 0) } else { (0, 1) };
    for i in 2..s.len() {
        if s[max1] < s[i] {
            max2 = max1;
            max1 = i;
        } else if s[max2] < s[i] {
            max2 = i;
        }
    }
    (max1, max2)
}

/// Indices of the two smallest values, `(min1, min2)` with `s[min1] <= s[min2]`
///
/// Scans backwards, so among equal values the latest win.
fn min_two_indices(s: &[usize]) -> (usize, usize) {
    debug_assert!(s.len() > 1);
    let last = s.len() - 1;
    let (mut min1, mut min2) = if s[last - 1] < s[last] {
        (last - 1, last)
    } else {
        (last, last - 1)
    };
    for i in (0..last - 1).rev() {
        if s[i] < s[min1] {
            min2 = min1;
            min1 = i;
        } else if s[i] < s[min2] {
            min2 = i;
        }
    }
    (min1, min2)
}
