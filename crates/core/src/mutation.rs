//! Genetic operators on rule strings

use rand::seq::index;
use rand::Rng;

use crate::automata::Automata;
use crate::error::{Error, Result};

/// Rewrite between 0 and `max_mutations` distinct rules with random states
///
/// Rule 0 is never touched, so dead neighbourhoods stay dead. A mutation
/// may draw the state that was already there.
pub fn mutate<R: Rng + ?Sized>(automata: &mut Automata, max_mutations: usize, rng: &mut R) -> Result<()> {
    let len = automata.rule_string.len();
    if max_mutations > len {
        return Err(Error::TooManyMutations { max: max_mutations, len });
    }
    let mutable = len.saturating_sub(1);
    let num_mutations = rng.gen_range(0..=max_mutations).min(mutable);
    for location in index::sample(rng, mutable, num_mutations) {
        automata.rule_string[location + 1] = rng.gen_range(0..automata.num_states);
    }
    Ok(())
}

/// Multi-point crossover between two compatible automata
///
/// Between 0 and `max_cuts` distinct cut points are chosen; walking the rule
/// strings, the parent each child copies from swaps at every cut. With no
/// cuts the children are the parents exchanged.
pub fn crossover<R: Rng + ?Sized>(
    first: &mut Automata,
    second: &mut Automata,
    max_cuts: usize,
    rng: &mut R,
) -> Result<()> {
    first.check_compatible(second)?;
    let len = first.rule_string.len();
    if max_cuts >= len {
        return Err(Error::TooManyCuts { max: max_cuts, len });
    }
    let num_cuts = rng.gen_range(0..=max_cuts);
    let mut cuts = index::sample(rng, len, num_cuts).into_vec();
    cuts.sort_unstable();

    let mut cuts = cuts.into_iter().peekable();
    let mut swap = false;
    for i in 0..len {
        if cuts.next_if_eq(&i).is_some() {
            swap = !swap;
        }
        if !swap {
            std::mem::swap(&mut first.rule_string[i], &mut second.rule_string[i]);
        }
    }
    Ok(())
}
