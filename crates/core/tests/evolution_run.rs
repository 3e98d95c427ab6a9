use aca_core::automata::Automata;
use aca_core::board::{make_boards, Board};
use aca_core::population::make_2d_population;
use aca_core::results::{write_results, ResultFormat};
use aca_core::tournament::tournament;
use aca_core::{Dimension, Evolution, EvolutionConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Small version of the default 2D search, written to a results file
#[test]
fn two_dimensional_search() {
    let mut rng = StdRng::seed_from_u64(7);
    let start_population = [0, 1, 0, 1, 2, 1, 0, 1, 0];
    let automata = make_2d_population(10, 10, 1, &mut rng).unwrap();
    let mut boards = make_boards(automata, 51, 51, 50, &start_population).unwrap();

    for _ in 0..10 {
        tournament(7, &mut boards, 5, 15, &start_population, 50, &mut rng).unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    write_results(&boards, &path, ResultFormat::Text).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 10);
    for line in written.lines() {
        let (rules, fitness) = line.split_once(", ").unwrap();
        assert_eq!(rules.len(), 82);
        fitness.parse::<usize>().unwrap();
    }
}

#[test]
fn one_dimensional_tournament() {
    let mut rng = StdRng::seed_from_u64(8);
    let start_population = [1];
    let mut boards: Vec<Board> = (0..10)
        .map(|_| {
            let mut board = Board::new(100, 100).unwrap();
            board
                .run(Automata::new_1d(2, 1, &mut rng).unwrap(), &start_population, 1)
                .unwrap();
            board
        })
        .collect();
    tournament(4, &mut boards, 3, 3, &start_population, 1, &mut rng).unwrap();
    assert!(boards.iter().all(|b| b.automata().is_some()));
}

#[test]
fn evolution_from_config() {
    let config = EvolutionConfig {
        dimension: Dimension::One,
        num_mevs: 20,
        population_size: 8,
        tournament_size: 4,
        num_states: 4,
        width: 21,
        height: 21,
        start_population: vec![1, 3, 1],
        max_mutations: 5,
        ..EvolutionConfig::default()
    };
    let mut evolution = Evolution::new(config, StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(evolution.config().num_states, 4);
    assert_eq!(evolution.config().dimension, Dimension::One);
    evolution.run().unwrap();
    assert_eq!(evolution.mevs_run(), 20);
    let best = evolution.best().unwrap();
    assert!(best.fitness() == 0 || best.apoptotic());
}
