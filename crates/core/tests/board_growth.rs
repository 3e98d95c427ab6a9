use aca_core::automata::{Automata, Dimension};
use aca_core::board::Board;
use aca_core::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn automata_1d(rules: Vec<usize>) -> Automata {
    Automata::from_rules(Dimension::One, 3, 1, rules).unwrap()
}

/// Seed states must exist in the automata
#[test]
fn start_state_out_of_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = Automata::new_1d(5, 2, &mut rng).unwrap();
    let mut board = Board::new(100, 100).unwrap();
    let err = board.fill(a, &[5, 2, 1]).unwrap_err();
    assert!(matches!(err, Error::StateOutOfRange { state: 5, num_states: 5 }));
}

#[test]
fn dead_seed_leaves_board_empty() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = Automata::new_2d(5, 3, &mut rng).unwrap();
    let mut board = Board::new(100, 100).unwrap();
    board.fill(a, &[0, 0, 0, 0]).unwrap();
    assert_eq!(board.cells(), vec![vec![0; 100]; 100].as_slice());
    assert_eq!(board.fitness(), 0);
}

#[test]
fn one_dimensional_growth_hits_wall() {
    let mut board = Board::new(5, 3).unwrap();
    board.fill(automata_1d(vec![0, 1, 2, 2, 0, 0, 1]), &[1, 2, 1]).unwrap();
    assert_eq!(
        board.cells(),
        [vec![0, 1, 2, 1, 0], vec![0, 0, 0, 0, 0], vec![0, 0, 0, 0, 0]]
    );
    board.step().unwrap();
    assert_eq!(
        board.cells(),
        [vec![0, 1, 2, 1, 0], vec![1, 2, 0, 2, 1], vec![0, 2, 0, 2, 0]]
    );
    assert!(!board.settle().unwrap());
    assert_eq!(board.fitness(), 0);
    assert!(!board.apoptotic());
}

#[test]
fn one_dimensional_apoptotic() {
    let mut board = Board::new(5, 3).unwrap();
    board.fill(automata_1d(vec![0, 0, 0, 0, 1, 0, 0]), &[1, 2, 1]).unwrap();
    board.step().unwrap();
    assert_eq!(
        board.cells(),
        [vec![0, 1, 2, 1, 0], vec![0, 0, 1, 0, 0], vec![0, 0, 0, 0, 0]]
    );
    assert_eq!(board.fitness(), 4);
    assert!(board.settle().unwrap());
    assert_eq!(board.fitness(), 4);
    assert_eq!(board.result(), "0000100, 4");
}

/// Iteration count is irrelevant for 1D boards
#[test]
fn one_dimensional_ignores_iterations() {
    let rules = vec![0, 0, 0, 0, 1, 0, 0];
    let mut once = Board::new(5, 3).unwrap();
    once.run(automata_1d(rules.clone()), &[1, 2, 1], 1).unwrap();
    let mut many = Board::new(5, 3).unwrap();
    many.run(automata_1d(rules), &[1, 2, 1], 40).unwrap();
    assert_eq!(once.cells(), many.cells());
    assert_eq!(once.fitness(), many.fitness());
}

#[test]
fn odd_padding_goes_right() {
    let mut board = Board::new(6, 1).unwrap();
    board.fill(automata_1d(vec![0; 7]), &[1, 1, 1]).unwrap();
    assert_eq!(board.cells(), [vec![0, 1, 1, 1, 0, 0]]);
}

#[test]
fn two_dimensional_growth() {
    let a2d = Automata {
        dimension: Dimension::Two,
        neighbourhood_size: 2,
        rule_string: vec![
            0, 1, 1, 2, 2, 0, 0, 0, 1, 0, 2, 0, 1, 1, 2, 2, 0, 0, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0,
            1, 0, 2, 0, 1, 1, 2, 2, 0, 0, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
        ],
        num_states: 3,
    };
    let mut board = Board::new(7, 7).unwrap();
    board.fill(a2d, &[1, 2, 0, 1]).unwrap();
    assert_eq!(
        board.cells(),
        [
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 2, 0, 0, 0],
            vec![0, 0, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]
    );
    board.step().unwrap();
    assert_eq!(
        board.cells(),
        [
            vec![1, 2, 2, 2, 2, 1, 0],
            vec![1, 2, 2, 2, 2, 2, 0],
            vec![1, 2, 2, 2, 2, 2, 0],
            vec![1, 2, 2, 2, 2, 2, 0],
            vec![1, 2, 2, 2, 2, 2, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]
    );
    assert!(!board.apoptotic());
    assert!(!board.settle().unwrap());
    assert_eq!(board.fitness(), 0);
}

#[test]
fn two_dimensional_seed_must_be_square() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Automata::new_2d(3, 1, &mut rng).unwrap();
    let mut board = Board::new(9, 9).unwrap();
    assert!(matches!(board.fill(a, &[1, 1, 1]), Err(Error::NotSquare(3))));
}

/// A seed that dies in one step without reaching a wall is apoptotic
#[test]
fn two_dimensional_apoptotic() {
    let a = Automata::from_rules(Dimension::Two, 2, 1, vec![0; 10]).unwrap();
    let mut board = Board::new(5, 5).unwrap();
    assert!(board.run(a, &[1], 3).unwrap());
    assert_eq!(board.fitness(), 1);
    assert_eq!(board.cells()[2][2], 0);
}

#[test]
fn clear_and_refill() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut board = Board::new(5, 5).unwrap();
    board.fill(Automata::new_1d(3, 1, &mut rng).unwrap(), &[1, 2, 1]).unwrap();
    board.step().unwrap();
    board.clear();
    assert!(board.automata().is_none());
    assert!(board.apoptotic());
    assert_eq!(board.fitness(), 0);
    board.fill(Automata::new_2d(2, 1, &mut rng).unwrap(), &[1, 1, 1, 1]).unwrap();
    assert_eq!(board.fitness(), 4);
}

/// Rules where a single live neighbour gives life and anything more kills,
/// with a neighbourhood covering the whole 5x5 board
fn spread_then_die() -> Automata {
    let mut rules = vec![0; 26];
    rules[1] = 1;
    Automata::from_rules(Dimension::Two, 2, 2, rules).unwrap()
}

/// Growth stops at the step that reaches a wall, however many iterations remain
#[test]
fn two_dimensional_stops_at_wall() {
    let mut one_step = Board::new(5, 5).unwrap();
    one_step.fill(spread_then_die(), &[1]).unwrap();
    one_step.step().unwrap();
    assert_eq!(one_step.cells(), vec![vec![1; 5]; 5].as_slice());

    let mut board = Board::new(5, 5).unwrap();
    assert!(!board.run(spread_then_die(), &[1], 50).unwrap());
    assert_eq!(board.cells(), one_step.cells());
    assert_eq!(board.fitness(), 0);
    assert!(!board.apoptotic());
}

/// A seed already on the wall is never stepped
#[test]
fn two_dimensional_seed_on_wall_skips_growth() {
    let dies = Automata::from_rules(Dimension::Two, 2, 1, vec![0; 10]).unwrap();
    let mut board = Board::new(5, 5).unwrap();
    assert!(!board.run(dies, &[1; 25], 10).unwrap());
    assert_eq!(board.cells(), vec![vec![1; 5]; 5].as_slice());
    assert_eq!(board.fitness(), 0);
}

/// A seed of the wrong shape leaves an already grown board as it was
#[test]
fn rejected_seed_keeps_board() {
    let mut board = Board::new(5, 3).unwrap();
    board.run(automata_1d(vec![0, 0, 0, 0, 1, 0, 0]), &[1, 2, 1], 1).unwrap();
    let cells = board.cells().to_vec();

    let mut rng = StdRng::seed_from_u64(5);
    let a2d = Automata::new_2d(3, 1, &mut rng).unwrap();
    assert!(matches!(board.fill(a2d, &[1, 1, 1]), Err(Error::NotSquare(3))));
    let a2d = Automata::new_2d(3, 1, &mut rng).unwrap();
    assert!(matches!(board.fill(a2d, &[1; 16]), Err(Error::StartTooWide { len: 4, .. })));
    assert!(matches!(
        board.fill(automata_1d(vec![0; 7]), &[1; 6]),
        Err(Error::StartTooWide { len: 6, width: 5 })
    ));

    assert_eq!(board.result(), "0000100, 4");
    assert_eq!(board.cells(), cells.as_slice());
    assert!(board.apoptotic());
}
