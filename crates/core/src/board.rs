//! Boards that automata grow on
//!
//! In 1D every row is the next generation of the row above it, so a board is
//! grown in a single pass. In 2D the board is one layer that is rewritten
//! from a snapshot of itself once per iteration. Neighbourhoods wrap around
//! the board edges in both cases.

use std::fmt::Write as _;

use crate::automata::{Automata, Dimension};
use crate::colour::Colour;
use crate::error::{Error, Result};

/// Grow one board per automata
pub fn make_boards(
    population: Vec<Automata>,
    width: usize,
    height: usize,
    num_iters: usize,
    start_population: &[usize],
) -> Result<Vec<Board>> {
    population
        .into_iter()
        .map(|automata| {
            let mut board = Board::new(width, height)?;
            board.run(automata, start_population, num_iters)?;
            Ok(board)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cell_states: Vec<Vec<usize>>,
    automata: Option<Automata>,
    apoptotic: bool,
    fitness: usize,
}

/// Index of the first cell of a wrapping window of `2 * radius + 1` cells
/// centred on `i`
const fn window_start(i: usize, radius: usize, len: usize) -> usize {
    (i + len - radius % len) % len
}

impl Board {
    /// Empty board; it counts as apoptotic until life touches a wall
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            cell_states: vec![vec![0; width]; height],
            automata: None,
            apoptotic: true,
            fitness: 0,
        })
    }

    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cell_states
    }

    pub const fn automata(&self) -> Option<&Automata> {
        self.automata.as_ref()
    }

    /// Current apoptotic flag; only final after [`Board::settle`]
    pub const fn apoptotic(&self) -> bool {
        self.apoptotic
    }

    pub const fn fitness(&self) -> usize {
        self.fitness
    }

    /// Clear the board, install `automata` and place the seed in the centre
    ///
    /// A 1D seed goes in the first row (odd padding goes to the right); a 2D
    /// seed must have a perfect-square length and is placed as a square. A
    /// rejected seed leaves the board untouched.
    pub fn fill(&mut self, automata: Automata, start_population: &[usize]) -> Result<()> {
        if let Some(&state) = start_population.iter().find(|&&s| s >= automata.num_states) {
            return Err(Error::StateOutOfRange {
                state,
                num_states: automata.num_states,
            });
        }
        let len = start_population.len();
        let side = match automata.dimension {
            Dimension::One => {
                if len > self.width {
                    return Err(Error::StartTooWide { len, width: self.width });
                }
                len
            }
            Dimension::Two => {
                let side = (0..).find(|s: &usize| s * s >= len).unwrap_or_default();
                if side * side != len {
                    return Err(Error::NotSquare(len));
                }
                if side > self.width || side > self.height {
                    return Err(Error::StartTooWide {
                        len: side,
                        width: self.width.min(self.height),
                    });
                }
                side
            }
        };

        self.clear();
        let left = (self.width - side) / 2;
        match automata.dimension {
            Dimension::One => {
                self.cell_states[0][left..left + len].copy_from_slice(start_population);
                if self.touches_wall_1d(0) {
                    self.apoptotic = false;
                }
            }
            Dimension::Two => {
                let top = (self.height - side) / 2;
                if side > 0 {
                    for (offset, seed_row) in start_population.chunks(side).enumerate() {
                        self.cell_states[top + offset][left..left + side].copy_from_slice(seed_row);
                    }
                }
                if self.touches_wall_2d() {
                    self.apoptotic = false;
                }
            }
        }

        self.fitness = start_population.iter().filter(|&&s| s != 0).count();
        self.automata = Some(automata);
        Ok(())
    }

    /// Apply the rule string once
    pub fn step(&mut self) -> Result<()> {
        let automata = self.automata.as_ref().ok_or(Error::MissingAutomata)?;
        let radius = usize::from(automata.neighbourhood_size);
        let span = 2 * radius + 1;
        let rules = &automata.rule_string;
        let lookup = |sum: usize| {
            rules.get(sum).copied().ok_or(Error::MissingRule { sum, len: rules.len() })
        };

        match automata.dimension {
            Dimension::One => {
                let mut touched = false;
                for i in 1..self.height {
                    for j in 0..self.width {
                        let left = window_start(j, radius, self.width);
                        let sum: usize = (0..span)
                            .map(|k| self.cell_states[i - 1][(left + k) % self.width])
                            .sum();
                        let state = lookup(sum)?;
                        if state != 0 {
                            self.fitness += 1;
                        }
                        self.cell_states[i][j] = state;
                    }
                    touched |= self.touches_wall_1d(i);
                }
                if touched {
                    self.apoptotic = false;
                }
            }
            Dimension::Two => {
                let prev = self.cell_states.clone();
                for j in 0..self.height {
                    let top = window_start(j, radius, self.height);
                    for k in 0..self.width {
                        let left = window_start(k, radius, self.width);
                        let mut sum = 0;
                        for dr in 0..span {
                            let row = &prev[(top + dr) % self.height];
                            for dc in 0..span {
                                sum += row[(left + dc) % self.width];
                            }
                        }
                        let state = lookup(sum)?;
                        if state != 0 {
                            self.fitness += 1;
                        }
                        self.cell_states[j][k] = state;
                    }
                }
                if self.touches_wall_2d() {
                    self.apoptotic = false;
                }
            }
        }
        Ok(())
    }

    /// Grow the seeded board and settle its fitness
    ///
    /// 1D boards are complete after one pass, so `num_iters` only applies to
    /// 2D boards, which stop early once life reaches a wall.
    pub fn grow(&mut self, num_iters: usize) -> Result<bool> {
        let dimension = self.automata.as_ref().ok_or(Error::MissingAutomata)?.dimension;
        match dimension {
            Dimension::One => self.step()?,
            Dimension::Two => {
                for _ in 0..num_iters {
                    if !self.apoptotic {
                        break;
                    }
                    self.step()?;
                }
            }
        }
        let apoptotic = self.settle()?;
        tracing::trace!(%dimension, apoptotic, fitness = self.fitness, "Board grown");
        Ok(apoptotic)
    }

    /// Final apoptosis check; non-apoptotic boards lose all fitness
    ///
    /// A 1D board must end in a dead row, a 2D board in an empty layer.
    pub fn settle(&mut self) -> Result<bool> {
        let automata = self.automata.as_ref().ok_or(Error::MissingAutomata)?;
        if self.apoptotic {
            let alive = match automata.dimension {
                Dimension::One => self.cell_states[self.height - 1].iter().any(|&c| c != 0),
                Dimension::Two => self.cell_states.iter().flatten().any(|&c| c != 0),
            };
            if alive {
                self.apoptotic = false;
            }
        }
        if !self.apoptotic {
            self.fitness = 0;
        }
        Ok(self.apoptotic)
    }

    /// Seed and grow `automata` from scratch
    pub fn run(&mut self, automata: Automata, start_population: &[usize], num_iters: usize) -> Result<bool> {
        self.fill(automata, start_population)?;
        self.grow(num_iters)
    }

    /// Remove cell states, automata and fitness
    pub fn clear(&mut self) {
        for row in &mut self.cell_states {
            row.fill(0);
        }
        self.automata = None;
        self.apoptotic = true;
        self.fitness = 0;
    }

    /// `<rules>, <fitness>`, or `None` for a board without automata
    pub fn result(&self) -> String {
        self.automata.as_ref().map_or_else(
            || "None".to_string(),
            |automata| format!("{}, {}", automata.rules(), self.fitness),
        )
    }

    /// Table rows for the board, one coloured cell per state
    ///
    /// The surrounding `<table>` element belongs to the page.
    pub fn to_html_table(&self, colours: &[Colour]) -> Result<String> {
        let mut contents = String::new();
        for row in &self.cell_states {
            contents.push_str("<tr>");
            for &state in row {
                let colour = colours.get(state).ok_or(Error::MissingColour(state))?;
                let _ = write!(
                    contents,
                    "<td class='cell' style='background-color: {};'></td>",
                    colour.css()
                );
            }
            contents.push_str("</tr>");
        }
        Ok(contents)
    }

    fn touches_wall_1d(&self, row: usize) -> bool {
        let cells = &self.cell_states[row];
        cells[0] != 0 || cells[self.width - 1] != 0
    }

    fn touches_wall_2d(&self) -> bool {
        let last = self.height - 1;
        self.cell_states[0].iter().any(|&c| c != 0)
            || self.cell_states[last].iter().any(|&c| c != 0)
            || self
                .cell_states
                .iter()
                .any(|row| row[0] != 0 || row[self.width - 1] != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_wraps() {
        assert_eq!(window_start(0, 1, 5), 4);
        assert_eq!(window_start(3, 1, 5), 2);
        // radius larger than the board still lands inside it
        assert_eq!(window_start(0, 7, 5), 3);
    }

    #[test]
    fn zero_sized_board() {
        assert!(matches!(Board::new(0, 3), Err(Error::EmptyBoard { .. })));
    }

    #[test]
    fn step_without_automata() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(matches!(board.step(), Err(Error::MissingAutomata)));
        assert!(matches!(board.settle(), Err(Error::MissingAutomata)));
        assert_eq!(board.result(), "None");
    }

    #[test]
    fn seed_on_wall_is_not_apoptotic() {
        let a = Automata::from_rules(Dimension::One, 2, 1, vec![0, 0, 0, 0]).unwrap();
        let mut board = Board::new(3, 2).unwrap();
        board.fill(a, &[1, 0, 0]).unwrap();
        assert!(!board.apoptotic());
    }

    #[test]
    fn html_table_needs_colours() {
        let a = Automata::from_rules(Dimension::One, 2, 0, vec![0, 1]).unwrap();
        let mut board = Board::new(1, 1).unwrap();
        board.fill(a, &[1]).unwrap();
        let black = Colour::new(0, 0, 0, 1.0).unwrap();
        assert!(matches!(board.to_html_table(&[black]), Err(Error::MissingColour(1))));
        let html = board.to_html_table(&[black, black]).unwrap();
        assert_eq!(
            html,
            "<tr><td class='cell' style='background-color: rgba(0, 0, 0, 1);'></td></tr>"
        );
    }
}
