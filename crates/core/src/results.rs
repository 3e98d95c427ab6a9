//! Results file for an evolved population

use std::path::Path;

use serde::Serialize;

use crate::board::Board;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    /// One `<rules>, <fitness>` line per board
    #[default]
    Text,
    Json,
}

/// Evolved rule string and its fitness; `rules` is `None` for a board
/// without automata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardResult {
    pub rules: Option<String>,
    pub fitness: usize,
}

impl From<&Board> for BoardResult {
    fn from(board: &Board) -> Self {
        Self {
            rules: board.automata().map(crate::Automata::rules),
            fitness: board.fitness(),
        }
    }
}

pub fn format_results(boards: &[Board]) -> String {
    boards.iter().map(|b| b.result() + "\n").collect()
}

pub fn write_results(boards: &[Board], path: &Path, format: ResultFormat) -> Result<()> {
    let contents = match format {
        ResultFormat::Text => format_results(boards),
        ResultFormat::Json => {
            let results: Vec<BoardResult> = boards.iter().map(BoardResult::from).collect();
            serde_json::to_string_pretty(&results)?
        }
    };
    std::fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), boards = boards.len(), "Results written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::{Automata, Dimension};

    fn grown_board() -> Board {
        let a = Automata::from_rules(Dimension::One, 3, 1, vec![0, 0, 0, 0, 1, 0, 0]).unwrap();
        let mut board = Board::new(5, 3).unwrap();
        board.run(a, &[1, 2, 1], 1).unwrap();
        board
    }

    #[test]
    fn text_lines() {
        let boards = vec![grown_board(), Board::new(2, 2).unwrap()];
        assert_eq!(format_results(&boards), "0000100, 4\nNone\n");
    }

    #[test]
    fn json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let boards = [grown_board(), Board::new(2, 2).unwrap()];
        write_results(&boards, &path, ResultFormat::Json).unwrap();
        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["rules"], "0000100");
        assert_eq!(written[0]["fitness"], 4);
        assert!(written[1]["rules"].is_null());
        assert_eq!(written[1]["fitness"], 0);
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_results(&[], &path, ResultFormat::Text).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
