//! Board representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The 3x3 grid.
///
/// The board only knows which mark sits in which cell. Whose turn it is, and
/// the alternating-turn invariant, belong to the caller (see
/// [`Game`](super::Game)). The type is `Copy` and 9 bytes wide, but the search
/// engine explores by mutating one instance in place through [`Board::scoped_place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and `|` separators are ignored; exactly 9 cell characters
    /// (`X`, `O`, and `.`/`_` for empty) must remain.
    ///
    /// # Errors
    ///
    /// Returns error if any other number of cell characters remains or any
    /// character is not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XX. | OO. | ...").unwrap();
    /// assert_eq!(board.get(0), Cell::X);
    /// assert_eq!(board.get(5), Cell::Empty);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Count pieces on the board.
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Infer whose turn it is from the mark counts, assuming X opened.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when the counts cannot arise
    /// from alternating play.
    pub fn next_player(&self) -> Result<Player, crate::Error> {
        let count = self.piece_count();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All empty-cell indices in ascending order.
    ///
    /// Unlike [`Board::is_terminal`] this does not look at wins: a board that
    /// has already been won can still report empty cells.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// True when no cell is empty.
    ///
    /// Check [`Board::has_won`] first: a full board carrying a winning line is
    /// a win, not a draw.
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for `cell >= 9` and
    /// [`crate::Error::InvalidMove`] when the cell is occupied.
    pub fn place(&mut self, cell: usize, player: Player) -> Result<(), crate::Error> {
        if cell >= 9 {
            return Err(crate::Error::InvalidPosition { position: cell });
        }
        if !self.is_empty(cell) {
            return Err(crate::Error::InvalidMove { position: cell });
        }
        self.cells[cell] = player.to_cell();
        Ok(())
    }

    /// Reset a cell to empty.
    ///
    /// # Panics
    ///
    /// Panics if `cell >= 9`.
    pub fn remove(&mut self, cell: usize) {
        self.cells[cell] = Cell::Empty;
    }

    /// Place a mark for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board, so the caller can keep exploring
    /// through it; the mark is removed when the guard is dropped, whichever way
    /// the enclosing scope is left.
    ///
    /// The cell must be empty and in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Player};
    ///
    /// let mut board = Board::new();
    /// {
    ///     let placed = board.scoped_place(4, Player::X);
    ///     assert!(!placed.is_empty(4));
    /// }
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn scoped_place(&mut self, cell: usize, player: Player) -> Placement<'_> {
        debug_assert!(self.is_empty(cell), "scoped_place on occupied cell {cell}");
        self.cells[cell] = player.to_cell();
        Placement { board: self, cell }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Classify the board: a win for either player first, then a draw.
    ///
    /// Returns `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Human-facing grid with `|` separated cells and `--+---+--` rules.
    pub fn render(&self) -> String {
        let symbol = |cell: Cell| match cell {
            Cell::Empty => ' ',
            other => other.to_char(),
        };
        let rows: Vec<String> = self
            .cells
            .chunks(3)
            .map(|row| {
                format!(
                    "{} | {} | {}",
                    symbol(row[0]),
                    symbol(row[1]),
                    symbol(row[2])
                )
            })
            .collect();
        rows.join("\n--+---+--\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A mark placed by [`Board::scoped_place`], retracted on drop.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl Placement<'_> {
    /// The cell this guard will clear
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove(self.cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.next_player().unwrap(), Player::X);
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Cell::X);

        let err = board.place(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));

        let err = board.place(9, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPosition { position: 9 }));

        board.remove(4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board = Board::from_string("X.O .X. O..").unwrap();
        assert_eq!(board.legal_moves(), vec![1, 3, 5, 7, 8]);

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert!(full.legal_moves().is_empty());
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert!(!board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert!(board.is_draw());
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board = Board::from_string("XXX OOX OXO").unwrap();
        assert!(board.is_draw());
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_in_progress_has_no_outcome() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        assert_eq!(board.outcome(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_scoped_place_restores_board() {
        let mut board = Board::from_string("X.. .O. ...").unwrap();
        let before = board;
        {
            let mut outer = board.scoped_place(2, Player::X);
            assert_eq!(outer.get(2), Cell::X);
            {
                let inner = outer.scoped_place(8, Player::O);
                assert_eq!(inner.cell(), 8);
                assert_eq!(inner.get(8), Cell::O);
            }
            assert_eq!(outer.get(8), Cell::Empty);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_string_errors() {
        let err = Board::from_string("XO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 2,
                ..
            }
        ));

        let err = Board::from_string("XO?......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: '?',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string_rejects_extra_cells() {
        let err = Board::from_string("XOXOXOXOXO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string_spaces_separate_rather_than_fill() {
        assert!(matches!(
            Board::from_string("X X O O X"),
            Err(crate::Error::InvalidBoardLength { got: 5, .. })
        ));
        let board = Board::from_string(" X.O | .X. | ..O ").unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\n..O");
        assert_eq!(Cell::from_char(' '), None);
    }

    #[test]
    fn test_next_player_rejects_imbalance() {
        let board = Board::from_string("XXX......").unwrap();
        assert!(matches!(
            board.next_player(),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.next_player().unwrap(), Player::O);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X.O.X...O").unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\n..O");
    }

    #[test]
    fn test_render() {
        let board = Board::from_string("X.O.X...O").unwrap();
        assert_eq!(
            board.render(),
            "X |   | O\n--+---+--\n  | X |  \n--+---+--\n  |   | O"
        );
    }
}
