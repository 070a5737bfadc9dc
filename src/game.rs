//! Game engine: two boards, one per player, and the move state machine.

use crate::board::{Board, Cell};
use crate::common::{BoardError, MoveResult, Point};
use crate::ship::ShipType;
use core::fmt;
use rand::Rng;

/// Core game state holding one board per player.
///
/// Moves against player `i` are evaluated on board `i`: each player's own
/// board records the shots fired at it.
pub struct GameEngine {
    boards: [Board; 2],
    size: usize,
}

impl GameEngine {
    /// Create an engine with two empty boards. Call [`initialize`] before
    /// playing.
    ///
    /// [`initialize`]: GameEngine::initialize
    pub fn new(size: usize) -> Self {
        GameEngine {
            boards: [Board::new(size), Board::new(size)],
            size,
        }
    }

    /// Build an engine from two prepared boards. Used by tests and callers
    /// that place ships manually.
    pub fn from_boards(boards: [Board; 2]) -> Self {
        let size = boards[0].size();
        GameEngine { boards, size }
    }

    /// Generate a fresh random board for each player, replacing any prior
    /// state.
    pub fn initialize<R: Rng>(
        &mut self,
        ships: &[ShipType],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        for slot in self.boards.iter_mut() {
            *slot = Board::generate(self.size, ships, rng)?;
        }
        log::info!("boards initialized with {} ships each", ships.len());
        Ok(())
    }

    /// Execute a move against `player_number`'s board and classify it.
    ///
    /// Out-of-bounds coordinates and repeated shots at a hit segment come
    /// back as [`MoveResult::InvalidMove`] without touching any state; the
    /// caller is expected to retry the same turn.
    pub fn do_move(&mut self, point: Point, player_number: usize) -> MoveResult {
        let result = self.boards[player_number].fire(point);
        log::debug!("player {} fired at {}: {:?}", player_number, point, result);
        result
    }

    pub fn board(&self, player_number: usize) -> &Board {
        &self.boards[player_number]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Renders both boards side by side: a lowercase letter header, then one
/// line per row with the two-digit 1-based row number, board 0's cells and
/// board 1's cells. `O` is an unhit empty cell, `X` a hit segment, a digit
/// an unhit segment showing its ship's length. Both fleets are shown in
/// full; there is no fog of war.
impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{} ", (b'a' + c as u8) as char)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:02} ", row + 1)?;
            for board in &self.boards {
                for col in 0..self.size {
                    match board.cell(Point::new(col, row)) {
                        Some(Cell::Segment { hit: true, .. }) => write!(f, "X ")?,
                        Some(Cell::Segment { ship, hit: false }) => {
                            write!(f, "{} ", board.ships()[ship].kind().length())?
                        }
                        _ => write!(f, "O ")?,
                    }
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
