//! Board state: the cell grid, the ship arena, placement and fire logic.

use crate::common::{BoardError, MoveResult, Point};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::ship::{Direction, ShipType};
use core::fmt;
use rand::Rng;

/// Index of a placed ship in the board's ship arena.
pub type ShipId = usize;

/// One square of the grid. Segment cells store the arena index of their ship
/// so every segment of one ship resolves to the same [`ShipRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Segment { ship: ShipId, hit: bool },
}

/// Arena entry for a placed ship: its type plus the coordinates of its
/// segments in placement order. Always exactly `kind.length()` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRecord {
    kind: ShipType,
    cells: Vec<Point>,
}

impl ShipRecord {
    pub fn kind(&self) -> ShipType {
        self.kind
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }
}

/// A single player's board: an N×N grid of cells plus the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<ShipRecord>,
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
        }
    }

    /// Generate a board with the given fleet placed at random positions.
    ///
    /// Each ship is retried at fresh random positions up to a bounded number
    /// of attempts; an infeasible fleet is rejected up front.
    pub fn generate<R: Rng>(
        size: usize,
        ships: &[ShipType],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        Self::check_feasible(size, ships)?;
        let mut board = Board::new(size);
        for &kind in ships {
            board.place_randomly(kind, rng)?;
        }
        Ok(board)
    }

    /// Reject fleets that can never be placed: a ship must have at least one
    /// valid anchor (`length + 1 <= size` under the overhang rule), and the
    /// fleet may fill at most half the board so random placement has slack.
    fn check_feasible(size: usize, ships: &[ShipType]) -> Result<(), BoardError> {
        let total: usize = ships.iter().map(|s| s.length()).sum();
        if ships.iter().any(|s| s.length() + 1 > size) || total * 2 > size * size {
            return Err(BoardError::InfeasibleFleet);
        }
        Ok(())
    }

    fn place_randomly<R: Rng>(&mut self, kind: ShipType, rng: &mut R) -> Result<(), BoardError> {
        let len = kind.length();
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = if rng.random() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            // The significant axis is sampled so the ship cannot overhang;
            // the other axis ranges over the whole board.
            let a = rng.random_range(0..self.size - len);
            let b = rng.random_range(0..self.size);
            let origin = match direction {
                Direction::Horizontal => Point::new(a, b),
                Direction::Vertical => Point::new(b, a),
            };
            if self.place_ship(kind, direction, origin).is_ok() {
                if attempt > 0 {
                    log::debug!("placed {} after {} retries", kind, attempt);
                }
                return Ok(());
            }
        }
        log::warn!(
            "gave up placing {} after {} attempts",
            kind,
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place a ship at `origin` extending in `direction`.
    ///
    /// Validation happens in full before any cell is written, so a failed
    /// placement leaves the board untouched. The anchor rule is strict:
    /// `significant + length >= size` is rejected, so the last valid anchor
    /// for a length-L ship is `size - L - 1`.
    pub fn place_ship(
        &mut self,
        kind: ShipType,
        direction: Direction,
        origin: Point,
    ) -> Result<(), BoardError> {
        if origin.x >= self.size || origin.y >= self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        let len = kind.length();
        let significant = match direction {
            Direction::Horizontal => origin.x,
            Direction::Vertical => origin.y,
        };
        if significant + len >= self.size {
            return Err(BoardError::ShipOverhangs);
        }
        let path: Vec<Point> = (0..len)
            .map(|i| match direction {
                Direction::Horizontal => Point::new(origin.x + i, origin.y),
                Direction::Vertical => Point::new(origin.x, origin.y + i),
            })
            .collect();
        if path.iter().any(|p| self.cells[self.index(*p)] != Cell::Empty) {
            return Err(BoardError::ShipOverlaps);
        }

        let id = self.ships.len();
        for &p in &path {
            let idx = self.index(p);
            self.cells[idx] = Cell::Segment { ship: id, hit: false };
        }
        self.ships.push(ShipRecord { kind, cells: path });
        Ok(())
    }

    /// Evaluate a shot at `point` and classify the outcome.
    ///
    /// Out-of-bounds shots and repeats at an already hit segment are
    /// [`MoveResult::InvalidMove`] and change nothing. Re-firing an empty
    /// cell stays a plain miss.
    pub fn fire(&mut self, point: Point) -> MoveResult {
        if point.x >= self.size || point.y >= self.size {
            return MoveResult::InvalidMove;
        }
        let idx = self.index(point);
        match self.cells[idx] {
            Cell::Empty => MoveResult::Miss,
            Cell::Segment { hit: true, .. } => MoveResult::InvalidMove,
            Cell::Segment { ship, hit: false } => {
                self.cells[idx] = Cell::Segment { ship, hit: true };
                if !self.is_ship_sunk(ship) {
                    return MoveResult::Hit;
                }
                let kind = self.ships[ship].kind;
                if self.all_segments_hit() {
                    MoveResult::PlayerWon(kind)
                } else {
                    MoveResult::HitAndDrown(kind)
                }
            }
        }
    }

    /// Whether every segment of the ship has been hit.
    pub fn is_ship_sunk(&self, id: ShipId) -> bool {
        self.ships[id]
            .cells
            .iter()
            .all(|p| matches!(self.cells[self.index(*p)], Cell::Segment { hit: true, .. }))
    }

    /// Board-wide win scan: every segment cell on the grid is hit.
    pub fn all_segments_hit(&self) -> bool {
        self.cells
            .iter()
            .all(|c| !matches!(c, Cell::Segment { hit: false, .. }))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `point`, or `None` when out of bounds.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if point.x >= self.size || point.y >= self.size {
            return None;
        }
        Some(self.cells[self.index(point)])
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    /// Number of grid cells occupied by ship segments.
    pub fn segment_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Segment { .. }))
            .count()
    }

    fn index(&self, point: Point) -> usize {
        point.y * self.size + point.x
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.size, self.size)?;
        for ship in &self.ships {
            writeln!(f, "  {:?}", ship)?;
        }
        write!(f, "}}")
    }
}
