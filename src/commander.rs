//! Move sources: where the next shot for a player comes from.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use crate::common::Point;
use rand::rngs::SmallRng;
use rand::Rng;

/// A source of moves for one player, pulled once per turn.
pub trait MoveCommander {
    fn next_move(&mut self) -> Point;
}

/// Parse a coordinate like `A10` into a zero-based point.
pub fn parse_coord(input: &str) -> Option<Point> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Point::new(col, row - 1))
}

/// Commander that prompts on the console and reads moves from stdin.
/// Malformed input is re-prompted here and never reaches the engine.
pub struct ConsoleMoveCommander;

impl ConsoleMoveCommander {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleMoveCommander {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveCommander for ConsoleMoveCommander {
    fn next_move(&mut self) -> Point {
        let stdin = io::stdin();
        loop {
            println!("Enter next move (e.g. A10)");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                continue;
            }
            match parse_coord(&line) {
                Some(point) => return point,
                None => println!("Could not understand the move. Try again"),
            }
        }
    }
}

/// Commander that fires uniformly at random, never repeating a coordinate
/// across its lifetime.
pub struct RandomMoveCommander {
    rng: SmallRng,
    size: usize,
    previous: HashSet<Point>,
}

impl RandomMoveCommander {
    pub fn new(size: usize, rng: SmallRng) -> Self {
        Self {
            rng,
            size,
            previous: HashSet::new(),
        }
    }
}

impl MoveCommander for RandomMoveCommander {
    fn next_move(&mut self) -> Point {
        loop {
            let point = Point::new(
                self.rng.random_range(0..self.size),
                self.rng.random_range(0..self.size),
            );
            if self.previous.insert(point) {
                return point;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parse_coord_accepts_letter_number() {
        assert_eq!(parse_coord("A10"), Some(Point::new(0, 9)));
        assert_eq!(parse_coord("b3"), Some(Point::new(1, 2)));
        assert_eq!(parse_coord("  J1 "), Some(Point::new(9, 0)));
    }

    #[test]
    fn parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("42"), None);
        assert_eq!(parse_coord("AB"), None);
    }

    #[test]
    fn random_commander_never_repeats() {
        let rng = SmallRng::seed_from_u64(7);
        let mut commander = RandomMoveCommander::new(4, rng);
        let mut seen = HashSet::new();
        for _ in 0..16 {
            assert!(seen.insert(commander.next_move()));
        }
    }
}
