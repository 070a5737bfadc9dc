//! Ship types and orientations.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Class of ship. Lengths come from [`ShipType::length`] rather than the
/// discriminant value, so the mapping stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipType {
    Destroyer,
    Submarine,
    Cruiser,
    Battleship,
}

impl ShipType {
    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        match self {
            ShipType::Destroyer => 2,
            ShipType::Submarine => 3,
            ShipType::Cruiser => 4,
            ShipType::Battleship => 5,
        }
    }

    /// Display name of the ship.
    pub fn name(&self) -> &'static str {
        match self {
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
            ShipType::Cruiser => "Cruiser",
            ShipType::Battleship => "Battleship",
        }
    }
}

impl core::fmt::Display for ShipType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_classes() {
        assert_eq!(ShipType::Destroyer.length(), 2);
        assert_eq!(ShipType::Submarine.length(), 3);
        assert_eq!(ShipType::Cruiser.length(), 4);
        assert_eq!(ShipType::Battleship.length(), 5);
    }
}
