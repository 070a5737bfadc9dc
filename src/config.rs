use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;

/// Fleet placed on each board at the start of a default game.
pub const DEFAULT_FLEET: [ShipType; 3] = [
    ShipType::Destroyer,
    ShipType::Battleship,
    ShipType::Destroyer,
];

/// Random placement attempts per ship before generation gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
