use crate::ship::ShipClass;

pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 'C', 5),
    ShipClass::new("Battleship", 'B', 4),
    ShipClass::new("Destroyer", 'D', 3),
    ShipClass::new("Submarine", 'S', 3),
    ShipClass::new("Patrol Boat", 'P', 2),
];
/// Sum of all fleet lengths (5+4+3+3+2).
pub const TOTAL_SHIP_CELLS: usize = 17;
/// Initial saliency of every cell: 17 ship cells over 100 cells.
pub const UNIFORM_PRIOR: f64 = 0.17;
/// Factor applied to the saliency of each unshot orthogonal neighbor of a hit.
pub const ADJACENCY_BOOST: f64 = 1.5;
