mod board;
mod camp;
mod capture;
mod game;
mod legality;
mod r#move;
mod outcome;
mod piece;
mod role;
mod side;
mod snapshot;
mod square;
mod symbol;
mod tile;

pub use board::*;
pub use camp::*;
pub use capture::*;
pub use game::*;
pub use legality::*;
pub use outcome::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use side::*;
pub use snapshot::*;
pub use square::*;
pub use symbol::*;
pub use tile::*;
