pub mod grid;
pub mod session;

pub use grid::{Cell, CellColor, Grid};
pub use session::{PuzzleSession, SessionState};
