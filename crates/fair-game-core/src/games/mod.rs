//! Move list, move selection, outcome resolution and the help table.

mod moves;
mod resolver;
mod selector;
mod table;

pub use moves::{MoveIndex, MoveList};
pub use resolver::resolve;
pub use selector::MoveSelector;
pub use table::{Relation, RelationTable, HEADER_CORNER};
