//! Use-Case-Funktionen für das Bearbeiten der Knot-Menge.
//!
//! Aufgeteilt nach Operation:
//! - `add_knot`: Neuen Knot hinzufügen
//! - `delete_knot`: Knot entfernen
//! - `move_knot`: Knot verschieben bzw. nach vorne holen

mod add_knot;
mod delete_knot;
mod move_knot;

pub use add_knot::add_knot_at_position;
pub use delete_knot::delete_knot;
pub use move_knot::{bring_knot_to_front, move_knot_to};
