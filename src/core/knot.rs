//! Knot-Datentyp: ein vom Benutzer gesetzter Stützpunkt der Kurve.

use glam::DVec2;
use std::fmt;

/// Stabiler Handle eines Knots innerhalb eines `KnotSet`.
///
/// Die Identität eines Knots hängt am Handle, nicht an seinen Koordinaten:
/// zwei Knots mit gleicher Position bleiben unterscheidbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnotId(pub u64);

impl fmt::Display for KnotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stützpunkt `(x, y)`, durch den die Spline verlaufen muss.
///
/// `x` darf während eines Drags negativ werden oder die Spannweite
/// überschreiten, es wird nicht geklemmt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub x: f64,
    pub y: f64,
}

impl Knot {
    /// Erstellt einen Knot an den gegebenen Koordinaten.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Erstellt einen Knot aus einer Position.
    pub fn from_position(position: DVec2) -> Self {
        Self::new(position.x, position.y)
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Setzt die Position.
    pub fn set_position(&mut self, position: DVec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Euklidische Distanz zu einem Punkt.
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.position().distance(point)
    }

    /// Beide Koordinaten sind endlich (kein NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Knot {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Knot {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
