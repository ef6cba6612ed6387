//! Die zentrale KnotSet-Datenstruktur mit Z-Reihenfolge und Hit-Tests.

use super::{Knot, KnotId};
use glam::DVec2;
use indexmap::IndexMap;

/// Treffer eines Hit-Tests gegen das KnotSet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotHit {
    /// ID des getroffenen Knots
    pub knot_id: KnotId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Ungeordnete Menge von Knots mit stabiler Einfüge-Reihenfolge.
///
/// Die Reihenfolge ist die Render-/Hit-Test-Reihenfolge (zuletzt = oben)
/// und der Tie-Break beim Filtern doppelter x-Werte im Solver.
#[derive(Debug, Clone, Default)]
pub struct KnotSet {
    knots: IndexMap<KnotId, Knot>,
    next_id: u64,
}

impl KnotSet {
    /// Erstellt ein leeres KnotSet.
    pub fn new() -> Self {
        Self {
            knots: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Erstellt ein KnotSet aus einer Liste von Knots (in dieser Reihenfolge).
    pub fn from_knots(knots: impl IntoIterator<Item = Knot>) -> Self {
        let mut set = Self::new();
        for knot in knots {
            set.add(knot);
        }
        set
    }

    /// Fügt einen Knot am Ende der Z-Reihenfolge hinzu und gibt seine ID zurück.
    pub fn add(&mut self, knot: Knot) -> KnotId {
        // Default-konstruierte Sets starten bei 0
        let id = KnotId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.knots.insert(id, knot);
        id
    }

    /// Entfernt einen Knot. Die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: KnotId) -> Option<Knot> {
        self.knots.shift_remove(&id)
    }

    /// Entfernt alle Knots. Vergebene IDs werden nicht wiederverwendet.
    pub fn clear(&mut self) {
        self.knots.clear();
    }

    /// Setzt die Position eines Knots. Gibt `false` zurück, wenn die ID unbekannt ist.
    pub fn move_to(&mut self, id: KnotId, position: DVec2) -> bool {
        let Some(knot) = self.knots.get_mut(&id) else {
            return false;
        };
        knot.set_position(position);
        true
    }

    /// Verschiebt einen Knot ans Ende der Z-Reihenfolge (wird zuletzt gezeichnet).
    pub fn bring_to_front(&mut self, id: KnotId) -> bool {
        let Some(index) = self.knots.get_index_of(&id) else {
            return false;
        };
        let last = self.knots.len() - 1;
        self.knots.move_index(index, last);
        true
    }

    /// Liefert einen Knot per ID.
    pub fn get(&self, id: KnotId) -> Option<&Knot> {
        self.knots.get(&id)
    }

    /// Prüft, ob die ID existiert.
    pub fn contains(&self, id: KnotId) -> bool {
        self.knots.contains_key(&id)
    }

    /// Anzahl der Knots (inklusive Duplikate).
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Gibt `true` zurück, wenn keine Knots vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Iteriert über alle Knots in Z-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (KnotId, &Knot)> {
        self.knots.iter().map(|(id, knot)| (*id, knot))
    }

    /// Iteriert über alle Knots ohne IDs (Eingabe für den Solver).
    pub fn knots(&self) -> impl Iterator<Item = &Knot> {
        self.knots.values()
    }

    /// Alle IDs in Z-Reihenfolge.
    pub fn ids(&self) -> Vec<KnotId> {
        self.knots.keys().copied().collect()
    }

    /// Alle Knots, deren Distanz zu `point` höchstens `radius` beträgt.
    pub fn knots_under_point(&self, point: DVec2, radius: f64) -> Vec<KnotHit> {
        self.iter()
            .map(|(knot_id, knot)| KnotHit {
                knot_id,
                distance: knot.distance_to(point),
            })
            .filter(|hit| hit.distance <= radius)
            .collect()
    }

    /// Nächster Knot unter `point` innerhalb von `radius`.
    ///
    /// Bei exakt gleicher Distanz gewinnt der erste in Z-Reihenfolge.
    pub fn nearest_knot_under_point(&self, point: DVec2, radius: f64) -> Option<KnotHit> {
        nearest_hit(self.knots_under_point(point, radius))
    }
}

/// Wählt den Treffer mit der kleinsten Distanz; bei Gleichstand den ersten.
pub fn nearest_hit(hits: impl IntoIterator<Item = KnotHit>) -> Option<KnotHit> {
    hits.into_iter()
        .fold(None, |best: Option<KnotHit>, hit| match best {
            Some(current) if current.distance <= hit.distance => Some(current),
            _ => Some(hit),
        })
}
