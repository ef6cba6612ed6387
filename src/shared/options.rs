//! Zentrale Konfiguration für den Periodic Spline Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Spannweite ──────────────────────────────────────────────────────

/// Standard-Breite der Zeichenfläche = Periode der Kurve.
pub const SPAN_WIDTH: f64 = 800.0;
/// Standard-Höhe der Zeichenfläche (begrenzt y, spielt für die Mathematik keine Rolle).
pub const SPAN_HEIGHT: f64 = 300.0;

// ── Knots ───────────────────────────────────────────────────────────

/// Hit-Test- und Darstellungsradius eines Knots.
pub const KNOT_RADIUS: f64 = 10.0;
/// Anzahl automatisch erzeugter Knots, wenn keine Start-Knots konfiguriert sind.
pub const SEED_KNOT_COUNT: usize = 8;
/// Untere Grenze des y-Bands für erzeugte Knots (Anteil der Höhe).
pub const SEED_BAND_MIN: f64 = 0.4;
/// Breite des y-Bands für erzeugte Knots (Anteil der Höhe).
pub const SEED_BAND_SPAN: f64 = 0.2;

/// Füllfarbe normaler Knots (RGBA).
pub const KNOT_FILL: [f32; 4] = [0.94, 0.94, 0.94, 0.8];
/// Randfarbe normaler Knots.
pub const KNOT_STROKE: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
/// Füllfarbe des Knots unter dem Mauszeiger.
pub const KNOT_FILL_HOVERED: [f32; 4] = [0.57, 0.57, 0.67, 0.9];
/// Randfarbe des Knots unter dem Mauszeiger.
pub const KNOT_STROKE_HOVERED: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Füllfarbe des gezogenen Knots.
pub const KNOT_FILL_DRAGGED: [f32; 4] = [0.2, 0.2, 0.4, 1.0];
/// Randfarbe des gezogenen Knots.
pub const KNOT_STROKE_DRAGGED: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Kurve & Playhead ────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche.
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Linienfarbe der Kurve.
pub const CURVE_COLOR: [f32; 4] = [0.12, 0.12, 0.5, 1.0];
/// Linienstärke der Kurve.
pub const CURVE_THICKNESS: f32 = 3.0;
/// Abtastschritt der Kurve in x-Einheiten (1.0 = ein Sample pro Pixel).
pub const CURVE_SAMPLE_STEP: f64 = 1.0;
/// Linienfarbe des Playheads.
pub const PLAYHEAD_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke des Playheads.
pub const PLAYHEAD_THICKNESS: f32 = 2.0;
/// Start-Position des Playheads, damit er anfangs sichtbar ist.
pub const PLAYHEAD_START_X: f64 = 20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `periodic_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Spannweite ──────────────────────────────────────────────
    /// Breite der Zeichenfläche = Periode der Kurve (> 0)
    pub width: f64,
    /// Höhe der Zeichenfläche (> 0)
    pub height: f64,

    // ── Knots ───────────────────────────────────────────────────
    /// Hit-Test-Radius eines Knots
    pub knot_radius: f64,
    /// Start-Knots als `[x, y]`; `None` = zufällig erzeugen
    pub initial_knots: Option<Vec<[f64; 2]>>,
    /// Anzahl erzeugter Knots, falls keine Start-Knots gesetzt sind
    pub seed_knot_count: usize,
    /// Untere Grenze des y-Bands für erzeugte Knots (Anteil der Höhe)
    pub seed_band_min: f64,
    /// Breite des y-Bands für erzeugte Knots (Anteil der Höhe)
    pub seed_band_span: f64,
    /// Füllfarbe normaler Knots
    pub knot_fill: [f32; 4],
    /// Randfarbe normaler Knots
    pub knot_stroke: [f32; 4],
    /// Füllfarbe gehoverter Knots
    pub knot_fill_hovered: [f32; 4],
    /// Randfarbe gehoverter Knots
    pub knot_stroke_hovered: [f32; 4],
    /// Füllfarbe gezogener Knots
    pub knot_fill_dragged: [f32; 4],
    /// Randfarbe gezogener Knots
    pub knot_stroke_dragged: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Linienfarbe der Kurve
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve
    pub curve_thickness: f32,
    /// Abtastschritt der Kurve in x-Einheiten
    pub curve_sample_step: f64,

    // ── Playhead ────────────────────────────────────────────────
    /// Linienfarbe des Playheads
    pub playhead_color: [f32; 4],
    /// Linienstärke des Playheads
    pub playhead_thickness: f32,
    /// Start-Position des Playheads
    pub playhead_start_x: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: SPAN_WIDTH,
            height: SPAN_HEIGHT,

            knot_radius: KNOT_RADIUS,
            initial_knots: None,
            seed_knot_count: SEED_KNOT_COUNT,
            seed_band_min: SEED_BAND_MIN,
            seed_band_span: SEED_BAND_SPAN,
            knot_fill: KNOT_FILL,
            knot_stroke: KNOT_STROKE,
            knot_fill_hovered: KNOT_FILL_HOVERED,
            knot_stroke_hovered: KNOT_STROKE_HOVERED,
            knot_fill_dragged: KNOT_FILL_DRAGGED,
            knot_stroke_dragged: KNOT_STROKE_DRAGGED,

            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            curve_thickness: CURVE_THICKNESS,
            curve_sample_step: CURVE_SAMPLE_STEP,

            playhead_color: PLAYHEAD_COLOR,
            playhead_thickness: PLAYHEAD_THICKNESS,
            playhead_start_x: PLAYHEAD_START_X,
        }
    }
}

impl EditorOptions {
    /// Erstellt Standard-Optionen mit gegebener Spannweite.
    pub fn with_span(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Prüft die Werte, von denen Solver und Hit-Test abhängen.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.width.is_finite() && self.width > 0.0,
            "Breite muss positiv sein, ist {}",
            self.width
        );
        anyhow::ensure!(
            self.height.is_finite() && self.height > 0.0,
            "Höhe muss positiv sein, ist {}",
            self.height
        );
        anyhow::ensure!(
            self.knot_radius.is_finite() && self.knot_radius >= 0.0,
            "Knot-Radius darf nicht negativ sein, ist {}",
            self.knot_radius
        );
        anyhow::ensure!(
            self.curve_sample_step.is_finite() && self.curve_sample_step > 0.0,
            "Abtastschritt muss positiv sein, ist {}",
            self.curve_sample_step
        );
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("periodic_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("periodic_spline_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EditorOptions::default().validate().is_ok());
    }

    #[test]
    fn non_positive_width_is_rejected() {
        let options = EditorOptions::with_span(0.0, 100.0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let options: EditorOptions =
            toml::from_str("width = 100.0\ninitial_knots = [[0.0, 50.0], [50.0, 10.0]]\n")
                .expect("TOML gültig");
        assert_eq!(options.width, 100.0);
        assert_eq!(options.height, SPAN_HEIGHT);
        assert_eq!(options.knot_radius, KNOT_RADIUS);
        assert_eq!(options.initial_knots, Some(vec![[0.0, 50.0], [50.0, 10.0]]));
    }

    #[test]
    fn save_and_load_keep_values() {
        let dir = std::env::temp_dir().join(format!(
            "periodic_spline_editor_options_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
        let path = dir.join("options.toml");

        let mut options = EditorOptions::with_span(640.0, 200.0);
        options.knot_radius = 6.5;
        options.save_to_file(&path).expect("speicherbar");

        let loaded = EditorOptions::load_from_file(&path);
        assert_eq!(loaded, options);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let loaded = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/periodic_spline_editor.toml",
        ));
        assert_eq!(loaded, EditorOptions::default());
    }
}
