//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app`, `render` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::AppOptions;
