//! Guitar tuning: either one of the fixed presets or a free-form string.
//!
//! Persisted as a tagged object `{"type": "preset"|"custom", "value": ...}`.
//! Early versions of the app stored a bare string instead; that legacy shape
//! is still accepted on read and normalized to `Custom` here, at the serde
//! boundary, so no other component has to know about it.

use serde::{Deserialize, Deserializer, Serialize};

/// A riff's tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tuning {
    /// One of the [`TUNING_PRESETS`] values.
    Preset { value: String },
    /// Anything the user typed in.
    Custom { value: String },
}

impl Tuning {
    pub fn preset(value: impl Into<String>) -> Self {
        Tuning::Preset {
            value: value.into(),
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Tuning::Custom {
            value: value.into(),
        }
    }

    /// The display value, regardless of variant.
    pub fn value(&self) -> &str {
        match self {
            Tuning::Preset { value } | Tuning::Custom { value } => value,
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedTuning {
    Preset { value: String },
    Custom { value: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TuningRepr {
    Tagged(TaggedTuning),
    Legacy(String),
}

impl<'de> Deserialize<'de> for Tuning {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match TuningRepr::deserialize(deserializer)? {
            TuningRepr::Tagged(TaggedTuning::Preset { value }) => Tuning::Preset { value },
            TuningRepr::Tagged(TaggedTuning::Custom { value }) => Tuning::Custom { value },
            TuningRepr::Legacy(value) => Tuning::Custom { value },
        })
    }
}

/// A named tuning preset offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningPreset {
    pub label: &'static str,
    pub value: &'static str,
}

/// The fixed presets offered by the tuning picker.
pub const TUNING_PRESETS: &[TuningPreset] = &[
    TuningPreset {
        label: "Standard (E-A-D-G-B-E)",
        value: "E-A-D-G-B-E",
    },
    TuningPreset {
        label: "Drop D (D-A-D-G-B-E)",
        value: "D-A-D-G-B-E",
    },
    TuningPreset {
        label: "Half Step Down (Eb-Ab-Db-Gb-Bb-Eb)",
        value: "Eb-Ab-Db-Gb-Bb-Eb",
    },
    TuningPreset {
        label: "Drop C (C-G-C-F-A-D)",
        value: "C-G-C-F-A-D",
    },
    TuningPreset {
        label: "Open D (D-A-D-F#-A-D)",
        value: "D-A-D-F#-A-D",
    },
    TuningPreset {
        label: "Open G (D-G-D-G-B-D)",
        value: "D-G-D-G-B-D",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_round_trip() {
        for tuning in [Tuning::preset("E-A-D-G-B-E"), Tuning::custom("C#-F#-B-E-G#-C#")] {
            let json = serde_json::to_string(&tuning).unwrap();
            let back: Tuning = serde_json::from_str(&json).unwrap();
            assert_eq!(tuning, back);
        }
    }

    #[test]
    fn preset_serializes_with_type_tag() {
        let json = serde_json::to_string(&Tuning::preset("D-A-D-G-B-E")).unwrap();
        assert_eq!(json, r#"{"type":"preset","value":"D-A-D-G-B-E"}"#);
    }

    #[test]
    fn legacy_bare_string_normalizes_to_custom() {
        let tuning: Tuning = serde_json::from_str(r#""Drop D""#).unwrap();
        assert_eq!(tuning, Tuning::custom("Drop D"));
    }

    #[test]
    fn value_ignores_variant() {
        assert_eq!(Tuning::preset("E-A-D-G-B-E").value(), "E-A-D-G-B-E");
        assert_eq!(Tuning::custom("whatever").value(), "whatever");
    }
}
