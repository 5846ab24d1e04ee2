//! Language profiles.

use serde::{Deserialize, Serialize};

use crate::error::{require_text, Result};

/// Channels a language can be spoken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Voice,
}

/// How well the brain handles a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Native,
    Fluent,
    Working,
}

fn default_modalities() -> Vec<Modality> {
    vec![Modality::Text]
}

/// A language the brain can answer in, keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub code: String,
    pub name: String,
    #[serde(default = "default_modalities")]
    pub modalities: Vec<Modality>,
    pub proficiency: Proficiency,
    /// Free-text areas this language is used for.
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

impl LanguageProfile {
    /// Create a text-only profile.
    pub fn new(code: impl Into<String>, name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            modalities: default_modalities(),
            proficiency,
            focus_areas: Vec::new(),
        }
    }

    /// Add a modality (ignored if already present).
    pub fn with_modality(mut self, modality: Modality) -> Self {
        if !self.modalities.contains(&modality) {
            self.modalities.push(modality);
        }
        self
    }

    /// Add a focus area.
    pub fn with_focus_area(mut self, area: impl Into<String>) -> Self {
        self.focus_areas.push(area.into());
        self
    }

    /// Check whether the language can be spoken over a modality.
    pub fn supports(&self, modality: Modality) -> bool {
        self.modalities.contains(&modality)
    }

    /// Validate required fields and collapse duplicate modalities.
    pub(crate) fn validated(mut self) -> Result<Self> {
        require_text("code", &self.code)?;
        require_text("name", &self.name)?;

        let mut seen = Vec::with_capacity(self.modalities.len());
        self.modalities.retain(|m| {
            if seen.contains(m) {
                false
            } else {
                seen.push(*m);
                true
            }
        });

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn test_language_builder() {
        let en = LanguageProfile::new("en", "English", Proficiency::Native)
            .with_modality(Modality::Voice)
            .with_modality(Modality::Voice)
            .with_focus_area("gameplay narration");

        assert!(en.supports(Modality::Text));
        assert!(en.supports(Modality::Voice));
        assert_eq!(en.modalities.len(), 2);
        assert_eq!(en.focus_areas, vec!["gameplay narration".to_string()]);
    }

    #[test]
    fn test_validation_collapses_duplicate_modalities() {
        let mut profile = LanguageProfile::new("fr", "French", Proficiency::Fluent);
        profile.modalities = vec![Modality::Voice, Modality::Text, Modality::Voice];

        let profile = profile.validated().unwrap();
        assert_eq!(profile.modalities, vec![Modality::Voice, Modality::Text]);
    }

    #[test]
    fn test_validation_rejects_blank_code() {
        let profile = LanguageProfile::new(" ", "Nameless", Proficiency::Working);
        assert_eq!(profile.validated(), Err(RegistryError::blank("code")));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "code": "ts",
            "name": "TypeScript",
            "modalities": ["text"],
            "proficiency": "fluent",
            "focusAreas": ["SDK code"]
        }"#;
        let profile: LanguageProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.proficiency, Proficiency::Fluent);
        assert_eq!(profile.focus_areas, vec!["SDK code".to_string()]);

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["focusAreas"][0], "SDK code");
        assert_eq!(value["proficiency"], "fluent");
    }
}
