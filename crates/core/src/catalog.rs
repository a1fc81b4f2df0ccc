//! Catalog identifier and label helpers.
//!
//! Car types and models are identified by slugs supplied by the remote
//! catalog. When a car type has no catalog models, the wizard synthesizes a
//! default model slug so the model step can be satisfied without user
//! interaction; the matching display label is synthesized at submit time.

use crate::error::CoreError;

/// Suffix of synthesized default model slugs.
pub const DEFAULT_MODEL_SUFFIX: &str = "-default";

/// Synthesized model slug for a car type with no catalog models.
pub fn default_model_id(car_type: &str) -> String {
    format!("{car_type}{DEFAULT_MODEL_SUFFIX}")
}

/// Whether `car_model` is the synthesized default for `car_type`.
pub fn is_default_model(car_type: &str, car_model: &str) -> bool {
    !car_type.is_empty() && car_model == default_model_id(car_type)
}

/// Display label for a synthesized default model ("standard model for
/// <type>", in the app's Arabic copy).
pub fn default_model_label(car_type_label: &str) -> String {
    format!("الموديل القياسي لـ {car_type_label}")
}

/// Resolve a display label from an optional catalog lookup, falling back to
/// the raw slug.
pub fn resolve_label(slug: &str, catalog_label: Option<String>) -> String {
    match catalog_label {
        Some(label) if !label.trim().is_empty() => label,
        _ => slug.to_string(),
    }
}

/// Validate an admin-supplied catalog slug: lowercase ASCII letters,
/// digits, and single interior hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let ok = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits, and single hyphens."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_id_appends_suffix() {
        assert_eq!(default_model_id("sedan"), "sedan-default");
    }

    #[test]
    fn is_default_model_matches_only_own_type() {
        assert!(is_default_model("sedan", "sedan-default"));
        assert!(!is_default_model("sedan", "suv-default"));
        assert!(!is_default_model("sedan", "toyota-camry"));
        assert!(!is_default_model("", "-default"));
    }

    #[test]
    fn default_label_embeds_type_label() {
        let label = default_model_label("سيدان");
        assert!(label.contains("سيدان"));
        assert!(!label.is_empty());
    }

    #[test]
    fn slug_validation() {
        assert!(validate_slug("sedan").is_ok());
        assert!(validate_slug("toyota-camry-2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Sedan").is_err());
        assert!(validate_slug("-sedan").is_err());
        assert!(validate_slug("sedan-").is_err());
        assert!(validate_slug("se--dan").is_err());
        assert!(validate_slug("sedan car").is_err());
    }

    #[test]
    fn resolve_label_falls_back_to_slug() {
        assert_eq!(
            resolve_label("toyota-camry", Some("Camry".into())),
            "Camry"
        );
        assert_eq!(resolve_label("toyota-camry", Some("  ".into())), "toyota-camry");
        assert_eq!(resolve_label("toyota-camry", None), "toyota-camry");
    }
}
