use std::path::Path;

use super::dto::LexiconConfig;
use super::helpers::{parse_ron, read_config, require_non_empty};
use crate::error::{ShieldError, ShieldResult};

const EMBEDDED_LEXICON: &str = include_str!("../../assets/lexicon.ron");

impl LexiconConfig {
    /// The lexicon compiled into the library.
    pub fn embedded() -> ShieldResult<Self> {
        Self::from_ron_str(EMBEDDED_LEXICON)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ShieldResult<Self> {
        let content = read_config(path.as_ref())?;
        let config = Self::from_ron_str(&content)?;

        log::info!(
            "Loaded lexicon v{} from {:?}",
            config.version,
            path.as_ref()
        );

        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> ShieldResult<Self> {
        let config: LexiconConfig = parse_ron(content)?;
        config.validate()?;

        log::info!(
            "Loaded {} terms, {} patterns, {} greetings, {} combinations (lexicon v{})",
            config.terms.len(),
            config.patterns.len(),
            config.greetings.len(),
            config.combinations.len(),
            config.version
        );

        Ok(config)
    }

    pub fn validate(&self) -> ShieldResult<()> {
        if self.version == 0 {
            return Err(ShieldError::Config(
                "lexicon version must be at least 1".to_string(),
            ));
        }

        require_non_empty(&self.terms, "terms")?;
        require_non_empty(&self.greetings, "greetings")?;

        if let Some(group) = self.combinations.iter().find(|group| group.len() < 2) {
            return Err(ShieldError::Config(format!(
                "combination {:?} needs at least two tokens",
                group
            )));
        }

        let ratio = self.language.english_ratio;
        if ratio.is_nan() || ratio < 1.0 {
            return Err(ShieldError::Config(format!(
                "english_ratio must be at least 1.0, got {}",
                ratio
            )));
        }

        if self.limits.max_scan_chars == 0 {
            return Err(ShieldError::Config(
                "max_scan_chars must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const MINIMAL: &str = r#"LexiconConfig(
        version: 1,
        terms: ["fuck"],
        greetings: ["hello"],
        sentiment: (positive: ["good"], negative: ["bad"]),
        language: (english: ["the"]),
    )"#;

    #[test]
    fn test_embedded_lexicon_loads() {
        let config = LexiconConfig::embedded().unwrap();
        assert!(config.version >= 1);
        assert!(config.terms.iter().any(|t| t == "fuck"));
        assert!(config.false_positives.contains_key("ass"));
        assert_eq!(config.language.english_ratio, 1.5);
        assert_eq!(config.limits.max_scan_chars, 2000);
    }

    #[test]
    fn test_minimal_lexicon_uses_defaults() {
        let config = LexiconConfig::from_ron_str(MINIMAL).unwrap();
        assert!(config.patterns.is_empty());
        assert!(config.combinations.is_empty());
        assert_eq!(config.language.english_ratio, 1.5);
        assert_eq!(config.limits.min_spaced_term_chars, 3);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = LexiconConfig::from_path(file.path()).unwrap();
        assert_eq!(config.terms, vec!["fuck".to_string()]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LexiconConfig::from_path(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(ShieldError::Io { .. })));
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let result = LexiconConfig::from_ron_str("LexiconConfig(version: ");
        assert!(matches!(result, Err(ShieldError::Parse(_))));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let base = LexiconConfig::from_ron_str(MINIMAL).unwrap();

        let mut config = base.clone();
        config.version = 0;
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));

        let mut config = base.clone();
        config.terms.clear();
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));

        let mut config = base.clone();
        config.greetings.clear();
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));

        let mut config = base.clone();
        config.combinations.push(vec!["alone".to_string()]);
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));

        let mut config = base.clone();
        config.language.english_ratio = 0.5;
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));

        let mut config = base;
        config.limits.max_scan_chars = 0;
        assert!(matches!(config.validate(), Err(ShieldError::Config(_))));
    }
}
