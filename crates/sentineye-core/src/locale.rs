// ── Localized string loading ──
//
// The core only needs a key→string table per language code and a safe
// fallback path. Where the strings come from is the collaborator's
// business: `LocaleSource` is the seam, `FsLocaleSource` the bundled
// file-based implementation.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::CoreError;

/// Language code used when a requested language cannot be loaded.
pub const DEFAULT_LANGUAGE: &str = "en";

pub type TranslationTable = HashMap<String, String>;

/// Produces the translation table for a language code.
pub trait LocaleSource {
    fn fetch(&self, code: &str) -> Result<TranslationTable, CoreError>;
}

/// Reads `{root}/{code}.json`, a flat JSON object of key to string.
pub struct FsLocaleSource {
    root: PathBuf,
}

impl FsLocaleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LocaleSource for FsLocaleSource {
    fn fetch(&self, code: &str) -> Result<TranslationTable, CoreError> {
        let path = self.root.join(format!("{code}.json"));
        let unavailable = |reason: String| CoreError::LocaleUnavailable {
            code: code.to_owned(),
            reason,
        };

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw).map_err(|e| unavailable(format!("{}: {e}", path.display())))
    }
}

/// Holds the active translation table and the language it came from.
///
/// Loading an unavailable language falls back to [`DEFAULT_LANGUAGE`]
/// exactly once: the failure is logged, not surfaced. Only when the
/// default itself cannot be loaded does the error reach the caller,
/// with the table emptied rather than retried.
pub struct Translator<S: LocaleSource> {
    source: S,
    default_code: String,
    active_code: String,
    table: TranslationTable,
}

impl<S: LocaleSource> Translator<S> {
    pub fn new(source: S) -> Self {
        Self::with_default(source, DEFAULT_LANGUAGE)
    }

    pub fn with_default(source: S, default_code: impl Into<String>) -> Self {
        let default_code = default_code.into();
        Self {
            source,
            active_code: default_code.clone(),
            default_code,
            table: TranslationTable::new(),
        }
    }

    /// Switch to `code`, falling back to the default language if it
    /// cannot be loaded.
    pub fn load(&mut self, code: &str) -> Result<(), CoreError> {
        match self.source.fetch(code) {
            Ok(table) => {
                debug!(%code, keys = table.len(), "language loaded");
                self.table = table;
                self.active_code = code.to_owned();
                Ok(())
            }
            Err(err) if code != self.default_code => {
                warn!(%code, error = %err, "language load failed; falling back to default");
                self.load_default()
            }
            Err(err) => {
                warn!(%code, error = %err, "default language unavailable");
                self.table.clear();
                Err(err)
            }
        }
    }

    /// One non-recursive shot at the default language.
    fn load_default(&mut self) -> Result<(), CoreError> {
        match self.source.fetch(&self.default_code) {
            Ok(table) => {
                self.table = table;
                self.active_code = self.default_code.clone();
                Ok(())
            }
            Err(err) => {
                warn!(code = %self.default_code, error = %err, "default language unavailable");
                self.table.clear();
                Err(err)
            }
        }
    }

    /// The translated string for `key`, or `key` itself when missing.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map_or(key, String::as_str)
    }

    /// The language code the active table was loaded from.
    pub fn active_code(&self) -> &str {
        &self.active_code
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// In-memory source: language → table, everything else fails.
    struct MapSource(HashMap<&'static str, TranslationTable>);

    impl LocaleSource for MapSource {
        fn fetch(&self, code: &str) -> Result<TranslationTable, CoreError> {
            self.0
                .get(code)
                .cloned()
                .ok_or_else(|| CoreError::LocaleUnavailable {
                    code: code.to_owned(),
                    reason: "missing".into(),
                })
        }
    }

    fn table(entries: &[(&str, &str)]) -> TranslationTable {
        entries
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn two_language_source() -> MapSource {
        MapSource(HashMap::from([
            ("en", table(&[("dashboard.title", "Dashboard")])),
            ("sv", table(&[("dashboard.title", "Instrumentpanel")])),
        ]))
    }

    #[test]
    fn loads_the_requested_language() {
        let mut translator = Translator::new(two_language_source());
        translator.load("sv").unwrap();
        assert_eq!(translator.active_code(), "sv");
        assert_eq!(translator.text("dashboard.title"), "Instrumentpanel");
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        let mut translator = Translator::new(two_language_source());
        translator.load("fr").unwrap();
        assert_eq!(translator.active_code(), "en");
        assert_eq!(translator.text("dashboard.title"), "Dashboard");
    }

    #[test]
    fn failing_default_surfaces_once_with_empty_table() {
        let mut translator = Translator::new(MapSource(HashMap::new()));
        let err = translator.load("fr").unwrap_err();
        assert!(matches!(err, CoreError::LocaleUnavailable { .. }));
        // Lookup degrades to the key itself.
        assert_eq!(translator.text("dashboard.title"), "dashboard.title");
    }

    #[test]
    fn missing_keys_degrade_to_the_key() {
        let mut translator = Translator::new(two_language_source());
        translator.load("en").unwrap();
        assert_eq!(translator.text("alerts.title"), "alerts.title");
    }

    #[test]
    fn fs_source_reads_flat_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.json"),
            r#"{"dashboard.title": "Dashboard"}"#,
        )
        .unwrap();

        let mut translator = Translator::new(FsLocaleSource::new(dir.path()));
        translator.load("en").unwrap();
        assert_eq!(translator.text("dashboard.title"), "Dashboard");

        // A malformed table is a load failure, which for the default
        // language is surfaced.
        std::fs::write(dir.path().join("en.json"), "not json").unwrap();
        assert!(translator.load("en").is_err());
    }
}
