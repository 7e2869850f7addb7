//! Settings store — owns the persisted configuration record.
//!
//! The store is constructed over an injected `Storage` and is the only
//! writer of the settings slot. `load` merges whatever was persisted with
//! the default configuration (reconciling layouts and self-healing
//! minimum sizes); `update` and `toggle_widget` mutate in place and write
//! the whole record back synchronously. Derived accent values are
//! recomputed on demand and never persisted.
//!
//! Failure semantics: a corrupt settings blob is logged and replaced by
//! the defaults — it never surfaces as an error. A storage write failure
//! propagates to the caller unretried.

use crate::layout::{migrate, reconcile};
use crate::locale;
use crate::storage::{Storage, SETTINGS_KEY};
use crate::theme::{self, AccentTheme};
use crate::types::settings::{Language, Settings, SettingsPatch};


/// Owner of the settings record; single writer of the settings slot.
pub struct SettingsStore {
    storage: Box<dyn Storage>,
    settings: Settings,
}

impl SettingsStore {
    /// A store over `storage`, holding the defaults until `load` runs.
    pub fn new(storage: Box<dyn Storage>) -> SettingsStore {
        SettingsStore {
            storage,
            settings: Settings::default(),
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load from storage, detecting the first-run language from the
    /// process environment.
    pub fn load(&mut self) -> Result<&Settings, String> {
        self.load_with_locale(locale::system_locale().as_deref())
    }

    /// Load from storage with an explicit locale for first-run language
    /// detection.
    ///
    /// Absent slot: defaults plus the detected language (English when
    /// nothing matches). Corrupt slot: defaults verbatim, logged.
    /// Valid slot: reconciled against the default layout table. In every
    /// case the migration pass runs afterwards, and a changed layout is
    /// written back immediately so the next load is a no-op.
    pub fn load_with_locale(&mut self, locale: Option<&str>) -> Result<&Settings, String> {
        match self.storage.get(SETTINGS_KEY) {
            Some(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(mut saved) => {
                    saved.layouts = reconcile::reconcile_layouts(&saved.layouts);
                    self.settings = saved;
                }
                Err(e) => {
                    eprintln!("[urboard] settings parse error: {}", e);
                    self.settings = Settings::default();
                }
            },
            None => {
                let language = locale
                    .and_then(locale::detect_language)
                    .unwrap_or(Language::En);
                self.settings = Settings {
                    language,
                    ..Settings::default()
                };
            }
        }

        if migrate::clamp_minimums(&mut self.settings.layouts) {
            self.persist()?;
        }
        Ok(&self.settings)
    }

    /// Apply a partial update and write the whole record back. Values are
    /// taken as-is; callers validate their own fields.
    pub fn update(&mut self, patch: SettingsPatch) -> Result<(), String> {
        patch.apply(&mut self.settings);
        self.persist()
    }

    /// Toggle a widget id in `active_widgets`: present ids are removed
    /// (keeping relative order), absent ids are appended. Layouts are
    /// left alone — the default table already places every known widget.
    pub fn toggle_widget(&mut self, id: &str) -> Result<(), String> {
        let widgets = &mut self.settings.active_widgets;
        match widgets.iter().position(|w| w == id) {
            Some(pos) => {
                widgets.remove(pos);
            }
            None => widgets.push(id.to_string()),
        }
        self.persist()
    }

    /// Derived accent values for the current accent color.
    pub fn accent_theme(&self) -> AccentTheme {
        theme::derive(&self.settings.accent_color)
    }

    fn persist(&self) -> Result<(), String> {
        let raw = serde_json::to_string(&self.settings)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        self.storage.set(SETTINGS_KEY, &raw)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
