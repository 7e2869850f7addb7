//! Settings — the persisted configuration record and its partial-update
//! counterpart.
//!
//! Field names on the wire are the original web app's camelCase names and
//! the container fills missing fields from `Settings::default()`, so a
//! blob written by an older release keeps loading: new fields silently
//! take their defaults, removed fields are ignored.

use serde::{Deserialize, Serialize};

use crate::layout::defaults;
use crate::types::layout::Layouts;


/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tr,
    En,
    Ru,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
            Language::Ru => "ru",
            Language::De => "de",
        }
    }
}


/// Search engine used by the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    Brave,
    Duckduckgo,
}


/// Wallpaper choice; `Custom` pairs with `custom_wallpaper_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallpaper {
    Default,
    Scifi,
    Nature,
    Abstract,
    Custom,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStyle {
    Modern,
    Retro,
    Neon,
    Glitch,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherTheme {
    Glass,
    Minimal,
    Vibrant,
    Retro,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinksViewMode {
    List,
    Grid,
}


/// One user-defined shortcut shown by the links widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcutLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}


/// The persisted configuration record, owned by the settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub accent_color: String,
    pub weather_city: String,
    pub weather_minimal_mode: bool,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_refresh_token: String,
    pub user_links: Vec<ShortcutLink>,
    pub search_engine: SearchEngine,
    pub is_onboarded: bool,
    pub active_widgets: Vec<String>,
    pub is_locked: bool,
    pub links_view_mode: LinksViewMode,
    pub language: Language,
    pub custom_wallpaper_url: String,
    pub wallpaper: Wallpaper,
    pub clock_style: ClockStyle,
    pub weather_theme: WeatherTheme,
    pub layouts: Layouts,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            accent_color: "#ff0033".into(),
            weather_city: String::new(),
            weather_minimal_mode: false,
            spotify_client_id: String::new(),
            spotify_client_secret: String::new(),
            spotify_refresh_token: String::new(),
            user_links: Vec::new(),
            search_engine: SearchEngine::Google,
            is_onboarded: false,
            active_widgets: Vec::new(),
            is_locked: false,
            links_view_mode: LinksViewMode::List,
            // First run replaces this via locale detection; a corrupt blob
            // falls back to it untouched.
            language: Language::Tr,
            custom_wallpaper_url: String::new(),
            wallpaper: Wallpaper::Default,
            clock_style: ClockStyle::Modern,
            weather_theme: WeatherTheme::Glass,
            layouts: defaults::default_layouts(),
        }
    }
}


/// Typed partial update for `Settings`: every field optional, each `Some`
/// replaces its field wholesale. `layouts` is supplied whole or not at
/// all; unknown keys in a JSON patch are ignored, not spread in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_minimal_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_links: Option<Vec<ShortcutLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engine: Option<SearchEngine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_onboarded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_widgets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_view_mode: Option<LinksViewMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_wallpaper_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<Wallpaper>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_style: Option<ClockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_theme: Option<WeatherTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layouts: Option<Layouts>,
}

impl SettingsPatch {
    /// Apply the patch, replacing each `Some` field.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.accent_color {
            settings.accent_color = v;
        }
        if let Some(v) = self.weather_city {
            settings.weather_city = v;
        }
        if let Some(v) = self.weather_minimal_mode {
            settings.weather_minimal_mode = v;
        }
        if let Some(v) = self.spotify_client_id {
            settings.spotify_client_id = v;
        }
        if let Some(v) = self.spotify_client_secret {
            settings.spotify_client_secret = v;
        }
        if let Some(v) = self.spotify_refresh_token {
            settings.spotify_refresh_token = v;
        }
        if let Some(v) = self.user_links {
            settings.user_links = v;
        }
        if let Some(v) = self.search_engine {
            settings.search_engine = v;
        }
        if let Some(v) = self.is_onboarded {
            settings.is_onboarded = v;
        }
        if let Some(v) = self.active_widgets {
            settings.active_widgets = v;
        }
        if let Some(v) = self.is_locked {
            settings.is_locked = v;
        }
        if let Some(v) = self.links_view_mode {
            settings.links_view_mode = v;
        }
        if let Some(v) = self.language {
            settings.language = v;
        }
        if let Some(v) = self.custom_wallpaper_url {
            settings.custom_wallpaper_url = v;
        }
        if let Some(v) = self.wallpaper {
            settings.wallpaper = v;
        }
        if let Some(v) = self.clock_style {
            settings.clock_style = v;
        }
        if let Some(v) = self.weather_theme {
            settings.weather_theme = v;
        }
        if let Some(v) = self.layouts {
            settings.layouts = v;
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
