use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;
use view_core::{EngineSettings, OptionSource, TableStyle, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_source: String,
    pub page_size: usize,
    pub option_source: OptionSource,
    pub style: TableStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: "data/cars.json".into(),
            page_size: DEFAULT_PAGE_SIZE,
            option_source: OptionSource::Catalog,
            style: TableStyle::Zebra,
        }
    }
}

impl Settings {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            page_size: self.page_size,
            option_source: self.option_source,
            style: self.style,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    data_source: Option<String>,
    page_size: Option<usize>,
    option_source: Option<String>,
    style: Option<String>,
}

/// Defaults, then `path` if it exists, then environment overrides.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.data_source {
        settings.data_source = v;
    }
    if let Some(v) = file_cfg.page_size {
        set_page_size(settings, v);
    }
    if let Some(v) = file_cfg.option_source {
        set_option_source(settings, &v);
    }
    if let Some(v) = file_cfg.style {
        set_style(settings, &v);
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("BROWSER_DATA_SOURCE") {
        settings.data_source = v;
    }
    if let Some(v) = lookup("APP__DATA_SOURCE") {
        settings.data_source = v;
    }

    if let Some(v) = lookup("APP__PAGE_SIZE") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => set_page_size(settings, parsed),
            Err(_) => warn!(value = %v, "ignoring non-numeric APP__PAGE_SIZE"),
        }
    }

    if let Some(v) = lookup("APP__OPTION_SOURCE") {
        set_option_source(settings, &v);
    }
    if let Some(v) = lookup("APP__STYLE") {
        set_style(settings, &v);
    }
}

fn set_page_size(settings: &mut Settings, page_size: usize) {
    if page_size == 0 {
        warn!("ignoring page size of 0");
        return;
    }
    settings.page_size = page_size;
}

fn set_option_source(settings: &mut Settings, raw: &str) {
    match raw.parse() {
        Ok(option_source) => settings.option_source = option_source,
        Err(err) => warn!(error = %err, "ignoring option source"),
    }
}

fn set_style(settings: &mut Settings, raw: &str) {
    match raw.parse() {
        Ok(style) => settings.style = style,
        Err(err) => warn!(error = %err, "ignoring table style"),
    }
}
