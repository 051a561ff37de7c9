//! Configuration validation and resolution.
//!
//! Settings come from an INI file through [`ConfigPort`]:
//!
//! ```ini
//! [input]
//! ; auto | standard | exchange
//! naming = auto
//!
//! [output]
//! ; wide | split
//! layout = wide
//! ; 0..=12, omit for full precision
//! precision = 2
//! ; omit to print tables instead of writing CSV
//! path = pivots.csv
//! ```

use crate::domain::error::PivotError;
use crate::domain::layout::Layout;
use crate::domain::record::NamingChoice;
use crate::ports::config_port::ConfigPort;

pub const MAX_PRECISION: usize = 12;

pub const KNOWN_SECTIONS: [&str; 2] = ["input", "output"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSettings {
    pub naming: NamingChoice,
    pub layout: Layout,
    pub precision: Option<usize>,
    pub output_path: Option<String>,
}

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), PivotError> {
    resolve_settings(config).map(|_| ())
}

/// Sections this tool does not read.
pub fn unknown_sections(config: &dyn ConfigPort) -> Vec<String> {
    config
        .sections()
        .into_iter()
        .filter(|s| !KNOWN_SECTIONS.contains(&s.as_str()))
        .collect()
}

/// Check a precision value from any source.
pub fn check_precision(precision: usize) -> Result<usize, PivotError> {
    if precision > MAX_PRECISION {
        return Err(PivotError::ConfigInvalid {
            section: "output".to_string(),
            key: "precision".to_string(),
            reason: format!("precision must be between 0 and {MAX_PRECISION}"),
        });
    }
    Ok(precision)
}

/// Read and validate every setting, applying defaults for absent keys.
pub fn resolve_settings(config: &dyn ConfigPort) -> Result<RunSettings, PivotError> {
    Ok(RunSettings {
        naming: resolve_naming(config)?,
        layout: resolve_layout(config)?,
        precision: resolve_precision(config)?,
        output_path: config
            .get_string("output", "path")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
    })
}

fn resolve_naming(config: &dyn ConfigPort) -> Result<NamingChoice, PivotError> {
    match config.get_string("input", "naming") {
        None => Ok(NamingChoice::Auto),
        Some(value) => value.parse::<NamingChoice>().map_err(|reason| PivotError::ConfigInvalid {
            section: "input".to_string(),
            key: "naming".to_string(),
            reason,
        }),
    }
}

fn resolve_layout(config: &dyn ConfigPort) -> Result<Layout, PivotError> {
    match config.get_string("output", "layout") {
        None => Ok(Layout::Wide),
        Some(value) => value.parse::<Layout>().map_err(|reason| PivotError::ConfigInvalid {
            section: "output".to_string(),
            key: "layout".to_string(),
            reason,
        }),
    }
}

fn resolve_precision(config: &dyn ConfigPort) -> Result<Option<usize>, PivotError> {
    let Some(raw) = config.get_string("output", "precision") else {
        return Ok(None);
    };
    let value: usize = raw.trim().parse().map_err(|_| PivotError::ConfigInvalid {
        section: "output".to_string(),
        key: "precision".to_string(),
        reason: format!("'{}' is not a non-negative integer", raw.trim()),
    })?;
    check_precision(value).map(Some)
}
