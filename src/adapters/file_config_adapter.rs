//! INI file configuration adapter.
//!
//! Values are trimmed; a key set to an empty value reads as unset.

use crate::domain::error::PivotError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PivotError> {
        let path = path.as_ref();
        Self::parse(path.display().to_string(), |ini| ini.load(path).map(|_| ()))
    }

    pub fn from_string(content: &str) -> Result<Self, PivotError> {
        Self::parse("<inline>".to_string(), |ini| {
            ini.read(content.to_string()).map(|_| ())
        })
    }

    fn parse<F>(file: String, load: F) -> Result<Self, PivotError>
    where
        F: FnOnce(&mut Ini) -> Result<(), String>,
    {
        let mut config = Ini::new();
        load(&mut config).map_err(|reason| PivotError::ConfigParse { file, reason })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config
            .get(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn sections(&self) -> Vec<String> {
        let mut sections = self.config.sections();
        sections.sort();
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[input]
naming = exchange

[output]
layout = split
precision = 2
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("input", "naming"),
            Some("exchange".to_string())
        );
        assert_eq!(
            adapter.get_string("output", "layout"),
            Some("split".to_string())
        );
        assert_eq!(adapter.get_string("output", "precision"), Some("2".to_string()));
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[output]\nlayout = wide\n").unwrap();
        assert_eq!(adapter.get_string("output", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let adapter = FileConfigAdapter::from_string("[Output]\nLayout = split\n").unwrap();
        assert_eq!(
            adapter.get_string("output", "layout"),
            Some("split".to_string())
        );
    }

    #[test]
    fn sections_are_listed() {
        let adapter =
            FileConfigAdapter::from_string("[output]\nlayout = wide\n[input]\nnaming = auto\n")
                .unwrap();
        assert_eq!(adapter.sections(), vec!["input", "output"]);
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[output]\npath = /tmp/pivots.csv\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("output", "path"),
            Some("/tmp/pivots.csv".to_string())
        );
    }

    #[test]
    fn blank_values_read_as_unset() {
        let adapter =
            FileConfigAdapter::from_string("[output]\npath =\nlayout =   split  \n").unwrap();
        assert_eq!(adapter.get_string("output", "path"), None);
        assert_eq!(
            adapter.get_string("output", "layout"),
            Some("split".to_string())
        );
    }

    #[test]
    fn from_file_missing_file_names_the_path() {
        let err = match FileConfigAdapter::from_file("/nonexistent/path/config.ini") {
            Err(e) => e,
            Ok(_) => panic!("expected a parse error"),
        };
        assert!(
            matches!(err, PivotError::ConfigParse { ref file, .. } if file == "/nonexistent/path/config.ini")
        );
        assert_eq!(err.exit_status(), 2);
    }
}
