use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SECTIONS, MAX_COLS, MAX_ROWS, MAX_SECTIONS, MIN_COLS,
    MIN_ROWS, MIN_SECTIONS,
};
use crate::error::GridError;

/// Panel dimensions: `sections` side by side, each `rows x cols` boxes.
///
/// Always within bounds: built through `new`, `Default` or validated JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigJson")]
pub struct GridConfig {
    sections: u32,
    rows: u32,
    cols: u32,
}

/// Unchecked wire form; missing fields take the default panel's value.
#[derive(Deserialize)]
#[serde(default)]
struct ConfigJson {
    sections: u32,
    rows: u32,
    cols: u32,
}

impl Default for ConfigJson {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl TryFrom<ConfigJson> for GridConfig {
    type Error = GridError;

    fn try_from(json: ConfigJson) -> Result<Self, Self::Error> {
        GridConfig::new(json.sections, json.rows, json.cols)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridConfig {
    /// Validated constructor.
    pub fn new(sections: u32, rows: u32, cols: u32) -> Result<Self, GridError> {
        let config = Self { sections, rows, cols };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GridError> {
        let ok = (MIN_SECTIONS..=MAX_SECTIONS).contains(&self.sections)
            && (MIN_ROWS..=MAX_ROWS).contains(&self.rows)
            && (MIN_COLS..=MAX_COLS).contains(&self.cols);
        if ok {
            Ok(())
        } else {
            Err(GridError::InvalidConfiguration {
                sections: self.sections,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    pub fn sections(&self) -> u32 {
        self.sections
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Columns per section.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Global column count across all sections.
    #[inline]
    pub fn total_cols(&self) -> u32 {
        self.sections * self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.rows * self.total_cols()) as usize
    }

    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let raw: ConfigJson = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(GridConfig::new(1, 1, 1).is_ok());
        assert!(GridConfig::new(10, 20, 10).is_ok());
        assert!(GridConfig::new(0, 7, 4).is_err());
        assert!(GridConfig::new(11, 7, 4).is_err());
        assert!(GridConfig::new(5, 21, 4).is_err());
        assert!(GridConfig::new(5, 7, 11).is_err());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = GridConfig::from_json(r#"{"sections":2}"#).unwrap();
        assert_eq!(config, GridConfig::new(2, 7, 4).unwrap());
        assert_eq!(config.total_cols(), 8);
        assert_eq!(config.cell_count(), 56);
    }

    #[test]
    fn json_rejects_out_of_range() {
        let err = GridConfig::from_json(r#"{"sections":5,"rows":40,"cols":4}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { rows: 40, .. }));
        assert!(matches!(GridConfig::from_json("{"), Err(GridError::Json(_))));
    }

    #[test]
    fn serde_cannot_bypass_bounds() {
        let json = r#"{"sections":40,"rows":90,"cols":30}"#;
        assert!(serde_json::from_str::<GridConfig>(json).is_err());
        assert!(serde_json::from_str::<GridConfig>(r#"{"sections":0}"#).is_err());

        let config: GridConfig = serde_json::from_str(r#"{"rows":3}"#).unwrap();
        assert_eq!((config.sections(), config.rows(), config.cols()), (5, 3, 4));
        assert_eq!(config.to_json(), r#"{"sections":5,"rows":3,"cols":4}"#);
    }
}
