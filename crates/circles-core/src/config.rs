//! Render configuration: record layout plus browser wiring.
//!
//! `RecordLayout` is the only place the "whole number of records" invariant
//! is checked. A value of that type is proof the check passed, so the frame
//! path never repeats it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::record::RECORD_FIELDS;

/// Circles the reference simulation animates.
pub const DEFAULT_CIRCLES: usize = 500;

/// Elements per record in the reference simulation.
pub const DEFAULT_STRIDE: usize = RECORD_FIELDS;

/// Validated `(data_length, stride_length)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    data_length: usize,
    stride_length: usize,
}

impl RecordLayout {
    /// Validate a layout.
    ///
    /// # Errors
    ///
    /// Fails when the stride is zero, shorter than a circle record, or does
    /// not divide `data_length`.
    pub const fn new(data_length: usize, stride_length: usize) -> Result<Self, ConfigError> {
        if stride_length == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if stride_length < RECORD_FIELDS {
            return Err(ConfigError::StrideTooShort {
                stride: stride_length,
                fields: RECORD_FIELDS,
            });
        }
        if data_length % stride_length != 0 {
            return Err(ConfigError::MisalignedLength {
                data_length,
                stride: stride_length,
            });
        }
        Ok(Self {
            data_length,
            stride_length,
        })
    }

    /// Layout for `count` records of the default stride.
    #[must_use]
    pub const fn for_circles(count: usize) -> Self {
        Self {
            data_length: count * DEFAULT_STRIDE,
            stride_length: DEFAULT_STRIDE,
        }
    }

    /// Total elements read per frame.
    #[must_use]
    pub const fn data_length(&self) -> usize {
        self.data_length
    }

    /// Elements per record.
    #[must_use]
    pub const fn stride_length(&self) -> usize {
        self.stride_length
    }

    /// Records read per frame.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.data_length / self.stride_length
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self::for_circles(DEFAULT_CIRCLES)
    }
}

/// Full render configuration, loadable from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Total elements read per frame.
    pub data_length: usize,
    /// Elements per record.
    pub stride_length: usize,
    /// DOM id of the canvas element.
    pub canvas_id: String,
    /// Global name of the foreign module object.
    pub module: String,
    /// Simulation function exported on the module.
    pub simulation_fn: String,
    /// Typed-array property exposing the module heap.
    pub heap: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            data_length: DEFAULT_CIRCLES * DEFAULT_STRIDE,
            stride_length: DEFAULT_STRIDE,
            canvas_id: "canvas".to_string(),
            module: "Module".to_string(),
            simulation_fn: "_getCircles".to_string(),
            heap: "HEAP8".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the total element count.
    #[must_use]
    pub const fn with_data_length(mut self, data_length: usize) -> Self {
        self.data_length = data_length;
        self
    }

    /// Set the record stride.
    #[must_use]
    pub const fn with_stride_length(mut self, stride_length: usize) -> Self {
        self.stride_length = stride_length;
        self
    }

    /// Set the canvas element id.
    #[must_use]
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    /// Read `count` records of the default stride.
    #[must_use]
    pub const fn for_circles(mut self, count: usize) -> Self {
        self.data_length = count * DEFAULT_STRIDE;
        self.stride_length = DEFAULT_STRIDE;
        self
    }

    /// Check the record layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout().map(|_| ())
    }

    /// The validated record layout.
    pub const fn layout(&self) -> Result<RecordLayout, ConfigError> {
        RecordLayout::new(self.data_length, self.stride_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_valid() {
        let layout = RecordLayout::new(12, 6).expect("valid");
        assert_eq!(layout.data_length(), 12);
        assert_eq!(layout.stride_length(), 6);
        assert_eq!(layout.record_count(), 2);
    }

    #[test]
    fn test_layout_empty_is_valid() {
        let layout = RecordLayout::new(0, 6).expect("valid");
        assert_eq!(layout.record_count(), 0);
    }

    #[test]
    fn test_layout_rejects_zero_stride() {
        assert_eq!(RecordLayout::new(12, 0), Err(ConfigError::ZeroStride));
    }

    #[test]
    fn test_layout_rejects_short_stride() {
        assert_eq!(
            RecordLayout::new(12, 4),
            Err(ConfigError::StrideTooShort {
                stride: 4,
                fields: 6
            })
        );
    }

    #[test]
    fn test_layout_rejects_misaligned_length() {
        assert_eq!(
            RecordLayout::new(13, 6),
            Err(ConfigError::MisalignedLength {
                data_length: 13,
                stride: 6
            })
        );
    }

    #[test]
    fn test_layout_default_matches_reference_simulation() {
        let layout = RecordLayout::default();
        assert_eq!(layout.data_length(), 3000);
        assert_eq!(layout.stride_length(), 6);
        assert_eq!(layout.record_count(), 500);
    }

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas_id, "canvas");
        assert_eq!(config.module, "Module");
        assert_eq!(config.simulation_fn, "_getCircles");
        assert_eq!(config.heap, "HEAP8");
        assert_eq!(config.layout(), Ok(RecordLayout::default()));
    }

    #[test]
    fn test_config_from_yaml_partial() {
        let config = RenderConfig::from_yaml("data_length: 12\ncanvas_id: stage\n").expect("valid");
        assert_eq!(config.data_length, 12);
        assert_eq!(config.stride_length, 6);
        assert_eq!(config.canvas_id, "stage");
    }

    #[test]
    fn test_config_from_yaml_rejects_misaligned() {
        let err = RenderConfig::from_yaml("data_length: 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::MisalignedLength { .. }));
    }

    #[test]
    fn test_config_from_yaml_rejects_unknown_field() {
        let err = RenderConfig::from_yaml("radius_scale: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            RenderConfig::from_json(r#"{"data_length": 14, "stride_length": 7}"#).expect("valid");
        assert_eq!(config.layout().map(|l| l.record_count()), Ok(2));
    }

    #[test]
    fn test_config_from_json_invalid() {
        assert!(matches!(
            RenderConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_builders() {
        let config = RenderConfig::default()
            .for_circles(3)
            .with_canvas_id("c2");
        assert_eq!(config.data_length, 18);
        assert_eq!(config.canvas_id, "c2");

        let config = config.with_data_length(21).with_stride_length(7);
        assert!(config.validate().is_ok());
    }

    proptest! {
        #[test]
        fn prop_layout_accepts_whole_records(records in 0usize..1000, stride in 6usize..16) {
            let layout = RecordLayout::new(records * stride, stride);
            prop_assert_eq!(layout.map(|l| l.record_count()), Ok(records));
        }

        #[test]
        fn prop_layout_rejects_partial_records(records in 0usize..1000, stride in 7usize..16, extra in 1usize..6) {
            let extra = extra % stride;
            prop_assume!(extra != 0);
            let is_misaligned = matches!(
                RecordLayout::new(records * stride + extra, stride),
                Err(ConfigError::MisalignedLength { .. })
            );
            prop_assert!(is_misaligned);
        }
    }
}
