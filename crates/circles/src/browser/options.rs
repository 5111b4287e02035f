//! Renderer options resolved from the JS-facing constructors.

use circles_core::{ConfigError, FrameReport, RecordLayout, RenderConfig};

/// A validated [`RenderConfig`] ready to bind to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererOptions {
    config: RenderConfig,
    layout: RecordLayout,
}

impl RendererOptions {
    /// Options from the positional `(canvas_id, data_length, stride_length)`
    /// arguments; every other setting keeps its default.
    pub fn from_args(
        canvas_id: &str,
        data_length: usize,
        stride_length: usize,
    ) -> Result<Self, ConfigError> {
        Self::from_config(
            RenderConfig::default()
                .with_canvas_id(canvas_id)
                .with_data_length(data_length)
                .with_stride_length(stride_length),
        )
    }

    /// Options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_config(RenderConfig::from_yaml(yaml)?)
    }

    /// Options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(RenderConfig::from_json(json)?)
    }

    /// Validate a config, including the page-side names it refers to.
    pub fn from_config(config: RenderConfig) -> Result<Self, ConfigError> {
        let layout = config.layout()?;
        for (field, value) in [
            ("canvas_id", &config.canvas_id),
            ("module", &config.module),
            ("simulation_fn", &config.simulation_fn),
            ("heap", &config.heap),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Parse(format!("{field} must not be empty")));
            }
        }
        Ok(Self { config, layout })
    }

    /// The validated config.
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The validated record layout.
    pub const fn layout(&self) -> RecordLayout {
        self.layout
    }
}

/// JSON for a frame report, `null` before the first frame.
pub fn report_json(report: Option<&FrameReport>) -> String {
    serde_json::to_string(&report).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_keeps_defaults() {
        let opts = RendererOptions::from_args("stage", 12, 6).expect("valid");
        assert_eq!(opts.config().canvas_id, "stage");
        assert_eq!(opts.config().module, "Module");
        assert_eq!(opts.config().simulation_fn, "_getCircles");
        assert_eq!(opts.config().heap, "HEAP8");
        assert_eq!(opts.layout().record_count(), 2);
    }

    #[test]
    fn test_from_args_rejects_misaligned() {
        assert_eq!(
            RendererOptions::from_args("canvas", 13, 6),
            Err(ConfigError::MisalignedLength {
                data_length: 13,
                stride: 6
            })
        );
    }

    #[test]
    fn test_from_args_rejects_blank_canvas_id() {
        assert!(matches!(
            RendererOptions::from_args("  ", 6, 6),
            Err(ConfigError::Parse(msg)) if msg.contains("canvas_id")
        ));
    }

    #[test]
    fn test_from_yaml_overrides_names() {
        let opts = RendererOptions::from_yaml(
            "data_length: 60\nmodule: Sim\nsimulation_fn: _step\nheap: HEAP32\n",
        )
        .expect("valid");
        assert_eq!(opts.config().module, "Sim");
        assert_eq!(opts.config().simulation_fn, "_step");
        assert_eq!(opts.config().heap, "HEAP32");
        assert_eq!(opts.layout().record_count(), 10);
    }

    #[test]
    fn test_from_json_rejects_blank_heap() {
        assert!(matches!(
            RendererOptions::from_json(r#"{"heap": ""}"#),
            Err(ConfigError::Parse(msg)) if msg.contains("heap")
        ));
    }

    #[test]
    fn test_report_json() {
        assert_eq!(report_json(None), "null");
        let report = FrameReport {
            frame: 3,
            offset: 1024,
            circles: 500,
            width: 300,
            height: 150,
        };
        let json = report_json(Some(&report));
        let back: FrameReport = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, report);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_from_args_matches_layout(records in 0usize..600, stride in 6usize..12) {
                let opts = RendererOptions::from_args("canvas", records * stride, stride)
                    .expect("whole records");
                prop_assert_eq!(opts.layout().record_count(), records);
                prop_assert_eq!(opts.layout().stride_length(), stride);
            }
        }
    }
}
