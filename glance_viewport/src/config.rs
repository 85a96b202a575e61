// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::DEFAULT_SCALE;
use crate::error::{Result, ViewportError};

/// Tunables for a [`crate::ViewportTransform`].
///
/// The defaults reproduce the stock viewer: `0.002` scale per wheel unit,
/// an absolute floor of `0.125`, no ceiling, a one pixel anchor threshold and
/// shrinking below fit disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Scale change per unit of wheel `deltaY`; negative deltas zoom in.
    pub wheel_sensitivity: f64,
    /// Absolute lower bound on the scale.
    pub min_scale: f64,
    /// Optional upper bound applied when zooming in.
    pub max_scale: Option<f64>,
    /// Screen distance, in pixels, the cursor must be from the current zoom
    /// origin before a wheel zoom re-anchors on it.
    pub anchor_threshold: f64,
    /// Initial shrink policy; see [`crate::ViewportTransform::enable_shrink`].
    pub shrinkable: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: 0.002,
            min_scale: 0.125,
            max_scale: None,
            anchor_threshold: 1.0,
            shrinkable: false,
        }
    }
}

impl ViewportConfig {
    /// Checks that every field is usable.
    ///
    /// The scale limits must bracket [`DEFAULT_SCALE`] so that a reset is
    /// always reachable.
    pub fn validate(&self) -> Result<()> {
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(ViewportError::InvalidWheelSensitivity(self.wheel_sensitivity));
        }
        let min_ok = self.min_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= DEFAULT_SCALE;
        let max_ok = self.max_scale.is_none_or(|max| max >= DEFAULT_SCALE);
        if !min_ok || !max_ok {
            return Err(ViewportError::InvalidScaleLimits {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !self.anchor_threshold.is_finite() || self.anchor_threshold < 0.0 {
            return Err(ViewportError::InvalidAnchorThreshold(self.anchor_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportConfig;
    use crate::error::ViewportError;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ViewportConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_sensitivity() {
        let config = ViewportConfig {
            wheel_sensitivity: 0.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ViewportError::InvalidWheelSensitivity(0.0))
        );
    }

    #[test]
    fn scale_limits_must_bracket_fit() {
        let above_fit = ViewportConfig {
            min_scale: 1.5,
            ..ViewportConfig::default()
        };
        assert!(matches!(
            above_fit.validate(),
            Err(ViewportError::InvalidScaleLimits { .. })
        ));

        let ceiling_below_fit = ViewportConfig {
            max_scale: Some(0.5),
            ..ViewportConfig::default()
        };
        assert!(matches!(
            ceiling_below_fit.validate(),
            Err(ViewportError::InvalidScaleLimits { .. })
        ));

        let ceiling_at_fit = ViewportConfig {
            max_scale: Some(1.0),
            ..ViewportConfig::default()
        };
        assert_eq!(ceiling_at_fit.validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_anchor_threshold() {
        let config = ViewportConfig {
            anchor_threshold: -1.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ViewportError::InvalidAnchorThreshold(-1.0))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ViewportConfig =
            serde_json::from_str(r#"{ "shrinkable": true, "max_scale": 8.0 }"#).unwrap();
        assert!(config.shrinkable);
        assert_eq!(config.max_scale, Some(8.0));
        assert_eq!(config.min_scale, ViewportConfig::default().min_scale);
    }
}
