use crate::error::Result;
use crate::utils::constants::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::coordinates::BoundingBox;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChartSettings {
    #[validate(range(min = 64, max = 8192))]
    pub width: u32,

    #[validate(range(min = 64, max = 8192))]
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub bounding_box: BoundingBox,

    #[validate(nested)]
    pub histogram: ChartSettings,
}

impl Settings {
    /// Built-in defaults, overlaid by `path` when given. The file format
    /// follows its extension (toml, json, yaml, ...).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading settings file");
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}
