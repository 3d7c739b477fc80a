/// Geographic extent of the bundled base map (Australia and surrounds)
pub const MAP_TOP: f64 = -6.2;
pub const MAP_BOTTOM: f64 = -36.82;
pub const MAP_LEFT: f64 = 106.8;
pub const MAP_RIGHT: f64 = 174.77;

/// Mean radius of the earth in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Density grid is GRID_SIZE x GRID_SIZE cells
pub const GRID_SIZE: usize = 50;

/// Canonical positions of the fields in a cyclone observation row
pub const FIELD_NAME: usize = 0;
pub const FIELD_ID: usize = 1;
pub const FIELD_TIMESTAMP: usize = 2;
pub const FIELD_LAT: usize = 4;
pub const FIELD_LONG: usize = 5;
pub const FIELD_CENTRAL_PRESSURE: usize = 6;
pub const FIELD_RADIUS: usize = 7;
pub const FIELD_SPEED: usize = 8;
pub const RECORD_WIDTH: usize = 9;

/// Chart defaults
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 768;
pub const HISTOGRAM_BAR_WIDTH: f64 = 0.5;
pub const HISTOGRAM_TITLE: &str = "Frequency of Central Pressure";
pub const HISTOGRAM_X_LABEL: &str = "Central Pressure (in Pascal)";
pub const HISTOGRAM_Y_LABEL: &str = "Frequency";
pub const HISTOGRAM_TICK_FONT_SIZE: f64 = 15.0;
pub const HISTOGRAM_TITLE_FONT_SIZE: f64 = 20.0;

/// Composite heat map channel weight
pub const HEAT_CHANNEL_WEIGHT: f64 = 127.0;

/// Output directory for generated artefacts
pub const DEFAULT_OUTPUT_DIR: &str = "output";
