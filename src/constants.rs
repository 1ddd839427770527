/// Presentation constants for the blending widget.
///
/// Element ids mirror `index.html`; colors and sizes keep magic numbers out of
/// the drawing code.
// Host page element ids
pub const ID_DESCRIPTION: &str = "app-title-desc";
pub const ID_TABS: &str = "product-tabs";
pub const ID_SLIDERS: &str = "slider-list";
pub const ID_LIQUID: &str = "liquid-layer";
pub const ID_GLOW: &str = "liquid-glow";
pub const ID_MINI_SWATCH: &str = "mini-swatch";
pub const ID_HEALTH_CHART: &str = "health-chart";
pub const ID_FLAVOR_CHART: &str = "flavor-chart";

// Shown when a product tab is not yet on sale
pub const UNAVAILABLE_NOTICE: &str = "🍵 곧 출시될 예정입니다!";

// Tab classes
pub const TAB_CLASS: &str = "tab";
pub const TAB_ACTIVE_CLASS: &str = "tab-active";
pub const TAB_DISABLED_CLASS: &str = "tab-disabled";

// Radar (health) styling
pub const RADAR_STROKE: &str = "#D4AF37";
pub const RADAR_FILL_ALPHA: f64 = 0.4;
pub const RADAR_GRID_ALPHA: f64 = 0.3;
pub const RADAR_GRID_RINGS: usize = 5;
pub const RADAR_OUTER_RADIUS: f32 = 0.6; // fraction of half the shorter canvas side
pub const RADAR_LABEL_PAD: f32 = 1.18; // label radius relative to outer radius
pub const RADAR_LINE_WIDTH: f64 = 2.0;

// Bar (flavor) styling
pub const FLAVOR_BAR_COLORS: [&str; 5] = ["#F472B6", "#FB923C", "#A78BFA", "#38BDF8", "#4ADE80"];
pub const FLAVOR_DOMAIN_MAX: f64 = 10.0;
pub const BAR_LABEL_WIDTH: f32 = 32.0; // css px reserved for category labels
pub const BAR_RIGHT_MARGIN: f32 = 5.0;
pub const BAR_FILL_RATIO: f32 = 0.7; // bar thickness relative to its row

// Axis label text
pub const LABEL_COLOR: &str = "#5D4037";
pub const LABEL_FONT_PX: f64 = 10.0;
