// DOM wiring and Canvas2D presentation constants for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";
pub const STATUS_TEXT_ID: &str = "status-text";
pub const MODE_LABEL_ID: &str = "view-mode-label";
pub const VIEW_3D_BUTTON_ID: &str = "view-3d";
pub const VIEW_2D_BUTTON_ID: &str = "view-2d";
pub const ROTATION_SLIDER_IDS: [&str; 2] = ["rotation-model1", "rotation-model2"];
pub const HINT_SELECTOR: &str = ".hint";

// Remote store location, read from the canvas element
pub const STORE_URL_ATTR: &str = "data-store-url";
pub const DEFAULT_STORE_URL: &str = "/api";

// Pointer handling
pub const CLICK_SLOP_PX: f32 = 4.0; // max travel between down and up that still counts as a click
pub const WHEEL_PX_PER_STEP: f32 = 100.0;

// Scene drawing
pub const GROUND_Y: f32 = -1.0; // ground slab sits below the model origins
pub const MODEL_BODY_RADIUS: f32 = 1.0;
pub const HEADING_LENGTH: f32 = 1.4;
pub const CIRCLE_SEGMENTS: usize = 48;

pub const BACKGROUND_CSS: &str = "#1a1a2e";
pub const GROUND_CSS: &str = "rgba(51, 51, 51, 0.3)";
pub const GRID_CSS: &str = "#444444";
pub const LABEL_CSS: &str = "#ffffff";
pub const LABEL_FONT: &str = "14px sans-serif";
