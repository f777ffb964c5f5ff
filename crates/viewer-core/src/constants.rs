use glam::Vec3;

// Shared placement/interaction tuning constants used by both web and native frontends.

// Collision footprint
pub const FOOTPRINT_RADIUS: f32 = 2.0; // circular exclusion zone around each model
pub const COLLISION_MARGIN: f32 = 0.2; // extra buffer added to the summed radii

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 1.5; // ray-sphere radius for picking a model
pub const RAY_PLANE_EPSILON: f32 = 1e-6; // below this the ray counts as parallel to the ground

// Rotation slider range, mapped onto one full turn
pub const ROTATION_PARAM_MIN: f32 = 0.0;
pub const ROTATION_PARAM_MAX: f32 = 100.0;

// Perspective ("3d") camera
pub const PERSPECTIVE_EYE: [f32; 3] = [0.0, 4.0, 12.0];
pub const PERSPECTIVE_FOVY_DEGREES: f32 = 60.0;

// Orthographic top-down ("2d") camera
pub const TOP_DOWN_EYE: [f32; 3] = [0.0, 10.0, 0.0];
pub const TOP_DOWN_ZOOM: f32 = 100.0; // pixels per world unit

pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit rig limits
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.5; // just under a quarter turn either way
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel
pub const ORBIT_PAN_SPEED: f32 = 0.01; // world units per pixel at unit distance
pub const ORBIT_ZOOM_STEP: f32 = 1.1;
pub const ORTHO_MIN_ZOOM: f32 = 20.0;
pub const ORTHO_MAX_ZOOM: f32 = 400.0;

// Ground plane extent drawn by the frontends
pub const GROUND_HALF_EXTENT: f32 = 5.0;
pub const GRID_DIVISIONS: u32 = 20;

// Default models
pub const DEFAULT_MODEL_IDS: [&str; 2] = ["model1", "model2"];
pub const DEFAULT_MODEL_LABELS: [&str; 2] = ["Bust of Rhetorician", "Lion Crushing Serpent"];
pub const DEFAULT_MODEL_POSITIONS: [[f32; 3]; 2] = [[-3.0, 0.0, 0.0], [3.0, 0.0, 0.0]];

// Remote document layout
pub const MODELS_COLLECTION: &str = "models";

#[inline]
pub fn default_model_position(index: usize) -> Vec3 {
    Vec3::from(DEFAULT_MODEL_POSITIONS[index.min(1)])
}
