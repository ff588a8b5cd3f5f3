//! Centralized configuration values shared across the tessellation pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Shortest wall edge that still gets a unit normal.
///
/// Shorter edges get a zero normal. Ring points are compared exactly and are
/// never merged within this tolerance.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// VERTEX LAYOUT CONSTANTS
// =============================================================================

/// Size in bytes of one output float.
///
/// # Examples
/// ```
/// use config::constants::FLOAT_SIZE_BYTES;
/// assert_eq!(FLOAT_SIZE_BYTES, std::mem::size_of::<f32>());
/// ```
pub const FLOAT_SIZE_BYTES: usize = std::mem::size_of::<f32>();

/// Floats written for a vertex position `[x, height, -y]`.
pub const POSITION_COMPONENTS: usize = 3;

/// Floats written for a vertex normal `[nx, ny, nz]`.
pub const NORMAL_COMPONENTS: usize = 3;

/// Normal attached to every roof vertex, regardless of the roof slope.
///
/// # Examples
/// ```
/// use config::constants::ROOF_NORMAL;
/// assert_eq!(ROOF_NORMAL, [0.0, 1.0, 0.0]);
/// ```
pub const ROOF_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Number of vertices emitted for one wall quad (two triangles).
pub const VERTICES_PER_QUAD: usize = 6;

/// Minimum number of distinct points for a ring to enclose an area.
pub const MIN_RING_POINTS: usize = 3;

/// Lower bound on the number of edge flips allowed while legalizing a roof
/// triangulation. The actual budget grows with the square of the triangle count.
pub const MIN_FLIP_BUDGET: usize = 64;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default tessellation origin (x, y).
pub const DEFAULT_ORIGIN: (f64, f64) = (0.0, 0.0);

/// Normals are not written unless requested.
pub const DEFAULT_ADD_NORMALS: bool = false;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of floats per vertex record for the given normals flag.
///
/// # Examples
/// ```
/// use config::constants::floats_per_vertex;
/// assert_eq!(floats_per_vertex(false), 3);
/// assert_eq!(floats_per_vertex(true), 6);
/// ```
#[inline]
pub fn floats_per_vertex(add_normals: bool) -> usize {
    if add_normals {
        POSITION_COMPONENTS + NORMAL_COMPONENTS
    } else {
        POSITION_COMPONENTS
    }
}

/// Byte stride of one vertex record for the given normals flag.
///
/// # Examples
/// ```
/// use config::constants::vertex_stride;
/// assert_eq!(vertex_stride(false), 12);
/// assert_eq!(vertex_stride(true), 24);
/// ```
#[inline]
pub fn vertex_stride(add_normals: bool) -> usize {
    floats_per_vertex(add_normals) * FLOAT_SIZE_BYTES
}

// =============================================================================
// TESSELLATOR CONFIGURATION
// =============================================================================

/// Immutable tessellator settings fixed for the lifetime of one instance.
///
/// # Examples
/// ```
/// use config::constants::TessellatorConfig;
/// let config = TessellatorConfig::default();
/// assert_eq!(config.stride(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellatorConfig {
    /// X coordinate subtracted from every input point.
    pub origin_x: f64,
    /// Y coordinate subtracted from every input point.
    pub origin_y: f64,
    /// Whether each vertex record carries a normal.
    pub add_normals: bool,
}

impl TessellatorConfig {
    /// Builds a configuration, rejecting origins that are NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TessellatorConfig;
    /// let cfg = TessellatorConfig::new(500_000.0, 4_200_000.0, true).expect("valid config");
    /// assert_eq!(cfg.stride(), 24);
    /// assert!(TessellatorConfig::new(f64::NAN, 0.0, false).is_err());
    /// ```
    pub fn new(origin_x: f64, origin_y: f64, add_normals: bool) -> Result<Self, ConfigError> {
        if !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(ConfigError::NonFiniteOrigin(origin_x, origin_y));
        }
        Ok(Self {
            origin_x,
            origin_y,
            add_normals,
        })
    }

    /// Floats written per vertex.
    #[inline]
    pub fn floats_per_vertex(&self) -> usize {
        floats_per_vertex(self.add_normals)
    }

    /// Bytes per vertex record (12 or 24).
    #[inline]
    pub fn stride(&self) -> usize {
        vertex_stride(self.add_normals)
    }
}

impl Default for TessellatorConfig {
    fn default() -> Self {
        Self {
            origin_x: DEFAULT_ORIGIN.0,
            origin_y: DEFAULT_ORIGIN.1,
            add_normals: DEFAULT_ADD_NORMALS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when either origin coordinate is NaN or infinite.
    NonFiniteOrigin(f64, f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFiniteOrigin(x, y) => {
                write!(f, "tessellation origin must be finite: ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
