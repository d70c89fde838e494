//! Centralized configuration values shared across the adaptation pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Default edge length for `cube` and `square` when no size argument is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIZE;
/// assert_eq!(DEFAULT_SIZE, 1.0);
/// ```
pub const DEFAULT_SIZE: f64 = 1.0;

/// Default radius for `sphere`, `circle` and `cylinder` when no radius or
/// diameter argument is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert_eq!(DEFAULT_RADIUS, 1.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default height for `cylinder` when the height argument is omitted.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HEIGHT;
/// assert_eq!(DEFAULT_HEIGHT, 1.0);
/// ```
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default `center` flag for primitives that accept one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CENTER;
/// assert!(!DEFAULT_CENTER);
/// ```
pub const DEFAULT_CENTER: bool = false;

/// Default extrusion height for `linear_extrude`, matching the modeling
/// language's historical default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EXTRUDE_HEIGHT;
/// assert_eq!(DEFAULT_EXTRUDE_HEIGHT, 100.0);
/// ```
pub const DEFAULT_EXTRUDE_HEIGHT: f64 = 100.0;

/// Default sweep angle in degrees for `rotate_extrude`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_REVOLVE_ANGLE;
/// assert_eq!(DEFAULT_REVOLVE_ANGLE, 360.0);
/// ```
pub const DEFAULT_REVOLVE_ANGLE: f64 = 360.0;

/// Neutral scale factor used when a `scale` vector supplies fewer elements
/// than the construct expects (e.g. `scale([2, 2])`).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SCALE_COMPONENT;
/// assert_eq!(DEFAULT_SCALE_COMPONENT, 1.0);
/// ```
pub const DEFAULT_SCALE_COMPONENT: f64 = 1.0;

/// Neutral component used when a vector argument supplies fewer elements than
/// the construct expects (e.g. `translate([1, 2])`).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_VECTOR_COMPONENT;
/// assert_eq!(DEFAULT_VECTOR_COMPONENT, 0.0);
/// ```
pub const DEFAULT_VECTOR_COMPONENT: f64 = 0.0;

/// Identifier name synthesized when an assignment is missing its left-hand
/// side. Recovery is permissive: the adapter emits this sentinel instead of
/// failing.
///
/// # Examples
/// ```
/// use config::constants::RECOVERY_IDENTIFIER;
/// assert_eq!(RECOVERY_IDENTIFIER, "unknown");
/// ```
pub const RECOVERY_IDENTIFIER: &str = "unknown";

/// Numeric value synthesized when an assignment is missing its right-hand
/// side.
///
/// # Examples
/// ```
/// use config::constants::RECOVERY_NUMBER;
/// assert_eq!(RECOVERY_NUMBER, 0.0);
/// ```
pub const RECOVERY_NUMBER: f64 = 0.0;
