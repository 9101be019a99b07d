//! Ambient starfield background.
//!
//! Renders a decorative particle field on a full-viewport canvas with:
//! - Twinkling stars drifting upward with a gentle sideways sway
//! - Optional large geometric glow shapes rotating behind the stars
//! - Pointer repulsion within a fixed radius
//! - Light and dark color themes that never disturb the motion
//!
//! The simulation lives in host-independent modules ([`particles`],
//! [`motion`], [`Animator`]) so it can be driven and tested without a browser;
//! the component only adds frame scheduling and input plumbing.
//!
//! # Example
//!
//! ```ignore
//! use starfield_portfolio::{FieldConfig, StarField};
//!
//! let (dark, _) = signal(true);
//! view! { <StarField dark=dark config=FieldConfig::starfield() /> }
//! ```

mod animator;
mod component;
pub mod config;
pub mod motion;
pub mod particles;
mod render;
pub mod theme;

pub use animator::{Animator, Phase};
pub use component::StarField;
pub use config::{FieldConfig, Profile, Repulsion};
pub use motion::{Pointer, PointerState};
pub use particles::{Field, GeometricShape, ShapeKind, Star};
pub use theme::{FieldTheme, ThemePair};
