//! Tunable parameters for the ambient starfield.
//!
//! Two profiles exist: the plain [`FieldConfig::starfield`] (sparser stars,
//! no glow shapes) and the default [`FieldConfig::extended`] (denser stars
//! plus a fixed set of geometric glow shapes). Hosts can override individual
//! values through a JSON document, see [`FieldConfig::from_json`].

use serde::Deserialize;

/// Smallest accepted area (px²) per star; denser values fall back to the default.
pub const MIN_DENSITY: f64 = 100.0;
/// Upper bound on the number of glow shapes.
pub const MAX_SHAPES: usize = 32;

/// Pointer repulsion parameters for one particle kind.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Repulsion {
	/// Distance from the pointer inside which particles are pushed away.
	pub radius: f64,
	/// Displacement (px per frame) applied at zero distance; decays linearly to the radius.
	pub strength: f64,
}

/// Named starting point for a [`FieldConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
	/// Stars only, one per 8000 px².
	Starfield,
	/// Stars at one per 6000 px² plus eight glow shapes.
	#[default]
	Extended,
}

/// Complete animator configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Surface area (px²) per star. The population is `floor(w * h / density)`.
	pub density: f64,
	/// Number of glow shapes; zero disables the shape layer.
	pub shape_count: usize,
	pub star_repulsion: Repulsion,
	pub shape_repulsion: Repulsion,
	/// Horizontal sway amplitude for stars (px per frame).
	pub star_sway: f64,
	/// Multiplier applied to the clock (ms) before it feeds the star sway.
	pub star_sway_rate: f64,
	/// Upward drift of shapes (px per frame).
	pub shape_drift: f64,
	pub shape_sway: f64,
	pub shape_sway_rate: f64,
}

impl FieldConfig {
	/// Plain starfield: density 8000, no shapes.
	pub fn starfield() -> Self {
		Self {
			density: 8000.0,
			shape_count: 0,
			..Self::extended()
		}
	}

	/// Starfield with geometric glow shapes: density 6000, eight shapes.
	pub fn extended() -> Self {
		Self {
			density: 6000.0,
			shape_count: 8,
			star_repulsion: Repulsion {
				radius: 150.0,
				strength: 0.5,
			},
			shape_repulsion: Repulsion {
				radius: 200.0,
				strength: 0.3,
			},
			star_sway: 0.1,
			star_sway_rate: 0.001,
			shape_drift: 0.2,
			shape_sway: 0.2,
			shape_sway_rate: 0.0005,
		}
	}

	pub fn for_profile(profile: Profile) -> Self {
		match profile {
			Profile::Starfield => Self::starfield(),
			Profile::Extended => Self::extended(),
		}
	}

	/// Parse a JSON override document.
	///
	/// The optional `profile` key picks the base profile; every other key
	/// overrides a single field of it. Unknown keys are ignored.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let doc: ConfigDocument = serde_json::from_str(json)?;
		Ok(doc.into_config())
	}

	/// Replace values that would poison the field math (non-finite density or
	/// one below [`MIN_DENSITY`], non-positive radii, non-finite rates) with the
	/// profile defaults, and cap the shape count at [`MAX_SHAPES`].
	pub fn sanitized(mut self) -> Self {
		let fallback = Self::extended();
		if !(self.density.is_finite() && self.density >= MIN_DENSITY) {
			self.density = fallback.density;
		}
		self.shape_count = self.shape_count.min(MAX_SHAPES);
		self.star_repulsion = sanitize_repulsion(self.star_repulsion, fallback.star_repulsion);
		self.shape_repulsion = sanitize_repulsion(self.shape_repulsion, fallback.shape_repulsion);
		for (value, default) in [
			(&mut self.star_sway, fallback.star_sway),
			(&mut self.star_sway_rate, fallback.star_sway_rate),
			(&mut self.shape_drift, fallback.shape_drift),
			(&mut self.shape_sway, fallback.shape_sway),
			(&mut self.shape_sway_rate, fallback.shape_sway_rate),
		] {
			if !value.is_finite() {
				*value = default;
			}
		}
		self
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::extended()
	}
}

fn sanitize_repulsion(r: Repulsion, fallback: Repulsion) -> Repulsion {
	Repulsion {
		radius: if r.radius.is_finite() && r.radius > 0.0 {
			r.radius
		} else {
			fallback.radius
		},
		strength: if r.strength.is_finite() {
			r.strength
		} else {
			fallback.strength
		},
	}
}

/// Wire shape of the JSON override document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
	profile: Profile,
	density: Option<f64>,
	shape_count: Option<usize>,
	star_repulsion: Option<Repulsion>,
	shape_repulsion: Option<Repulsion>,
	star_sway: Option<f64>,
	star_sway_rate: Option<f64>,
	shape_drift: Option<f64>,
	shape_sway: Option<f64>,
	shape_sway_rate: Option<f64>,
}

impl ConfigDocument {
	fn into_config(self) -> FieldConfig {
		let base = FieldConfig::for_profile(self.profile);
		FieldConfig {
			density: self.density.unwrap_or(base.density),
			shape_count: self.shape_count.unwrap_or(base.shape_count),
			star_repulsion: self.star_repulsion.unwrap_or(base.star_repulsion),
			shape_repulsion: self.shape_repulsion.unwrap_or(base.shape_repulsion),
			star_sway: self.star_sway.unwrap_or(base.star_sway),
			star_sway_rate: self.star_sway_rate.unwrap_or(base.star_sway_rate),
			shape_drift: self.shape_drift.unwrap_or(base.shape_drift),
			shape_sway: self.shape_sway.unwrap_or(base.shape_sway),
			shape_sway_rate: self.shape_sway_rate.unwrap_or(base.shape_sway_rate),
		}
		.sanitized()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profiles_differ_only_in_population() {
		let base = FieldConfig::starfield();
		let ext = FieldConfig::extended();
		assert_eq!(base.density, 8000.0);
		assert_eq!(base.shape_count, 0);
		assert_eq!(ext.density, 6000.0);
		assert_eq!(ext.shape_count, 8);
		assert_eq!(base.star_repulsion, ext.star_repulsion);
		assert_eq!(FieldConfig::default(), ext);
	}

	#[test]
	fn empty_document_is_default_profile() {
		assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::extended());
	}

	#[test]
	fn profile_key_selects_base_before_overrides() {
		let cfg = FieldConfig::from_json(r#"{ "profile": "starfield", "shape_count": 3 }"#).unwrap();
		assert_eq!(cfg.density, 8000.0);
		assert_eq!(cfg.shape_count, 3);
	}

	#[test]
	fn repulsion_override_replaces_whole_block() {
		let cfg =
			FieldConfig::from_json(r#"{ "star_repulsion": { "radius": 90.0, "strength": 1.0 } }"#)
				.unwrap();
		assert_eq!(
			cfg.star_repulsion,
			Repulsion {
				radius: 90.0,
				strength: 1.0
			}
		);
		assert_eq!(cfg.shape_repulsion, FieldConfig::extended().shape_repulsion);
	}

	#[test]
	fn non_positive_density_falls_back() {
		let cfg = FieldConfig::from_json(r#"{ "density": 0.0 }"#).unwrap();
		assert_eq!(cfg.density, 6000.0);
		let cfg = FieldConfig::from_json(r#"{ "density": -5.0 }"#).unwrap();
		assert_eq!(cfg.density, 6000.0);
	}

	#[test]
	fn tiny_density_falls_back() {
		let cfg = FieldConfig::from_json(r#"{ "density": 1e-300 }"#).unwrap();
		assert_eq!(cfg.density, 6000.0);
		let cfg = FieldConfig::from_json(r#"{ "density": 0.01 }"#).unwrap();
		assert_eq!(cfg.density, 6000.0);
		let cfg = FieldConfig::from_json(r#"{ "density": 100.0 }"#).unwrap();
		assert_eq!(cfg.density, MIN_DENSITY);
	}

	#[test]
	fn shape_count_is_capped() {
		let cfg = FieldConfig::from_json(r#"{ "shape_count": 18446744073709551615 }"#).unwrap();
		assert_eq!(cfg.shape_count, MAX_SHAPES);
	}

	#[test]
	fn malformed_document_is_an_error() {
		assert!(FieldConfig::from_json("{ density: ").is_err());
		assert!(FieldConfig::from_json(r#"{ "profile": "nebula" }"#).is_err());
	}
}
