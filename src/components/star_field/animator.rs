//! Host-independent animation state machine.
//!
//! The [`Animator`] owns everything a frame needs (field, generator, pointer,
//! theme flag) and a lifecycle that is either stopped or running. Each start
//! hands out a generation token; a scheduled frame carrying a stale token is
//! ignored, so a callback that fires after [`Animator::stop`] has no effect.

use fastrand::Rng;
use log::{debug, info};

use super::config::FieldConfig;
use super::motion::{PointerState, advance_field};
use super::particles::Field;

/// Lifecycle of the animator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Stopped,
	Running,
}

/// Drives the particle field frame by frame.
pub struct Animator {
	config: FieldConfig,
	rng: Rng,
	field: Field,
	pointer: PointerState,
	dark: bool,
	phase: Phase,
	generation: u64,
	frames: u64,
}

impl Animator {
	pub fn new(config: FieldConfig, rng: Rng) -> Self {
		Self {
			config: config.sanitized(),
			rng,
			field: Field::default(),
			pointer: PointerState::default(),
			dark: true,
			phase: Phase::Stopped,
			generation: 0,
			frames: 0,
		}
	}

	/// Generate the initial field and enter the running state.
	///
	/// Returns the token frames must present, or `None` when already running.
	pub fn start(&mut self, width: f64, height: f64, dark: bool) -> Option<u64> {
		if self.phase == Phase::Running {
			return None;
		}
		self.generation += 1;
		self.phase = Phase::Running;
		self.dark = dark;
		self.frames = 0;
		self.field = Field::generate(&self.config, width, height, &mut self.rng);
		info!(
			"star-field: started at {}x{} with {} stars, {} shapes",
			self.field.width,
			self.field.height,
			self.field.stars.len(),
			self.field.shapes.len()
		);
		Some(self.generation)
	}

	/// Leave the running state. Safe to call any number of times; returns
	/// whether this call actually stopped a running animator.
	pub fn stop(&mut self) -> bool {
		if self.phase == Phase::Stopped {
			return false;
		}
		self.phase = Phase::Stopped;
		self.generation += 1;
		self.field = Field::default();
		self.pointer.clear();
		info!("star-field: stopped after {} frames", self.frames);
		true
	}

	/// Replace the whole population for a new surface size.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.phase != Phase::Running {
			return;
		}
		self.field = Field::generate(&self.config, width, height, &mut self.rng);
		debug!(
			"star-field: regenerated {} stars for {}x{}",
			self.field.stars.len(),
			self.field.width,
			self.field.height
		);
	}

	pub fn set_dark(&mut self, dark: bool) {
		self.dark = dark;
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer.set(x, y);
	}

	pub fn clear_pointer(&mut self) {
		self.pointer.clear();
	}

	/// Advance one frame if `token` belongs to the current run.
	///
	/// Returns `true` when the frame ran and the caller should render and
	/// schedule the next one.
	pub fn frame(&mut self, token: u64, now_ms: f64) -> bool {
		if !self.is_current(token) {
			return false;
		}
		advance_field(
			&mut self.field,
			self.pointer.get(),
			now_ms,
			&self.config,
			&mut self.rng,
		);
		self.frames += 1;
		true
	}

	pub fn is_current(&self, token: u64) -> bool {
		self.phase == Phase::Running && token == self.generation
	}

	pub fn field(&self) -> &Field {
		&self.field
	}

	pub fn is_dark(&self) -> bool {
		self.dark
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}
}
