//! Scroll-derived page state: compact header and the active nav section.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlElement};

/// Scroll distance (px) after which the header switches to its compact look.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// A section counts as active once its top is this far below the viewport top.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Fallback when no section has been reached yet.
pub const DEFAULT_SECTION: &str = "home";

pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD
}

/// The last section (in document order) whose top is at or above
/// `scroll_y + ACTIVE_OFFSET`.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> &'a str {
	let reference_line = scroll_y + ACTIVE_OFFSET;
	sections
		.iter()
		.take_while(|(_, top)| *top <= reference_line)
		.last()
		.map(|(id, _)| *id)
		.unwrap_or(DEFAULT_SECTION)
}

/// Reactive scroll state for the header.
#[derive(Clone, Copy)]
pub struct ScrollState {
	pub scrolled: Signal<bool>,
	pub active: Signal<String>,
}

/// Section tops measured once and reused until the layout changes.
///
/// An empty measurement (sections not mounted yet) is not cached.
#[derive(Clone, Debug, Default)]
pub struct OffsetCache {
	offsets: Option<Vec<(&'static str, f64)>>,
}

impl OffsetCache {
	pub fn get_or_measure(
		&mut self,
		measure: impl FnOnce() -> Vec<(&'static str, f64)>,
	) -> &[(&'static str, f64)] {
		if self.offsets.is_none() {
			let measured = measure();
			if measured.is_empty() {
				return &[];
			}
			self.offsets = Some(measured);
		}
		self.offsets.as_deref().unwrap_or(&[])
	}

	pub fn invalidate(&mut self) {
		self.offsets = None;
	}
}

fn section_offsets(ids: &[&'static str]) -> Vec<(&'static str, f64)> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return Vec::new();
	};
	ids.iter()
		.filter_map(|id| {
			let el: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
			Some((*id, el.offset_top() as f64))
		})
		.collect()
}

/// Track scroll position with a passive window listener. Section offsets are
/// measured lazily and re-measured after a window resize. Both listeners are
/// removed on cleanup.
pub fn use_scroll_state(section_ids: &'static [&'static str]) -> ScrollState {
	let (scrolled, set_scrolled) = signal(false);
	let (active, set_active) = signal(DEFAULT_SECTION.to_string());
	let offsets = StoredValue::new(OffsetCache::default());

	let update = move || {
		let y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		set_scrolled.set(is_scrolled(y));
		let current = offsets
			.try_update_value(|cache| {
				active_section(cache.get_or_measure(|| section_offsets(section_ids)), y)
			})
			.unwrap_or(DEFAULT_SECTION);
		if active.get_untracked() != current {
			set_active.set(current.to_string());
		}
	};
	let relayout = move || {
		offsets.update_value(|cache| cache.invalidate());
		update();
	};

	let listeners = StoredValue::new_local(Vec::<(&'static str, Closure<dyn FnMut()>)>::new());
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let opts = AddEventListenerOptions::new();
		opts.set_passive(true);
		let callbacks: [(&'static str, Closure<dyn FnMut()>); 2] = [
			("scroll", Closure::new(update)),
			("resize", Closure::new(relayout)),
		];
		for (event, cb) in &callbacks {
			let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				cb.as_ref().unchecked_ref(),
				&opts,
			);
		}
		update();
		listeners.update_value(|slot| slot.extend(callbacks));
	});

	on_cleanup(move || {
		listeners.try_update_value(|slot| {
			let Some(window) = web_sys::window() else {
				return;
			};
			for (event, cb) in slot.drain(..) {
				let _ = window.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
			}
		});
	});

	ScrollState {
		scrolled: scrolled.into(),
		active: active.into(),
	}
}
