//! Persisted light/dark preference.
//!
//! The flag is stored in `localStorage` as a JSON boolean. Without a saved
//! value the system `prefers-color-scheme` decides. Every change is written
//! back and mirrored as the `dark` class on the document root.

use leptos::prelude::*;
use log::debug;
use web_sys::Storage;

const STORAGE_KEY: &str = "darkMode";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Parse a stored preference. Anything but a JSON boolean is treated as unset.
pub fn parse_saved(raw: &str) -> Option<bool> {
	serde_json::from_str::<bool>(raw.trim()).ok()
}

pub fn encode(dark: bool) -> String {
	serde_json::Value::Bool(dark).to_string()
}

/// Resolve the starting mode: saved value first, then the system preference.
pub fn resolve_initial(saved: Option<&str>, system_dark: Option<bool>) -> bool {
	saved
		.and_then(parse_saved)
		.or(system_dark)
		.unwrap_or(false)
}

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok()?
}

fn system_prefers_dark() -> Option<bool> {
	let query = web_sys::window()?.match_media(DARK_QUERY).ok()??;
	Some(query.matches())
}

fn persist(dark: bool) {
	if let Some(storage) = local_storage() {
		if storage.set_item(STORAGE_KEY, &encode(dark)).is_err() {
			debug!("preferences: could not save theme");
		}
	}
}

fn apply_root_class(dark: bool) {
	let root = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element());
	if let Some(root) = root {
		let _ = root.class_list().toggle_with_force("dark", dark);
	}
}

/// Reactive handle to the page's theme flag.
#[derive(Clone, Copy)]
pub struct DarkMode {
	value: ReadSignal<bool>,
	set: WriteSignal<bool>,
}

impl DarkMode {
	pub fn get(&self) -> bool {
		self.value.get()
	}

	pub fn toggle(&self) {
		self.set.update(|dark| *dark = !*dark);
	}

	pub fn signal(&self) -> Signal<bool> {
		self.value.into()
	}
}

/// Create the theme flag, restoring the saved preference and keeping
/// storage and the root class in sync with later changes.
pub fn use_dark_mode() -> DarkMode {
	let saved = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	let initial = resolve_initial(saved.as_deref(), system_prefers_dark());
	let (value, set) = signal(initial);

	Effect::new(move |_| {
		let dark = value.get();
		persist(dark);
		apply_root_class(dark);
	});

	DarkMode { value, set }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn saved_value_wins_over_system() {
		assert!(resolve_initial(Some("true"), Some(false)));
		assert!(!resolve_initial(Some("false"), Some(true)));
	}

	#[test]
	fn falls_back_to_system_then_light() {
		assert!(resolve_initial(None, Some(true)));
		assert!(resolve_initial(Some("not json"), Some(true)));
		assert!(!resolve_initial(None, None));
	}

	#[test]
	fn only_json_booleans_parse() {
		assert_eq!(parse_saved(" true "), Some(true));
		assert_eq!(parse_saved("false"), Some(false));
		assert_eq!(parse_saved("\"true\""), None);
		assert_eq!(parse_saved("1"), None);
		assert_eq!(encode(true), "true");
		assert_eq!(parse_saved(&encode(false)), Some(false));
	}
}
