//! sparkle-fx: click-triggered sparkle bursts for web pages.
//!
//! This crate provides a WASM canvas component that spawns short-lived,
//! star-shaped particles wherever the visitor clicks empty page area, lets
//! them fall and fade, and repaints them every display refresh.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::sparkle::{SparkleCanvas, SparkleConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sparkle-fx: logging initialized");
}

/// Load a config override from a script element with id="sparkle-config".
/// Falls back to defaults when the element is absent or its JSON is rejected.
fn load_config() -> SparkleConfig {
	let Some(json_text) = config_script_text() else {
		return SparkleConfig::default();
	};

	match SparkleConfig::from_json(&json_text) {
		Ok(config) => {
			info!("sparkle-fx: loaded config override");
			config
		}
		Err(e) => {
			warn!("sparkle-fx: ignoring sparkle config: {}", e);
			SparkleConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sparkle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// A demo page: clicking the background sparkles, the controls do not.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Sparkles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="sparkle-demo">
			<h1>"Sparkles"</h1>
			<p class="subtitle">"Click anywhere on the page. Buttons and links stay quiet."</p>
			<button type="button">"A button"</button>
			<a href="#top">"A link"</a>
		</main>
		<SparkleCanvas config=config />
	}
}
