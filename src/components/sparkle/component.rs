//! Leptos component hosting the sparkle engine on a fullscreen canvas.
//!
//! The canvas ignores pointer events so the page beneath stays usable; clicks
//! are observed on the document instead. Window resizes and document clicks
//! become [`Intent`]s, and a `requestAnimationFrame` loop drives
//! [`SparkleEngine::frame`] until the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, Window};

use super::config::SparkleConfig;
use super::engine::{Intent, LoopState, SparkleEngine};
use super::error::BootError;
use super::spawner::PointerTarget;
use super::surface::CanvasSurface;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type Listener<T> = Rc<RefCell<Option<Closure<T>>>>;

/// Renders click-triggered sparkle bursts over the whole viewport.
///
/// Does nothing when the browser reports a reduced-motion preference at mount
/// time, or when no 2d canvas context is available.
#[component]
pub fn SparkleCanvas(
	/// Burst, motion and palette settings.
	#[prop(optional)]
	config: SparkleConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let stop_requested = Arc::new(AtomicBool::new(false));
	let stop_flag = stop_requested.clone();

	on_cleanup(move || stop_flag.store(true, Ordering::Relaxed));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (window, document, surface) = match boot(canvas) {
			Ok(env) => env,
			Err(e) => {
				info!("sparkle: effect unavailable: {e}");
				return;
			}
		};

		let mut engine = SparkleEngine::new(config.clone(), surface, random_seed());
		let selector = engine.config().exempt_selector.clone();
		if engine.start(prefers_reduced_motion(&window)) != LoopState::Running {
			return;
		}
		if let Some((width, height)) = viewport_size(&window) {
			engine.dispatch(Intent::Resize { width, height });
		}
		let engine = Rc::new(RefCell::new(engine));

		let on_resize: Listener<dyn FnMut()> = Rc::new(RefCell::new(None));
		let engine_resize = engine.clone();
		*on_resize.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some((width, height)) = viewport_size(&win) {
				engine_resize
					.borrow_mut()
					.dispatch(Intent::Resize { width, height });
			}
		}));
		if let Some(ref cb) = *on_resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let on_click: Listener<dyn FnMut(MouseEvent)> = Rc::new(RefCell::new(None));
		let engine_click = engine.clone();
		*on_click.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			engine_click.borrow_mut().dispatch(Intent::Spawn {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
				target: classify_target(&ev, &selector),
			});
		}));
		if let Some(ref cb) = *on_click.borrow() {
			let _ = document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}

		let animate: Listener<dyn FnMut()> = Rc::new(RefCell::new(None));
		let (animate_inner, stop_requested) = (animate.clone(), stop_requested.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if stop_requested.load(Ordering::Relaxed) {
				if let Some(cb) = on_resize.borrow_mut().take() {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				if let Some(cb) = on_click.borrow_mut().take() {
					let _ = document
						.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
				}
				engine.borrow_mut().stop();
				// Dropping the running closure here would free it mid-call,
				// so the self-reference is released from a timeout instead.
				if let Some(cb) = animate_inner.borrow_mut().take() {
					let release = Closure::once_into_js(move || drop(cb));
					let _ = window.set_timeout_with_callback(release.unchecked_ref());
				}
				return;
			}

			if !engine.borrow_mut().frame() {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = web_sys::window()
				.map(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()));
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="sparkle-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 50;"
		/>
	}
}

/// Startup guard: everything the engine needs from the host, or why not.
fn boot(canvas: HtmlCanvasElement) -> Result<(Window, Document, CanvasSurface), BootError> {
	let window = web_sys::window().ok_or(BootError::NoWindow)?;
	let document = window.document().ok_or(BootError::NoDocument)?;
	if !canvas.is_connected() {
		return Err(BootError::NoSurface);
	}
	let surface = CanvasSurface::new(canvas)?;
	Ok((window, document, surface))
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

fn viewport_size(window: &Window) -> Option<(u32, u32)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width as u32, height as u32))
}

/// Exempt when the target or one of its ancestors matches `selector`.
/// A selector the browser rejects exempts nothing.
fn classify_target(ev: &MouseEvent, selector: &str) -> PointerTarget {
	let Some(el) = ev
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
	else {
		return PointerTarget::Surface;
	};
	let exempt = match el.closest(selector) {
		Ok(ancestor) => ancestor.is_some(),
		Err(e) => {
			warn!("sparkle: exempt selector {selector:?} rejected: {e:?}");
			false
		}
	};
	if exempt {
		PointerTarget::Exempt
	} else {
		PointerTarget::Surface
	}
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}
