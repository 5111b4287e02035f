//! WASM application entry points.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use circles_core::{AnimationLoop, FrameDriver, RenderConfig};
use wasm_bindgen::prelude::*;
use web_sys::console;

use super::canvas2d::Canvas2dSurface;
use super::foreign::ForeignSimulation;
use super::frame::BrowserFrameHost;
use super::options::{report_json, RendererOptions};

type BrowserLoop = AnimationLoop<ForeignSimulation, Canvas2dSurface, BrowserFrameHost>;

thread_local! {
    static ACTIVE: RefCell<Option<CircleRenderer>> = const { RefCell::new(None) };
}

/// Draws a foreign simulation's circle buffer onto a canvas every frame.
#[wasm_bindgen]
pub struct CircleRenderer {
    inner: Rc<RefCell<BrowserLoop>>,
}

#[wasm_bindgen]
impl CircleRenderer {
    /// Bind to the canvas with id `canvas_id` and the default `Module`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        data_length: usize,
        stride_length: usize,
    ) -> Result<CircleRenderer, JsValue> {
        let options =
            RendererOptions::from_args(canvas_id, data_length, stride_length).map_err(to_js)?;
        Self::with_options(&options)
    }

    /// Bind using a YAML config document.
    pub fn from_yaml(yaml: &str) -> Result<CircleRenderer, JsValue> {
        Self::with_options(&RendererOptions::from_yaml(yaml).map_err(to_js)?)
    }

    /// Bind using a JSON config document.
    pub fn from_json(json: &str) -> Result<CircleRenderer, JsValue> {
        Self::with_options(&RendererOptions::from_json(json).map_err(to_js)?)
    }

    /// Arm the first frame.
    pub fn start(&self) -> Result<(), JsValue> {
        let mut lp = self.inner.try_borrow_mut().map_err(to_js)?;
        lp.start().map_err(to_js)
    }

    /// Cancel the pending frame. Returns whether one was pending.
    pub fn stop(&self) -> bool {
        self.inner
            .try_borrow_mut()
            .map(|mut lp| lp.stop())
            .unwrap_or(false)
    }

    /// Check if a frame is pending.
    pub fn is_running(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|lp| lp.is_running())
            .unwrap_or(false)
    }

    /// Frames drawn so far.
    pub fn frames_rendered(&self) -> f64 {
        self.inner
            .try_borrow()
            .map(|lp| lp.frames_rendered() as f64)
            .unwrap_or(0.0)
    }

    /// The last frame's report as JSON, `null` before the first frame.
    pub fn last_frame_json(&self) -> String {
        self.inner
            .try_borrow()
            .map(|lp| report_json(lp.last_report().as_ref()))
            .unwrap_or_else(|_| report_json(None))
    }
}

impl CircleRenderer {
    fn with_options(options: &RendererOptions) -> Result<Self, JsValue> {
        console_error_panic_hook::set_once();

        let config = options.config();
        let layout = options.layout();
        let surface = Canvas2dSurface::from_element_id(&config.canvas_id)
            .map_err(|e| JsValue::from_str(&e))?;
        let simulation = ForeignSimulation::from_global(
            &config.module,
            &config.simulation_fn,
            &config.heap,
            layout.data_length(),
        )?;
        let host = BrowserFrameHost::new()?;

        let driver = FrameDriver::new(layout, simulation, surface);
        let inner = Rc::new(RefCell::new(AnimationLoop::new(driver, host)));

        let weak = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(rc) = weak.upgrade() else { return };
            let Ok(mut lp) = rc.try_borrow_mut() else {
                console::warn_1(&JsValue::from_str("circles: frame callback while busy"));
                return;
            };
            if let Err(e) = lp.on_frame() {
                console::error_1(&JsValue::from_str(&format!("circles: {e}")));
            }
        });
        inner.borrow().host().set_callback(closure);

        console::log_1(&JsValue::from_str(&format!(
            "circles: #{} bound to {}.{} ({} records, stride {})",
            config.canvas_id,
            config.module,
            config.simulation_fn,
            layout.record_count(),
            layout.stride_length()
        )));
        Ok(Self { inner })
    }
}

impl Drop for CircleRenderer {
    fn drop(&mut self) {
        if let Ok(mut lp) = self.inner.try_borrow_mut() {
            lp.stop();
            lp.host().clear_callback();
        }
    }
}

/// Start drawing the default canvas from the default `Module`.
///
/// Replaces the loop started by a previous call.
#[wasm_bindgen]
pub fn render(data_length: usize, stride_length: usize) -> Result<(), JsValue> {
    stop_render();
    let renderer = CircleRenderer::new(
        &RenderConfig::default().canvas_id,
        data_length,
        stride_length,
    )?;
    renderer.start()?;
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(renderer));
    Ok(())
}

/// Stop the loop started by [`render`]. Returns whether one was running.
#[wasm_bindgen]
pub fn stop_render() -> bool {
    ACTIVE
        .with(|slot| slot.borrow_mut().take())
        .is_some_and(|renderer| renderer.stop())
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

fn to_js(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
