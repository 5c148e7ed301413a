//! Polygon drawing widget for the browser.
//!
//! Wraps the shared editor around an HTML canvas: DOM events go in through
//! [`wiring`], frames come out through [`canvas::CanvasSurface`].

mod canvas;
mod wiring;

use std::cell::RefCell;
use std::rc::Rc;

use shared::{paint, Editor, InputEvent, Palette};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::canvas::CanvasSurface;

pub use wiring::to_surface;

/// Module entry point: panic messages and tracing go to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Editor bound to one canvas
pub(crate) struct WidgetState {
    editor: Editor,
    palette: Palette,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WidgetState {
    /// Apply an event; repaint when the editor reports a change
    pub(crate) fn dispatch(&mut self, event: InputEvent) -> Result<bool, JsValue> {
        let changed = self.editor.handle(event);
        if changed {
            self.redraw()?;
        }
        Ok(changed)
    }

    fn redraw(&self) -> Result<(), JsValue> {
        let frame = self.editor.render();
        let mut surface = CanvasSurface::new(&self.ctx, &self.canvas, &self.palette);
        paint(&mut surface, &frame)
    }
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("element '{canvas_id}' not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{canvas_id}' is not a canvas")))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected context type"))
}

/// Polygon drawing widget attached to a canvas element
#[wasm_bindgen]
pub struct PolygonWidget {
    inner: Rc<RefCell<WidgetState>>,
}

#[wasm_bindgen]
impl PolygonWidget {
    /// Attach to the canvas with the given id using the default palette
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PolygonWidget, JsValue> {
        Self::build(canvas_id, Palette::default())
    }

    /// Attach with a palette given as JSON
    pub fn with_palette(canvas_id: &str, palette_json: &str) -> Result<PolygonWidget, JsValue> {
        let palette: Palette = serde_json::from_str(palette_json)
            .map_err(|e| JsValue::from_str(&format!("invalid palette: {e}")))?;
        Self::build(canvas_id, palette)
    }

    /// Move the preview endpoint (canvas coordinates)
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<bool, JsValue> {
        self.send(InputEvent::PointerMove { x, y })
    }

    /// Place a vertex (canvas coordinates)
    pub fn click(&self, x: f64, y: f64) -> Result<bool, JsValue> {
        self.send(InputEvent::PrimaryClick { x, y })
    }

    /// Finish the shape in progress
    pub fn double_click(&self) -> Result<bool, JsValue> {
        self.send(InputEvent::DoubleClick)
    }

    /// Drop the shape in progress
    pub fn cancel(&self) -> Result<bool, JsValue> {
        self.send(InputEvent::ContextMenu)
    }

    pub fn undo(&self) -> Result<bool, JsValue> {
        self.send(InputEvent::Undo)
    }

    pub fn redo(&self) -> Result<bool, JsValue> {
        self.send(InputEvent::Redo)
    }

    /// Drop the drawing and its history
    pub fn clear(&self) -> Result<(), JsValue> {
        let mut state = self.inner.borrow_mut();
        state.editor.reset();
        state.redraw()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.borrow().editor.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.borrow().editor.history().can_redo()
    }

    pub fn shape_count(&self) -> usize {
        self.inner.borrow().editor.scene().shape_count()
    }

    /// Current scene as JSON
    pub fn scene_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.borrow().editor.scene())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Draw commands of the current frame as plain JS objects
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        let frame = self.inner.borrow().editor.render();
        serde_wasm_bindgen::to_value(&frame).map_err(JsValue::from)
    }

    /// Make the element with the given id trigger undo on click
    pub fn bind_undo_button(&self, button_id: &str) -> Result<(), JsValue> {
        self.bind_button(button_id, InputEvent::Undo)
    }

    /// Make the element with the given id trigger redo on click
    pub fn bind_redo_button(&self, button_id: &str) -> Result<(), JsValue> {
        self.bind_button(button_id, InputEvent::Redo)
    }
}

impl PolygonWidget {
    fn build(canvas_id: &str, palette: Palette) -> Result<PolygonWidget, JsValue> {
        let canvas = find_canvas(canvas_id)?;
        let ctx = context_2d(&canvas)?;
        let state = WidgetState {
            editor: Editor::new(),
            palette,
            canvas: canvas.clone(),
            ctx,
        };
        state.redraw()?;

        let inner = Rc::new(RefCell::new(state));
        wiring::attach(&canvas, &inner)?;
        tracing::info!("polygon widget attached to #{canvas_id}");
        Ok(PolygonWidget { inner })
    }

    fn send(&self, event: InputEvent) -> Result<bool, JsValue> {
        self.inner.borrow_mut().dispatch(event)
    }

    fn bind_button(&self, button_id: &str, event: InputEvent) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let button = document
            .get_element_by_id(button_id)
            .ok_or_else(|| JsValue::from_str(&format!("element '{button_id}' not found")))?;

        let state = Rc::clone(&self.inner);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = state.borrow_mut().dispatch(event) {
                tracing::error!("redraw failed: {:?}", e);
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}
