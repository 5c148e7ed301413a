//! DOM event listeners that feed the editor.

use std::cell::RefCell;
use std::rc::Rc;

use shared::{shortcut, InputEvent};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

use crate::WidgetState;

/// Map client coordinates onto the canvas backing store.
///
/// `origin` is the top-left corner of the canvas bounding rect and `scale`
/// the ratio between backing-store pixels and CSS pixels on each axis.
pub fn to_surface(client: (f64, f64), origin: (f64, f64), scale: (f64, f64)) -> (f64, f64) {
    (
        (client.0 - origin.0) * scale.0,
        (client.1 - origin.1) * scale.1,
    )
}

fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let scale = |backing: u32, css: f64| {
        if css > 0.0 {
            f64::from(backing) / css
        } else {
            1.0
        }
    };
    to_surface(
        (f64::from(event.client_x()), f64::from(event.client_y())),
        (rect.left(), rect.top()),
        (
            scale(canvas.width(), rect.width()),
            scale(canvas.height(), rect.height()),
        ),
    )
}

/// Primary click as an editor event.
///
/// The second click of a double click (`detail >= 2`) places no vertex; the
/// `dblclick` that follows closes the shape at the vertex already placed.
pub fn primary_click(button: i16, detail: i32, at: (f64, f64)) -> Option<InputEvent> {
    if button != 0 || detail >= 2 {
        return None;
    }
    let (x, y) = at;
    Some(InputEvent::PrimaryClick { x, y })
}

/// Elements that consume typing themselves
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

fn typing_into_field(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .is_some_and(|el| is_text_entry(&el.tag_name(), el.is_content_editable()))
}

fn listen_mouse<F>(
    canvas: &HtmlCanvasElement,
    kind: &str,
    state: &Rc<RefCell<WidgetState>>,
    to_event: F,
) -> Result<(), JsValue>
where
    F: Fn(&HtmlCanvasElement, &MouseEvent) -> Option<InputEvent> + 'static,
{
    let state = Rc::clone(state);
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(input) = to_event(&target, &event) else {
            return;
        };
        if let Err(e) = state.borrow_mut().dispatch(input) {
            tracing::error!("redraw failed: {:?}", e);
        }
    });
    canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Attach pointer listeners to the canvas and keyboard shortcuts to the window
pub(crate) fn attach(canvas: &HtmlCanvasElement, state: &Rc<RefCell<WidgetState>>) -> Result<(), JsValue> {
    listen_mouse(canvas, "mousemove", state, |canvas, event| {
        let (x, y) = canvas_point(canvas, event);
        Some(InputEvent::PointerMove { x, y })
    })?;
    listen_mouse(canvas, "mouseleave", state, |_, _| {
        Some(InputEvent::PointerLeave)
    })?;
    listen_mouse(canvas, "click", state, |canvas, event| {
        let at = canvas_point(canvas, event);
        let input = primary_click(event.button(), event.detail(), at)?;
        tracing::debug!("click at ({:.1}, {:.1})", at.0, at.1);
        Some(input)
    })?;
    listen_mouse(canvas, "dblclick", state, |_, _| Some(InputEvent::DoubleClick))?;
    listen_mouse(canvas, "contextmenu", state, |_, event| {
        event.prevent_default();
        Some(InputEvent::ContextMenu)
    })?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let key_state = Rc::clone(state);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        // Keys typed into form fields and editable content belong to them
        if typing_into_field(&event) {
            return;
        }
        let Some(input) = shortcut(
            &event.key(),
            event.ctrl_key() || event.meta_key(),
            event.shift_key(),
        ) else {
            return;
        };
        event.prevent_default();
        if let Err(e) = key_state.borrow_mut().dispatch(input) {
            tracing::error!("redraw failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_surface_offsets_by_origin() {
        assert_eq!(to_surface((110.0, 60.0), (100.0, 50.0), (1.0, 1.0)), (10.0, 10.0));
    }

    #[test]
    fn test_to_surface_scales_for_hidpi() {
        assert_eq!(to_surface((20.0, 30.0), (0.0, 0.0), (2.0, 2.0)), (40.0, 60.0));
    }

    #[test]
    fn test_primary_click_places_vertex() {
        assert_eq!(
            primary_click(0, 1, (3.0, 4.0)),
            Some(InputEvent::PrimaryClick { x: 3.0, y: 4.0 })
        );
    }

    #[test]
    fn test_second_click_of_double_click_ignored() {
        assert_eq!(primary_click(0, 2, (3.0, 4.0)), None);
        assert_eq!(primary_click(0, 3, (3.0, 4.0)), None);
    }

    #[test]
    fn test_non_primary_button_ignored() {
        assert_eq!(primary_click(1, 1, (0.0, 0.0)), None);
        assert_eq!(primary_click(2, 1, (0.0, 0.0)), None);
    }

    #[test]
    fn test_text_entry_targets() {
        assert!(is_text_entry("INPUT", false));
        assert!(is_text_entry("textarea", false));
        assert!(is_text_entry("SELECT", false));
        assert!(is_text_entry("DIV", true));
        assert!(!is_text_entry("CANVAS", false));
        assert!(!is_text_entry("BODY", false));
    }
}
