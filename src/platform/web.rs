//! Browser glue: viewport queries and the game-over panel

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use crate::sim::Side;

const GAME_OVER_ID: &str = "game-over";

/// Viewport width in CSS pixels
pub fn viewport_width() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as f32
}

/// Left edge of the canvas in client coordinates
pub fn canvas_left(canvas: &HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().left() as f32
}

/// Hide the cursor over the canvas
pub fn hide_cursor(canvas: &HtmlCanvasElement) {
    let _ = canvas.style().set_property("cursor", "none");
}

/// Game-over overlay with a Play Again button.
///
/// Built once at startup; the button listener is installed a single time and
/// the panel is only toggled afterwards.
pub struct GameOverPanel {
    container: HtmlElement,
    title: Element,
}

impl GameOverPanel {
    pub fn new(
        document: &Document,
        mut on_play_again: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let container: HtmlElement = match document.get_element_by_id(GAME_OVER_ID) {
            Some(el) => el.dyn_into()?,
            None => {
                let el: HtmlElement = document.create_element("div")?.dyn_into()?;
                el.set_id(GAME_OVER_ID);
                body.append_child(&el)?;
                el
            }
        };
        container.class_list().add_1("game-over-container")?;
        container.set_text_content(None);
        container.set_hidden(true);

        let title = document.create_element("h1")?;
        let button = document.create_element("button")?;
        button.set_text_content(Some("Play Again"));

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            on_play_again();
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        container.append_child(&title)?;
        container.append_child(&button)?;

        Ok(Self { container, title })
    }

    /// Hide the canvas and show "<Winner> Wins!"
    pub fn show(&self, canvas: &HtmlCanvasElement, winner: Side) {
        let banner = winner.banner();
        self.title.set_text_content(Some(&banner));
        canvas.set_hidden(true);
        self.container.set_hidden(false);
        log::info!("Showing game over panel: {}", banner);
    }

    /// Hide the panel and show the canvas again
    pub fn hide(&self, canvas: &HtmlCanvasElement) {
        self.container.set_hidden(true);
        canvas.set_hidden(false);
    }
}
