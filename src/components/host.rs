//! Browser scheduling handles. Both stop their work when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;
use yew::Callback;

use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::Dom("no global window".to_string()))
}

/// Inner size of the browser window in CSS pixels.
pub fn window_size(window: &Window) -> Result<(f64, f64)> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `on_frame` once per display frame until dropped.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(on_frame: Callback<f64>) -> Result<Self> {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next = Rc::downgrade(&callback);
        let scheduled = pending.clone();
        let win = window.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            scheduled.set(None);
            on_frame.emit(timestamp);
            // Gone once the loop was dropped, possibly by `on_frame` itself.
            let Some(callback) = next.upgrade() else {
                return;
            };
            if let Some(f) = callback.borrow().as_ref() {
                match win.request_animation_frame(f.as_ref().unchecked_ref()) {
                    Ok(id) => scheduled.set(Some(id)),
                    Err(err) => log::error!("Could not schedule frame: {:?}", err),
                }
            };
        }));

        let id = match callback.borrow().as_ref() {
            Some(f) => window.request_animation_frame(f.as_ref().unchecked_ref())?,
            None => return Err(SiteError::Dom("frame callback missing".to_string())),
        };
        pending.set(Some(id));

        Ok(Self { window, pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// A window event listener, removed on drop.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, on_event: Callback<()>) -> Result<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(move || on_event.emit(()));
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
