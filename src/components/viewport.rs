//! Shared viewport watching for the page.
//!
//! One `IntersectionObserver` per root margin serves every trigger on the
//! page; [`Watcher`] does the bookkeeping and this module wires it to the DOM.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::visibility::{TriggerOptions, WatchId, Watcher};
use crate::error::Result;

struct Observer {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(Array)>,
}

#[derive(Default)]
struct ViewportWatcher {
    watcher: Watcher<Element>,
    observers: HashMap<i32, Observer>,
    listeners: HashMap<WatchId, Callback<bool>>,
}

thread_local! {
    static VIEWPORT: RefCell<ViewportWatcher> = RefCell::new(ViewportWatcher::default());
}

impl ViewportWatcher {
    fn observer_for(&mut self, root_margin_px: i32, options: &TriggerOptions) -> Result<&IntersectionObserver> {
        let slot = match self.observers.entry(root_margin_px) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let on_entries = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                    dispatch(root_margin_px, entries);
                });
                let init = IntersectionObserverInit::new();
                init.set_root_margin(&options.root_margin());
                let observer =
                    IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
                debug!("Created viewport observer with margin {}", options.root_margin());
                slot.insert(Observer { observer, _on_entries: on_entries })
            }
        };
        Ok(&slot.observer)
    }

    /// Stops observing `target` unless another trigger on the same observer
    /// still needs it.
    fn unobserve(&self, root_margin_px: i32, target: &Element) {
        if self.watcher.is_watched(target, root_margin_px) {
            return;
        }
        if let Some(o) = self.observers.get(&root_margin_px) {
            o.observer.unobserve(target);
        }
    }
}

fn dispatch(root_margin_px: i32, entries: Array) {
    let mut notices = Vec::new();
    VIEWPORT.with(|cell| {
        let mut vp = cell.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let intersecting = entry.is_intersecting();
            for id in vp.watcher.ids_for(&target, root_margin_px) {
                let outcome = vp.watcher.notify(id, intersecting);
                if let Some(visible) = outcome.changed {
                    if let Some(listener) = vp.listeners.get(&id) {
                        notices.push((listener.clone(), visible));
                    }
                }
                if let Some(done) = outcome.unobserve {
                    vp.listeners.remove(&id);
                    vp.unobserve(root_margin_px, &done);
                }
            }
        }
    });
    // Listeners may release watches, so they run after the borrow ends.
    for (listener, visible) in notices {
        listener.emit(visible);
    }
}

/// Starts watching `target`; `on_change` receives every visibility change
/// (only the first one for fire-once triggers).
pub fn watch(target: Element, options: TriggerOptions, on_change: Callback<bool>) -> Result<WatchId> {
    VIEWPORT.with(|cell| {
        let mut vp = cell.borrow_mut();
        let margin = options.root_margin_px;
        vp.observer_for(margin, &options)?.observe(&target);
        let id = vp.watcher.register(target, options);
        vp.listeners.insert(id, on_change);
        Ok(id)
    })
}

/// Tears a trigger down. Safe to call for triggers that already fired.
pub fn release(id: WatchId) {
    VIEWPORT.with(|cell| {
        let mut vp = cell.borrow_mut();
        vp.listeners.remove(&id);
        let margin = vp.watcher.options(id).map(|o| o.root_margin_px);
        if let (Some(target), Some(margin)) = (vp.watcher.release(id), margin) {
            vp.unobserve(margin, &target);
        }
    });
}

/// Visibility of the element behind the returned ref.
///
/// Falls back to visible when the browser can't observe, so content is never
/// stuck hidden.
#[hook]
pub fn use_on_screen(options: TriggerOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options| {
                let id = node.cast::<Element>().and_then(|element| {
                    let on_change = {
                        let visible = visible.clone();
                        Callback::from(move |v: bool| visible.set(v))
                    };
                    match watch(element, *options, on_change) {
                        Ok(id) => Some(id),
                        Err(err) => {
                            warn!("Viewport watching unavailable: {}", err);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || {
                    if let Some(id) = id {
                        release(id);
                    }
                }
            },
            options,
        );
    }

    (node, *visible)
}
