//! Bookkeeping for viewport visibility triggers.
//!
//! The browser reports intersections asynchronously; this module decides what
//! each report means for the element that was registered and tells the caller
//! when the element has to be handed back to the observer. Every registration
//! is matched by exactly one hand-back: either on the first positive
//! intersection of a fire-once trigger or on teardown, never both.

use std::collections::HashMap;

/// How a trigger reacts to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerOptions {
    /// Grows (positive) or shrinks (negative) the viewport before testing.
    pub root_margin_px: i32,
    /// Stop watching after the first time the element becomes visible.
    pub fire_once: bool,
}

impl TriggerOptions {
    pub fn new(root_margin_px: i32, fire_once: bool) -> Self {
        Self { root_margin_px, fire_once }
    }

    /// The margin in the CSS form the intersection observer expects.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self::new(0, true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(u64);

/// Per-element state: whether it is visible and whether it is still watched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityState {
    pub visible: bool,
    pub fire_once: bool,
}

/// What a single intersection report changed.
#[derive(Debug, PartialEq)]
pub struct Dispatch<H> {
    /// The new flag value, if it changed.
    pub changed: Option<bool>,
    /// Set when the element must be unobserved now.
    pub unobserve: Option<H>,
}

impl<H> Dispatch<H> {
    fn nothing() -> Self {
        Self { changed: None, unobserve: None }
    }
}

struct Entry<H> {
    target: H,
    options: TriggerOptions,
    state: VisibilityState,
}

/// Registry of watched elements, generic over the host's element handle.
pub struct Watcher<H> {
    next_id: u64,
    entries: HashMap<WatchId, Entry<H>>,
}

impl<H: Clone + PartialEq> Watcher<H> {
    pub fn new() -> Self {
        Self { next_id: 0, entries: HashMap::new() }
    }

    pub fn register(&mut self, target: H, options: TriggerOptions) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                target,
                options,
                state: VisibilityState { visible: false, fire_once: options.fire_once },
            },
        );
        id
    }

    /// Applies one intersection report for `id`.
    ///
    /// Reports for ids that were already released are ignored, which is what
    /// makes a fire-once trigger fire exactly once.
    pub fn notify(&mut self, id: WatchId, intersecting: bool) -> Dispatch<H> {
        let Some(entry) = self.entries.get_mut(&id) else {
            return Dispatch::nothing();
        };

        if intersecting {
            let changed = (!entry.state.visible).then_some(true);
            entry.state.visible = true;
            if entry.state.fire_once {
                let target = self.entries.remove(&id).map(|e| e.target);
                return Dispatch { changed, unobserve: target };
            }
            Dispatch { changed, unobserve: None }
        } else if entry.state.visible {
            // Fire-once entries never get here: they are gone once visible.
            entry.state.visible = false;
            Dispatch { changed: Some(false), unobserve: None }
        } else {
            Dispatch::nothing()
        }
    }

    /// Teardown. Returns the registered target if it still has to be
    /// unobserved; `None` if the trigger already fired and released itself.
    pub fn release(&mut self, id: WatchId) -> Option<H> {
        self.entries.remove(&id).map(|e| e.target)
    }

    /// Live registrations of `target` under the observer for `root_margin_px`,
    /// used to route observer entries back to their triggers.
    pub fn ids_for(&self, target: &H, root_margin_px: i32) -> Vec<WatchId> {
        let mut ids: Vec<WatchId> = self
            .entries
            .iter()
            .filter(|(_, e)| &e.target == target && e.options.root_margin_px == root_margin_px)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Whether any live trigger still needs `target` on the observer for
    /// `root_margin_px`. Observers are shared, so the element must stay
    /// observed until this is false.
    pub fn is_watched(&self, target: &H, root_margin_px: i32) -> bool {
        self.entries
            .values()
            .any(|e| &e.target == target && e.options.root_margin_px == root_margin_px)
    }

    pub fn options(&self, id: WatchId) -> Option<TriggerOptions> {
        self.entries.get(&id).map(|e| e.options)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Clone + PartialEq> Default for Watcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts observe/unobserve calls the way the browser observer would see them.
    #[derive(Default)]
    struct FakeObserver {
        observed: Vec<&'static str>,
        unobserved: Vec<&'static str>,
    }

    impl FakeObserver {
        fn watch(
            &mut self,
            watcher: &mut Watcher<&'static str>,
            el: &'static str,
            options: TriggerOptions,
        ) -> WatchId {
            self.observed.push(el);
            watcher.register(el, options)
        }

        fn report(
            &mut self,
            watcher: &mut Watcher<&'static str>,
            id: WatchId,
            intersecting: bool,
        ) -> Option<bool> {
            let dispatch = watcher.notify(id, intersecting);
            if let Some(el) = dispatch.unobserve {
                self.unobserved.push(el);
            }
            dispatch.changed
        }

        fn teardown(&mut self, watcher: &mut Watcher<&'static str>, id: WatchId) {
            if let Some(el) = watcher.release(id) {
                self.unobserved.push(el);
            }
        }
    }

    #[test]
    fn fire_once_reports_a_single_positive_transition() {
        let mut watcher = Watcher::new();
        let mut observer = FakeObserver::default();
        let id = observer.watch(&mut watcher, "hero", TriggerOptions::new(-50, true));

        let mut positives = 0;
        for intersecting in [false, true, false, true, true, false, true] {
            if observer.report(&mut watcher, id, intersecting) == Some(true) {
                positives += 1;
            }
        }

        assert_eq!(positives, 1);
        assert_eq!(observer.unobserved, vec!["hero"]);
    }

    #[test]
    fn fire_once_teardown_after_firing_does_not_unobserve_twice() {
        let mut watcher = Watcher::new();
        let mut observer = FakeObserver::default();
        let id = observer.watch(&mut watcher, "stats", TriggerOptions::new(0, true));

        assert_eq!(observer.report(&mut watcher, id, true), Some(true));
        observer.teardown(&mut watcher, id);
        observer.teardown(&mut watcher, id);

        assert_eq!(observer.observed.len(), observer.unobserved.len());
        assert!(watcher.is_empty());
    }

    #[test]
    fn teardown_before_firing_unobserves_the_registered_target() {
        let mut watcher = Watcher::new();
        let mut observer = FakeObserver::default();
        let id = observer.watch(&mut watcher, "pricing", TriggerOptions::new(-50, true));

        assert_eq!(observer.report(&mut watcher, id, false), None);
        observer.teardown(&mut watcher, id);

        assert_eq!(observer.unobserved, vec!["pricing"]);
        // late reports after teardown are dropped
        assert_eq!(observer.report(&mut watcher, id, true), None);
    }

    #[test]
    fn repeatable_trigger_follows_the_viewport() {
        let mut watcher = Watcher::new();
        let mut observer = FakeObserver::default();
        let id = observer.watch(&mut watcher, "faq", TriggerOptions::new(0, false));

        assert_eq!(observer.report(&mut watcher, id, true), Some(true));
        assert_eq!(observer.report(&mut watcher, id, true), None);
        assert_eq!(observer.report(&mut watcher, id, false), Some(false));
        assert_eq!(observer.report(&mut watcher, id, false), None);
        assert_eq!(observer.report(&mut watcher, id, true), Some(true));
        assert!(observer.unobserved.is_empty());

        observer.teardown(&mut watcher, id);
        assert_eq!(observer.unobserved, vec!["faq"]);
    }

    #[test]
    fn routes_reports_by_target() {
        let mut watcher = Watcher::new();
        let a = watcher.register("a", TriggerOptions::default());
        let b = watcher.register("b", TriggerOptions::new(-50, true));
        let a2 = watcher.register("a", TriggerOptions::new(0, false));
        let a3 = watcher.register("a", TriggerOptions::new(-50, true));

        assert_eq!(watcher.ids_for(&"a", 0), vec![a, a2]);
        assert_eq!(watcher.ids_for(&"a", -50), vec![a3]);
        assert_eq!(watcher.ids_for(&"b", -50), vec![b]);
        assert!(watcher.ids_for(&"b", 0).is_empty());

        watcher.release(b);
        assert!(watcher.ids_for(&"b", -50).is_empty());
        assert_eq!(watcher.len(), 3);
    }

    #[test]
    fn shared_target_stays_observed_until_its_last_trigger_goes() {
        let mut watcher = Watcher::new();
        let counter = watcher.register("stats", TriggerOptions::new(0, true));
        let hook = watcher.register("stats", TriggerOptions::new(0, false));
        let fade = watcher.register("stats", TriggerOptions::new(-50, true));

        // the fire-once trigger releases itself, the persistent one remains
        let outcome = watcher.notify(counter, true);
        assert_eq!(outcome.unobserve, Some("stats"));
        assert!(watcher.is_watched(&"stats", 0));

        watcher.release(hook);
        assert!(!watcher.is_watched(&"stats", 0));

        // other margins are tracked on their own
        assert!(watcher.is_watched(&"stats", -50));
        watcher.release(fade);
        assert!(!watcher.is_watched(&"stats", -50));
        assert!(!watcher.is_watched(&"hero", 0));
    }

    #[test]
    fn root_margin_uses_css_pixels() {
        assert_eq!(TriggerOptions::new(-50, true).root_margin(), "-50px");
        assert_eq!(TriggerOptions::default().root_margin(), "0px");
    }
}
