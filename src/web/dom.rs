use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};
use yew::NodeRef;

use crate::config;
use crate::motion::{FrameScheduler, HostError, Rect, RevealHost, RevealMode, ScrollHost, ViewportRevealTracker};

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

pub fn inner_height(window: &Window) -> Result<f64, HostError> {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .ok_or(HostError::Measure("innerHeight"))
}

pub fn inner_width(window: &Window) -> Result<f64, HostError> {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .ok_or(HostError::Measure("innerWidth"))
}

/// All elements under `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    select_nodes(root.query_selector_all(selector).ok())
}

pub fn select_all_in_document(document: &Document, selector: &str) -> Vec<Element> {
    select_nodes(document.query_selector_all(selector).ok())
}

fn select_nodes(list: Option<web_sys::NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Event listener that is removed again when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Registers a passive listener; scroll handlers never call `prevent_default`.
    pub fn passive(target: &impl AsRef<EventTarget>, event: &'static str, callback: impl FnMut(Event) + 'static) -> Self {
        let guard = Self::wrap(target, event, callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = guard.target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            guard.callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to add {} listener: {:?}", event, err);
        }
        guard
    }

    pub fn new(target: &impl AsRef<EventTarget>, event: &'static str, callback: impl FnMut(Event) + 'static) -> Self {
        let guard = Self::wrap(target, event, callback);
        if let Err(err) = guard
            .target
            .add_event_listener_with_callback(event, guard.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to add {} listener: {:?}", event, err);
        }
        guard
    }

    fn wrap(target: &impl AsRef<EventTarget>, event: &'static str, callback: impl FnMut(Event) + 'static) -> Self {
        Self {
            target: target.as_ref().clone(),
            event,
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Owns an `IntersectionObserver` together with the closure it calls.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn new(threshold: f64, mut on_entry: impl FnMut(&Element, bool) + 'static) -> Result<Self, HostError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry.target(), entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| HostError::Watch(format!("{:?}", err)))?;

        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) -> Result<(), HostError> {
        if !element.is_connected() {
            return Err(HostError::Watch("element is not attached to the document".to_string()));
        }
        self.observer.observe(element);
        Ok(())
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct DomRevealHost {
    watcher: IntersectionWatcher,
}

impl RevealHost for DomRevealHost {
    type Target = Element;
    type Timer = Timeout;

    fn watch(&self, target: &Element) -> Result<(), HostError> {
        self.watcher.observe(target)
    }

    fn unwatch(&self, target: &Element) {
        self.watcher.unobserve(target);
    }

    fn children(&self, target: &Element) -> Vec<Element> {
        select_all(target, config::FADE_IN_CHILD_SELECTOR)
    }

    fn reveal(&self, target: &Element) {
        if let Err(err) = target.class_list().add_1(config::FADE_IN_CLASS) {
            warn!("Failed to reveal element: {:?}", err);
        }
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// A reveal tracker whose intersection observer reports back into it.
///
/// The observer callback holds the slot, so [`DomReveals::teardown`] has to
/// run for the pair to be freed. The hooks do that on unmount.
pub struct DomReveals {
    slot: Rc<RefCell<Option<ViewportRevealTracker<DomRevealHost>>>>,
}

impl DomReveals {
    pub fn new() -> Result<Self, HostError> {
        let slot: Rc<RefCell<Option<ViewportRevealTracker<DomRevealHost>>>> = Rc::new(RefCell::new(None));
        let feed = slot.clone();
        let watcher = IntersectionWatcher::new(config::REVEAL_THRESHOLD, move |element, visible| {
            if let Some(tracker) = feed.borrow().as_ref() {
                tracker.on_visibility(element, visible);
            }
        })?;
        *slot.borrow_mut() = Some(ViewportRevealTracker::new(DomRevealHost { watcher }));
        Ok(Self { slot })
    }

    pub fn observe(&self, element: Element, mode: RevealMode) {
        if let Some(tracker) = self.slot.borrow().as_ref() {
            tracker.observe(element, mode);
        }
    }

    pub fn teardown(&self) {
        let tracker = self.slot.borrow_mut().take();
        if let Some(tracker) = tracker {
            tracker.teardown();
        }
    }
}

/// Window scroll position plus the bounding box of a pinned section.
pub struct WindowScroll {
    window: Window,
    section: NodeRef,
}

impl WindowScroll {
    pub fn new(window: Window, section: NodeRef) -> Self {
        Self { window, section }
    }
}

impl ScrollHost for WindowScroll {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        inner_height(&self.window).unwrap_or(0.0)
    }

    fn section_rect(&self) -> Option<Rect> {
        let element = self.section.cast::<Element>()?;
        let rect = element.get_bounding_client_rect();
        Some(Rect { top: rect.top(), height: rect.height() })
    }
}

/// `requestAnimationFrame` through gloo; dropping the handle cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Frame = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| callback())
    }
}
