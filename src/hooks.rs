use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::AnimationFrame;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::{FrameScheduler, FrameThrottle, HostError, RevealMode, ScrollStack, StackState};
use crate::web::dom::{self, AnimationFrames, DomReveals, IntersectionWatcher, ListenerGuard, WindowScroll};
use crate::web::page;

fn start_reveals(targets: Vec<Element>, mode: RevealMode) -> Option<DomReveals> {
    match DomReveals::new() {
        Ok(reveals) => {
            for target in targets {
                reveals.observe(target, mode);
            }
            Some(reveals)
        }
        Err(err) => {
            warn!("Scroll reveal disabled: {}", err);
            None
        }
    }
}

/// Reveals the referenced element (or its fade-in children) once it scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef, mode: RevealMode) {
    use_effect_with_deps(
        move |node| {
            let reveals = node.cast::<Element>().and_then(|el| start_reveals(vec![el], mode));
            move || {
                if let Some(reveals) = reveals {
                    reveals.teardown();
                }
            }
        },
        node,
    );
}

/// Reveals every element in the document matching `selector`, one tracker for all.
#[hook]
pub fn use_reveal_all(selector: &'static str) {
    use_effect_with_deps(
        move |selector| {
            let targets = match dom::document() {
                Ok(document) => dom::select_all_in_document(&document, selector),
                Err(err) => {
                    warn!("Scroll reveal disabled: {}", err);
                    Vec::new()
                }
            };
            debug!("Observing {} elements for {}", targets.len(), selector);
            let reveals = start_reveals(targets, RevealMode::Single);
            move || {
                if let Some(reveals) = reveals {
                    reveals.teardown();
                }
            }
        },
        selector,
    );
}

struct MountedStack {
    stack: Rc<ScrollStack<WindowScroll, AnimationFrames>>,
    _watcher: IntersectionWatcher,
    _listeners: [ListenerGuard; 2],
}

fn mount_scroll_stack(section: NodeRef, on_change: impl Fn(StackState) + 'static) -> Result<MountedStack, HostError> {
    let window = dom::window()?;
    let stack = Rc::new(ScrollStack::new(
        WindowScroll::new(window.clone(), section.clone()),
        AnimationFrames,
        on_change,
    ));

    let watcher = {
        let stack = stack.clone();
        IntersectionWatcher::new(config::REVEAL_THRESHOLD, move |_, visible| stack.set_intersecting(visible))?
    };
    let observed = section
        .cast::<Element>()
        .ok_or_else(|| HostError::Watch("card stack section is not mounted".to_string()))
        .and_then(|element| watcher.observe(&element));
    if let Err(err) = observed {
        // without visibility updates the stages still follow scroll
        warn!("Card stack visibility not tracked: {}", err);
        stack.set_intersecting(true);
    }

    let on_scroll = {
        let stack = stack.clone();
        ListenerGuard::passive(&window, "scroll", move |_: Event| stack.handle_scroll())
    };
    let on_resize = {
        let stack = stack.clone();
        ListenerGuard::passive(&window, "resize", move |_: Event| stack.handle_scroll())
    };

    stack.handle_scroll();
    Ok(MountedStack { stack, _watcher: watcher, _listeners: [on_scroll, on_resize] })
}

/// Drives a pinned card stack from window scroll. Re-renders only on stage or
/// visibility changes.
#[hook]
pub fn use_scroll_stack(section: NodeRef) -> StackState {
    let state = use_state_eq(StackState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |section| {
                let publish = state.clone();
                let mounted = match mount_scroll_stack(section.clone(), move |next| publish.set(next)) {
                    Ok(mounted) => Some(mounted),
                    Err(err) => {
                        warn!("Card stack animation disabled: {}", err);
                        state.set(StackState::fully_shown());
                        None
                    }
                };
                move || {
                    if let Some(mounted) = mounted {
                        debug!(
                            "Card stack unmounted at stage {} (last offset {:?})",
                            mounted.stack.state().active_index,
                            mounted.stack.last_offset()
                        );
                        mounted.stack.teardown();
                    }
                }
            },
            section,
        );
    }
    *state
}

/// `true` once the window has scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = dom::window().ok().map(|window| {
                    let win = window.clone();
                    let update = move || scrolled.set(page::is_scrolled_past(win.scroll_y().unwrap_or(0.0), threshold));
                    update();
                    ListenerGuard::passive(&window, "scroll", move |_: Event| update())
                });
                move || drop(listener)
            },
            threshold,
        );
    }
    *scrolled
}

/// Applies the hero parallax at most once per frame while `enabled`.
#[hook]
pub fn use_parallax(enabled: bool) {
    use_effect_with_deps(
        move |enabled| {
            let listener = if *enabled {
                dom::window().ok().map(|window| {
                    let throttle = Rc::new(RefCell::new(FrameThrottle::new()));
                    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
                    let win = window.clone();
                    let guard = ListenerGuard::passive(&window, "scroll", {
                        let frame = frame.clone();
                        move |_: Event| {
                            let scroll_y = win.scroll_y().unwrap_or(0.0);
                            if !throttle.borrow_mut().record(scroll_y) {
                                return;
                            }
                            let throttle = throttle.clone();
                            let handle = AnimationFrames.request_frame(Box::new(move || {
                                if let Some(scroll_y) = throttle.borrow_mut().take() {
                                    page::apply_parallax(scroll_y);
                                }
                            }));
                            *frame.borrow_mut() = Some(handle);
                        }
                    });
                    (guard, frame)
                })
            } else {
                None
            };
            move || {
                if let Some((guard, frame)) = listener {
                    drop(guard);
                    frame.borrow_mut().take();
                }
            }
        },
        enabled,
    );
}

/// Tilts `image` toward the pointer while it moves over `container`, and
/// levels it again when the pointer leaves.
#[hook]
pub fn use_tilt(container: NodeRef, image: NodeRef, enabled: bool) {
    use_effect_with_deps(
        move |(container, image, enabled)| {
            let guards = match (*enabled, container.cast::<Element>()) {
                (true, Some(element)) => {
                    let on_move = {
                        let (container, image) = (container.clone(), image.clone());
                        ListenerGuard::new(&element, "mousemove", move |event: Event| {
                            let Ok(event) = event.dyn_into::<MouseEvent>() else {
                                return;
                            };
                            let Some(bounds) = container.cast::<Element>().map(|el| el.get_bounding_client_rect()) else {
                                return;
                            };
                            let transform = page::tilt_transform(
                                f64::from(event.client_x()),
                                f64::from(event.client_y()),
                                page::Bounds {
                                    left: bounds.left(),
                                    top: bounds.top(),
                                    width: bounds.width(),
                                    height: bounds.height(),
                                },
                            );
                            page::set_transform(&image, &transform);
                        })
                    };
                    let on_leave = {
                        let image = image.clone();
                        ListenerGuard::new(&element, "mouseleave", move |_: Event| {
                            page::set_transform(&image, page::TILT_RESTING);
                        })
                    };
                    Some([on_move, on_leave])
                }
                _ => None,
            };
            move || drop(guards)
        },
        (container, image, enabled),
    );
}

/// Smooth-scrolls in-page `#anchor` links instead of jumping.
#[hook]
pub fn use_anchor_scroll() {
    use_effect_with_deps(
        move |_| {
            let anchors = dom::document()
                .map(|document| dom::select_all_in_document(&document, "a[href^=\"#\"]"))
                .unwrap_or_default();
            let guards: Vec<ListenerGuard> = anchors
                .iter()
                .map(|anchor| {
                    ListenerGuard::new(anchor, "click", move |event: Event| {
                        event.prevent_default();
                        let href = event
                            .current_target()
                            .and_then(|target| target.dyn_into::<Element>().ok())
                            .and_then(|el| el.get_attribute("href"));
                        if let Some(id) = href.as_deref().and_then(page::anchor_target) {
                            page::scroll_to_anchor(id);
                        }
                    })
                })
                .collect();
            move || drop(guards)
        },
        (),
    );
}

/// Click handler that smooth-scrolls to the top and then runs `after`.
pub fn scroll_to_top_then(after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        page::smooth_scroll_to_top();
        after.emit(());
    })
}
