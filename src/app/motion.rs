use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{html::ElementType, leptos_dom::helpers::TimeoutHandle, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::motion::{
    AnimationContext, Bounds, Scheduler, ScopedAnimation, SetupError, SetupScope, StyleFrame,
    Target, Viewport,
};

/// The page's animation registry as handed down through context. Only
/// provided on the client.
pub type MotionContext = StoredValue<AnimationContext<DomTarget>, LocalStorage>;

pub fn write_style(el: &HtmlElement, frame: &StyleFrame) {
    let style = el.style();
    for (property, value) in frame.to_css() {
        if let Err(err) = style.set_property(property, &value) {
            log::warn!("could not set {property}: {err:?}");
        }
    }
}

/// A rendered element plus everything animations have applied to it so far.
#[derive(Clone)]
pub struct DomTarget {
    el: HtmlElement,
    applied: Rc<RefCell<StyleFrame>>,
}

impl DomTarget {
    pub fn new(el: HtmlElement) -> Self {
        Self {
            el,
            applied: Rc::default(),
        }
    }
}

impl Target for DomTarget {
    fn apply(&self, frame: &StyleFrame) {
        let mut applied = self.applied.borrow_mut();
        applied.merge(frame);
        write_style(&self.el, &applied);
    }

    fn bounds(&self) -> Bounds {
        let rect = self.el.get_bounding_client_rect();
        let scroll_y = window().scroll_y().unwrap_or_default();
        // measure the untransformed position
        let shift = {
            let applied = self.applied.borrow();
            applied.y.unwrap_or_default() + applied.pin_offset.unwrap_or_default()
        };
        Bounds {
            top: rect.top() + scroll_y - shift,
            height: rect.height(),
            scroll_width: self.el.scroll_width() as f64,
        }
    }
}

/// Resolves a mounted node to an animation target.
pub fn dom_target<E>(node: NodeRef<E>) -> Option<DomTarget>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    node.get_untracked()
        .map(|el| DomTarget::new(el.unchecked_into()))
}

/// Targets for every mounted node in `nodes`, or `None` if any is missing.
pub fn dom_targets<E>(nodes: &[NodeRef<E>]) -> Option<Vec<DomTarget>>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    nodes.iter().map(|node| dom_target(*node)).collect()
}

pub fn now_secs() -> f64 {
    window()
        .performance()
        .map(|p| p.now() / 1000.0)
        .unwrap_or_default()
}

pub fn read_viewport() -> Viewport {
    let win = window();
    let px = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    let doc_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    Viewport {
        scroll_y: win.scroll_y().unwrap_or_default(),
        width: px(win.inner_width()),
        height: px(win.inner_height()),
        doc_height,
    }
}

/// `setTimeout` based scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|err| log::warn!("setTimeout failed: {err:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Steps the shared registry once per animation frame for as long as the
/// calling component lives.
pub fn use_motion_driver(ctx: MotionContext) {
    leptos_use::use_raf_fn(move |args| {
        let viewport = read_viewport();
        ctx.with_value(|ctx| ctx.with(|registry| registry.tick(args.timestamp / 1000.0, viewport)));
    });

    // images and fonts shift layout after hydration
    let refresh = move || ctx.with_value(|ctx| ctx.with(|registry| registry.refresh()));
    let on_load = window_event_listener(leptos::ev::load, move |_| refresh());
    on_cleanup(move || on_load.remove());
}

/// Runs `setup` for this component's section once it has mounted and
/// releases everything it created after the component unmounts.
pub fn use_scoped_animation(
    section: &'static str,
    setup: impl Fn(&mut SetupScope<'_, DomTarget>) -> Result<(), SetupError> + 'static,
) {
    let Some(ctx) = use_context::<MotionContext>().and_then(|ctx| ctx.try_get_value()) else {
        // server render
        return;
    };
    let scoped = StoredValue::new_local(ScopedAnimation::new(section, ctx, BrowserScheduler, setup));
    Effect::new(move |_| scoped.with_value(ScopedAnimation::mount));
    on_cleanup(move || {
        scoped.try_with_value(ScopedAnimation::unmount);
    });
}
