use leptos::{ev, html, prelude::*};
use leptos_use::{use_raf_fn, use_window_size};

use crate::motion::follower::{cursor_enabled, CursorFollower, ListenerHost, PointerBinding};

use super::motion::{now_secs, write_style};

/// Feeds window pointer events into the follower.
struct WindowPointers {
    follower: StoredValue<CursorFollower>,
}

impl ListenerHost for WindowPointers {
    type Listener = [WindowListenerHandle; 3];

    fn attach(&mut self) -> Self::Listener {
        let follower = self.follower;
        [
            window_event_listener(ev::mousemove, move |e| {
                let (x, y) = (e.client_x() as f64, e.client_y() as f64);
                follower.update_value(|f| f.pointer_move(x, y, now_secs()));
            }),
            window_event_listener(ev::mousedown, move |_| {
                follower.update_value(|f| f.pointer_down(now_secs()));
            }),
            window_event_listener(ev::mouseup, move |_| {
                follower.update_value(|f| f.pointer_up(now_secs()));
            }),
        ]
    }

    fn detach(&mut self, listeners: Self::Listener) {
        for listener in listeners {
            listener.remove();
        }
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let dot_ref = NodeRef::<html::Div>::new();
    let ring_ref = NodeRef::<html::Div>::new();
    let follower = StoredValue::new(CursorFollower::new());
    let binding = StoredValue::new(PointerBinding::new(WindowPointers { follower }));

    // only render after hydration so server and client markup agree
    let (mounted, set_mounted) = signal(false);
    let size = use_window_size();
    let enabled = move || mounted() && cursor_enabled(size.width.get());

    Effect::new(move |_| set_mounted(true));
    Effect::new(move |_| {
        let enabled = enabled();
        binding.update_value(|b| b.sync(enabled));
    });
    on_cleanup(move || {
        binding.try_update_value(|b| b.sync(false));
    });

    use_raf_fn(move |_| {
        if !binding.with_value(PointerBinding::is_attached) {
            return;
        }
        let (dot, ring) = follower.with_value(|f| f.frames(now_secs()));
        if let (Some(dot_el), Some(ring_el)) = (dot_ref.get_untracked(), ring_ref.get_untracked()) {
            write_style(&dot_el, &dot);
            write_style(&ring_el, &ring);
        }
    });

    view! {
        <Show when=enabled>
            <div
                node_ref=dot_ref
                class="fixed top-0 left-0 w-[20px] h-[20px] bg-white rounded-full pointer-events-none z-[999] mix-blend-difference"
            />
            <div
                node_ref=ring_ref
                class="fixed top-0 left-0 w-[40px] h-[40px] border border-white rounded-full pointer-events-none z-[999] mix-blend-difference opacity-50"
            />
        </Show>
    }
}
