use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{stars, Star},
    motion::{
        Anchor, Animation, Edge, Scrub, ScrollTrigger, StyleFrame, ToggleActions, Tween,
    },
    nav::Page,
};

use super::motion::{dom_target, dom_targets, use_scoped_animation, DomTarget};

/// "top 40%", replayed in reverse when scrolling back up.
pub(super) fn reveal_trigger(anchor: DomTarget, viewport_pct: f64) -> ScrollTrigger<DomTarget> {
    ScrollTrigger::new(Anchor::Element(anchor))
        .start(Edge::Top, Edge::Percent(viewport_pct))
        .actions(ToggleActions::PLAY_REVERSE)
}

/// Slide up from 100px below while fading in, optionally un-blurring.
pub(super) fn rise_in(blur: Option<f64>, duration: f64) -> Tween {
    let mut from = StyleFrame::new().y(100.0).opacity(0.0);
    let mut to = StyleFrame::new().y(0.0).opacity(1.0);
    if let Some(blur) = blur {
        from = from.blur(blur);
        to = to.blur(0.0);
    }
    Tween::from_to(from, to).duration(duration)
}

fn star_style(star: &Star) -> String {
    format!(
        "will-change: transform; width: {size}px; height: {size}px; \
         background: radial-gradient(circle at center, rgba(255,255,255,1) 0%, rgba(255,255,255,0.8) 50%, rgba(255,255,255,0) 100%); \
         opacity: {opacity:.2}; top: {top}%; left: {left}%; \
         box-shadow: 0 0 8px rgba(255, 255, 255, 0.7), 0 0 15px rgba(255, 255, 255, 0.4); \
         animation: flicker {flicker:.2}s infinite alternate ease-in-out;",
        size = star.size_px,
        opacity = star.opacity,
        top = star.top_pct,
        left = star.left_pct,
        flicker = star.flicker_secs,
    )
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H1>::new();
    let intro_ref = NodeRef::<html::Div>::new();
    let layout = stars();
    let star_refs: Vec<NodeRef<html::Div>> = layout.iter().map(|_| NodeRef::new()).collect();

    let drift = layout.clone();
    let drift_refs = star_refs.clone();
    use_scoped_animation("about", move |scope| {
        let section = scope.require("section", dom_target(section_ref))?;
        let title = scope.require("title", dom_target(title_ref))?;
        let intro = scope.require("intro", dom_target(intro_ref))?;
        let star_targets = scope.require("stars", dom_targets(&drift_refs))?;

        scope.animate(
            Animation::tween(title, rise_in(None, 0.8)).trigger(reveal_trigger(section.clone(), 40.0)),
        );
        scope.animate(
            Animation::tween(intro, rise_in(Some(10.0), 1.5))
                .trigger(reveal_trigger(section.clone(), 40.0)),
        );
        for (star, target) in drift.iter().zip(star_targets) {
            scope.animate(
                Animation::tween(
                    target,
                    Tween::to(StyleFrame::new().x(star.dx).y(star.dy).rotation(star.rotation))
                        .duration(1.0),
                )
                .trigger(
                    ScrollTrigger::new(Anchor::Element(section.clone()))
                        .start(Edge::Top, Edge::Bottom)
                        .end(Edge::Bottom, Edge::Top)
                        .scrub(Scrub::Lag(star.speed)),
                ),
            );
        }
        Ok(())
    });

    view! {
        <Title text=Page::About.title() />
        <section
            node_ref=section_ref
            id="about"
            class="h-screen relative overflow-hidden bg-gradient-to-b from-black to-[#9a74cf50] flex flex-col justify-center items-center z-10 pt-16 md:pt-24"
        >
            <div class="absolute inset-0 overflow-hidden">
                {layout
                    .iter()
                    .zip(star_refs)
                    .map(|(star, node)| {
                        view! { <div node_ref=node class="absolute rounded-full" style=star_style(star) /> }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-4 h-full flex flex-col items-center justify-center relative z-10">
                <h1
                    node_ref=title_ref
                    class="text-4xl md:text-6xl font-bold mt-8 lg:mt-0 mb-8 md:mb-16 text-center text-purple-200 opacity-0"
                >
                    "About me"
                </h1>
                <div
                    node_ref=intro_ref
                    class="w-full flex md:flex-row flex-col justify-between lg:px-24 px-5 items-center text-center opacity-0 mt-4 md:mt-0"
                >
                    <div class="text-sm md:text-2xl font-bold text-purple-200 z-50 lg:max-w-[45rem] max-w-[27rem] tracking-wider mb-8 md:mb-0">
                        <span class="block w-full text-center hero-font uppercase text-purple-200/60">
                            "From hands-on craftsmanship"
                            <br />
                            "to the world of code,"
                        </span>
                        <br />
                        <br />
                        <p class="text-left">
                            "I'm Daniel, a certified IT Specialist for Application Development (IHK) with a fresh perspective on web development. "
                            "My career journey, which includes roles as a plumber, product expert in e-bikes, and a dispatcher for critical communication systems, has instilled in me a strong technical understanding and a meticulous approach. "
                            "Now, after dedicated self-study and a comprehensive IHK retraining program, I'm excited to apply my skills in JavaScript, React.js, and C# to build innovative web solutions. "
                            "I'm a continuous learner who enjoys tackling complex problems and creating applications that are both functional and enjoyable to use."
                        </p>
                    </div>
                    <img
                        class="lg:h-[40rem] md:h-[25rem] h-[20rem] lg:translate-y-7 translate-y-[-35px]"
                        src="/images/DK-RB-1.png"
                        alt="Profile-Image"
                    />
                </div>
            </div>
        </section>
    }
}
