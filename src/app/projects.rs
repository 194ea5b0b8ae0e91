use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::{
    content::PROJECTS,
    motion::{
        Anchor, Animation, Distance, Ease, Edge, Scrub, ScrollTrigger, StyleFrame, Target,
        ToggleActions, Tween,
    },
    nav::Page,
};

use super::motion::{dom_target, dom_targets, use_scoped_animation, DomTarget};

/// How far the track has to slide left to show its last card.
fn overflow(track: &DomTarget, viewport_width: f64) -> f64 {
    (track.bounds().scroll_width - viewport_width).max(0.0)
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let line_ref = NodeRef::<html::Div>::new();
    let pin_ref = NodeRef::<html::Div>::new();
    let track_ref = NodeRef::<html::Div>::new();
    let card_refs: Vec<NodeRef<html::Div>> = PROJECTS.iter().map(|_| NodeRef::new()).collect();

    let cards = card_refs.clone();
    use_scoped_animation("projects", move |scope| {
        let section = scope.require("section", dom_target(section_ref))?;
        let title = scope.require("title", dom_target(title_ref))?;
        let line = scope.require("title line", dom_target(line_ref))?;
        let pin = scope.require("pin wrapper", dom_target(pin_ref))?;
        let track = scope.require("track", dom_target(track_ref))?;
        let cards = scope.require("project cards", dom_targets(&cards))?;

        let title_trigger = || {
            ScrollTrigger::new(Anchor::Element(section.clone()))
                .start(Edge::Top, Edge::Percent(80.0))
                .actions(ToggleActions::PLAY_REVERSE)
        };
        scope.animate(
            Animation::tween(
                title,
                Tween::from_to(
                    StyleFrame::new().y(100.0).opacity(0.0),
                    StyleFrame::new().y(0.0).opacity(1.0),
                )
                .duration(1.2)
                .ease(Ease::Power3Out),
            )
            .trigger(title_trigger()),
        );
        scope.animate(
            Animation::tween(
                line,
                Tween::from_to(
                    StyleFrame::new().width_pct(0.0).opacity(0.0),
                    StyleFrame::new().width_pct(100.0).opacity(1.0),
                )
                .duration(1.5)
                .delay(0.3)
                .ease(Ease::Power3InOut),
            )
            .trigger(title_trigger()),
        );

        scope.animate(
            Animation::tween(
                section.clone(),
                Tween::from_to(StyleFrame::new().bg_pos_y(0.0), StyleFrame::new().bg_pos_y(100.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Element(section))
                    .start(Edge::Top, Edge::Bottom)
                    .end(Edge::Bottom, Edge::Top)
                    .scrub(Scrub::Immediate),
            ),
        );

        let slide = track.clone();
        let distance = track.clone();
        scope.animate(
            Animation::tween(
                track,
                Tween::computed(move |viewport| StyleFrame::new().x(-overflow(&slide, viewport.width)))
                    .from(StyleFrame::new().x(0.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Element(pin))
                    .start(Edge::Top, Edge::Top)
                    .end_after(Distance::computed(move |viewport| {
                        overflow(&distance, viewport.width)
                    }))
                    .scrub(Scrub::Immediate)
                    .pin(),
            ),
        );

        for (i, card) in cards.into_iter().enumerate() {
            scope.animate(
                Animation::tween(
                    card.clone(),
                    Tween::from_to(
                        StyleFrame::new().y(120.0).opacity(0.0),
                        StyleFrame::new().y(0.0).opacity(1.0),
                    )
                    .duration(1.5)
                    .delay(0.3 + i as f64 * 0.2)
                    .ease(Ease::Power2Out),
                )
                .trigger(
                    ScrollTrigger::new(Anchor::Element(card))
                        .start(Edge::Top, Edge::Percent(90.0))
                        .actions(ToggleActions::PLAY_REVERSE),
                ),
            );
        }
        Ok(())
    });

    view! {
        <Title text=Page::Projects.title() />
        <section
            node_ref=section_ref
            id="projects"
            class="relative py-20 bg-gradient-to-b from-violet-900 to-black pt-16 md:pt-24 overflow-hidden bg-[length:100%_200%]"
        >
            <div class="container mx-auto px-4 mt-8 mb-8 relative z-10">
                <h2
                    node_ref=title_ref
                    class="text-4xl md:text-5xl lg:text-6xl font-bold text-purple-200 text-center mb-4 opacity-0"
                >
                    "Featured Projects"
                </h2>
                <div
                    node_ref=line_ref
                    class="w-0 h-1 bg-gradient-to-r from-purple-500 to-pink-500 mx-auto opacity-0"
                ></div>
            </div>

            <div node_ref=pin_ref class="h-screen flex items-center overflow-hidden">
                <div node_ref=track_ref class="flex gap-10 px-[10vw] w-max">
                    {PROJECTS
                        .iter()
                        .zip(card_refs)
                        .map(|(project, node)| {
                            view! {
                                <div
                                    node_ref=node
                                    class="flex flex-col items-center p-6 glass-effect shadow-xl w-[80vw] md:w-[50vw] lg:w-[40vw] min-h-[300px] md:min-h-[435px] opacity-0"
                                >
                                    <div class="w-full flex justify-center items-center aspect-video overflow-hidden mb-6">
                                        <img
                                            class="w-full h-full object-cover rounded-xl shadow-lg"
                                            src=project.image
                                            alt=format!("Screenshot of {}", project.title)
                                            loading="lazy"
                                        />
                                    </div>
                                    <h3 class="flex items-center gap-3 text-2xl md:text-3xl font-bold underline underline-offset-4 decoration-purple-500 decoration-2 text-gray-200 text-center">
                                        <a
                                            href=project.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center text-purple-200 gap-3 hover:text-gray-400 transition-colors duration-300"
                                        >
                                            {project.title}
                                            <span aria-hidden="true">"↗"</span>
                                        </a>
                                    </h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
