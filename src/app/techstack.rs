use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{Tech, TECH_STACK},
    motion::{Anchor, Animation, Edge, ScrollTrigger, StyleFrame, Timeline, ToggleActions, Tween},
    nav::Page,
};

use super::motion::{dom_target, dom_targets, use_scoped_animation, DomTarget};

/// Plays once when `amount` percent of `anchor` has scrolled into view.
fn in_view(anchor: DomTarget, amount: f64) -> ScrollTrigger<DomTarget> {
    ScrollTrigger::new(Anchor::Element(anchor))
        .start(Edge::Percent(amount), Edge::Bottom)
        .actions(ToggleActions::ONCE)
}

fn drop_in(y: f64, duration: f64) -> Tween {
    Tween::from_to(
        StyleFrame::new().y(y).opacity(0.0),
        StyleFrame::new().y(0.0).opacity(1.0),
    )
    .duration(duration)
}

fn tech_icon(tech: &'static Tech) -> impl IntoView {
    match tech.icon {
        Some(class) => view! { <i class=format!("{class} text-5xl mb-3")></i> }.into_any(),
        None => view! {
            <span class="w-12 h-12 mb-3 flex items-center justify-center rounded-full bg-purple-900 text-purple-200 font-bold">
                {tech.name.chars().next().map(String::from).unwrap_or_default()}
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    let title_ref = NodeRef::<html::H2>::new();
    let heading_refs: Vec<NodeRef<html::H3>> = TECH_STACK.iter().map(|_| NodeRef::new()).collect();
    let grid_refs: Vec<NodeRef<html::Div>> = TECH_STACK.iter().map(|_| NodeRef::new()).collect();
    let item_refs: Vec<Vec<NodeRef<html::Div>>> = TECH_STACK
        .iter()
        .map(|category| category.items.iter().map(|_| NodeRef::new()).collect())
        .collect();

    let (headings, grids, items) = (heading_refs.clone(), grid_refs.clone(), item_refs.clone());
    use_scoped_animation("techstack", move |scope| {
        let title = scope.require("title", dom_target(title_ref))?;
        let headings = scope.require("category headings", dom_targets(&headings))?;
        let grids = scope.require("category grids", dom_targets(&grids))?;
        let items = items
            .iter()
            .map(|row| scope.require("tech items", dom_targets(row)))
            .collect::<Result<Vec<_>, _>>()?;

        scope.animate(Animation::tween(title.clone(), drop_in(-50.0, 0.8)).trigger(in_view(title, 50.0)));
        for ((heading, grid), row) in headings.into_iter().zip(grids).zip(items) {
            scope.animate(
                Animation::tween(heading.clone(), drop_in(-30.0, 0.6).delay(0.2))
                    .trigger(in_view(heading, 50.0)),
            );
            let timeline = row.into_iter().enumerate().fold(
                Timeline::new().at(
                    0.0,
                    grid.clone(),
                    Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0))
                        .duration(0.3),
                ),
                |timeline, (i, item)| timeline.at(0.1 + i as f64 * 0.05, item, drop_in(20.0, 0.4)),
            );
            scope.animate(Animation::new(timeline).trigger(in_view(grid, 30.0)));
        }
        Ok(())
    });

    view! {
        <Title text=Page::TechStack.title() />
        <section id="technologies" class="py-20 bg-[#9a74cf50] text-gray-100">
            <div class="container mx-auto px-4 text-center">
                <h2
                    node_ref=title_ref
                    class="text-4xl md:text-6xl font-bold mt-8 lg:mt-0 mb-8 md:mb-16 text-center text-purple-200 opacity-0"
                >
                    "My Tech Stack"
                </h2>
                {TECH_STACK
                    .iter()
                    .zip(heading_refs)
                    .zip(grid_refs)
                    .zip(item_refs)
                    .map(|(((category, heading), grid), items)| {
                        view! {
                            <div class="mb-16">
                                <h3
                                    node_ref=heading
                                    class="text-3xl text-center lg:text-left font-bold mb-8 text-purple-400 underline underline-offset-4 decoration-purple-300 opacity-0"
                                >
                                    {category.name}
                                </h3>
                                <div
                                    node_ref=grid
                                    class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 xl:grid-cols-6 gap-6 justify-items-center opacity-0"
                                >
                                    {category
                                        .items
                                        .iter()
                                        .zip(items)
                                        .map(|(tech, node)| {
                                            view! {
                                                <div
                                                    node_ref=node
                                                    class="flex flex-col items-center p-4 bg-gray-800 border border-purple-600/50 rounded-lg shadow-lg hover:shadow-violet-500/30 transition-shadow duration-300 w-full max-w-[150px] opacity-0"
                                                >
                                                    {tech_icon(tech)}
                                                    <p class="text-lg font-medium text-gray-200">{tech.name}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
