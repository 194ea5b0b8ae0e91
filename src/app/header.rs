use leptos::{html, prelude::*};
use leptos_router::components::A;

use crate::{
    content::{INITIALS, OWNER, SOCIALS},
    motion::{Animation, Ease, StyleFrame, Timeline, Tween},
    nav::Page,
};

use super::{
    contact::ModalState,
    motion::{dom_target, dom_targets, use_scoped_animation},
};

const MENU_CLOSE_DELAY: std::time::Duration = std::time::Duration::from_millis(100);

#[component]
pub fn Header() -> impl IntoView {
    let modal = expect_context::<ModalState>();
    let (menu_open, set_menu_open) = signal(false);

    let logo_ref = NodeRef::<html::Div>::new();
    let link_refs: Vec<NodeRef<html::Div>> = Page::ALL.iter().map(|_| NodeRef::new()).collect();
    let socials_ref = NodeRef::<html::Div>::new();
    let hire_ref = NodeRef::<html::Button>::new();

    let intro_links = link_refs.clone();
    use_scoped_animation("header", move |scope| {
        let logo = scope.require("logo", dom_target(logo_ref))?;
        let links = scope.require("nav links", dom_targets(&intro_links))?;
        let socials = scope.require("socials", dom_target(socials_ref))?;
        let hire = scope.require("hire button", dom_target(hire_ref))?;

        let mut intro = Timeline::new().at(
            0.3,
            logo,
            Tween::from_to(
                StyleFrame::new().x(-100.0).opacity(0.0),
                StyleFrame::new().x(0.0).opacity(1.0),
            )
            .duration(1.2)
            .ease(Ease::Power3Out),
        );
        for (i, link) in links.into_iter().enumerate() {
            intro = intro.at(
                0.7 + i as f64 * 0.2,
                link,
                Tween::from_to(
                    StyleFrame::new().y(-20.0).opacity(0.0),
                    StyleFrame::new().y(0.0).opacity(1.0),
                )
                .duration(0.6)
                .ease(Ease::Power2Out),
            );
        }
        let intro = intro
            .at(
                1.3,
                socials,
                Tween::from_to(
                    StyleFrame::new().scale(0.5).opacity(0.0),
                    StyleFrame::new().scale(1.0).opacity(1.0),
                )
                .duration(0.8),
            )
            .at(
                1.4,
                hire,
                Tween::from_to(
                    StyleFrame::new().scale(0.8).opacity(0.0),
                    StyleFrame::new().scale(1.0).opacity(1.0),
                )
                .duration(0.8)
                .ease(Ease::Power3Out),
            );
        scope.animate(Animation::new(intro));
        Ok(())
    });

    let close_menu_soon = move || {
        set_timeout(move || set_menu_open(false), MENU_CLOSE_DELAY);
    };

    view! {
        <header class="w-[80%] absolute mt-5 left-1/2 -translate-x-1/2 z-50 transition-all glass-effect duration-300">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16 md:h-20">
                <div node_ref=logo_ref class="flex items-center opacity-0">
                    <A href="/" attr:class="flex items-center">
                        <div class="h-10 w-10 rounded-xl bg-gradient-to-r from-gray-500 to-gray-100 flex items-center justify-center text-purple-600 font-bold text-xl mr-3">
                            {INITIALS}
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-gray-300 to-gray-100 bg-clip-text text-transparent text-glow-purple">
                            {OWNER}
                        </span>
                    </A>
                </div>

                <nav class="lg:flex hidden space-x-8">
                    {Page::ALL
                        .into_iter()
                        .zip(link_refs)
                        .map(|(page, node)| {
                            view! {
                                <div node_ref=node class="opacity-0">
                                    <A
                                        href=page.path()
                                        attr:class="relative text-gray-200 hover:text-violet-300 font-medium transition-colors duration-300 group"
                                    >
                                        {page.label()}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-violet-600 group-hover:w-full transition-all duration-300"></span>
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="md:flex hidden items-center space-x-4">
                    <div node_ref=socials_ref class="flex items-center space-x-4 opacity-0">
                        <SocialLinks class="text-gray-300 hover:text-violet-400 transition-colors duration-300" />
                    </div>
                    <button
                        node_ref=hire_ref
                        on:click=move |_| modal.open()
                        class="ml-4 px-4 py-2 rounded-xl bg-gradient-to-r from-gray-400 to-gray-100 font-bold text-violet-700 hover:from-violet-500 hover:to-purple-700 hover:text-white transition-all duration-500 opacity-0"
                    >
                        "Hire me"
                    </button>
                </div>

                <div class="md:hidden flex items-center">
                    <button
                        class="text-gray-300 active:scale-75 transition-transform"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="text-2xl">
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </span>
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden overflow-hidden bg-gray-900 shadow-lg px-4 py-5 space-y-5">
                    <nav class="flex flex-col space-y-3">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <A href=page.path() on:click=move |_| close_menu_soon()>
                                        <span class="text-gray-300 font-medium py-2 block">
                                            {page.label()}
                                        </span>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="pt-4 border-t border-gray-700">
                        <div class="flex space-x-5">
                            <SocialLinks class="text-gray-300" />
                        </div>
                        <button
                            on:click=move |_| {
                                set_menu_open(false);
                                modal.open();
                            }
                            class="mt-4 block w-full px-4 py-2 rounded-lg bg-gradient-to-r from-violet-600 to-violet-400 font-bold"
                        >
                            "Contact me"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn SocialLinks(#[prop(into)] class: String) -> impl IntoView {
    SOCIALS
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=social.label
                    class=class.clone()
                >
                    <i class=format!("{} text-xl", social.icon) />
                </a>
            }
        })
        .collect_view()
}
