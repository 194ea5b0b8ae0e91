use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::{
    content::HERO_SCENE,
    motion::{Animation, Ease, StyleFrame, Timeline, Tween},
    nav::Page,
};

use super::motion::{dom_target, use_scoped_animation};

fn rise_in() -> Tween {
    Tween::from_to(
        StyleFrame::new().y(80.0).opacity(0.0),
        StyleFrame::new().y(0.0).opacity(1.0),
    )
    .duration(1.5)
    .ease(Ease::Power3Out)
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let heading_ref = NodeRef::<html::H1>::new();
    let intro_ref = NodeRef::<html::P>::new();

    use_scoped_animation("hero", move |scope| {
        let heading = scope.require("heading", dom_target(heading_ref))?;
        let intro = scope.require("intro", dom_target(intro_ref))?;
        scope.animate(Animation::new(
            Timeline::new()
                .at(1.3, heading, rise_in())
                .at(1.8, intro, rise_in()),
        ));
        Ok(())
    });

    view! {
        <Title text=Page::Home.title() />
        <section
            id="home"
            class="h-screen bg-gradient-to-b from-violet-900 to-black flex xl:flex-row flex-col-reverse items-center justify-between lg:px-[150px] px-10 relative overflow-hidden"
        >
            <div class="z-40 xl:mb-0 mb-[20%]">
                <h1
                    node_ref=heading_ref
                    class="text-5xl md:text-7xl lg:text-8xl font-bold z-10 mb-6 stroke-purple text-slate-300 hero-font opacity-0"
                >
                    "Hello, World."
                    <br />
                    "I'm "
                    <span class="text-purple-500 stroke-white">"Daniel"</span>
                    "."
                    <br />
                    "Frontend Dev."
                </h1>
                <p
                    node_ref=intro_ref
                    class="text-xl lg:text-2xl text-purple-200 pt-5 max-w-3xl opacity-0"
                >
                    "Freshly compiled, smooth by Design, ready for Production."
                    <br />
                    "Crafted interfaces that don't just click - they flow."
                    <br />
                    <br />
                    "I build with React, style with Tailwind, and animate with GSAP, turning bold ideas into exceptional digital experiences."
                    <br />
                    <br />
                    "Let's build something that people don't want to scroll past."
                </p>
            </div>
            <iframe
                src=HERO_SCENE
                title="3D scene"
                class="absolute lg:scale-[79%] left-[-21%] xl:left-[20%] top-[-22%] lg:top-0 w-full h-full border-0"
                {..::leptos::tachys::html::attribute::loading("lazy")}
            ></iframe>
        </section>
    }
}
