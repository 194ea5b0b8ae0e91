use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{EDUCATION, EXPERIENCE, EXPERIENCE_SCENE},
    motion::{Animation, StyleFrame, Tween},
    nav::Page,
};

use super::{
    about::{reveal_trigger, rise_in},
    motion::{dom_target, dom_targets, use_scoped_animation},
};

fn header_in(delay: f64) -> Tween {
    Tween::from_to(
        StyleFrame::new().y(50.0).opacity(0.0).blur(5.0),
        StyleFrame::new().y(0.0).opacity(1.0).blur(0.0),
    )
    .duration(1.0)
    .delay(delay)
}

fn slide_in(x: f64, duration: f64, delay: f64) -> Tween {
    Tween::from_to(
        StyleFrame::new().x(x).opacity(0.0),
        StyleFrame::new().x(0.0).opacity(1.0),
    )
    .duration(duration)
    .delay(delay)
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let scene_ref = NodeRef::<html::Div>::new();
    let work_ref = NodeRef::<html::H3>::new();
    let school_ref = NodeRef::<html::H3>::new();
    let job_refs: Vec<NodeRef<html::Div>> = EXPERIENCE.iter().map(|_| NodeRef::new()).collect();
    let degree_refs: Vec<NodeRef<html::Div>> = EDUCATION.iter().map(|_| NodeRef::new()).collect();

    let (jobs, degrees) = (job_refs.clone(), degree_refs.clone());
    use_scoped_animation("experience", move |scope| {
        let section = scope.require("section", dom_target(section_ref))?;
        let title = scope.require("title", dom_target(title_ref))?;
        let content = scope.require("content", dom_target(content_ref))?;
        let scene = scope.require("scene container", dom_target(scene_ref))?;
        let work = scope.require("experience header", dom_target(work_ref))?;
        let school = scope.require("education header", dom_target(school_ref))?;
        let jobs = scope.require("experience items", dom_targets(&jobs))?;
        let degrees = scope.require("education items", dom_targets(&degrees))?;

        scope.animate(
            Animation::tween(title, rise_in(None, 0.8)).trigger(reveal_trigger(section.clone(), 40.0)),
        );
        scope.animate(
            Animation::tween(content, rise_in(Some(10.0), 1.5))
                .trigger(reveal_trigger(section.clone(), 40.0)),
        );
        scope.animate(
            Animation::tween(scene, slide_in(-400.0, 1.5, 0.5))
                .trigger(reveal_trigger(section, 40.0)),
        );

        // both headers and the education items wait for the first header
        scope.animate(
            Animation::tween(work.clone(), header_in(0.5)).trigger(reveal_trigger(work.clone(), 80.0)),
        );
        scope.animate(
            Animation::tween(school, header_in(1.2)).trigger(reveal_trigger(work.clone(), 80.0)),
        );
        for (i, job) in jobs.into_iter().enumerate() {
            let delay = 0.7 + i as f64 * 0.1;
            scope.animate(
                Animation::tween(job.clone(), slide_in(-50.0, 0.6, delay))
                    .trigger(reveal_trigger(job, 85.0)),
            );
        }
        for (i, degree) in degrees.into_iter().enumerate() {
            let delay = 1.4 + i as f64 * 0.1;
            scope.animate(
                Animation::tween(degree, slide_in(-50.0, 0.6, delay))
                    .trigger(reveal_trigger(work.clone(), 85.0)),
            );
        }
        Ok(())
    });

    view! {
        <Title text=Page::Experience.title() />
        <section
            node_ref=section_ref
            id="experience"
            class="w-full relative overflow-hidden bg-gradient-to-b from-black to-[#9a74cf50] flex flex-col justify-center items-center z-10 pt-16 md:pt-5 text-white"
        >
            <div class="container mx-auto px-4 h-full flex flex-col items-center justify-center relative z-10">
                <h2
                    node_ref=title_ref
                    class="text-4xl md:text-6xl font-bold mt-8 lg:mt-0 mb-8 md:mb-16 text-center text-purple-200 opacity-0"
                >
                    "Experience & Education"
                </h2>
                <div
                    node_ref=content_ref
                    class="w-full flex md:flex-row flex-col justify-between lg:px-24 px-0 items-start text-left opacity-0 mt-4 md:mt-0"
                >
                    <div
                        node_ref=scene_ref
                        class="md:w-2/5 w-full flex justify-center items-center md:pr-8 mt-8 md:mt-0 order-last md:order-first relative min-h-[500px] lg:min-h-[600px] opacity-0"
                    >
                        <iframe
                            src=EXPERIENCE_SCENE
                            title="3D scene"
                            class="absolute inset-0 w-full h-full border-0"
                            {..::leptos::tachys::html::attribute::loading("lazy")}
                        ></iframe>
                    </div>

                    <div class="md:w-3/5 w-full pl-8">
                        <h3
                            node_ref=work_ref
                            class="text-2xl font-semibold mb-4 text-purple-400 underline underline-offset-4 decoration-purple-300 opacity-0"
                        >
                            "Professional Experience"
                        </h3>
                        {EXPERIENCE
                            .iter()
                            .zip(job_refs)
                            .map(|(job, node)| {
                                view! {
                                    <div node_ref=node class="mb-6 border-b border-purple-300 pb-4 opacity-0">
                                        <h4 class="text-xl font-bold text-purple-200">{job.role}</h4>
                                        <p class="italic text-purple-300">
                                            {format!("{} | {}", job.company, job.duration)}
                                        </p>
                                        <p class="mt-1 text-gray-200">{job.description}</p>
                                        <p class="mt-1 text-sm text-purple-400">
                                            <span class="font-semibold">"Skills:"</span>
                                            " "
                                            {job.skills.join(", ")}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}

                        <h3
                            node_ref=school_ref
                            class="text-2xl font-semibold mb-4 text-purple-400 underline underline-offset-4 decoration-purple-300 opacity-0 mt-8"
                        >
                            "Education"
                        </h3>
                        {EDUCATION
                            .iter()
                            .zip(degree_refs)
                            .map(|(degree, node)| {
                                view! {
                                    <div node_ref=node class="mb-4 opacity-0">
                                        <h4 class="font-semibold text-purple-200">{degree.degree}</h4>
                                        <p class="italic text-purple-300">
                                            {format!("{} | {}", degree.school, degree.duration)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
