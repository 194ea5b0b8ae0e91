mod about;
mod contact;
mod cursor;
mod experience;
mod footer;
mod header;
mod hero;
mod motion;
mod progress;
mod projects;
mod techstack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use crate::nav::{NOT_FOUND_LABEL, NOT_FOUND_TITLE};

use about::AboutSection;
use contact::{ContactModal, ContactSection, ModalState};
use cursor::CustomCursor;
use experience::ExperienceSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use progress::ProgressBar;
use projects::ProjectsSection;
use techstack::TechStack;

pub use contact::send_contact_message;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ModalState::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::motion::AnimationContext;
        let ctx: motion::MotionContext = StoredValue::new_local(AnimationContext::new());
        provide_context(ctx);
        motion::use_motion_driver(ctx);
    }

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Header />
            <CustomCursor />
            <ProgressBar />
            <main>
                <Transition fallback=Loading>
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HeroSection />
                        <Route path=path!("/about") view=AboutSection />
                        <Route path=path!("/projects") view=ProjectsSection />
                        <Route path=path!("/experience") view=ExperienceSection />
                        <Route path=path!("/techstack") view=TechStack />
                        <Route path=path!("/contact") view=ContactSection />
                    </Routes>
                </Transition>
            </main>
            <ContactModal />
            <Footer />
        </Router>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center text-purple-400 font-extrabold text-center text-6xl py-64">
            "Loading content..."
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text=NOT_FOUND_TITLE />
        <div class="flex items-center justify-center font-extrabold text-center text-6xl py-64">
            {NOT_FOUND_LABEL}
        </div>
    }
}
