use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::content::OWNER;

use super::header::SocialLinks;

/// Year the site was built, for the copyright line.
fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-16 px-6 mt-16">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-center">
                    <h2 class="text-3xl font-bold bg-gradient-to-r from-purple-400 to-purple-200 bg-clip-text text-transparent">
                        {OWNER}
                    </h2>
                    <div>
                        <h3 class="text-xl font-semibold mb-4 text-purple-200">"Connect"</h3>
                        <div class="flex space-x-4">
                            <SocialLinks class="text-gray-500 hover:text-violet-400 transition-colors" />
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-700 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-500 text-sm">
                        {format!("© {} {OWNER}. All rights reserved.", build_year())}
                    </p>
                </div>
            </div>
        </footer>
    }
}
