use leptos::{html, prelude::*};

use crate::motion::progress::{ColorBand, ProgressIndicator};

use super::motion::{dom_target, use_scoped_animation};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let fill_ref = NodeRef::<html::Div>::new();

    use_scoped_animation("progress", move |scope| {
        let fill = scope.require("fill", dom_target(fill_ref))?;
        ProgressIndicator::install(scope, fill);
        Ok(())
    });

    view! {
        <div class="fixed top-0 left-0 w-full h-[5px] bg-gray-800 z-50">
            <div
                node_ref=fill_ref
                class="h-full"
                style=format!("width: 0%; background-color: {}", ColorBand::Start.color())
            ></div>
        </div>
    }
}
