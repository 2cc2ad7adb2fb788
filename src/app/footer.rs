use leptos::prelude::*;

use crate::content::PROFILE;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-slate-800 text-center">
            <p class="text-slate-500">"© " {BUILD_YEAR} " " {PROFILE.name} ". All rights reserved."</p>
        </footer>
    }
}
