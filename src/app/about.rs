use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{PROFILE, TECH_STACK};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 bg-slate-800/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="About Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        {PROFILE
                            .bio
                            .iter()
                            .map(|p| view! { <p class="text-lg text-slate-300 leading-relaxed">{*p}</p> })
                            .collect_view()}
                        <div class="flex items-center gap-2 text-slate-400">
                            <i class="extra-location text-blue-400" />
                            <span>"Based in " {PROFILE.location}</span>
                        </div>
                        <div class="flex items-center gap-2 text-slate-400">
                            <i class="extra-zap text-yellow-400" />
                            <span>{PROFILE.availability}</span>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-white mb-6 flex items-center gap-2">
                            <i class="extra-terminal text-blue-400" />
                            "Tech Stack & Skills"
                        </h3>
                        <div class="flex flex-wrap gap-3">
                            {TECH_STACK
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class=format!(
                                            "px-4 py-2 border-2 rounded-md text-sm {} hover:scale-105 transition-all duration-300 cursor-default",
                                            tech.color,
                                        )>{tech.name}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
