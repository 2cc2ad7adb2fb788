use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Some of my recent work that I'm proud of"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let kind = project.kind;
    view! {
        <div class="bg-slate-800/50 border border-slate-700/50 rounded-xl p-6 hover:border-blue-500/50 transition-all duration-300 group flex flex-col">
            <div class="flex items-start justify-between mb-4">
                <span class=format!(
                    "inline-flex items-center gap-1 px-2 py-1 rounded-md border text-xs {}",
                    kind.badge_class(),
                )>
                    <i class=kind.icon() />
                    {kind.label()}
                </span>
                {project
                    .live_url()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-slate-400 hover:text-blue-400"
                                aria-label="Open live site"
                            >
                                <i class="extra-external-link" />
                            </a>
                        }
                    })}
            </div>
            <h3 class="text-xl font-semibold text-white group-hover:text-blue-400 transition-colors mb-2">
                {project.title}
            </h3>
            <p class="text-slate-400 leading-relaxed mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="text-xs px-2 py-1 rounded-md border border-slate-600 text-slate-300">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-2 gap-2 mt-auto">
                {project
                    .features
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="flex items-center gap-2 text-sm text-slate-400">
                                <div class="w-1.5 h-1.5 bg-blue-400 rounded-full"></div>
                                {*f}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
