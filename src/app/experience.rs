use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::EXPERIENCE;

#[component]
pub fn Experience() -> impl IntoView {
    let last = EXPERIENCE.len().saturating_sub(1);
    view! {
        <section id="experience" class="py-20 px-4 bg-slate-800/50">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="Professional Journey" />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! {
                                <div class="flex gap-6">
                                    <div class="flex flex-col items-center">
                                        <div class="w-4 h-4 bg-blue-500 rounded-full border-4 border-slate-900"></div>
                                        {(i < last).then(|| view! { <div class="w-0.5 flex-1 bg-slate-700 mt-2"></div> })}
                                    </div>
                                    <div class="flex-1 pb-8">
                                        <div class="bg-slate-800/50 border border-slate-700/50 rounded-xl p-6">
                                            <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                                                <h3 class="text-xl font-semibold text-white">{role.title}</h3>
                                                <span class="text-xs px-2 py-1 rounded-md border border-blue-500/50 text-blue-400">
                                                    {role.period}
                                                </span>
                                            </div>
                                            <p class="text-blue-400 font-medium mb-3">{role.company}</p>
                                            <p class="text-slate-400 leading-relaxed mb-4">{role.description}</p>
                                            <div class="space-y-2">
                                                {role
                                                    .achievements
                                                    .iter()
                                                    .map(|a| {
                                                        view! {
                                                            <div class="flex items-start gap-2 text-sm text-slate-300">
                                                                <i class="extra-zap text-yellow-400 mt-0.5" />
                                                                {*a}
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
