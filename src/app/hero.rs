use leptos::prelude::*;

use super::avatar::Avatar;
use crate::content::{PROFILE, STATS};

#[component]
pub fn Hero() -> impl IntoView {
    // effects only run in the browser, so the banner fades in after hydration
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible.set(true));

    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="text-center group">
                    <div class="bg-slate-800/50 backdrop-blur-sm rounded-xl p-4 border border-slate-700/50 hover:border-blue-500/50 transition-all duration-300">
                        <i class=format!(
                            "{} text-3xl text-blue-400 block mb-2 group-hover:scale-110 transition-transform",
                            stat.icon,
                        ) />
                        <div class="text-2xl font-bold text-white mb-1">{stat.value}</div>
                        <div class="text-sm text-slate-400">{stat.label}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-600/20 via-purple-600/20 to-teal-600/20"></div>
            <div class=move || {
                if visible.get() {
                    "max-w-6xl mx-auto text-center relative z-10 transition-all duration-1000 opacity-100 translate-y-0"
                } else {
                    "max-w-6xl mx-auto text-center relative z-10 transition-all duration-1000 opacity-0 translate-y-10"
                }
            }>
                <div class="mb-8 relative">
                    <Avatar />
                </div>
                <div class="flex items-center justify-center gap-2 mb-4">
                    <i class="extra-terminal text-blue-400" />
                    <span class="text-blue-400 font-mono">{PROFILE.handle}</span>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-blue-400 via-purple-400 to-teal-400 bg-clip-text text-transparent mb-4">
                    {PROFILE.name}
                </h1>
                <div class="flex items-center justify-center gap-2 mb-6">
                    <i class="extra-code text-slate-400" />
                    <p class="text-xl md:text-2xl text-slate-300 font-mono">{PROFILE.role}</p>
                </div>
                <p class="text-lg text-slate-400 mb-8 max-w-2xl mx-auto">{PROFILE.tagline}</p>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <a
                        href="#projects"
                        class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 group"
                    >
                        <i class="extra-code mr-2 group-hover:rotate-12 transition-transform" />
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 rounded-full border-2 border-slate-600 text-slate-300 hover:border-blue-500 hover:text-blue-400 hover:bg-blue-500/10 transition-all duration-300"
                    >
                        <i class="extra-coffee mr-2" />
                        "Let's Talk"
                    </a>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto">{stats}</div>
            </div>
            <a
                href="#about"
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce text-slate-400 hover:text-blue-400 transition-colors"
                aria-label="Scroll to about"
            >
                <i class="extra-chevron-down text-3xl" />
            </a>
        </section>
    }
}
