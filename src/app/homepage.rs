use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::Projects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Experience />
        <Contact />
        <Footer />
    }
}

/// Centered section heading with the gradient underline.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl font-bold text-white mb-4">{title}</h2>
            <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-500 mx-auto rounded-full"></div>
            {subtitle.map(|s| view! { <p class="text-slate-400 mt-6 text-lg">{s}</p> })}
        </div>
    }
}
