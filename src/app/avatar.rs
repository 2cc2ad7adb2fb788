use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="w-48 h-48 mx-auto rounded-full overflow-hidden border-4 border-blue-500/50 shadow-2xl transform hover:scale-105 transition-transform duration-300 relative">
            <img
                src="/avatar.svg"
                alt=PROFILE.name
                width=192
                height=192
                class="w-full h-full object-cover"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-blue-600/20 to-transparent"></div>
        </div>
    }
}
