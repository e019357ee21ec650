use leptos::prelude::*;

use super::viewport::{Navigator, Section, ViewportState};

#[component]
pub fn Header() -> impl IntoView {
    let viewport = expect_context::<ViewportState>();
    let navigator = expect_context::<Navigator>();
    let menu_open = navigator.menu_open();

    view! {
        <nav class=move || {
            if viewport.scrolled.get() {
                "fixed top-0 z-40 w-full bg-background/90 shadow-lg backdrop-blur-md transition-all duration-300"
            } else {
                "fixed top-0 z-40 w-full bg-transparent transition-all duration-300"
            }
        }>
            <div class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8">
                <button
                    class="group flex items-baseline gap-2 text-2xl font-bold tracking-widest"
                    on:click=move |_| navigator.go_to(Section::Home)
                >
                    <span class="text-cyan">"S"</span>
                    <span class="hidden text-foreground transition-colors duration-200 group-hover:text-cyan sm:inline">
                        "SRIRAM"
                    </span>
                </button>

                // Desktop navigation
                <div class="hidden items-center gap-8 md:flex">
                    {Section::NAV_ITEMS
                        .iter()
                        .copied()
                        .map(|section| view! { <NavLink section /> })
                        .collect_view()}
                </div>

                // Mobile menu button
                <button
                    class="md:hidden"
                    on:click=move |_| navigator.toggle_menu()
                    aria-label="Toggle menu"
                >
                    <span class=move || {
                        if menu_open.get() { "hamburger open" } else { "hamburger" }
                    }>
                        <span></span>
                        <span></span>
                        <span></span>
                    </span>
                </button>
            </div>

            // Mobile navigation menu
            <div class=move || {
                if menu_open.get() {
                    "block border-t border-muted/30 bg-background/95 backdrop-blur-md md:hidden"
                } else {
                    "hidden"
                }
            }>
                <div class="flex flex-col gap-2 px-6 py-4">
                    {Section::NAV_ITEMS
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, section)| view! { <NavLink section mobile=true index /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    section: Section,
    #[prop(optional)] mobile: bool,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    let viewport = expect_context::<ViewportState>();
    let navigator = expect_context::<Navigator>();

    let base = if mobile {
        "menu-item-enter flex items-center gap-3 rounded-md px-2 py-2 text-left text-lg transition-colors duration-200"
    } else {
        "flex items-center gap-2 text-sm uppercase tracking-wider transition-colors duration-200"
    };
    let style = mobile.then(|| format!("animation-delay: {}ms", index * 100));

    view! {
        <button
            class=move || {
                if viewport.active_section.get() == section {
                    format!("{base} text-cyan")
                } else {
                    format!("{base} text-muted hover:text-foreground")
                }
            }
            style=style
            on:click=move |_| navigator.go_to(section)
        >
            <span class="text-xs text-cyan/70">{section.nav_number()}</span>
            {section.label()}
        </button>
    }
}
