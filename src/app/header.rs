use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // close the mobile menu whenever the route changes
    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| set_menu_open.set(false),
        false,
    );

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href attr:class=class>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="shadow-lg sticky top-0 z-40 bg-background/90 backdrop-blur-sm">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold text-foreground">
                    <span class="text-cyan">"alex"</span>
                    "moreno.dev"
                </A>
                <nav class="hidden md:flex gap-6">
                    {links(
                        "text-foreground hover:text-cyan aria-[current=page]:text-cyan transition-colors duration-200",
                    )}
                </nav>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col gap-2 px-4 pb-4">
                    {links("py-2 text-foreground hover:text-cyan aria-[current=page]:text-cyan")}
                </nav>
            </Show>
        </header>
    }
}
