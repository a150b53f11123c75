use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::projects::projects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="flex flex-col items-center text-center gap-4 mt-12 section-content">
                <p class="text-cyan font-medium">"Hello, I'm"</p>
                <h1 class="text-4xl lg:text-5xl font-bold">"Alex Moreno"</h1>
                <p class="text-xl text-muted max-w-2xl">
                    "Full-stack engineer building fast, accessible products from database to pixel."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 mt-6">
                    <A
                        href="/projects"
                        attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "See my work"
                    </A>
                    <A
                        href="/contact"
                        attr:class="px-6 py-3 rounded-md font-medium border border-muted/40 hover:border-foreground transition-all duration-200"
                    >
                        "Get in touch"
                    </A>
                </div>
            </section>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 mt-16 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"What I Do"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I design and ship web applications end to end: typed APIs, relational data models, and interfaces that feel instant on every screen size."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Most of my recent work is in "
                        <strong>"TypeScript, Rust and PostgreSQL"</strong>
                        ", with a soft spot for offline-first apps and anything involving maps."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"Recent Projects"</h2>
                    <ul class="space-y-3">
                        {projects()
                            .iter()
                            .take(3)
                            .map(|p| {
                                view! {
                                    <li class="bg-brightBlack/30 p-4 rounded-md">
                                        <A href="/projects" attr:class="font-medium text-blue hover:text-cyan">
                                            {p.title.clone()}
                                        </A>
                                        <p class="text-sm text-muted mt-1">{p.description.clone()}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
            <section class="flex justify-center items-center mt-16 section-content">
                <div class="w-full max-w-2xl text-center">
                    <h3 class="text-xl font-bold my-8">"Let's Connect"</h3>
                    <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                        <p class="mb-4">
                            "Have a project in mind or just want to say hello? My inbox is always open."
                        </p>
                        <div class="flex gap-3 justify-center">
                            <a
                                href="https://linkedin.com/in/example"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue hover:text-brightBlue text-2xl"
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href="https://github.com/example"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-white hover:text-brightWhite text-2xl"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
