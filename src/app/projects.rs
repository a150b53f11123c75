use leptos::{
    either::Either,
    ev::{keydown, MouseEvent, TouchEvent},
    prelude::*,
};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_media_query, use_window};
use web_sys::TouchList;

use crate::gallery::{shows_navigation, Direction, GalleryController, ModalCommand};
use crate::gesture::{allows_modal, mobile_media_query, PointerInput, SwipeTracker};
use crate::projects::{projects, Project, Technology};

fn touch_point(touches: &TouchList) -> Option<PointerInput> {
    touches.get(0).map(|t| PointerInput::Touch {
        x: f64::from(t.client_x()),
    })
}

fn mouse_point(ev: &MouseEvent) -> PointerInput {
    PointerInput::Mouse {
        x: f64::from(ev.client_x()),
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryController::new(projects()));
    let is_mobile = use_media_query(mobile_media_query());

    let _ = use_event_listener(use_window(), keydown, move |ev| {
        if !gallery.with_untracked(|g| g.modal().is_open()) {
            return;
        }
        if let Some(cmd) = ModalCommand::from_key(&ev.key()) {
            ev.prevent_default();
            gallery.update(|g| g.apply(cmd));
        }
    });

    view! {
        <Title text="Projects" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <div class="text-center my-8">
                <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">"Projects"</h1>
                <p class="max-w-2xl mx-auto text-lg text-muted section-content">
                    "A few things I've designed and built. Click a screenshot to open the gallery."
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 section-content">
                {projects()
                    .iter()
                    .map(|project| view! { <ProjectCard project gallery is_mobile /> })
                    .collect_view()}
            </div>
            <ProjectModal gallery />
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    gallery: RwSignal<GalleryController>,
    is_mobile: Signal<bool>,
) -> impl IntoView {
    let id = project.id.as_str();
    let count = project.image_count();
    let swipe = StoredValue::new(SwipeTracker::default());
    let index = Memo::new(move |_| gallery.with(|g| g.index(id).unwrap_or(0)));

    let step = move |dir: Direction| {
        gallery.update(|g| {
            if let Err(e) = g.advance(id, dir) {
                log::warn!("carousel navigation failed: {e}");
            }
        })
    };
    let select = move |i: usize| {
        gallery.update(|g| {
            if let Err(e) = g.select_index(id, i) {
                log::warn!("carousel selection failed: {e}");
            }
        })
    };
    let finish_swipe = move |input: Option<PointerInput>| {
        if let Some(dir) = swipe.try_update_value(|s| s.finish(input)).flatten() {
            step(dir);
        }
    };
    let open = move |_: MouseEvent| {
        let dragging = swipe.with_value(|s| s.is_dragging());
        if allows_modal(is_mobile.get_untracked(), dragging) {
            gallery.update(|g| g.open_modal(project));
        }
    };

    view! {
        <article class="bg-brightBlack/30 rounded-lg border border-muted/30 overflow-hidden flex flex-col">
            <div
                class=move || {
                    if is_mobile.get() {
                        "relative aspect-video bg-black/40 select-none"
                    } else {
                        "relative aspect-video bg-black/40 select-none cursor-pointer"
                    }
                }
                on:click=open
                on:touchstart=move |ev: TouchEvent| {
                    if let Some(input) = touch_point(&ev.touches()) {
                        swipe.update_value(|s| s.begin(input));
                    }
                }
                on:touchmove=move |ev: TouchEvent| {
                    if let Some(input) = touch_point(&ev.touches()) {
                        swipe.update_value(|s| s.track(input));
                    }
                }
                on:touchend=move |ev: TouchEvent| finish_swipe(touch_point(&ev.changed_touches()))
                on:mousedown=move |ev: MouseEvent| swipe.update_value(|s| s.begin(mouse_point(&ev)))
                on:mousemove=move |ev: MouseEvent| swipe.update_value(|s| s.track(mouse_point(&ev)))
                on:mouseup=move |ev: MouseEvent| finish_swipe(Some(mouse_point(&ev)))
                on:mouseleave=move |_| swipe.update_value(|s| s.cancel())
            >
                {move || match project.image(index.get()) {
                    Some(src) => {
                        Either::Left(
                            view! {
                                <img
                                    src=src
                                    alt=format!("{} screenshot {}", project.title, index.get() + 1)
                                    draggable="false"
                                    class="w-full h-full object-cover"
                                />
                            },
                        )
                    }
                    None => Either::Right(view! { <NoPreview /> }),
                }}
                {shows_navigation(count)
                    .then(|| {
                        view! {
                            <NavArrows on_step=step />
                            <div class="absolute bottom-3 left-0 right-0 flex justify-center gap-2">
                                {(0..count)
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if index.get() == i {
                                                        "w-2.5 h-2.5 rounded-full bg-white"
                                                    } else {
                                                        "w-2.5 h-2.5 rounded-full bg-white/40 hover:bg-white/70"
                                                    }
                                                }
                                                aria-label=format!("Show image {}", i + 1)
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    select(i);
                                                }
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
            <div class="p-6 flex flex-col gap-4 flex-grow">
                <h2 class="text-xl font-bold">{project.title.clone()}</h2>
                <p class="text-muted">{project.description.clone()}</p>
                <TechBadges technologies=project.technologies.clone() />
                <ProjectLinks live_url=project.live_url.clone() github_url=project.github_url.clone() />
            </div>
        </article>
    }
}

#[component]
fn ProjectModal(gallery: RwSignal<GalleryController>) -> impl IntoView {
    let swipe = StoredValue::new(SwipeTracker::default());
    let selected = Memo::new(move |_| gallery.with(|g| g.modal().project().cloned()));
    let index = Memo::new(move |_| gallery.with(|g| g.modal().image_index()));

    let close = move || gallery.update(|g| g.close_modal());
    let step = move |dir: Direction| {
        gallery.update(|g| {
            g.advance_modal(dir);
        })
    };
    let finish_swipe = move |input: Option<PointerInput>| {
        if let Some(dir) = swipe.try_update_value(|s| s.finish(input)).flatten() {
            step(dir);
        }
    };

    move || {
        selected.get().map(|project| {
            let count = project.image_count();
            let images = project.images.clone();
            let title = project.title.clone();
            view! {
                <div
                    class="fixed inset-0 z-50 bg-black/90 flex items-center justify-center p-4"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| close()
                >
                    <div
                        class="relative w-full max-w-5xl max-h-full overflow-y-auto bg-background rounded-lg"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            class="absolute top-3 right-3 z-10 text-2xl text-white/80 hover:text-white"
                            aria-label="Close gallery"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                        <div
                            class="relative aspect-video bg-black select-none"
                            on:touchstart=move |ev: TouchEvent| {
                                if let Some(input) = touch_point(&ev.touches()) {
                                    swipe.update_value(|s| s.begin(input));
                                }
                            }
                            on:touchmove=move |ev: TouchEvent| {
                                if let Some(input) = touch_point(&ev.touches()) {
                                    swipe.update_value(|s| s.track(input));
                                }
                            }
                            on:touchend=move |ev: TouchEvent| {
                                finish_swipe(touch_point(&ev.changed_touches()))
                            }
                            on:mousedown=move |ev: MouseEvent| {
                                swipe.update_value(|s| s.begin(mouse_point(&ev)))
                            }
                            on:mousemove=move |ev: MouseEvent| {
                                swipe.update_value(|s| s.track(mouse_point(&ev)))
                            }
                            on:mouseup=move |ev: MouseEvent| finish_swipe(Some(mouse_point(&ev)))
                            on:mouseleave=move |_| swipe.update_value(|s| s.cancel())
                        >
                            {move || match images.get(index.get()) {
                                Some(src) => {
                                    Either::Left(
                                        view! {
                                            <img
                                                src=src.clone()
                                                alt=format!("{} screenshot {}", title, index.get() + 1)
                                                draggable="false"
                                                class="w-full h-full object-contain"
                                            />
                                        },
                                    )
                                }
                                None => Either::Right(view! { <NoPreview /> }),
                            }}
                            {shows_navigation(count).then(|| view! { <NavArrows on_step=step /> })}
                        </div>
                        <div class="p-6 flex flex-col gap-4">
                            <div class="flex items-baseline justify-between gap-4">
                                <h2 class="text-2xl font-bold">{project.title.clone()}</h2>
                                {(count > 0)
                                    .then(|| {
                                        view! {
                                            <span class="text-sm text-muted whitespace-nowrap">
                                                {move || format!("{} / {}", index.get() + 1, count)}
                                            </span>
                                        }
                                    })}
                            </div>
                            <p class="leading-relaxed">{project.long_description.clone()}</p>
                            <TechBadges technologies=project.technologies.clone() />
                            <ProjectLinks
                                live_url=project.live_url.clone()
                                github_url=project.github_url.clone()
                            />
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn NavArrows<F>(on_step: F) -> impl IntoView
where
    F: Fn(Direction) + Copy + Send + Sync + 'static,
{
    let class = "absolute top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-black/50 hover:bg-black/70 text-white text-xl";
    view! {
        <button
            class=format!("{class} left-3")
            aria-label="Previous image"
            on:click=move |ev| {
                ev.stop_propagation();
                on_step(Direction::Previous);
            }
        >
            "‹"
        </button>
        <button
            class=format!("{class} right-3")
            aria-label="Next image"
            on:click=move |ev| {
                ev.stop_propagation();
                on_step(Direction::Next);
            }
        >
            "›"
        </button>
    }
}

#[component]
fn NoPreview() -> impl IntoView {
    view! {
        <div class="w-full h-full flex items-center justify-center text-muted">
            "No preview available"
        </div>
    }
}

#[component]
fn TechBadges(technologies: Vec<Technology>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {technologies
                .into_iter()
                .map(|t| {
                    view! {
                        <span
                            class="rounded-md px-2 py-1 text-xs font-medium border"
                            style=format!("color: {0}; border-color: {0}66; background-color: {0}1a", t.color)
                        >
                            {t.name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectLinks(live_url: Option<String>, github_url: Option<String>) -> impl IntoView {
    view! {
        <div class="flex gap-4 mt-auto text-sm">
            {live_url
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-cyan hover:underline"
                        >
                            "Live site ↗"
                        </a>
                    }
                })}
            {github_url
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-foreground hover:text-brightWhite"
                            aria-label="Source on GitHub"
                        >
                            <i class="devicon-github-plain"></i>
                            " Source"
                        </a>
                    }
                })}
        </div>
    }
}
