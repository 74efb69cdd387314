use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};
use yew::prelude::*;

use crate::pointer::PointerPosition;
use crate::sections::{Observation, ScrollTarget, Section, SectionEvent, SectionTracker, SECTIONS};

const OBSERVER_ROOT_MARGIN: &str = "0px 0px -40% 0px";
const OBSERVER_THRESHOLD: f64 = 0.1;

const NAME: &str = "Lux Yoga";
const TAGLINE: &str = "Data Analytics Engineering";
const PITCH: &str =
    "I transform complex data into actionable insights that drive business decisions and strategic growth.";

#[derive(PartialEq)]
struct SocialProfile {
    label: &'static str,
    href: &'static str,
}

const SOCIAL_PROFILES: &[SocialProfile] = &[
    SocialProfile {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/luxyoga/",
    },
    SocialProfile {
        label: "Instagram",
        href: "https://www.instagram.com/lux.productdesign/",
    },
    SocialProfile {
        label: "GitHub",
        href: "https://github.com/luxyoga",
    },
    SocialProfile {
        label: "Goodreads",
        href: "https://www.goodreads.com/user/show/192467159-lux-yogasegaran",
    },
    SocialProfile {
        label: "Email",
        href: "mailto:luxman.yoga@gmail.com",
    },
];

#[derive(PartialEq)]
struct Project {
    title: &'static str,
    href: &'static str,
    repo: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Copenhagen Biking Analysis",
        href: "https://copenhagen-bike-pipeline.streamlit.app/",
        repo: "https://github.com/luxyoga/copenhagen-bike-pipeline",
        summary: "An end-to-end data engineering pipeline analyzing cycling traffic in Copenhagen \
            and its relationship with weather conditions. Built with Apache Airflow for \
            orchestration, PySpark for distributed ETL processing, and Streamlit for interactive \
            dashboards. Processes 10 years of real Copenhagen cycling data (2005-2014) from \
            Kaggle and weather data from Open-Meteo API to reveal seasonal patterns and weather \
            correlations.",
        tags: &[
            "Apache Airflow",
            "PySpark",
            "Pandas",
            "PostgreSQL",
            "Streamlit",
            "Docker",
            "ETL Pipelines",
            "Data Visualization",
        ],
    },
    Project {
        title: "VGC Pokémon Usage Stats Dashboard",
        href: "https://vgcpokemonstats.streamlit.app/",
        repo: "https://github.com/luxyoga/vgcpokemonstats",
        summary: "An automated data engineering project that ingests competitive Pokémon VGC \
            usage data from Smogon/Showdown, processes it into a queryable DuckDB database, and \
            serves an interactive dashboard with Streamlit. Features ETL pipelines, automated \
            monthly ingestion via GitHub Actions, and comprehensive analytics of metagame trends.",
        tags: &[
            "Python",
            "Pandas",
            "ETL Pipelines",
            "DuckDB",
            "SQL",
            "Streamlit",
            "GitHub Actions",
            "Data Visualization",
        ],
    },
];

#[derive(PartialEq)]
struct Role {
    period: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
    company: &'static str,
    href: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        period: "2025 — PRESENT",
        title: "UX/UI Designer (Freelance)",
        subtitle: None,
        company: "Krown",
        href: "https://www.krownapp.com/",
        summary: "Redesigned user experience for innovative location-based dating application, \
            focusing on simplicity and minimal-click interactions to facilitate authentic \
            romantic connections. Collaborated with development team to iterate on MVP designs \
            based on real user feedback and research-backed design principles. Created design \
            systems and visual interfaces that prioritize accessibility and user engagement.",
        tags: &[
            "Figma",
            "Mobile Design",
            "Design Systems",
            "User Research",
            "Prototyping",
        ],
    },
    Role {
        period: "2023 — 2025",
        title: "Project Manager",
        subtitle: Some("Web Developer"),
        company: "Ascend Fundraising Solutions",
        href: "https://www.ascendfs.com/",
        summary: "Lead web development projects from conception to delivery while managing \
            cross-functional teams and timelines. Build accessible, SEO-optimized solutions and \
            coordinate with designers and product managers to ensure research findings drive \
            development priorities. Analyze user data to inform project scope and measure \
            success metrics.",
        tags: &[
            "JavaScript",
            "Next.js",
            "React",
            "WordPress",
            "Shopify",
            "HTML & SCSS",
        ],
    },
    Role {
        period: "2022 — 2023",
        title: "UX Designer",
        subtitle: None,
        company: "Tank Worldwide",
        href: "https://tankww.com/en/",
        summary: "Develop user-centered healthcare digital products within complex regulatory \
            frameworks for major pharmaceutical clients. Collaborate across disciplines to \
            deliver FDA and Health Canada compliant solutions while maintaining optimal user \
            experiences. Contribute innovative feature concepts through structured ideation and \
            data-driven design processes.",
        tags: &["Figma", "UserTesting", "Adobe XD", "UXCam", "Axure RP"],
    },
    Role {
        period: "2017 — PRESENT",
        title: "Freelance Web Designer, Web Developer",
        subtitle: None,
        company: "Lux Design",
        href: "https://luxdesign.studio/",
        summary: "Build custom digital solutions across WordPress, Elementor, Shopify, and fully \
            custom platforms based on client requirements and project scope. Conduct user \
            research, usability testing, and competitive analysis to guide platform selection \
            and design decisions. Provide ongoing support through feature development and \
            technical support.",
        tags: &[
            "WordPress",
            "Elementor",
            "Shopify",
            "HTML & CSS",
            "Javascript",
            "jQuery",
            "Next.js",
            "React",
            "Tailwind CSS",
        ],
    },
];

#[derive(PartialEq)]
struct Post {
    title: &'static str,
    href: &'static str,
    summary: &'static str,
    date: &'static str,
    read_time: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Top 5 Books Every UX Designer and Web Developer Should Read",
        href: "https://luxdesign.studio/topbooks/",
        summary: "A curated list of must-read books that helped shape my journey as a UX \
            designer and front-end developer. From design thinking to coding best practices, \
            these picks offer practical insights, inspiration, and foundational knowledge for \
            anyone building digital products.",
        date: "July 20, 2024",
        read_time: "5 min read",
    },
    Post {
        title: "Top 5 Common UX Mistakes and How to Fix Them",
        href: "https://luxdesign.studio/top-5-ux-mistakes/",
        summary: "A quick, practical guide to the most common UX design pitfalls, from \
            neglecting user research to overcomplicating interfaces. This post outlines \
            real-world mistakes and how to fix them, helping designers build more intuitive, \
            user-focused products.",
        date: "August 25, 2024",
        read_time: "4 min read",
    },
];

fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

fn scroll_to(target: ScrollTarget) {
    match target {
        ScrollTarget::Top => {
            if let Some(win) = window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        }
        ScrollTarget::Anchor(id) => {
            // Missing anchor: the scroll step is a silent no-op.
            if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct OutboundLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(OutboundLink)]
fn outbound_link(props: &OutboundLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct TagListProps {
    tags: &'static [&'static str],
}

#[function_component(TagList)]
fn tag_list(props: &TagListProps) -> Html {
    html! {
        <ul class="tag-list">
            { for props.tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
        </ul>
    }
}

#[function_component(SocialRow)]
fn social_row() -> Html {
    html! {
        <ul class="social-row">
            { for SOCIAL_PROFILES.iter().map(|profile| html! {
                <li>
                    <OutboundLink href={profile.href} label={profile.label} class={classes!("social-link")} />
                </li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct NavMenuProps {
    sections: &'static [Section],
    active: &'static str,
    on_select: Callback<&'static str>,
}

#[function_component(NavMenu)]
fn nav_menu(props: &NavMenuProps) -> Html {
    html! {
        <nav class="section-nav" aria-label="Section navigation">
            { for props.sections.iter().map(|section| {
                let is_active = props.active == section.id;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = section.id;
                    Callback::from(move |_: MouseEvent| on_select.emit(id))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("nav-item", is_active.then_some("is-active"))}
                        aria-current={is_active.then_some("true")}
                        onclick={onclick}
                    >
                        <span class="nav-indicator" aria-hidden="true"></span>
                        <span class="nav-label">{section.label}</span>
                    </button>
                }
            })}
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <article class="card">
            <div class="card-preview" aria-hidden="true"></div>
            <div class="card-body">
                <h3 class="card-title">
                    <OutboundLink href={project.href} label={project.title} />
                </h3>
                <p class="card-summary">{project.summary}</p>
                <TagList tags={project.tags} />
                <OutboundLink
                    href={project.repo}
                    label="View GitHub Repository"
                    class={classes!("card-footer-link")}
                />
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct RoleEntryProps {
    role: &'static Role,
}

#[function_component(RoleEntry)]
fn role_entry(props: &RoleEntryProps) -> Html {
    let role = props.role;
    html! {
        <article class="card card-dated">
            <p class="card-period">{role.period}</p>
            <div class="card-body">
                <h3 class="card-title">
                    {role.title}
                    <span class="card-separator" aria-hidden="true">{"·"}</span>
                    <OutboundLink href={role.href} label={role.company} />
                </h3>
                if let Some(subtitle) = role.subtitle {
                    <p class="card-subtitle">{subtitle}</p>
                }
                <p class="card-summary">{role.summary}</p>
                <TagList tags={role.tags} />
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: &'static Post,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <article class="card">
            <div class="card-preview card-preview-alt" aria-hidden="true"></div>
            <div class="card-body">
                <h3 class="card-title">
                    <OutboundLink href={post.href} label={post.title} />
                </h3>
                <p class="card-summary">{post.summary}</p>
                <p class="card-meta">
                    <span>{post.date}</span>
                    <span aria-hidden="true">{"•"}</span>
                    <span>{post.read_time}</span>
                </p>
            </div>
        </article>
    }
}

#[function_component(App)]
fn app() -> Html {
    let pointer = use_state(PointerPosition::default);
    let tracker = use_reducer(|| SectionTracker::new(SECTIONS));

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                pointer.set(PointerPosition::moved_to(event.client_x(), event.client_y()));
            });

            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win.add_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = win.as_ref() {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            let dispatcher = tracker.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _: IntersectionObserver| {
                    let batch: Vec<Observation> = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .map(|entry| Observation {
                            id: entry.target().id(),
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        })
                        .collect();
                    dispatcher.dispatch(SectionEvent::Batch(batch));
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(OBSERVER_ROOT_MARGIN);
            init.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .ok();

            if let (Some(observer), Some(document)) = (observer.as_ref(), document()) {
                for section in tracker.sections() {
                    if let Some(element) = document.get_element_by_id(section.id) {
                        observer.observe(&element);
                    }
                }
            }

            move || {
                if let Some(observer) = observer.as_ref() {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let on_select = {
        let tracker = tracker.clone();
        Callback::from(move |id: &'static str| {
            tracker.dispatch(SectionEvent::Select(id));
            scroll_to(tracker.scroll_target(id));
        })
    };

    html! {
        <div class="page-shell">
            <div class="glow-layer" aria-hidden="true" style={pointer.glow_style()}></div>

            <header class="mobile-header">
                <h1>{NAME}</h1>
                <p class="tagline">{TAGLINE}</p>
                <p class="pitch">{PITCH}</p>
                <SocialRow />
            </header>

            <div class="layout">
                <aside class="sidebar">
                    <h1 id="identity-heading">{NAME}</h1>
                    <p class="tagline">{TAGLINE}</p>
                    <p class="pitch">{PITCH}</p>
                    <NavMenu sections={tracker.sections()} active={tracker.active()} on_select={on_select} />
                    <SocialRow />
                </aside>

                <main id="content">
                    <section id="about" class="section-block" aria-labelledby="about-heading">
                        <h2 id="about-heading" class="section-heading">{"About"}</h2>
                        <p>
                            {"I'm a data & analytics professional with a foundation in Economics \
                            and Accounting, bringing 7+ years of experience in project management \
                            and strategic thinking to the data field. I specialize in ETL \
                            processes, data cleaning, and data visualization using Python, SQL, \
                            and Tableau/Power BI. I excel at translating complex datasets into \
                            clear insights that drive strategic decisions."}
                        </p>
                        <p>
                            {"I combine analytical rigor with business acumen to deliver \
                            data-driven solutions that solve real business problems. My approach \
                            includes data mining, exploratory data analysis (EDA), and creating \
                            interactive dashboards using tools like Power BI, Tableau and \
                            Streamlit. I'm proficient in A/B testing, and database management \
                            systems including PostgreSQL and MySQL. My project management \
                            background enables me to lead data initiatives from requirements \
                            gathering through deployment and monitoring."}
                        </p>
                        <p>
                            {"In my spare time - I'm usually painting miniatures, playing TCGs, \
                            or reading."}
                        </p>
                        <p>
                            {"Now based in Copenhagen, originally from Toronto."}
                            <br />
                            {"Native English speaker, currently learning Danish."}
                        </p>
                        <p>{"Tak for besøget!"}</p>
                    </section>

                    <section id="projects" class="section-block" aria-labelledby="projects-heading">
                        <h2 id="projects-heading" class="section-heading">{"Projects"}</h2>
                        { for PROJECTS.iter().map(|project| html! { <ProjectCard project={project} /> }) }
                    </section>

                    <section class="section-block">
                        <OutboundLink
                            href="/resume.html"
                            label="View Full Resume"
                            class={classes!("resume-link")}
                        />
                    </section>

                    <section id="experience" class="section-block" aria-labelledby="experience-heading">
                        <h2 id="experience-heading" class="section-heading">{"Experience"}</h2>
                        { for ROLES.iter().map(|role| html! { <RoleEntry role={role} /> }) }
                    </section>

                    <section id="blog" class="section-block" aria-labelledby="blog-heading">
                        <h2 id="blog-heading" class="section-heading">{"Blog"}</h2>
                        { for POSTS.iter().map(|post| html! { <PostCard post={post} /> }) }
                    </section>
                </main>
            </div>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio frontend mounted");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
