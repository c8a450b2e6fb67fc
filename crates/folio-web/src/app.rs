use folio_core::SiteConfig;
use leptos::prelude::*;
use leptos_meta::*;

use crate::icons;

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Tidewater",
        summary: "Harbor scheduling dashboard that replaced three spreadsheets and a fax machine.",
        tags: &["Rust", "Axum", "PostgreSQL"],
    },
    Project {
        title: "Lumen Type",
        summary: "A variable-font specimen site with live axis controls and print-ready proofs.",
        tags: &["WebAssembly", "Typography"],
    },
    Project {
        title: "Fieldnotes",
        summary: "Offline-first field survey app for ecologists working without coverage.",
        tags: &["Leptos", "IndexedDB", "PWA"],
    },
];

struct SkillSet {
    title: &'static str,
    skills: &'static [(&'static str, u8)],
}

const SKILLS: &[SkillSet] = &[
    SkillSet {
        title: "Engineering",
        skills: &[("Rust", 90), ("TypeScript", 80), ("SQL", 75)],
    },
    SkillSet {
        title: "Design",
        skills: &[("Interface design", 85), ("Motion", 70), ("Typography", 80)],
    },
    SkillSet {
        title: "Delivery",
        skills: &[("Accessibility", 85), ("Performance", 90), ("Testing", 80)],
    },
];

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    // No `action` at all keeps the form in simulated mode.
    let endpoint = (!config.simulates_submission()).then(|| config.form_endpoint.clone());

    view! {
        <Title text="folio - Design & Engineering Portfolio"/>
        <Meta name="description" content="Independent designer and engineer building fast, careful software for the web."/>

        <Preloader/>
        <div class="cursor-dot"></div>
        <div class="cursor-ring"></div>
        <Nav/>

        <main>
            <Hero/>
            <Projects/>
            <Skills/>
            <Contact email=config.contact_email endpoint/>
        </main>
        <Footer/>
    }
}

#[component]
fn Preloader() -> impl IntoView {
    view! {
        <div class="preloader">
            <div class="preloader-inner">
                <span class="preloader-logo">"folio"</span>
                <div class="preloader-bar">
                    <span class="preloader-progress"></span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <a href="#home" class="nav-logo">"folio"</a>
            <button class="nav-toggle" aria-label="Toggle navigation">
                <span></span>
                <span></span>
            </button>
            <ul class="nav-links">
                <li><a href="#home">"Home"</a></li>
                <li><a href="#projects">"Work"</a></li>
                <li><a href="#skills">"Skills"</a></li>
                <li><a href="#contact">"Contact"</a></li>
            </ul>
        </nav>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <div class="float-circle"></div>
            <div class="float-arch"></div>
            <div class="float-circle float-circle-small"></div>
            <div class="hero-content">
                <p class="hero-tag">"Design & Engineering"</p>
                <h1 class="hero-title">"Careful software, " <em>"quietly fast."</em></h1>
                <p class="hero-description">
                    "I design and build web products end to end, "
                    "from the first sketch to the last millisecond of load time."
                </p>
                <div class="hero-cta">
                    <a href="#projects" class="btn btn-primary">"See the work"</a>
                    <a href="#contact" class="btn btn-ghost">"Get in touch"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeader(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-number">{number}</span>
            <h2 class="section-title">{title}</h2>
        </div>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section class="projects" id="projects">
            <SectionHeader number="01" title="Selected work"/>
            <div class="project-grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3 class="project-title">{project.title}</h3>
            <p class="project-summary">{project.summary}</p>
            <ul class="project-tags">
                {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section class="skills" id="skills">
            <SectionHeader number="02" title="What I bring"/>
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|set| {
                        view! {
                            <div class="skills-category">
                                <h3>{set.title}</h3>
                                {set
                                    .skills
                                    .iter()
                                    .map(|(name, progress)| {
                                        view! {
                                            <div class="skill">
                                                <div class="skill-info">
                                                    <span>{*name}</span>
                                                    <span>{format!("{}%", progress)}</span>
                                                </div>
                                                <div class="skill-bar">
                                                    <div class="skill-progress" data-progress=progress.to_string()></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact(email: String, endpoint: Option<String>) -> impl IntoView {
    let mailto = format!("mailto:{}", email);

    view! {
        <section class="contact" id="contact">
            <SectionHeader number="03" title="Let's talk"/>
            <div class="contact-layout">
                <div class="contact-info">
                    <p>"Have a project in mind, or just want to compare notes? Write to me."</p>
                    <div class="contact-email">
                        <a href=mailto class="contact-link">{email.clone()}</a>
                        <button
                            class="copy-email-btn"
                            aria-label="Copy email address"
                            data-email=email
                            inner_html=icons::COPY
                        ></button>
                    </div>
                </div>

                <form id="contactForm" class="contact-form" action=endpoint method="POST" novalidate=true>
                    <input type="hidden" name="_subject" value="New message from the portfolio"/>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input type="text" id="name" name="name" autocomplete="name"/>
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input type="email" id="email" name="email" autocomplete="email"/>
                    </div>
                    <div class="form-group">
                        <label for="message">"Message"</label>
                        <textarea id="message" name="message" rows="6"></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary btn-submit">
                        <span>"Send message"</span>
                        <span class="btn-icon" inner_html=icons::ARROW></span>
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Built with 🦀 Rust and WebAssembly"</p>
            <p>
                <a href="#home">"Back to top"</a>
            </p>
        </footer>
    }
}
