use leptos::prelude::*;
use leptos_meta::Title;

use super::viewport::{Navigator, Section};
use crate::content::{ContactMethod, Project, SkillCategory, SITE_CONTENT};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <AboutSection />
        <ProjectsSection />
        <SkillsSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    view! {
        <section
            id=Section::Home.id()
            class="relative flex min-h-screen items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 -z-10">
                <div class="hero-grid absolute inset-0"></div>
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-background/60 to-background"></div>
            </div>

            <div class="mx-auto max-w-4xl px-6 text-center">
                <div class="mb-4 text-sm uppercase tracking-[0.3em] text-cyan">
                    "Developer & Engineer"
                </div>
                <h1 class="mb-6 text-5xl font-bold tracking-tight sm:text-7xl">"S SRIRAM"</h1>
                <div class="mb-6 flex flex-wrap items-center justify-center gap-3 text-sm uppercase tracking-widest text-muted">
                    <span>"AI Specialist"</span>
                    <span class="text-cyan">"/"</span>
                    <span>"Robotics"</span>
                    <span class="text-cyan">"/"</span>
                    <span>"Frontend Dev"</span>
                </div>
                <p class="mx-auto mb-10 max-w-xl text-lg leading-relaxed text-muted">
                    "Computer Science Graduate crafting intelligent systems and scalable solutions at the intersection of AI and engineering."
                </p>
                <button
                    class="group inline-flex items-center gap-2 rounded-md border border-cyan/40 bg-cyan/10 px-8 py-3 font-medium text-cyan transition-all duration-200 hover:bg-cyan/20"
                    on:click=move |_| navigator.go_to(Section::Projects)
                >
                    "View My Work"
                    <span class="transition-transform duration-200 group-hover:translate-x-1" aria-hidden="true">
                        "→"
                    </span>
                </button>
            </div>

            <div class="absolute bottom-8 left-1/2 hidden -translate-x-1/2 flex-col items-center gap-2 sm:flex">
                <div class="h-12 w-px animate-pulse bg-muted"></div>
                <span class="text-xs uppercase tracking-widest text-muted">"Scroll"</span>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24">
            <div class="mx-auto max-w-5xl px-6">
                <SectionTitle title="About Me" />
                <p class="max-w-3xl text-lg leading-relaxed">
                    "I'm a Computer Science Graduate at " <strong>"VIT Chennai"</strong>
                    ", specializing in Artificial Intelligence and Robotics. My work focuses on building intelligent systems that solve real-world problems through automation and smart design."
                </p>
                <div class="mt-12 grid gap-8 md:grid-cols-3">
                    <Highlight
                        title="Technical Foundation"
                        body="Strong expertise in data structures, machine learning, computer vision, and embedded systems with hands-on project experience."
                    />
                    <Highlight
                        title="Frontend Development"
                        body="Passionate about building responsive and user-friendly interfaces with modern web technologies like React and Next.js."
                    />
                    <Highlight
                        title="Open Source"
                        body="Active contributor to OSS projects, gaining real-world experience in collaborative development and industry best practices."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24">
            <div class="mx-auto max-w-6xl px-6">
                <SectionTitle title="Featured Projects" />
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {SITE_CONTENT
                        .projects
                        .iter()
                        .cloned()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24">
            <div class="mx-auto max-w-5xl px-6">
                <SectionTitle title="Technical Arsenal" />
                <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {SITE_CONTENT
                        .skills
                        .iter()
                        .cloned()
                        .map(|category| view! { <SkillGroup category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-24">
            <div class="mx-auto max-w-4xl px-6">
                <SectionTitle title="Get In Touch" />
                <p class="mb-12 max-w-2xl text-lg leading-relaxed text-muted">
                    "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                </p>
                <div class="grid gap-4 sm:grid-cols-2">
                    {SITE_CONTENT
                        .contacts
                        .iter()
                        .cloned()
                        .map(|contact| view! { <ContactLink contact /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let build_year = &BUILD_TIME[..4];
    view! {
        <footer class="border-t border-muted/30 py-8">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-4 px-6 sm:flex-row">
                <div class="flex flex-col text-center sm:text-left">
                    <span class="font-bold tracking-widest">"S SRIRAM"</span>
                    <span class="text-sm text-muted">"Building the future, one line at a time"</span>
                </div>
                <div class="flex flex-col text-center sm:text-right">
                    <span class="text-sm text-muted">{format!("© {build_year}")}</span>
                    <span class="text-sm text-muted">"Chennai, India"</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-3xl font-bold sm:text-4xl">{title}</h2>
            <div class="mt-3 h-1 w-16 rounded bg-cyan"></div>
        </div>
    }
}

#[component]
fn Highlight(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-muted/30 p-6">
            <h3 class="mb-3 text-lg font-bold text-cyan">{title}</h3>
            <p class="text-sm leading-relaxed text-muted">{body}</p>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        number,
        title,
        description,
        tags,
        link,
    } = project;
    view! {
        <div class="group flex flex-col rounded-lg border border-muted/30 bg-brightBlack/20 p-6 transition-all duration-300 hover:-translate-y-1 hover:border-cyan/50">
            <div class="mb-4 text-sm font-bold text-cyan/70">{number}</div>
            <h3 class="mb-3 text-xl font-bold">{title}</h3>
            <p class="mb-4 flex-grow text-sm leading-relaxed text-muted">{description}</p>
            <div class="mb-6 flex flex-wrap gap-2">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="rounded-md bg-brightBlack px-2 py-1 text-xs">{tag}</span> })
                    .collect_view()}
            </div>
            <a
                href=link
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-1 text-sm font-medium text-cyan transition-colors duration-200 hover:text-brightCyan"
            >
                "View Project"
                <span class="transition-transform duration-200 group-hover:translate-x-1" aria-hidden="true">
                    "→"
                </span>
            </a>
        </div>
    }
}

#[component]
fn SkillGroup(category: SkillCategory) -> impl IntoView {
    let SkillCategory { title, skills } = category;
    view! {
        <div class="rounded-lg border border-muted/30 p-6">
            <h3 class="mb-4 text-lg font-bold text-cyan">{title}</h3>
            <div class="flex flex-wrap gap-2">
                {skills
                    .into_iter()
                    .map(|skill| view! { <span class="rounded-md bg-brightBlack px-3 py-1 text-sm">{skill}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactLink(contact: ContactMethod) -> impl IntoView {
    let ContactMethod {
        label,
        value,
        href,
        icon,
    } = contact;
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="group flex items-center gap-4 rounded-lg border border-muted/30 p-4 transition-all duration-200 hover:border-cyan/50 hover:bg-brightBlack/20"
        >
            <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-md bg-brightBlack font-bold text-cyan">
                {icon}
            </div>
            <div class="flex flex-col overflow-hidden">
                <span class="text-xs uppercase tracking-wider text-muted">{label}</span>
                <span class="truncate text-sm">{value}</span>
            </div>
            <span
                class="ml-auto text-muted transition-transform duration-200 group-hover:translate-x-1"
                aria-hidden="true"
            >
                "→"
            </span>
        </a>
    }
}
