//! Profile view composer: binds a [`Profile`] to the fixed page layout.
//!
//! Every collection is projected 1:1 and in storage order into Card/Chip
//! fragments. Navigation is fixed and does not depend on which collections
//! have entries; an empty collection still renders its section.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use tracing::debug;

use crate::models::{
    AwardEntry, EducationEntry, ExperienceEntry, LanguageEntry, Profile, ReferenceEntry,
};
use crate::view::mode::DisplayMode;
use crate::view::primitives::{Card, Chip, Section};

pub const CV_PATH: &str = "/cv.pdf";
pub const PORTRAIT_PATH: &str = "/me.jpg";
pub const STYLESHEET_PATH: &str = "/styles.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// In-page navigation, in display order.
pub const NAV_SECTIONS: [NavItem; 8] = [
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "education", label: "Education" },
    NavItem { id: "awards", label: "Awards" },
    NavItem { id: "languages", label: "Languages" },
    NavItem { id: "references", label: "References" },
];

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Copyright year, taken from the clock at render time.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Owns the display mode for one page view and renders it against a shared profile.
#[derive(Debug, Clone)]
pub struct SitePage {
    profile: Arc<Profile>,
    mode: DisplayMode,
}

impl SitePage {
    pub fn new(profile: Arc<Profile>) -> Self {
        Self {
            profile,
            mode: DisplayMode::default(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Renders the complete HTML document. Output depends only on the
    /// profile, the mode and `year`.
    pub fn render(&self, year: i32) -> String {
        debug!("Rendering page for {} (mode: {}, year: {})", self.profile.name, self.mode, year);

        let profile = Profile::clone(&self.profile);
        let mode = self.mode;
        let html = view! { <ProfilePage profile=profile mode=mode year=year/> }.to_html();

        format!("<!DOCTYPE html>{html}")
    }
}

#[component]
pub fn ProfilePage(profile: Profile, mode: DisplayMode, year: i32) -> impl IntoView {
    let Profile {
        name,
        title,
        tagline,
        summary,
        location,
        phone,
        email,
        linkedin,
        highlights,
        experience,
        skills,
        education,
        awards,
        languages,
        references,
    } = profile;

    let root_class = mode.root_class();
    let page_title = format!("{name} | {title}");
    let header_name = name.clone();
    let hero_name = name.clone();
    let hero_email = email.clone();

    view! {
        <html lang="en" class=root_class>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{page_title}</title>
                <link rel="stylesheet" href=STYLESHEET_PATH/>
            </head>
            <body>
                <div class="min-h-screen bg-gradient-to-b from-slate-50 via-white to-slate-50 dark:from-slate-950 dark:via-slate-950 dark:to-slate-950 text-slate-800 dark:text-slate-100">
                    <SiteHeader name=header_name mode=mode/>
                    <Hero
                        name=hero_name
                        title=title
                        tagline=tagline
                        email=hero_email
                        location=location
                        phone=phone
                        linkedin=linkedin
                    />
                    <AboutSection summary=summary highlights=highlights/>
                    <ExperienceSection experience=experience/>
                    <SkillsSection skills=skills/>
                    <EducationSection education=education/>
                    <AwardsSection awards=awards/>
                    <LanguagesSection languages=languages/>
                    <ReferencesSection references=references/>
                    <SiteFooter name=name email=email year=year/>
                </div>
            </body>
        </html>
    }
}

#[component]
fn SiteHeader(name: String, mode: DisplayMode) -> impl IntoView {
    let brand = name.to_uppercase();
    let toggle_href = mode.toggle_href();
    let toggle_label = mode.toggle_label();

    view! {
        <header class="sticky top-0 z-50 backdrop-blur bg-white/70 dark:bg-slate-950/60 border-b border-slate-200/70 dark:border-slate-800">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <a href="#home" class="font-bold tracking-tight text-slate-900 dark:text-slate-100 display">
                    {brand}
                </a>
                <nav class="hidden md:flex gap-2">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|item| {
                            let href = format!("#{}", item.id);
                            view! {
                                <a href=href class="px-3 py-2 rounded-xl text-sm hover:bg-slate-100 dark:hover:bg-slate-800/70 transition">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <a
                        href=CV_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-xl px-3 py-2 text-sm bg-slate-900 text-white dark:bg-white dark:text-slate-900 hover:opacity-90"
                    >
                        "Download CV"
                    </a>
                    <a href=toggle_href class="px-3 py-2 rounded-xl text-sm border border-slate-300 dark:border-slate-700">
                        {toggle_label}
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero(
    name: String,
    title: String,
    tagline: String,
    email: String,
    location: String,
    phone: String,
    linkedin: String,
) -> impl IntoView {
    let portrait_alt = format!("{name} headshot");
    let mail_href = mailto(&email);

    view! {
        <section id="home" class="relative overflow-hidden">
            <div class="absolute inset-0 -z-10">
                <div class="absolute -top-24 -right-24 h-72 w-72 rounded-full bg-teal-200/40 blur-3xl"></div>
                <div class="absolute bottom-0 -left-16 h-72 w-72 rounded-full bg-indigo-200/40 blur-3xl"></div>
            </div>
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-8 items-center px-4 py-16 md:py-24">
                <div class="fade-up">
                    <p class="text-sm uppercase tracking-widest text-slate-500">{title}</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight mt-2 display">{name}</h1>
                    <p class="mt-4 text-slate-600 dark:text-slate-300 max-w-xl">{tagline}</p>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <a
                            href=CV_PATH
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 rounded-xl px-4 py-2 bg-teal-600 text-white hover:bg-teal-700"
                        >
                            "Download CV"
                        </a>
                        <a
                            href=mail_href
                            class="inline-flex items-center gap-2 rounded-xl px-4 py-2 border border-slate-300 dark:border-slate-700 hover:bg-slate-100 dark:hover:bg-slate-800"
                        >
                            "Email Me"
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap items-center gap-4 text-sm text-slate-600 dark:text-slate-300">
                        <span class="inline-flex items-center gap-2">{location}</span>
                        <span class="inline-flex items-center gap-2">{phone}</span>
                        <a href=linkedin class="inline-flex items-center gap-2 hover:underline">"LinkedIn"</a>
                    </div>
                </div>
                <div class="fade-up justify-self-center">
                    <div class="relative">
                        <img
                            src=PORTRAIT_PATH
                            alt=portrait_alt
                            class="h-64 w-64 md:h-80 md:w-80 rounded-full object-cover border-4 border-white dark:border-slate-900 shadow-xl"
                        />
                        <div class="absolute -z-10 inset-0 rounded-full bg-gradient-to-tr from-teal-400/20 to-indigo-400/20 blur-2xl"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection(summary: String, highlights: Vec<String>) -> impl IntoView {
    view! {
        <Section id="about" title="About">
            <Card>
                <p class="mt-2 text-slate-700 dark:text-slate-300">{summary}</p>
                <div class="mt-4 flex flex-wrap gap-2">
                    {highlights
                        .into_iter()
                        .map(|highlight| view! { <Chip>{highlight}</Chip> })
                        .collect_view()}
                </div>
            </Card>
        </Section>
    }
}

#[component]
fn ExperienceSection(experience: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <Section id="experience" title="Experience">
            <div class="space-y-6 mt-6">
                {experience
                    .into_iter()
                    .map(|job| view! { <ExperienceCard job=job/> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExperienceCard(job: ExperienceEntry) -> impl IntoView {
    let ExperienceEntry {
        role,
        company,
        location,
        period,
        bullets,
    } = job;
    let employer = format!("{company} — {location}");

    view! {
        <Card>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="text-xl font-semibold">{role}</h3>
                    <p class="text-slate-600 dark:text-slate-400">{employer}</p>
                </div>
                <span class="text-sm text-slate-500">{period}</span>
            </div>
            <ul class="mt-3 list-disc pl-5 space-y-1 text-slate-700 dark:text-slate-300">
                {bullets.into_iter().map(|bullet| view! { <li>{bullet}</li> }).collect_view()}
            </ul>
        </Card>
    }
}

#[component]
fn SkillsSection(skills: Vec<String>) -> impl IntoView {
    view! {
        <Section id="skills" title="Skills">
            <div class="mt-6 flex flex-wrap gap-3">
                {skills.into_iter().map(|skill| view! { <Chip>{skill}</Chip> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn EducationSection(education: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <Section id="education" title="Education">
            <div class="grid md:grid-cols-3 gap-4 mt-6">
                {education
                    .into_iter()
                    .map(|entry| {
                        let EducationEntry { program, school, detail, period } = entry;
                        view! {
                            <Card>
                                <h3 class="font-semibold">{program}</h3>
                                <p class="text-sm text-slate-500">{school}</p>
                                <p class="text-sm text-slate-500">{detail}</p>
                                <p class="text-sm text-slate-500">{period}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn AwardsSection(awards: Vec<AwardEntry>) -> impl IntoView {
    view! {
        <Section id="awards" title="Awards">
            <div class="mt-6 grid md:grid-cols-2 gap-4">
                {awards
                    .into_iter()
                    .map(|award| {
                        let issued = format!("{} — {}", award.org, award.year);
                        let title = award.title;
                        view! {
                            <Card>
                                <h3 class="font-semibold">{title}</h3>
                                <p class="text-sm text-slate-500">{issued}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn LanguagesSection(languages: Vec<LanguageEntry>) -> impl IntoView {
    view! {
        <Section id="languages" title="Languages">
            <div class="mt-6 flex flex-wrap gap-3">
                {languages
                    .into_iter()
                    .map(|language| {
                        let label = format!("{} — {}", language.name, language.level);
                        view! { <Chip>{label}</Chip> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ReferencesSection(references: Vec<ReferenceEntry>) -> impl IntoView {
    view! {
        <Section id="references" title="References">
            <div class="grid md:grid-cols-2 gap-4 mt-6">
                {references
                    .into_iter()
                    .map(|reference| view! { <ReferenceCard reference=reference/> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ReferenceCard(reference: ReferenceEntry) -> impl IntoView {
    let ReferenceEntry {
        name,
        role,
        phone,
        email,
    } = reference;
    let tel_href = tel(&phone);
    let mail_href = mailto(&email);

    view! {
        <Card>
            <h3 class="font-semibold">{name}</h3>
            <p class="text-sm text-slate-500">{role}</p>
            <div class="mt-2 text-sm">
                <p>"Phone: " <a class="underline" href=tel_href>{phone}</a></p>
                <p>"Email: " <a class="underline" href=mail_href>{email}</a></p>
            </div>
        </Card>
    }
}

#[component]
fn SiteFooter(name: String, email: String, year: i32) -> impl IntoView {
    let copyright = format!("© {year} {name}");
    let mail_href = mailto(&email);

    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800 mt-12">
            <div class="max-w-6xl mx-auto px-4 py-8 text-sm flex flex-wrap items-center gap-4 justify-between">
                <p>{copyright}</p>
                <div class="flex gap-3">
                    <a href=CV_PATH class="underline">"Download CV"</a>
                    <a href=mail_href class="underline">"Email Me"</a>
                </div>
            </div>
        </footer>
    }
}
