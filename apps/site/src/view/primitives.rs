//! Reusable presentation containers. Stateless and total: any children in,
//! the same markup out.

use leptos::prelude::*;

pub const SECTION_CLASS: &str = "max-w-6xl mx-auto px-4 py-12 md:py-16";
pub const SECTION_TITLE_CLASS: &str = "text-2xl md:text-3xl font-semibold tracking-tight";
pub const CARD_CLASS: &str = "rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/80 dark:bg-slate-900/60 backdrop-blur p-6 shadow-sm hover:shadow-md transition";
pub const CHIP_CLASS: &str = "inline-flex items-center rounded-2xl px-3 py-1 text-sm border border-slate-300/60 dark:border-slate-700/60 shadow-sm hover:shadow transition";

/// Navigable page region. The heading is omitted when `title` is absent.
/// Ids must be unique on the page; that is up to the caller.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=SECTION_CLASS>
            {title.map(|title| view! { <h2 class=SECTION_TITLE_CLASS>{title}</h2> })}
            {children()}
        </section>
    }
}

/// Bordered content container. `modifier` is appended to the fixed class list.
#[component]
pub fn Card(children: Children, #[prop(optional, into)] modifier: String) -> impl IntoView {
    let class = if modifier.is_empty() {
        CARD_CLASS.to_string()
    } else {
        format!("{CARD_CLASS} {modifier}")
    };

    view! { <div class=class>{children()}</div> }
}

/// Inline pill for a short label.
#[component]
pub fn Chip(children: Children) -> impl IntoView {
    view! { <span class=CHIP_CLASS>{children()}</span> }
}
