//! Navigation Link
//!
//! Renders a real `<a href>` and routes plain clicks through the navigator,
//! so the document is never reloaded. Modifier clicks, middle clicks and
//! clicks another handler already cancelled keep the browser's behaviour.

use leptos::*;

use crate::state::use_navigation;

/// The parts of a click that decide whether the link handles it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickInfo {
    pub button: i16,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub default_prevented: bool,
}

impl From<&web_sys::MouseEvent> for ClickInfo {
    fn from(ev: &web_sys::MouseEvent) -> Self {
        Self {
            button: ev.button(),
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            default_prevented: ev.default_prevented(),
        }
    }
}

/// Only an unmodified primary-button click is client-side navigation
pub fn should_intercept(click: ClickInfo) -> bool {
    click.button == 0
        && !click.default_prevented
        && !(click.alt || click.ctrl || click.meta || click.shift)
}

/// Link that changes the location without a page load
#[component]
pub fn Link(
    #[prop(into)]
    href: String,
    #[prop(optional, into)]
    class: String,
    /// Extra classes while `href` is the current location
    #[prop(optional, into)]
    active_class: String,
    children: Children,
) -> impl IntoView {
    let nav = use_navigation();

    let is_active = {
        let nav = nav.clone();
        let href = href.clone();
        move || nav.is_current(&href)
    };

    let classes = {
        let is_active = is_active.clone();
        move || {
            if is_active() && !active_class.is_empty() {
                format!("{} {}", class, active_class)
            } else {
                class.clone()
            }
        }
    };

    let target = href.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if should_intercept(ClickInfo::from(&ev)) {
            ev.prevent_default();
            nav.navigate(&target);
        }
    };

    view! {
        <a
            href=href
            class=classes
            aria-current=move || is_active().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
