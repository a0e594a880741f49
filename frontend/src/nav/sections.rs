use crate::config::NAV_SECTION_THRESHOLD;
use crate::dom::{reaches_threshold, VisibilityObserver};
use crate::nav::state::{NavAction, NavHandle, NavState};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the nav state shared by the bar and the page whose sections it
/// tracks.
#[function_component(NavProvider)]
pub fn nav_provider(props: &NavProviderProps) -> Html {
    let nav = use_reducer(NavState::default);
    html! {
        <ContextProvider<NavHandle> context={nav}>
            { for props.children.iter() }
        </ContextProvider<NavHandle>>
    }
}

fn observe_sections(nav: NavHandle) -> Option<VisibilityObserver> {
    let document = web_sys::window()?.document()?;
    let sections = document.query_selector_all("section[id]").ok()?;
    if sections.length() == 0 {
        log::debug!("No sections to track");
        return None;
    }

    let observer = VisibilityObserver::new(NAV_SECTION_THRESHOLD, move |entry, _| {
        if reaches_threshold(
            entry.is_intersecting(),
            entry.intersection_ratio(),
            NAV_SECTION_THRESHOLD,
        ) {
            let id = entry.target().id();
            nav.dispatch(NavAction::SectionVisible(format!("#{}", id)));
        }
    });
    let observer = match observer {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("Section tracking disabled: {}", e);
            return None;
        }
    };

    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    Some(observer)
}

/// Reports the section on screen to the surrounding `NavProvider`.
///
/// Call from the component that renders the sections: its effect runs once
/// they are in the DOM, and again each time that component is mounted.
#[hook]
pub fn use_section_tracking() {
    let nav = use_context::<NavHandle>();
    use_effect_with_deps(
        move |_| {
            let observer = nav.and_then(observe_sections);
            move || drop(observer)
        },
        (),
    );
}
