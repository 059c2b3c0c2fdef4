use super::dom;
use super::navigation::{NavBar, NavPlaceholder};
use super::scene_canvas::StarfieldCanvas;
use super::sections::{About, Contact, Footer, Hero, Projects, Skills};
use crate::config::SiteConfig;
use crate::content;
use crate::logging::log_event;
use crate::motion::{self, HeroTransform};
use crate::section::{self, Section, SectionVisibility};
use gloo_events::EventListener;
use log::Level;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct PageRefs {
    hero: NodeRef,
    about: NodeRef,
    skills: NodeRef,
    projects: NodeRef,
    contact: NodeRef,
}

impl PageRefs {
    fn section(&self, section: Section) -> &NodeRef {
        match section {
            Section::About => &self.about,
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
            Section::Contact => &self.contact,
        }
    }

    fn visibility(&self, viewport_height: f64) -> SectionVisibility {
        Section::ALL
            .into_iter()
            .fold(SectionVisibility::default(), |visibility, section| {
                let in_view = dom::element_rect(self.section(section))
                    .map(|(top, height)| {
                        section::is_in_view(top, height, viewport_height, section.in_view_amount())
                    })
                    .unwrap_or(false);
                visibility.with(section, in_view)
            })
    }

    fn hero_progress(&self) -> f64 {
        dom::element_rect(&self.hero)
            .map(|(top, height)| motion::scroll_progress(top, height))
            .unwrap_or(0.0)
    }
}

fn scroll_to_section(refs: &PageRefs, section: Section) {
    match refs.section(section).cast::<Element>() {
        Some(element) => dom::scroll_to_element(&element, !dom::prefers_reduced_motion()),
        None => log_event(
            Level::Warn,
            "scroll_target_missing",
            json!({ "section": section.id() }),
        ),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let ready = use_state_eq(|| false);
    let visibility = use_state_eq(SectionVisibility::default);
    let progress = use_state_eq(|| 0.0_f64);
    let refs = PageRefs {
        hero: use_node_ref(),
        about: use_node_ref(),
        skills: use_node_ref(),
        projects: use_node_ref(),
        contact: use_node_ref(),
    };

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            ready.set(true);
            || ()
        });
    }

    {
        let refs = refs.clone();
        let visibility = visibility.clone();
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let last = Rc::new(Cell::new(SectionVisibility::default()));
            let measure = Rc::new(move || {
                let (_, viewport_height) = dom::viewport_size();
                let next = refs.visibility(viewport_height);
                let previous = last.replace(next);

                for section in next.changed_from(&previous) {
                    log_event(
                        Level::Debug,
                        "section_visibility_changed",
                        json!({ "section": section.id(), "visible": next.is_visible(section) }),
                    );
                }

                visibility.set(next);
                progress.set(refs.hero_progress());
            });
            measure();

            let listeners = dom::window().map(|win| {
                let on_scroll = {
                    let measure = Rc::clone(&measure);
                    EventListener::new(&win, "scroll", move |_| measure())
                };
                let on_resize = EventListener::new(&win, "resize", move |_| measure());
                [on_scroll, on_resize]
            });

            move || drop(listeners)
        });
    }

    let scroll_to = {
        let refs = refs.clone();
        Callback::from(move |section: Section| scroll_to_section(&refs, section))
    };
    let go_to = |section: Section| scroll_to.reform(move |()| section);

    html! {
        <>
            <a class="skip-link" href={Section::About.anchor()}>{"Skip to main content"}</a>
            if *ready {
                <NavBar
                    on_about_click={go_to(Section::About)}
                    on_skills_click={go_to(Section::Skills)}
                    on_projects_click={go_to(Section::Projects)}
                    on_contact_click={go_to(Section::Contact)}
                />
            } else {
                <NavPlaceholder />
            }
            <main id="content">
                <Hero
                    node_ref={refs.hero.clone()}
                    transform={HeroTransform::from_progress(*progress)}
                    on_projects_click={go_to(Section::Projects)}
                    on_contact_click={go_to(Section::Contact)}
                    on_scroll_cue={go_to(Section::About)}
                >
                    if *ready {
                        <StarfieldCanvas />
                    }
                </Hero>
                <About node_ref={refs.about.clone()} visible={visibility.is_visible(Section::About)} />
                <Skills node_ref={refs.skills.clone()} visible={visibility.is_visible(Section::Skills)} />
                <Projects
                    node_ref={refs.projects.clone()}
                    visible={visibility.is_visible(Section::Projects)}
                    projects={content::visible_projects(config.initial_visible_projects)}
                />
                <Contact node_ref={refs.contact.clone()} visible={visibility.is_visible(Section::Contact)} />
            </main>
            <Footer />
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn unmounted_refs_report_nothing_in_view() {
        let refs = PageRefs::default();
        assert_eq!(refs.visibility(800.0), SectionVisibility::default());
        assert_eq!(refs.hero_progress(), 0.0);
    }

    #[test]
    fn each_section_has_its_own_ref() {
        let refs = PageRefs::default();
        for section in Section::ALL {
            for other in Section::ALL {
                let same = refs.section(section) == refs.section(other);
                assert_eq!(same, section == other);
            }
        }
    }

    #[tokio::test]
    async fn initial_page_shows_placeholder_and_hides_sections() {
        let html = ServerRenderer::<Home>::new().render().await;

        assert!(html.contains("nav-placeholder"));
        assert!(html.contains("nav-transparent"));
        assert!(!html.contains("nav-toggle"));
        assert!(!html.contains("<canvas"));
        assert!(html.contains("hero-content"));
        assert!(html.contains("opacity: 1.000; transform: translateY(0.00px) scale(1.000);"));
        assert!(!html.contains("is-visible"));

        for section in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.id())));
        }
    }
}
