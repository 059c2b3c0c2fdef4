use super::dom;
use super::icons::IconSvg;
use crate::config::SiteConfig;
use crate::content::{self, Icon};
use crate::logging::log_event;
use crate::nav::{MenuEvent, NavAction, NavLayout, NavState};
use crate::section::Section;
use gloo_events::EventListener;
use log::Level;
use serde_json::json;
use std::rc::Rc;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            return self;
        }

        if next.menu != self.menu {
            log_event(
                Level::Debug,
                "nav_menu_changed",
                json!({ "open": next.menu.is_open(), "action": format!("{action:?}") }),
            );
        }

        Rc::new(next)
    }
}

/// The propagation path is fixed when dispatch starts, so it still holds the
/// nav even if a re-render detached the original target mid-dispatch.
fn path_contains(event: &Event, node: &Node) -> bool {
    event.composed_path().includes(node, 0)
}

fn document_click(dispatch: impl Fn(NavAction), inside_nav: bool) {
    if !inside_nav {
        dispatch(NavAction::Menu(MenuEvent::OutsideClicked));
    }
}

/// Closes the menu, then fires the item's own callback once.
fn select_section(dispatch: impl Fn(NavAction), callback: &Callback<()>, section: Section) {
    dispatch(NavAction::Select(section));
    callback.emit(());
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub on_about_click: Callback<()>,
    pub on_skills_click: Callback<()>,
    pub on_projects_click: Callback<()>,
    pub on_contact_click: Callback<()>,
}

impl NavBarProps {
    fn callback_for(&self, section: Section) -> &Callback<()> {
        match section {
            Section::About => &self.on_about_click,
            Section::Skills => &self.on_skills_click,
            Section::Projects => &self.on_projects_click,
            Section::Contact => &self.on_contact_click,
        }
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav = use_reducer_eq(NavState::default);
    let width = use_state_eq(|| dom::viewport_size().0);
    let nav_ref = use_node_ref();

    {
        let dispatcher = nav.dispatcher();
        let width = width.clone();
        use_effect_with(config.scroll_threshold_px, move |threshold| {
            let threshold = *threshold;
            dispatcher.dispatch(NavAction::Scrolled {
                offset: dom::scroll_y(),
                threshold,
            });

            let listeners = dom::window().map(|win| {
                let on_scroll = EventListener::new(&win, "scroll", move |_| {
                    dispatcher.dispatch(NavAction::Scrolled {
                        offset: dom::scroll_y(),
                        threshold,
                    });
                });
                let on_resize = EventListener::new(&win, "resize", move |_| {
                    width.set(dom::viewport_size().0);
                });
                [on_scroll, on_resize]
            });

            move || drop(listeners)
        });
    }

    // Outside clicks are only watched while the menu is open.
    {
        let dispatcher = nav.dispatcher();
        let nav_ref = nav_ref.clone();
        use_effect_with(nav.menu, move |menu| {
            let listener = menu.is_open().then(dom::document).flatten().map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let inside = nav_ref
                        .cast::<Node>()
                        .is_some_and(|root| path_contains(event, &root));
                    document_click(|action| dispatcher.dispatch(action), inside);
                })
            });

            move || drop(listener)
        });
    }

    let select = |section: Section| {
        let dispatcher = nav.dispatcher();
        let callback = props.callback_for(section).clone();
        Callback::from(move |_: MouseEvent| {
            select_section(|action| dispatcher.dispatch(action), &callback, section);
        })
    };

    let section_buttons = |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                html! {
                    <button key={section.id()} type="button" class={class} onclick={select(section)}>
                        {section.label()}
                    </button>
                }
            })
            .collect::<Html>()
    };

    let social_links = content::NAV_SOCIAL_LINKS
        .iter()
        .map(|link| {
            html! {
                <a
                    key={link.label}
                    class="nav-social"
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                >
                    <IconSvg icon={link.icon} size={18} />
                </a>
            }
        })
        .collect::<Html>();

    let layout = NavLayout::from_width(*width, config.mobile_breakpoint_px);
    let menu_open = nav.menu.is_open();

    let on_toggle = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(NavAction::Menu(MenuEvent::ToggleClicked));
        })
    };

    let on_mobile_resume = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(NavAction::Menu(MenuEvent::ItemClicked));
        })
    };

    html! {
        <nav ref={nav_ref} class={classes!("site-nav", nav.style.class())} aria-label="Primary">
            <div class="nav-inner">
                <NavBrand />

                if layout.shows_inline_links() {
                    <div class="nav-links">
                        {section_buttons("nav-link")}
                        <a
                            class="btn-resume"
                            href={content::RESUME_PATH}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Resume"}
                        </a>
                        <div class="nav-socials">{social_links.clone()}</div>
                    </div>
                }

                if layout.shows_toggle() {
                    <button
                        type="button"
                        class="nav-toggle"
                        aria-label={nav.menu.toggle_label()}
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle}
                    >
                        <IconSvg icon={if menu_open { Icon::Close } else { Icon::Menu }} size={24} />
                    </button>
                }
            </div>

            if layout.shows_toggle() && menu_open {
                <div class="mobile-menu">
                    {section_buttons("mobile-link")}
                    <a
                        class="btn-resume mobile-resume"
                        href={content::RESUME_PATH}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={on_mobile_resume}
                    >
                        {"Resume"}
                    </a>
                    <div class="nav-socials">{social_links}</div>
                </div>
            }
        </nav>
    }
}

#[function_component(NavBrand)]
fn nav_brand() -> Html {
    html! {
        <a class="nav-brand" href="#">
            <span class="nav-monogram">{content::OWNER_MONOGRAM}</span>
            <span class="nav-name">{content::OWNER_NAME}</span>
        </a>
    }
}

/// Static bar shown before the client is ready; same footprint, no links.
#[function_component(NavPlaceholder)]
pub fn nav_placeholder() -> Html {
    html! {
        <nav class={classes!("site-nav", "nav-placeholder", NavState::default().style.class())} aria-hidden="true">
            <div class="nav-inner">
                <NavBrand />
            </div>
        </nav>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::nav::{MenuState, NavStyle};
    use std::cell::Cell;
    use yew::ServerRenderer;

    fn counting_props() -> (NavBarProps, Rc<[Cell<u32>; 4]>) {
        let counts = Rc::new([Cell::new(0), Cell::new(0), Cell::new(0), Cell::new(0)]);
        let counter = |index: usize| {
            let counts = Rc::clone(&counts);
            Callback::from(move |()| counts[index].set(counts[index].get() + 1))
        };

        let props = NavBarProps {
            on_about_click: counter(0),
            on_skills_click: counter(1),
            on_projects_click: counter(2),
            on_contact_click: counter(3),
        };
        (props, counts)
    }

    fn state_with_menu(menu: MenuState) -> Cell<NavState> {
        let state = NavState::default();
        let state = if menu.is_open() {
            state.apply(NavAction::Menu(MenuEvent::ToggleClicked))
        } else {
            state
        };
        Cell::new(state)
    }

    #[test]
    fn each_section_routes_to_its_own_callback() {
        for (index, section) in Section::ALL.into_iter().enumerate() {
            let (props, counts) = counting_props();
            props.callback_for(section).emit(());

            for (other, count) in counts.iter().enumerate() {
                let expected = u32::from(other == index);
                assert_eq!(count.get(), expected, "{section:?} fired slot {other}");
            }
        }
    }

    #[test]
    fn item_click_fires_its_callback_once_and_leaves_menu_closed() {
        for menu in [MenuState::Open, MenuState::Closed] {
            for (index, section) in Section::ALL.into_iter().enumerate() {
                let (props, counts) = counting_props();
                let state = state_with_menu(menu);

                select_section(
                    |action| state.set(state.get().apply(action)),
                    props.callback_for(section),
                    section,
                );

                assert_eq!(state.get().menu, MenuState::Closed, "{menu:?} {section:?}");
                for (other, count) in counts.iter().enumerate() {
                    let expected = u32::from(other == index);
                    assert_eq!(count.get(), expected, "{menu:?} {section:?} slot {other}");
                }
            }
        }
    }

    #[test]
    fn toggle_click_reaching_the_document_keeps_menu_open() {
        // The toggle's own click bubbles to the document listener the open
        // render installs; the nav is on its path even after a re-render.
        let state = state_with_menu(MenuState::Closed);
        state.set(state.get().apply(NavAction::Menu(MenuEvent::ToggleClicked)));

        document_click(|action| state.set(state.get().apply(action)), true);

        assert_eq!(state.get().menu, MenuState::Open);
    }

    #[test]
    fn document_click_outside_nav_closes_menu() {
        let state = state_with_menu(MenuState::Open);
        let fired = Cell::new(0);

        document_click(
            |action| {
                fired.set(fired.get() + 1);
                state.set(state.get().apply(action));
            },
            false,
        );

        assert_eq!(fired.get(), 1);
        assert_eq!(state.get().menu, MenuState::Closed);
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let state = Rc::new(NavState::default());
        let next = Rc::clone(&state).reduce(NavAction::Scrolled {
            offset: 10.0,
            threshold: 50.0,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_closes_open_menu_on_selection() {
        let open = Rc::new(NavState::default()).reduce(NavAction::Menu(MenuEvent::ToggleClicked));
        assert_eq!(open.menu, MenuState::Open);

        let closed = open.reduce(NavAction::Select(Section::Projects));
        assert_eq!(closed.menu, MenuState::Closed);
        assert_eq!(closed.style, NavStyle::Transparent);
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        config: SiteConfig,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ContextProvider<SiteConfig> context={props.config.clone()}>
                <NavBar
                    on_about_click={Callback::noop()}
                    on_skills_click={Callback::noop()}
                    on_projects_click={Callback::noop()}
                    on_contact_click={Callback::noop()}
                />
            </ContextProvider<SiteConfig>>
        }
    }

    #[tokio::test]
    async fn desktop_nav_lists_every_section_without_toggle() {
        let html = ServerRenderer::<NavBar>::with_props(|| NavBarProps {
            on_about_click: Callback::noop(),
            on_skills_click: Callback::noop(),
            on_projects_click: Callback::noop(),
            on_contact_click: Callback::noop(),
        })
        .render()
        .await;

        assert!(html.contains("nav-transparent"));
        assert!(!html.contains("nav-toggle"));
        assert!(!html.contains("mobile-menu"));
        for section in Section::ALL {
            assert!(html.contains(section.label()));
        }
    }

    #[tokio::test]
    async fn breakpoint_above_viewport_switches_nav_to_mobile() {
        let config = SiteConfig {
            mobile_breakpoint_px: 2_000.0,
            ..SiteConfig::default()
        };

        let html = ServerRenderer::<Harness>::with_props(move || HarnessProps { config })
            .render()
            .await;

        assert!(html.contains("nav-toggle"));
        assert!(html.contains("Open menu"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("mobile-menu"));
        assert!(!html.contains("nav-links"));
    }

    #[tokio::test]
    async fn placeholder_has_brand_but_no_links() {
        let html = ServerRenderer::<NavPlaceholder>::new().render().await;

        assert!(html.contains("nav-placeholder"));
        assert!(html.contains(content::OWNER_NAME));
        assert!(!html.contains("nav-link"));
        assert!(!html.contains("nav-toggle"));
    }
}
