use super::dom;
use super::icons::IconSvg;
use crate::content::{
    self, Icon, InfoItem, Project, ProjectAction, SocialLink, ABOUT_PARAGRAPHS, CONTACT_INFO,
    PERSONAL_INFO, PROFILE_LINKS, SKILL_CATEGORIES,
};
use crate::logging::log_event;
use crate::motion::{self, HeroTransform};
use crate::section::Section;
use chrono::Datelike;
use log::Level;
use serde_json::json;
use web_sys::MouseEvent;
use yew::prelude::*;

fn reveal_style(index: usize) -> String {
    motion::delay_style(motion::stagger_delay(index))
}

fn section_classes(section: Section, visible: bool) -> Classes {
    classes!(
        "section",
        format!("section-{}", section.id()),
        "reveal-group",
        visible.then_some("is-visible")
    )
}

fn social_buttons(links: &'static [SocialLink], class: &'static str) -> Html {
    links
        .iter()
        .map(|link| {
            html! {
                <a
                    key={link.label}
                    class={class}
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                >
                    <IconSvg icon={link.icon} />
                </a>
            }
        })
        .collect()
}

fn info_row(item: &InfoItem) -> Html {
    let text = match item.href {
        Some(href) => html! {
            <a href={href} target="_blank" rel="noopener noreferrer">{item.text}</a>
        },
        None => html! { <span>{item.text}</span> },
    };

    html! {
        <li class="info-row" key={item.text}>
            <span class="info-icon"><IconSvg icon={item.icon} size={18} /></span>
            {text}
        </li>
    }
}

fn section_header(section: Section, subtitle: &'static str) -> Html {
    html! {
        <header class="section-header reveal" style={reveal_style(0)}>
            <h2 id={format!("{}-heading", section.id())} class="section-title">
                <span class="text-gradient">{section.heading()}</span>
            </h2>
            <p class="section-subtitle">{subtitle}</p>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub node_ref: NodeRef,
    pub transform: HeroTransform,
    pub on_projects_click: Callback<()>,
    pub on_contact_click: Callback<()>,
    pub on_scroll_cue: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" ref={props.node_ref.clone()} class="hero" aria-labelledby="hero-heading">
            <div class="hero-backdrop">{props.children.clone()}</div>
            <div class="hero-content" style={props.transform.to_style()}>
                <h1 id="hero-heading" class="hero-title">
                    <span class="text-gradient">{content::OWNER_NAME}</span>
                </h1>
                <p class="hero-role">{content::OWNER_ROLE}</p>
                <p class="hero-tagline">{content::HERO_TAGLINE}</p>
                <div class="hero-actions">
                    <button
                        type="button"
                        class="btn-primary"
                        onclick={props.on_projects_click.reform(|_: MouseEvent| ())}
                    >
                        {"View Projects"}
                        <IconSvg icon={Icon::ArrowRight} size={18} />
                    </button>
                    <button
                        type="button"
                        class="btn-outline"
                        onclick={props.on_contact_click.reform(|_: MouseEvent| ())}
                    >
                        {"Contact Me"}
                    </button>
                </div>
            </div>
            <button
                type="button"
                class="scroll-cue"
                aria-label="Scroll to About"
                onclick={props.on_scroll_cue.reform(|_: MouseEvent| ())}
            >
                <IconSvg icon={Icon::ChevronDown} size={28} />
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub node_ref: NodeRef,
    pub visible: bool,
}

#[function_component(About)]
pub fn about(props: &RevealSectionProps) -> Html {
    let paragraphs = ABOUT_PARAGRAPHS
        .iter()
        .map(|paragraph| html! { <p>{*paragraph}</p> })
        .collect::<Html>();

    html! {
        <section
            id={Section::About.id()}
            ref={props.node_ref.clone()}
            class={section_classes(Section::About, props.visible)}
            aria-labelledby="about-heading"
        >
            {section_header(Section::About, content::ABOUT_SUBTITLE)}
            <div class="about-grid">
                <div class="about-copy reveal" style={reveal_style(1)}>
                    <h3>{content::ABOUT_HEADLINE}</h3>
                    {paragraphs}
                    <div class="about-actions">
                        <a class="btn-primary" href={content::RESUME_PATH} download="">
                            {"Download Resume"}
                        </a>
                        {PROFILE_LINKS.iter().map(|link| html! {
                            <a
                                key={link.label}
                                class="btn-outline"
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <IconSvg icon={link.icon} size={18} />
                                {link.label}
                            </a>
                        }).collect::<Html>()}
                    </div>
                </div>
                <aside class="card info-card reveal" style={reveal_style(2)}>
                    <div class="info-card-header">
                        <span class="nav-monogram">{content::OWNER_MONOGRAM}</span>
                        <div>
                            <p class="info-name">{content::OWNER_NAME}</p>
                            <p class="info-role">{content::OWNER_ROLE}</p>
                        </div>
                    </div>
                    <ul class="info-list">
                        {PERSONAL_INFO.iter().map(info_row).collect::<Html>()}
                    </ul>
                </aside>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &RevealSectionProps) -> Html {
    let cards = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            html! {
                <article key={category.title} class="card skill-card reveal" style={reveal_style(index + 1)}>
                    <div class="skill-card-header">
                        <span class="skill-icon"><IconSvg icon={category.icon} size={22} /></span>
                        <h3>{category.title}</h3>
                    </div>
                    <ul class="tag-list">
                        {category.skills.iter().map(|skill| html! {
                            <li key={*skill} class="tag">{*skill}</li>
                        }).collect::<Html>()}
                    </ul>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <section
            id={Section::Skills.id()}
            ref={props.node_ref.clone()}
            class={section_classes(Section::Skills, props.visible)}
            aria-labelledby="skills-heading"
        >
            {section_header(Section::Skills, content::SKILLS_SUBTITLE)}
            <div class="skills-grid">{cards}</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let action = project.action();

    let visit = |link: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Err(error) = dom::open_in_new_tab(link) {
                log_event(
                    Level::Warn,
                    "project_link_failed",
                    json!({ "link": link, "error": error.to_string() }),
                );
            }
        })
    };

    let on_card_click = match action {
        ProjectAction::Visit(link) => Some(visit(link)),
        ProjectAction::Unavailable => None,
    };

    let media = match project.image {
        Some(image) => html! {
            <img class="project-image" src={image} alt={project.title} loading="lazy" />
        },
        None => html! {
            <span class="project-glyph" aria-hidden="true">{project.icon.unwrap_or_default()}</span>
        },
    };

    let action_control = match action {
        ProjectAction::Visit(link) => html! {
            <button type="button" class="btn-visit" onclick={visit(link)}>
                {action.label()}
                <IconSvg icon={Icon::ExternalLink} size={16} />
            </button>
        },
        ProjectAction::Unavailable => html! {
            <button type="button" class="btn-visit" disabled={true} aria-disabled="true">
                {action.label()}
            </button>
        },
    };

    html! {
        <article
            class={classes!(
                "card",
                "project-card",
                "reveal",
                project.is_interactive().then_some("is-interactive")
            )}
            style={motion::delay_style(motion::project_card_delay(props.index))}
            onclick={on_card_click}
        >
            <div class={classes!("project-media", project.gradient)}>
                {media}
                if !project.is_interactive() {
                    <span class="badge-unavailable">{"Currently Unavailable"}</span>
                }
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                if let Some(period) = project.period {
                    <p class="project-period">{period}</p>
                }
                <p class="project-description">{project.description}</p>
                <ul class="tag-list">
                    {project.tech.iter().map(|tech| html! {
                        <li key={*tech} class="tag">{*tech}</li>
                    }).collect::<Html>()}
                </ul>
                {action_control}
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub node_ref: NodeRef,
    pub visible: bool,
    pub projects: &'static [Project],
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section
            id={Section::Projects.id()}
            ref={props.node_ref.clone()}
            class={section_classes(Section::Projects, props.visible)}
            aria-labelledby="projects-heading"
        >
            {section_header(Section::Projects, content::PROJECTS_SUBTITLE)}
            <div class="projects-grid">
                {props.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.id} project={*project} index={index} />
                }).collect::<Html>()}
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &RevealSectionProps) -> Html {
    html! {
        <section
            id={Section::Contact.id()}
            ref={props.node_ref.clone()}
            class={section_classes(Section::Contact, props.visible)}
            aria-labelledby="contact-heading"
        >
            {section_header(Section::Contact, content::CONTACT_SUBTITLE)}
            <div class="contact-grid">
                <div class="card contact-info reveal" style={reveal_style(1)}>
                    <h3>{"Contact Information"}</h3>
                    <ul class="info-list">
                        {CONTACT_INFO.iter().map(info_row).collect::<Html>()}
                    </ul>
                </div>
                <div class="card contact-email reveal" style={reveal_style(2)}>
                    <h3>{"Send Me an Email"}</h3>
                    <p>{content::CONTACT_BLURB}</p>
                    <a class="btn-primary" href={content::MAILTO_HREF}>
                        <IconSvg icon={Icon::Mail} size={18} />
                        {"Send Email"}
                    </a>
                    <div class="social-row">{social_buttons(PROFILE_LINKS, "social-button")}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <a class="nav-brand" href="#">
                    <span class="nav-monogram">{content::OWNER_MONOGRAM}</span>
                </a>
                <nav class="footer-links" aria-label="Footer">
                    {Section::ALL.into_iter().map(|section| html! {
                        <a key={section.id()} href={section.anchor()}>{section.label()}</a>
                    }).collect::<Html>()}
                </nav>
                <div class="social-row">{social_buttons(PROFILE_LINKS, "social-button")}</div>
            </div>
            <p class="copyright">
                {format!("© {year} {}. All rights reserved.", content::OWNER_NAME)}
            </p>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn project_without_link_renders_disabled_action() {
        let project = PROJECTS
            .iter()
            .copied()
            .find(|project| project.link.is_none())
            .expect("one project has no link");

        let html = ServerRenderer::<ProjectCard>::with_props(move || ProjectCardProps {
            project,
            index: 2,
        })
        .render()
        .await;

        assert!(html.contains("disabled"));
        assert!(html.contains("No Longer Available"));
        assert!(html.contains("Currently Unavailable"));
        assert!(!html.contains("Visit Site"));
        assert!(!html.contains("is-interactive"));
    }

    #[tokio::test]
    async fn project_with_link_renders_enabled_action() {
        let project = PROJECTS[0];

        let html = ServerRenderer::<ProjectCard>::with_props(move || ProjectCardProps {
            project,
            index: 0,
        })
        .render()
        .await;

        assert!(html.contains("Visit Site"));
        assert!(html.contains("is-interactive"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("Currently Unavailable"));
        assert!(html.contains("transition-delay: 0.00s;"));
    }
}
