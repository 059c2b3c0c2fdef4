use crate::content::Icon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Stroke icon on a 24-unit grid, drawn in the current text colour.
#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes(props.icon)}
        </svg>
    }
}

fn shapes(icon: Icon) -> Html {
    match icon {
        Icon::Code => html! {
            <>
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </>
        },
        Icon::Terminal => html! {
            <>
                <polyline points="4 17 10 11 4 5" />
                <line x1="12" x2="20" y1="19" y2="19" />
            </>
        },
        Icon::Sparkles => html! {
            <>
                <path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" />
                <path d="M5 3v4" />
                <path d="M19 17v4" />
                <path d="M3 5h4" />
                <path d="M17 19h4" />
            </>
        },
        Icon::Github => html! {
            <>
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </>
        },
        Icon::Linkedin => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        Icon::Medium => html! {
            <>
                <circle cx="7" cy="12" r="5" />
                <ellipse cx="16.5" cy="12" rx="2.5" ry="5" />
                <line x1="21.5" x2="21.5" y1="7.5" y2="16.5" />
            </>
        },
        Icon::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        Icon::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        Icon::Briefcase => html! {
            <>
                <rect width="20" height="14" x="2" y="7" rx="2" ry="2" />
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            </>
        },
        Icon::Clock => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        Icon::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        Icon::ExternalLink => html! {
            <>
                <path d="M15 3h6v6" />
                <path d="M10 14 21 3" />
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            </>
        },
        Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    }
}
