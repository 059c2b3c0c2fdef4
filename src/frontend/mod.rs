pub mod dom;
pub mod home;
pub mod icons;
pub mod navigation;
pub mod scene_canvas;
pub mod sections;

use crate::config::SiteConfig;
use crate::error::FrontendError;
use crate::logging::{self, log_event};
use home::Home;
use log::Level;
use serde_json::{json, Value};
use yew::prelude::*;

pub const MOUNT_POINT_ID: &str = "app";

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <div class={classes!("page-shell", "noise-bg", props.config.theme.root_class())}>
                <Home />
            </div>
        </ContextProvider<SiteConfig>>
    }
}

pub fn run() -> Result<(), FrontendError> {
    let document = dom::window()
        .ok_or(FrontendError::MissingWindow)?
        .document()
        .ok_or(FrontendError::MissingDocument)?;
    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or_else(|| FrontendError::MissingMountPoint(MOUNT_POINT_ID.to_string()))?;

    let config = SiteConfig::from_lookup(|name| root.get_attribute(name));
    logging::init(config.log_level);
    log_event(
        Level::Debug,
        "config_loaded",
        serde_json::to_value(&config).unwrap_or(Value::Null),
    );

    dom::apply_theme(config.theme)?;

    let theme = config.theme;
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
    log_event(Level::Info, "app_mounted", json!({ "theme": theme.as_str() }));

    Ok(())
}
