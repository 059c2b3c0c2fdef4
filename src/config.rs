use crate::theme::Theme;
use log::LevelFilter;
use serde::Serialize;

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_INITIAL_VISIBLE_PROJECTS: usize = 4;
pub const DEFAULT_STARFIELD_SEED: u64 = 0x4b4b_5354_4152_5331;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const MOBILE_BREAKPOINT_PX_BOUNDS: (f64, f64) = (320.0, 2_560.0);
const INITIAL_VISIBLE_PROJECTS_BOUNDS: (usize, usize) = (1, 64);

pub const THEME_ATTR: &str = "data-theme";
pub const SCROLL_THRESHOLD_ATTR: &str = "data-scroll-threshold";
pub const MOBILE_BREAKPOINT_ATTR: &str = "data-mobile-breakpoint";
pub const VISIBLE_PROJECTS_ATTR: &str = "data-visible-projects";
pub const STARFIELD_SEED_ATTR: &str = "data-starfield-seed";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Startup configuration, read once from the mount element before first paint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: Theme,
    pub scroll_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub initial_visible_projects: usize,
    pub starfield_seed: u64,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            initial_visible_projects: DEFAULT_INITIAL_VISIBLE_PROJECTS,
            starfield_seed: DEFAULT_STARFIELD_SEED,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = parse_non_empty(&lookup, THEME_ATTR)
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or_default();
        let scroll_threshold_px = parse_f64_with_bounds(
            &lookup,
            SCROLL_THRESHOLD_ATTR,
            DEFAULT_SCROLL_THRESHOLD_PX,
            SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let mobile_breakpoint_px = parse_f64_with_bounds(
            &lookup,
            MOBILE_BREAKPOINT_ATTR,
            DEFAULT_MOBILE_BREAKPOINT_PX,
            MOBILE_BREAKPOINT_PX_BOUNDS,
        );
        let initial_visible_projects = parse_usize_with_bounds(
            &lookup,
            VISIBLE_PROJECTS_ATTR,
            DEFAULT_INITIAL_VISIBLE_PROJECTS,
            INITIAL_VISIBLE_PROJECTS_BOUNDS,
        );
        let starfield_seed = parse_non_empty(&lookup, STARFIELD_SEED_ATTR)
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_STARFIELD_SEED);
        let log_level = parse_non_empty(&lookup, LOG_LEVEL_ATTR)
            .and_then(|value| value.parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            theme,
            scroll_threshold_px,
            mobile_breakpoint_px,
            initial_visible_projects,
            starfield_seed,
            log_level,
        }
    }
}

fn parse_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds<F>(lookup: &F, name: &str, default: usize, bounds: (usize, usize)) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
