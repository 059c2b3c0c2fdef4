pub mod config;
pub mod content;
pub mod error;
pub mod frontend;
pub mod logging;
pub mod motion;
pub mod nav;
pub mod scene;
pub mod section;
pub mod theme;
