pub mod bootstrap;
pub mod config_source;
pub mod date_utils;
pub mod dom_renderer;
pub mod logging;
pub mod sidebar;
