//! Sidebar navigation state.
//!
//! Links carrying a `data-page` target switch between in-page sections;
//! everything else is a normal link. On narrow viewports the sidebar slides
//! away after a section is chosen.

/// Viewports narrower than this are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Let the browser follow the link
    PassThrough,
    /// Hide every section and show `page_id`
    ShowPage {
        page_id: String,
        title: Option<String>,
        close_sidebar: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    open: bool,
    active_page: Option<String>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_page(&self) -> Option<&str> {
        self.active_page.as_deref()
    }

    /// Menu toggle button
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Menu close button
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Decide what a click on a navigation link does
    pub fn navigate(
        &mut self,
        target_page: Option<&str>,
        link_text: Option<&str>,
        viewport_width: f64,
    ) -> Navigation {
        let page_id = match target_page.map(str::trim).filter(|p| !p.is_empty()) {
            Some(page_id) => page_id.to_string(),
            None => return Navigation::PassThrough,
        };

        let close_sidebar = viewport_width < MOBILE_BREAKPOINT_PX;
        if close_sidebar {
            self.open = false;
        }
        self.active_page = Some(page_id.clone());

        Navigation::ShowPage {
            page_id,
            title: link_text.map(|t| t.trim().to_string()),
            close_sidebar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut state = SidebarState::new();
        assert!(!state.is_open());

        state.open();
        assert!(state.is_open());

        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_link_without_target_passes_through() {
        let mut state = SidebarState::new();
        assert_eq!(state.navigate(None, Some("Salir"), 1024.0), Navigation::PassThrough);
        assert_eq!(state.navigate(Some(""), Some("Salir"), 1024.0), Navigation::PassThrough);
        assert_eq!(state.active_page(), None);
    }

    #[test]
    fn test_desktop_navigation_keeps_sidebar() {
        let mut state = SidebarState::new();
        state.open();

        let nav = state.navigate(Some("calendario"), Some(" Calendario "), 1280.0);

        assert_eq!(
            nav,
            Navigation::ShowPage {
                page_id: "calendario".to_string(),
                title: Some("Calendario".to_string()),
                close_sidebar: false,
            }
        );
        assert!(state.is_open());
        assert_eq!(state.active_page(), Some("calendario"));
    }

    #[test]
    fn test_mobile_navigation_closes_sidebar() {
        let mut state = SidebarState::new();
        state.open();

        let nav = state.navigate(Some("perfil"), None, 500.0);

        assert_eq!(
            nav,
            Navigation::ShowPage {
                page_id: "perfil".to_string(),
                title: None,
                close_sidebar: true,
            }
        );
        assert!(!state.is_open());
    }
}
