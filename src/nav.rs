/// Every routed page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Experience,
    TechStack,
    Contact,
}

/// Shown for any path the router doesn't know.
pub const NOT_FOUND_LABEL: &str = "404 - Page Not Found";
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Experience,
        Page::TechStack,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Experience => "/experience",
            Page::TechStack => "/techstack",
            Page::Contact => "/contact",
        }
    }

    /// Navigation label. The tech stack page is listed as "Technologies".
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Experience => "Experience",
            Page::TechStack => "Technologies",
            Page::Contact => "Contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About me",
            Page::Projects => "Featured Projects",
            Page::Experience => "Experience & Education",
            Page::TechStack => "My Tech Stack",
            Page::Contact => "Contact",
        }
    }
}
