use maud::{html, Markup, DOCTYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Denials,
    Appeals,
    Analytics,
    Calendar,
    Team,
    Search,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 8] = [
        NavItem::Dashboard,
        NavItem::Denials,
        NavItem::Appeals,
        NavItem::Analytics,
        NavItem::Calendar,
        NavItem::Team,
        NavItem::Search,
        NavItem::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Denials => "Denials",
            NavItem::Appeals => "Appeals",
            NavItem::Analytics => "Analytics",
            NavItem::Calendar => "Calendar",
            NavItem::Team => "Team",
            NavItem::Search => "Search",
            NavItem::Settings => "Settings",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Denials => "/denials",
            NavItem::Appeals => "/appeals",
            NavItem::Analytics => "/analytics",
            NavItem::Calendar => "/calendar",
            NavItem::Team => "/team",
            NavItem::Search => "/search",
            NavItem::Settings => "/settings",
        }
    }
}

/// Per-request page frame: which nav entry is lit, who is signed in, and
/// whether the data on screen came from the local sample store.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub active: NavItem,
    pub email: &'a str,
    pub sample_data: bool,
}

pub fn desktop_layout(title: &str, chrome: Chrome<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Denial Desk" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                div class="shell" {
                    aside class="sidebar" {
                        div class="brand" {
                            strong { "Denial Desk" }
                            small { "Claims & appeals" }
                        }
                        nav {
                            ul {
                                @for item in NavItem::ALL {
                                    li {
                                        a href=(item.href())
                                          class=[(item == chrome.active).then_some("active")]
                                        { (item.title()) }
                                    }
                                }
                            }
                        }
                    }
                    div class="main" {
                        header class="topbar" {
                            h2 { "Healthcare Denial Management System" }
                            div class="who" {
                                span { "Welcome, " (chrome.email) }
                                form method="post" action="/logout" {
                                    button type="submit" class="btn outline small" { "Sign Out" }
                                }
                            }
                        }
                        main class="content" {
                            @if chrome.sample_data {
                                p class="notice" {
                                    "The records service is unavailable. Showing locally stored data."
                                }
                            }
                            (content)
                        }
                    }
                }
            }
        }
    }
}

/// Frame for pages shown before sign-in.
pub fn bare_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Denial Desk" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="centered" { (content) }
        }
    }
}
