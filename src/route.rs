use crate::config::TITLE_SUFFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AboutUs,
    Events,
    /// Any path outside the three known ones.
    NotFound,
}

impl Route {
    /// Routes that get a link in the header, in display order.
    pub const NAV: [Route; 3] = [Route::Home, Route::AboutUs, Route::Events];

    /// Exact match only: "/events/" and "/events?x" are not "/events".
    pub fn recognize(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/aboutus" => Route::AboutUs,
            "/events" => Route::Events,
            _ => Route::NotFound,
        }
    }

    /// Link target. NotFound has no path of its own and points home.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "/",
            Route::AboutUs => "/aboutus",
            Route::Events => "/events",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AboutUs => "About Us",
            Route::Events => "Events",
            Route::NotFound => "Page Not Found",
        }
    }

    /// Document title, e.g. "About Us | SCSA".
    pub fn title(self) -> String {
        format!("{}{}", self.label(), TITLE_SUFFIX)
    }

    pub fn is_active(self, current: Route) -> bool {
        self != Route::NotFound && self == current
    }
}
