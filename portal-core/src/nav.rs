#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Calendar,
    Volunteer,
    Actions,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Calendar, Tab::Volunteer, Tab::Actions];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Calendar => "calendar",
            Tab::Volunteer => "volunteer",
            Tab::Actions => "actions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Calendar => "Calendar",
            Tab::Volunteer => "Volunteering",
            Tab::Actions => "Report Absence",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Tab,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn switch_to(&mut self, tab: Tab) {
        self.active = tab;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn tab_class(&self, tab: Tab) -> &'static str {
        if self.active == tab {
            "tab-btn tab-active"
        } else {
            "tab-btn"
        }
    }

    pub fn content_class(&self, tab: Tab) -> &'static str {
        if self.active == tab {
            "tab-content tab-content-active"
        } else {
            "tab-content"
        }
    }
}
