//! Filter panel form values.
//!
//! The controls keep whatever the user enters, but nothing reads them back to
//! narrow the pins: filtering is not wired up in this browser.  The form is
//! rebuilt from defaults on every launch.

/// Distance bucket offered by the distance selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distance {
    #[default]
    UnderOneKm,
    OneToFiveKm,
    FiveToTenKm,
    Any,
}

impl Distance {
    pub const ALL: &[Distance] = &[
        Distance::UnderOneKm,
        Distance::OneToFiveKm,
        Distance::FiveToTenKm,
        Distance::Any,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Distance::UnderOneKm => "Less than 1 km",
            Distance::OneToFiveKm => "1-5 km",
            Distance::FiveToTenKm => "5-10 km",
            Distance::Any => "Any distance",
        }
    }

    fn step(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ALL[next]
    }
}

/// Environment quick-pick buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Indoor,
    Outdoor,
    Nature,
    Urban,
}

impl Environment {
    pub const ALL: &[Environment] = &[
        Environment::Indoor,
        Environment::Outdoor,
        Environment::Nature,
        Environment::Urban,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Environment::Indoor => "Indoor",
            Environment::Outdoor => "Outdoor",
            Environment::Nature => "Nature",
            Environment::Urban => "Urban",
        }
    }
}

/// One focusable control of the filter panel, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterControl {
    QuietLevel,
    Wifi,
    Coffee,
    OpenNow,
    Distance,
    Environment(Environment),
    Apply,
}

impl FilterControl {
    pub const ALL: &[FilterControl] = &[
        FilterControl::QuietLevel,
        FilterControl::Wifi,
        FilterControl::Coffee,
        FilterControl::OpenNow,
        FilterControl::Distance,
        FilterControl::Environment(Environment::Indoor),
        FilterControl::Environment(Environment::Outdoor),
        FilterControl::Environment(Environment::Nature),
        FilterControl::Environment(Environment::Urban),
        FilterControl::Apply,
    ];
}

/// What activating a control asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// A value changed in place.
    Changed,
    /// A button was pressed.  The caller reports it; no state changes.
    Pressed(FilterControl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    /// 1 (Whisper) ..= 5 (Silent).
    pub quiet_level: u8,
    pub wifi: bool,
    pub coffee: bool,
    pub open_now: bool,
    pub distance: Distance,
    /// Index into [`FilterControl::ALL`] of the focused control.
    pub focused: usize,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            quiet_level: 3,
            wifi: false,
            coffee: false,
            open_now: false,
            distance: Distance::default(),
            focused: 0,
        }
    }
}

impl FilterForm {
    pub const QUIET_MIN: u8 = 1;
    pub const QUIET_MAX: u8 = 5;

    pub fn focused_control(&self) -> FilterControl {
        FilterControl::ALL[self.focused.min(FilterControl::ALL.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FilterControl::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        let len = FilterControl::ALL.len();
        self.focused = (self.focused + len - 1) % len;
    }

    /// Left/right on the focused control.  Only the slider and the selector
    /// respond; returns whether anything changed.
    pub fn adjust(&mut self, forward: bool) -> bool {
        match self.focused_control() {
            FilterControl::QuietLevel => {
                let next = if forward {
                    self.quiet_level.saturating_add(1).min(Self::QUIET_MAX)
                } else {
                    self.quiet_level.saturating_sub(1).max(Self::QUIET_MIN)
                };
                let changed = next != self.quiet_level;
                self.quiet_level = next;
                changed
            }
            FilterControl::Distance => {
                self.distance = self.distance.step(forward);
                true
            }
            _ => false,
        }
    }

    /// Set the slider directly (mouse click on a notch).
    pub fn set_quiet_level(&mut self, level: u8) {
        self.quiet_level = level.clamp(Self::QUIET_MIN, Self::QUIET_MAX);
    }

    /// Enter/space on the focused control.
    pub fn activate(&mut self) -> FilterOutcome {
        let control = self.focused_control();
        match control {
            FilterControl::Wifi => self.wifi = !self.wifi,
            FilterControl::Coffee => self.coffee = !self.coffee,
            FilterControl::OpenNow => self.open_now = !self.open_now,
            FilterControl::QuietLevel | FilterControl::Distance => {
                self.adjust(true);
            }
            FilterControl::Environment(_) | FilterControl::Apply => {
                return FilterOutcome::Pressed(control);
            }
        }
        FilterOutcome::Changed
    }
}
