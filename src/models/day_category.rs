use serde::Serialize;

/// Whether the night adjacent to a day is worked or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Adjacent {
    Night,
    Off,
}

impl Adjacent {
    pub fn from_worked(worked: bool) -> Self {
        if worked { Adjacent::Night } else { Adjacent::Off }
    }

    fn label(&self) -> &'static str {
        match self {
            Adjacent::Night => "Night",
            Adjacent::Off => "Off",
        }
    }
}

/// Schedule-pattern category of a weekday.
///
/// A worked day only depends on the night before it; an off day depends
/// on both neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayCategory {
    NightShift { before: Adjacent },
    OffDay { before: Adjacent, after: Adjacent },
}

impl DayCategory {
    pub const ALL: [DayCategory; 6] = [
        DayCategory::NightShift { before: Adjacent::Night },
        DayCategory::NightShift { before: Adjacent::Off },
        DayCategory::OffDay { before: Adjacent::Night, after: Adjacent::Night },
        DayCategory::OffDay { before: Adjacent::Night, after: Adjacent::Off },
        DayCategory::OffDay { before: Adjacent::Off, after: Adjacent::Night },
        DayCategory::OffDay { before: Adjacent::Off, after: Adjacent::Off },
    ];

    /// The schedule pattern title a configuration must declare for this
    /// category.
    pub fn title(&self) -> String {
        match self {
            DayCategory::NightShift { before } => {
                format!("Night shift ({}-Any)", before.label())
            }
            DayCategory::OffDay { before, after } => {
                format!("Off day ({}-{})", before.label(), after.label())
            }
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        DayCategory::ALL.into_iter().find(|c| c.title() == title)
    }

    pub fn is_work_day(&self) -> bool {
        matches!(self, DayCategory::NightShift { .. })
    }
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title())
    }
}
