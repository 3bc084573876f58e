use serde::Serialize;

/// The seven days of the artificial week, in canonical order
/// (Sunday first, as in the weekly grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn short(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Position in canonical order, `0..7`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Accepts full names and three-letter abbreviations, any case.
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == lower || d.short().to_lowercase() == lower)
    }

    /// The previous day inside this week; `None` for Sunday, whose
    /// predecessor belongs to the previous week.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Weekday::Sunday => None,
            d => Some(Weekday::ALL[d.index() - 1]),
        }
    }

    /// The next day inside this week; `None` for Saturday.
    pub fn next(&self) -> Option<Self> {
        match self {
            Weekday::Saturday => None,
            d => Some(Weekday::ALL[d.index() + 1]),
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
