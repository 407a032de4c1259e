//! Per calendar settings chosen by the host application.

use jelal::Weekday;

use crate::{date::CalendarSystem, grid::Direction, string::Digits};

/// Which writing system labels and numbers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// Persian names and digits for Jalali, English for Gregorian.
    #[default]
    Native,
    /// English names (transliterated for Jalali months) and ASCII digits for every calendar.
    Latin,
}

/// How a single calendar is presented.
///
/// Every [`None`] falls back to what is usual for the calendar system.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarConfig {
    /// The start of the week (Saturday for Jalali and Monday for Gregorian if not set).
    pub first_weekday: Option<Weekday>,
    /// Column order (right to left for Jalali, left to right for Gregorian if not set).
    pub direction: Option<Direction>,
    pub script: Script,
    /// Log every call made on the calendar (see [`crate::calendar::Traced`]).
    pub trace: bool,
}

impl CalendarConfig {
    pub fn first_weekday(&self, system: CalendarSystem) -> Weekday {
        self.first_weekday
            .unwrap_or_else(|| system.default_first_weekday())
    }

    pub fn direction(&self, system: CalendarSystem) -> Direction {
        self.direction
            .unwrap_or_else(|| system.default_direction())
    }

    pub fn digits(&self, system: CalendarSystem) -> Digits {
        match (self.script, system) {
            (Script::Native, CalendarSystem::Jalali) => Digits::Persian,
            _ => Digits::Ascii,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_system() {
        let config = CalendarConfig::default();
        assert_eq!(config.first_weekday(CalendarSystem::Jalali), Weekday::SAT);
        assert_eq!(config.first_weekday(CalendarSystem::Gregorian), Weekday::MON);
        assert_eq!(
            config.direction(CalendarSystem::Jalali),
            Direction::RightToLeft
        );
        assert_eq!(
            config.direction(CalendarSystem::Gregorian),
            Direction::LeftToRight
        );
        assert_eq!(config.digits(CalendarSystem::Jalali), Digits::Persian);
        assert_eq!(config.digits(CalendarSystem::Gregorian), Digits::Ascii);
    }

    #[test]
    fn test_overrides() {
        let config = CalendarConfig {
            first_weekday: Some(Weekday::SUN),
            direction: Some(Direction::LeftToRight),
            script: Script::Latin,
            trace: false,
        };
        assert_eq!(config.first_weekday(CalendarSystem::Jalali), Weekday::SUN);
        assert_eq!(
            config.direction(CalendarSystem::Jalali),
            Direction::LeftToRight
        );
        assert_eq!(config.digits(CalendarSystem::Jalali), Digits::Ascii);
    }
}
