use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub trait Time {
    fn set_time(&mut self, hours: u32, mins: u32, secs: u32);

    fn set_hours(&mut self, hours: u32) {
        self.set_time(hours, 0, 0);
    }

    fn set_time_from(&mut self, time: &ClockTime) {
        self.set_hours(time.hours);
    }
}

pub trait EndOfTheWorld {
    fn set_time_from(&mut self, _time: &ClockTime) {}
}

/// Implements both traits and picks `EndOfTheWorld`'s `set_time_from`.
#[derive(Debug, Default)]
pub struct NorwegianTime {
    pub current: ClockTime,
}

impl Time for NorwegianTime {
    fn set_time(&mut self, hours: u32, mins: u32, secs: u32) {
        self.current = ClockTime {
            hours,
            minutes: mins,
            seconds: secs,
        };
    }

    fn set_time_from(&mut self, time: &ClockTime) {
        <Self as EndOfTheWorld>::set_time_from(self, time);
    }
}

impl EndOfTheWorld for NorwegianTime {}

#[derive(Debug, Default)]
pub struct UtcTime {
    pub current: ClockTime,
}

impl Time for UtcTime {
    fn set_time(&mut self, hours: u32, mins: u32, secs: u32) {
        self.current = ClockTime {
            hours,
            minutes: mins,
            seconds: secs,
        };
    }
}

fn format_clock(time: &ClockTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hours, time.minutes, time.seconds)
}

pub struct InterfacesLesson;

impl Lesson for InterfacesLesson {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn summary(&self) -> &'static str {
        "Default methods and conflicting defaults"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let target = ClockTime {
            hours: 13,
            minutes: 37,
            seconds: 0,
        };

        let mut utc = UtcTime::default();
        Time::set_time_from(&mut utc, &target);
        writeln!(out, "UTC: {}", format_clock(&utc.current))?;

        let mut norwegian = NorwegianTime::default();
        Time::set_time_from(&mut norwegian, &target);
        writeln!(out, "Norwegian: {}", format_clock(&norwegian.current))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_keeps_only_hours() {
        let mut utc = UtcTime::default();
        let target = ClockTime {
            hours: 9,
            minutes: 30,
            seconds: 15,
        };
        Time::set_time_from(&mut utc, &target);
        assert_eq!(
            utc.current,
            ClockTime {
                hours: 9,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_conflict_resolved_to_end_of_the_world() {
        let mut norwegian = NorwegianTime::default();
        norwegian.set_time(1, 2, 3);
        Time::set_time_from(&mut norwegian, &ClockTime::default());
        assert_eq!(
            norwegian.current,
            ClockTime {
                hours: 1,
                minutes: 2,
                seconds: 3
            }
        );
    }
}
