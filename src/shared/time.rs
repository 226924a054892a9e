use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{Local, Timelike};

/// Minutes since midnight. ZTM schedules count past 24:00 for trips that
/// continue a previous day's service block, so values >= 1440 are valid and
/// are never wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0
    }
}

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight() / 60)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Minutes elapsed since `earlier`, or `None` when this time comes first.
    pub const fn since(&self, earlier: Time) -> Option<Duration> {
        if self.0 >= earlier.0 {
            Some(Duration(self.0 - earlier.0))
        } else {
            None
        }
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / 60;
        let m = self.0 % 60;
        format!("{:02}:{:02}", h, m)
    }

    /// Parses `HH:MM` or `HH.MM`. Hours may exceed 23 (next-day service);
    /// minutes past 59 or extra components are rejected.
    pub fn from_hm(time: &str) -> Option<Self> {
        const HOUR_TO_MIN: u32 = 60;
        let mut split = time.split([':', '.']);
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        if minutes >= 60 || split.next().is_some() {
            return None;
        }
        Some(Self(hours * HOUR_TO_MIN + minutes))
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "00:30";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "12:05";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_4() {
    let time = "26:15";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn since_forward() {
    let start = Time::from_hm("23:50").unwrap();
    let end = Time::from_hm("24:10").unwrap();
    assert_eq!(end.since(start), Some(Duration::from_minutes(20)));
}

#[test]
fn since_backward() {
    let start = Time::from_hm("08:00").unwrap();
    let end = Time::from_hm("07:59").unwrap();
    assert_eq!(end.since(start), None);
}

/// A span of whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * 60)
    }

    pub const fn from_days(days: u32) -> Self {
        Self(days * 60 * 24)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
