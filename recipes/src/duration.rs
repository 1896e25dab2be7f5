// Copyright 2021 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A cooking time split into the hour and minute fields the editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub hours: u32,
    pub minutes: u32,
}

impl Duration {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(hours.saturating_mul(60).saturating_add(minutes))
    }

    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// Combines the raw hour and minute field text. Unparseable fields count as
    /// zero and negative totals clamp to zero.
    pub fn from_fields(hours: &str, minutes: &str) -> Self {
        Self::from_minutes(minutes_from_fields(hours, minutes))
    }

    pub fn as_minutes(&self) -> u32 {
        self.hours.saturating_mul(60).saturating_add(self.minutes)
    }
}

impl Display for Duration {
    fn fmt(&self, w: &mut Formatter) -> FmtResult {
        match (self.hours, self.minutes) {
            (0, m) => write!(w, "{}m", m),
            (h, 0) => write!(w, "{}h", h),
            (h, m) => write!(w, "{}h {}m", h, m),
        }
    }
}

/// Parses the leading integer of a form field the way a browser number field
/// would be read. Anything without leading digits is 0.
pub fn parse_count(input: &str) -> i64 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i64),
            None => break,
        }
    }
    if negative {
        -value
    } else {
        value
    }
}

pub fn minutes_from_fields(hours: &str, minutes: &str) -> u32 {
    let total = parse_count(hours)
        .saturating_mul(60)
        .saturating_add(parse_count(minutes));
    total.clamp(0, u32::MAX as i64) as u32
}

pub fn format_minutes(total: u32) -> String {
    Duration::from_minutes(total).to_string()
}
