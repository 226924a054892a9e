use std::collections::HashMap;

use crate::shared::Time;
use crate::ztm::{
    Config, FormatError, NegativeDurations,
    data::Timetable,
    models::{RawEdge, Stop},
};

/// Leading marker of one timetable line.
enum Marker<'a> {
    /// `*TAG`, opens a section.
    Start(&'a str),
    /// `#TAG`, closes it.
    End(&'a str),
    Body,
    Blank,
}

fn classify(line: &str) -> Marker<'_> {
    if line.is_empty() {
        Marker::Blank
    } else if let Some(rest) = line.strip_prefix('*') {
        Marker::Start(first_token(rest))
    } else if let Some(rest) = line.strip_prefix('#') {
        Marker::End(first_token(rest))
    } else {
        Marker::Body
    }
}

fn first_token(rest: &str) -> &str {
    rest.split_whitespace().next().unwrap_or("")
}

/// The section kinds the reader cares about. Tags outside this closed set
/// classify as `Other` and their contents are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Groups,
    Stops,
    Trip,
    Other,
}

/// True when the line opens with exactly `n` ASCII digits followed by
/// whitespace, the way group (4) and stop (6) records announce themselves.
fn leading_digits(line: &str, n: usize) -> bool {
    let bytes = line.as_bytes();
    bytes.len() > n
        && bytes[..n].iter().all(u8::is_ascii_digit)
        && bytes[n].is_ascii_whitespace()
}

/// ZTM columns are separated by runs of two or more spaces; single spaces
/// belong to the field.
fn split_columns(line: &str) -> Vec<&str> {
    line.split("  ")
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Pulls the numeric part out of a `Y= 52.219288` style field. The export
/// is known to write the decimal separator as either `.` or `,`.
fn parse_coordinate(field: &str) -> Option<f64> {
    let value = field.rsplit('=').next().unwrap_or(field).trim();
    value.replace(',', ".").parse().ok()
}

/// The stop a trip visited last, pending the next visit to close an edge.
struct TripLeg {
    route: String,
    stop: String,
    time: Time,
}

pub(crate) struct Reader<'a> {
    config: &'a Config,
    groups: HashMap<String, String>,
    stack: Vec<Section>,
    leg: Option<TripLeg>,
    timetable: Timetable,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self {
            config,
            groups: HashMap::new(),
            stack: Vec::new(),
            leg: None,
            timetable: Timetable::default(),
        }
    }

    /// Two passes over the text: the first collects group names so stop
    /// records can resolve them regardless of ordering, the second extracts
    /// stops and trip edges.
    pub(crate) fn parse(mut self, text: &str) -> Result<Timetable, FormatError> {
        self.collect_groups(text)?;
        for (no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let no = no + 1;
            match classify(line) {
                Marker::Start(tag) => {
                    let section = self.section(tag);
                    if section == Section::Trip {
                        self.leg = None;
                    }
                    self.stack.push(section);
                }
                Marker::End(_) => {
                    if self.stack.pop() == Some(Section::Trip) {
                        self.leg = None;
                    }
                }
                Marker::Body => match self.stack.last() {
                    Some(Section::Stops) if leading_digits(line, 6) => {
                        self.read_stop(line, no)?;
                    }
                    Some(Section::Trip) => self.read_visit(line, no)?,
                    // Group names were handled in the first pass; anything
                    // else is an unrecognized record kind and skipped.
                    _ => {}
                },
                Marker::Blank => {}
            }
        }
        Ok(self.timetable)
    }

    fn section(&self, tag: &str) -> Section {
        if tag == self.config.group_section_tag {
            Section::Groups
        } else if tag == self.config.stop_section_tag {
            Section::Stops
        } else if tag == self.config.trip_section_tag {
            Section::Trip
        } else {
            Section::Other
        }
    }

    fn collect_groups(&mut self, text: &str) -> Result<(), FormatError> {
        let mut depth = 0usize;
        for (no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            match classify(line) {
                Marker::Start(tag) if self.section(tag) == Section::Groups => depth += 1,
                Marker::End(tag) if self.section(tag) == Section::Groups => {
                    depth = depth.saturating_sub(1);
                }
                Marker::Body if depth > 0 && leading_digits(line, 4) => {
                    let fields = split_columns(line);
                    if fields.len() < 2 {
                        return Err(FormatError::MissingFields {
                            kind: "stop group",
                            line: no + 1,
                            want: 2,
                            got: fields.len(),
                        });
                    }
                    self.groups
                        .insert(fields[0].to_string(), fields[1].trim_matches(',').to_string());
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn read_stop(&mut self, line: &str, no: usize) -> Result<(), FormatError> {
        let fields = split_columns(line);
        if fields.len() < 6 {
            return Err(FormatError::MissingFields {
                kind: "stop",
                line: no,
                want: 6,
                got: fields.len(),
            });
        }
        let id = fields[0];
        let street = fields[2].trim_matches(',');
        let lat = parse_coordinate(fields[4]).ok_or_else(|| FormatError::Coordinate {
            line: no,
            value: fields[4].to_string(),
        })?;
        let long = parse_coordinate(fields[5]).ok_or_else(|| FormatError::Coordinate {
            line: no,
            value: fields[5].to_string(),
        })?;

        // The first 4 characters of a stop code name its group.
        let group = &id[..4];
        let group_name =
            self.groups
                .get(group)
                .cloned()
                .ok_or_else(|| FormatError::UnknownGroup {
                    line: no,
                    stop: id.to_string(),
                    group: group.to_string(),
                })?;

        self.timetable.stops.insert(
            id.to_string(),
            Stop {
                id: id.to_string(),
                group_name,
                street: street.to_string(),
                lat,
                long,
            },
        );
        Ok(())
    }

    fn read_visit(&mut self, line: &str, no: usize) -> Result<(), FormatError> {
        let mut fields = line.split_whitespace();
        let (Some(route), Some(stop), Some(route_type), Some(time)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(FormatError::MissingFields {
                kind: "trip visit",
                line: no,
                want: 4,
                got: line.split_whitespace().count(),
            });
        };
        let time = Time::from_hm(time).ok_or_else(|| FormatError::Time {
            line: no,
            value: time.to_string(),
        })?;

        // The first visit of a trip only opens the chain; every later visit
        // on the same route closes an edge from the previous stop.
        match self.leg.take() {
            Some(leg) if leg.route == route => self.push_edge(leg, stop, time, route_type, no)?,
            _ => {}
        }
        self.leg = Some(TripLeg {
            route: route.to_string(),
            stop: stop.to_string(),
            time,
        });
        Ok(())
    }

    fn push_edge(
        &mut self,
        leg: TripLeg,
        to: &str,
        end: Time,
        route_type: &str,
        no: usize,
    ) -> Result<(), FormatError> {
        let time_between = match end.since(leg.time) {
            Some(duration) => duration.as_minutes() as i32,
            None => match self.config.negative_durations {
                NegativeDurations::Tolerate => {
                    end.as_minutes() as i32 - leg.time.as_minutes() as i32
                }
                NegativeDurations::Reject => {
                    return Err(FormatError::NegativeDuration {
                        line: no,
                        route: leg.route,
                        from: leg.stop,
                        to: to.to_string(),
                    });
                }
            },
        };
        self.timetable.edges.push(RawEdge {
            route: leg.route,
            from: leg.stop,
            to: to.to_string(),
            start_time: leg.time.as_minutes(),
            end_time: end.as_minutes(),
            time_between,
            route_type: route_type.to_string(),
        });
        Ok(())
    }
}

#[test]
fn split_columns_merges_wide_gaps() {
    let fields = split_columns("100101   1      al.Zieleniecka,        Y= 52.247256   X= 21.044929");
    assert_eq!(
        fields,
        vec!["100101", "1", "al.Zieleniecka,", "Y= 52.247256", "X= 21.044929"]
    );
}

#[test]
fn split_columns_keeps_single_spaces() {
    let fields = split_columns("1001  Kijowska,  ul. Targowa");
    assert_eq!(fields, vec!["1001", "Kijowska,", "ul. Targowa"]);
}

#[test]
fn coordinate_accepts_comma_separator() {
    assert_eq!(parse_coordinate("Y= 52,219288"), Some(52.219288));
}

#[test]
fn coordinate_rejects_placeholder() {
    assert_eq!(parse_coordinate("Y= yy.yyyyyy"), None);
}

#[test]
fn leading_digits_requires_exact_run() {
    assert!(leading_digits("1001 Kijowska", 4));
    assert!(!leading_digits("100101 x", 4));
    assert!(!leading_digits("1001", 4));
}
