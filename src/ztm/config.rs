/// How the reader treats a trip segment whose arrival time comes before its
/// departure time. The export format gives no guidance here, so the policy
/// is left to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NegativeDurations {
    /// Keep the edge and store a negative `time_between`.
    #[default]
    Tolerate,
    /// Fail the whole parse with a `FormatError`.
    Reject,
}

pub struct Config {
    /// Section holding stop-group records (`*ZP` .. `#ZP`).
    pub group_section_tag: String,
    /// Section holding stop records, nested inside the group section.
    pub stop_section_tag: String,
    /// Section holding one vehicle trip's timed stop visits.
    pub trip_section_tag: String,
    /// Zip entry holding the timetable. `None` picks the first `.TXT` member.
    pub archive_file_name: Option<String>,
    pub negative_durations: NegativeDurations,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_section_tag: "ZP".into(),
            stop_section_tag: "PR".into(),
            trip_section_tag: "WK".into(),
            archive_file_name: None,
            negative_durations: Default::default(),
        }
    }
}
