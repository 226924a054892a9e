use syrenka::ztm::{Config, Error, FormatError, NegativeDurations, Timetable, Ztm};

const SAMPLE: &str = "\
*ZP  3
   1001  Kijowska,                                     --  WARSZAWA
   *PR  2
      100101   2   ul.Targowa,                     01   Y= 52.248455   X= 21.044827   Pu=0
      100102   2   ul.Targowa,                     02   Y= 52.249163   X= 21.045121   Pu=0
   #PR
   2003  Żerań FSO,                                    --  WARSZAWA
   *PR  1
      200301   1   ul.Modlińska,                   01   Y= 52.299871   X= 21.009232   Pu=0
   #PR
   0045  Bokserska,                                    --  WARSZAWA
   *PR  1
      004501   1   ul.Bokserska,                   01   Y= 52.175223   X= 21.008711   Pu=0
   #PR
#ZP
*LW  1
   122  some unrelated record layout
#LW
*WK  3
   122  100101  NZ  05.20
   122  100102  NZ  05.22
   122  200301  NZ  05.30
#WK
*WK  2
   122  100101  NZ  06.10
   122  100102  NZ  06.13
#WK
";

fn parse(text: &str) -> Result<Timetable, Error> {
    Ztm::new(Config::default()).from_text(text).parse()
}

#[test]
fn parses_stop_table() {
    let timetable = parse(SAMPLE).unwrap();
    assert_eq!(timetable.stops.len(), 4);

    let stop = timetable.stop("100101").unwrap();
    assert_eq!(stop.group_name, "Kijowska");
    assert_eq!(stop.street, "ul.Targowa");
    assert!((stop.lat - 52.248455).abs() < 1e-9);
    assert!((stop.long - 21.044827).abs() < 1e-9);

    let stop = timetable.stop("200301").unwrap();
    assert_eq!(stop.group_name, "Żerań FSO");
    assert_eq!(stop.street, "ul.Modlińska");
}

#[test]
fn preserves_leading_zeros() {
    let timetable = parse(SAMPLE).unwrap();
    let stop = timetable.stop("004501").unwrap();
    assert_eq!(stop.id, "004501");
    assert_eq!(stop.group_name, "Bokserska");
    assert!(timetable.stop("4501").is_none());
}

#[test]
fn chains_trip_visits_into_edges() {
    let timetable = parse(SAMPLE).unwrap();
    assert_eq!(timetable.edges.len(), 3);

    let edge = &timetable.edges[0];
    assert_eq!(edge.route, "122");
    assert_eq!(edge.from, "100101");
    assert_eq!(edge.to, "100102");
    assert_eq!(edge.start_time, 320);
    assert_eq!(edge.end_time, 322);
    assert_eq!(edge.time_between, 2);
    assert_eq!(edge.route_type, "NZ");

    let edge = &timetable.edges[1];
    assert_eq!(edge.from, "100102");
    assert_eq!(edge.to, "200301");
    assert_eq!(edge.time_between, 8);

    // second trip over the same segment keeps its own timing
    let edge = &timetable.edges[2];
    assert_eq!(edge.from, "100101");
    assert_eq!(edge.start_time, 370);
    assert_eq!(edge.end_time, 373);
}

#[test]
fn simple_edges_dedup_in_first_seen_order() {
    let timetable = parse(SAMPLE).unwrap();
    let simple = timetable.simple_edges();
    assert_eq!(simple.len(), 2);
    assert_eq!(simple[0].from, "100101");
    assert_eq!(simple[0].to, "100102");
    assert_eq!(simple[1].from, "100102");
    assert_eq!(simple[1].to, "200301");
}

#[test]
fn parse_is_idempotent() {
    let first = parse(SAMPLE).unwrap();
    let second = parse(SAMPLE).unwrap();
    assert_eq!(first.stops, second.stops);
    assert_eq!(first.edges, second.edges);
}

#[test]
fn duplicate_stop_code_overwrites() {
    let text = "\
*ZP  1
   1001  Kijowska,  --  WARSZAWA
   *PR  2
      100101   2   ul.Targowa,    01   Y= 52.248455   X= 21.044827   Pu=0
      100101   2   ul.Zamoyskiego,    01   Y= 52.250001   X= 21.046001   Pu=0
   #PR
#ZP
";
    let timetable = parse(text).unwrap();
    assert_eq!(timetable.stops.len(), 1);
    let stop = timetable.stop("100101").unwrap();
    assert_eq!(stop.street, "ul.Zamoyskiego");
    assert!((stop.lat - 52.250001).abs() < 1e-9);
}

#[test]
fn next_day_times_do_not_wrap() {
    let text = "\
*WK  2
   N42  100101  NZ  23.50
   N42  100102  NZ  24.10
#WK
";
    let timetable = parse(text).unwrap();
    assert_eq!(timetable.edges.len(), 1);
    let edge = &timetable.edges[0];
    assert_eq!(edge.start_time, 1430);
    assert_eq!(edge.end_time, 1450);
    assert_eq!(edge.time_between, 20);
}

#[test]
fn colon_time_separator_accepted() {
    let text = "\
*WK  2
   122  100101  NZ  05:20
   122  100102  NZ  05:22
#WK
";
    let timetable = parse(text).unwrap();
    assert_eq!(timetable.edges[0].start_time, 320);
}

#[test]
fn route_change_resets_the_chain() {
    let text = "\
*WK  4
   122  100101  NZ  05.20
   122  100102  NZ  05.22
   188  200301  NZ  05.25
   188  100101  NZ  05.29
#WK
";
    let timetable = parse(text).unwrap();
    assert_eq!(timetable.edges.len(), 2);
    assert_eq!(timetable.edges[0].route, "122");
    assert_eq!(timetable.edges[1].route, "188");
    assert_eq!(timetable.edges[1].from, "200301");
}

#[test]
fn comma_decimal_separator_accepted() {
    let text = "\
*ZP  1
   1001  Kijowska,  --  WARSZAWA
   *PR  1
      100101   2   ul.Targowa,    01   Y= 52,248455   X= 21,044827   Pu=0
   #PR
#ZP
";
    let timetable = parse(text).unwrap();
    let stop = timetable.stop("100101").unwrap();
    assert!((stop.lat - 52.248455).abs() < 1e-9);
    assert!((stop.long - 21.044827).abs() < 1e-9);
}

#[test]
fn malformed_coordinate_is_fatal() {
    let text = "\
*ZP  1
   1001  Kijowska,  --  WARSZAWA
   *PR  2
      100101   2   ul.Targowa,    01   Y= 52.248455   X= 21.044827   Pu=0
      100102   2   ul.Targowa,    02   Y= yy.yyyyyy   X= 21.045121   Pu=0
   #PR
#ZP
";
    let result = parse(text);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::Coordinate { line: 5, .. }))
    ));
}

#[test]
fn short_stop_record_is_fatal() {
    let text = "\
*ZP  1
   1001  Kijowska,  --  WARSZAWA
   *PR  1
      100101   2   ul.Targowa,
   #PR
#ZP
";
    let result = parse(text);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::MissingFields {
            kind: "stop",
            ..
        }))
    ));
}

#[test]
fn short_trip_record_is_fatal() {
    let text = "\
*WK  1
   122  100101  NZ
#WK
";
    let result = parse(text);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::MissingFields {
            kind: "trip visit",
            ..
        }))
    ));
}

#[test]
fn bad_trip_time_is_fatal() {
    let text = "\
*WK  2
   122  100101  NZ  0520
   122  100102  NZ  05.22
#WK
";
    let result = parse(text);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::Time { line: 2, .. }))
    ));
}

#[test]
fn unknown_stop_group_is_fatal() {
    let text = "\
*ZP  1
   1001  Kijowska,  --  WARSZAWA
   *PR  1
      999901   2   ul.Targowa,    01   Y= 52.248455   X= 21.044827   Pu=0
   #PR
#ZP
";
    let result = parse(text);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::UnknownGroup { .. }))
    ));
}

#[test]
fn negative_duration_tolerated_by_default() {
    let text = "\
*WK  2
   122  100101  NZ  05.20
   122  100102  NZ  05.10
#WK
";
    let timetable = parse(text).unwrap();
    assert_eq!(timetable.edges.len(), 1);
    assert_eq!(timetable.edges[0].time_between, -10);
}

#[test]
fn negative_duration_rejected_on_request() {
    let text = "\
*WK  2
   122  100101  NZ  05.20
   122  100102  NZ  05.10
#WK
";
    let config = Config {
        negative_durations: NegativeDurations::Reject,
        ..Default::default()
    };
    let result = Ztm::new(config).from_text(text).parse();
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::NegativeDuration { .. }))
    ));
}

#[test]
fn empty_input_yields_empty_timetable() {
    let timetable = parse("").unwrap();
    assert!(timetable.is_empty());
}

#[test]
fn header_only_input_yields_empty_timetable() {
    let timetable = parse("*ZP  0\n#ZP\n*WK  0\n#WK\n").unwrap();
    assert!(timetable.is_empty());
    assert!(timetable.simple_edges().is_empty());
}

#[test]
fn unconfigured_storage_yields_empty_timetable() {
    let timetable = Ztm::new(Config::default()).parse().unwrap();
    assert!(timetable.is_empty());
}

#[test]
fn unknown_sections_are_skipped() {
    let text = "\
*TY  2
   some future record kind
   another one
#TY
";
    let timetable = parse(text).unwrap();
    assert!(timetable.is_empty());
}
