use calendarjs::{CalendarEvent, CalendarJsParser, ParserError};

fn feed_line(payload: &str) -> String {
    format!("calEvents[calEvents.length] = \"{payload}\";")
}

fn parse_all(body: &str) -> Vec<CalendarEvent> {
    calendarjs::parser::parse_calendarjs(body).collect()
}

pub mod examples {
    use crate::{feed_line, parse_all};
    use calendarjs::{CalendarEvent, EventDate};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn board_meeting_with_time() {
        let events = parse_all(r#"calEvents[calEvents.length] = "2/8/2017|Board Meeting at 6:00 PM. Agenda items.";"#);
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.date.to_string(), "2017-02-08T18:00:00-05:00");
        assert_eq!(event.date.timezone(), Some(chrono_tz::US::Eastern));
        assert_eq!(event.summary, "Board Meeting at 6:00 PM. Agenda items.");
        assert_eq!(event.location, "");
        assert_eq!(event.description, "");
    }

    #[test]
    fn annual_report_without_time() {
        let events = parse_all(&feed_line("3/1/2017|Annual Report."));
        similar_asserts::assert_eq!(
            events,
            vec![CalendarEvent {
                date: EventDate::Date(NaiveDate::from_ymd_opt(2017, 3, 1).unwrap()),
                summary: "Annual Report.".to_owned(),
                location: String::new(),
                description: String::new(),
            }]
        );
    }

    #[test]
    fn date_token_before_time_is_ignored() {
        let events = parse_all(&feed_line("4/4/2017|<p>Friday, April 7th</p><p>3:00 PM</p>"));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date.date(), NaiveDate::from_ymd_opt(2017, 4, 4).unwrap());
        assert_eq!(events[0].date.time(), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(events[0].date.timezone(), Some(chrono_tz::US::Eastern));
        assert_eq!(events[0].summary, "Friday, April 7th 3:00 PM");
    }

    #[test]
    fn only_first_time_counts() {
        let events = parse_all(&feed_line("5/2/2017|<b>Doors 6:30 PM</b> <i>Hearing 7:00 PM</i>"));
        assert_eq!(events[0].date.time(), NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn date_and_time_in_one_token_is_not_a_time() {
        let events = parse_all(&feed_line("5/2/2017|Rescheduled to May 9 at 7:00 PM"));
        assert!(events[0].date.is_date());
    }
}

pub mod feed {
    use crate::{feed_line, parse_all};
    use rstest::rstest;

    #[rstest]
    #[case("Annual Report.", "Annual Report.")]
    #[case("<b>Land Use</b> Committee", "Land Use Committee")]
    #[case("<p>Parks &amp; Recreation</p>\\n<p>Committee</p>", "Parks & Recreation Committee")]
    #[case("  spaced   <i>out</i>  ", "spaced out")]
    #[case("<a href=\\\"http://example.org\\\">Agenda<\\/a>", "Agenda")]
    #[case("", "")]
    fn summary_is_stripped_text(#[case] html: &str, #[case] expected: &str) {
        let events = parse_all(&feed_line(&format!("6/1/2017|{html}")));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, expected);
    }

    #[rstest]
    #[case("")]
    #[case("var calEvents = new Array();\nfunction showCalendar() {}\n")]
    #[case("calevents[calEvents.length] = \"2/8/2017|Wrong case\";")]
    #[case(" calEvents[calEvents.length] = \"2/8/2017|Indented\";")]
    fn no_matching_lines(#[case] body: &str) {
        assert!(parse_all(body).is_empty());
    }

    #[test]
    fn single_quoted_literal() {
        let events = parse_all("calEvents[calEvents.length] = '7/4/2017|Parade at 11 a.m.'");
        assert_eq!(events[0].date.to_string(), "2017-07-04T11:00:00-04:00");
        assert_eq!(events[0].summary, "Parade at 11 a.m.");
    }
}

pub mod resources {
    use crate::{CalendarJsParser, ParserError, parse_all};
    use itertools::Itertools;

    const FEED: &str = include_str!("./resources/calendar.js");

    #[test]
    fn events_from_feed() {
        let lines = parse_all(FEED)
            .iter()
            .map(|event| serde_json::to_string(event).unwrap())
            .collect_vec();
        similar_asserts::assert_eq!(
            lines,
            vec![
                r#"{"date":"2017-02-08T18:00:00-05:00","summary":"Board Meeting at 6:00 PM. Agenda items.","location":"","description":""}"#,
                r#"{"date":"2017-02-14T15:00:00-05:00","summary":"Land Use Committee Thursday, March 2nd 3:00 PM","location":"","description":""}"#,
                r#"{"date":"2017-03-01","summary":"Annual Report.","location":"","description":""}"#,
                r#"{"date":"2017-03-07T19:00:00-05:00","summary":"Parks & Recreation Committee – 7pm at Sunnyside","location":"","description":""}"#,
                r#"{"date":"2017-03-12T03:30:00-04:00","summary":"Daylight saving starts 2:30 AM","location":"","description":""}"#,
                r#"{"date":"2017-11-05T01:30:00-05:00","summary":"Clocks fall back, 1:30 AM","location":"","description":""}"#,
            ]
        );
    }

    #[test]
    fn errors_from_feed() {
        let errors = CalendarJsParser::from_body(FEED)
            .filter_map(Result::err)
            .map(|err: ParserError| err.to_string())
            .collect_vec();
        insta::assert_snapshot!(errors.join("\n"), @r#"
        Line 9: Invalid date "13/45/2017", expected MM/DD/YYYY.
        Line 10: Malformed record, missing "|" delimiter.
        Line 11: Cannot decode string literal: Offset 25: Invalid hex digits in \x escape.
        "#);
    }

    #[test]
    fn lenient_and_strict_agree() {
        let strict = CalendarJsParser::from_body(FEED)
            .filter_map(Result::ok)
            .collect_vec();
        assert_eq!(strict, parse_all(FEED));
    }
}

pub mod spider {
    use calendarjs::{CalendarEvent, Spider, SpiderConfig};

    #[test]
    fn configured_spider() {
        let config = SpiderConfig::from_toml(
            r#"
            name = "test-cb"
            title = "Test CB"
            start_urls = ["http://example.org/calendar.js"]
            timezone = "America/Denver"
            "#,
        )
        .unwrap();
        let spider = Spider::new(config);
        let mut items: Vec<CalendarEvent> = vec![];
        let body = "calEvents[calEvents.length] = \"1/10/2018|Meeting at 7:00 PM\";";
        assert_eq!(spider.crawl_body(body, &mut items), 1);
        assert_eq!(items[0].date.to_string(), "2018-01-10T19:00:00-07:00");
        assert_eq!(spider.start_urls(), ["http://example.org/calendar.js"]);
    }
}
