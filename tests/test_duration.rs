use kube_yaml_fuzz::meta::{Duration, ParseError};

const SECOND: i64 = 1_000_000_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;

fn parse(text: &str) -> i64 {
    match text.parse::<Duration>() {
        Ok(duration) => duration.as_nanos(),
        Err(err) => panic!("{text:?} failed to parse: {err}"),
    }
}

#[test]
fn parses_simple_durations() {
    assert_eq!(parse("0"), 0);
    assert_eq!(parse("-0"), 0);
    assert_eq!(parse("+0"), 0);
    assert_eq!(parse("5s"), 5 * SECOND);
    assert_eq!(parse("1478s"), 1478 * SECOND);
    assert_eq!(parse("-5s"), -5 * SECOND);
    assert_eq!(parse("+5s"), 5 * SECOND);
    assert_eq!(parse("15m"), 15 * MINUTE);
    assert_eq!(parse("16h"), 16 * HOUR);
}

#[test]
fn parses_fractions() {
    assert_eq!(parse("5.0s"), 5 * SECOND);
    assert_eq!(parse("5.6s"), 5 * SECOND + 600_000_000);
    assert_eq!(parse("5.s"), 5 * SECOND);
    assert_eq!(parse(".5s"), SECOND / 2);
    assert_eq!(parse("1.004s"), SECOND + 4_000_000);
    assert_eq!(parse("1.0040s"), SECOND + 4_000_000);
    assert_eq!(parse("100.00100s"), 100 * SECOND + 1_000_000);
}

#[test]
fn parses_every_unit() {
    assert_eq!(parse("10ns"), 10);
    assert_eq!(parse("11us"), 11_000);
    assert_eq!(parse("12\u{b5}s"), 12_000);
    assert_eq!(parse("12\u{3bc}s"), 12_000);
    assert_eq!(parse("13ms"), 13_000_000);
    assert_eq!(parse("14s"), 14 * SECOND);
}

#[test]
fn parses_compound_durations() {
    assert_eq!(parse("3h30m"), 3 * HOUR + 30 * MINUTE);
    assert_eq!(parse("10.5s4m"), 4 * MINUTE + 10 * SECOND + SECOND / 2);
    assert_eq!(parse("-2m3.4s"), -(2 * MINUTE + 3 * SECOND + 400_000_000));
    assert_eq!(
        parse("1h2m3s4ms5us6ns"),
        HOUR + 2 * MINUTE + 3 * SECOND + 4_000_000 + 5_000 + 6,
    );
    assert_eq!(parse("39h9m14.425s"), 39 * HOUR + 9 * MINUTE + 14 * SECOND + 425_000_000);
}

#[test]
fn parses_range_limits() {
    assert_eq!(parse("9223372036854775807ns"), i64::MAX);
    assert_eq!(parse("-9223372036854775808ns"), i64::MIN);
    assert_eq!(parse("9007199254740993ns"), (1 << 53) + 1);
}

#[test]
fn rejects_malformed_durations() {
    for text in ["", "-", "+", "s", ".", "-.", ".s", "+.s", "x5s"] {
        assert_eq!(
            text.parse::<Duration>(),
            Err(ParseError::InvalidDuration(text.to_owned())),
            "{text:?}",
        );
    }
}

#[test]
fn rejects_missing_and_unknown_units() {
    assert_eq!(
        "3".parse::<Duration>(),
        Err(ParseError::MissingUnit("3".to_owned())),
    );
    assert_eq!(
        "1.2.3s".parse::<Duration>(),
        Err(ParseError::MissingUnit("1.2.3s".to_owned())),
    );
    assert_eq!(
        "1d".parse::<Duration>(),
        Err(ParseError::UnknownUnit {
            unit: "d".to_owned(),
            input: "1d".to_owned(),
        }),
    );
}

#[test]
fn rejects_overflow() {
    for text in [
        "9223372036854775808ns",
        "-9223372036854775809ns",
        "3000000h",
        "9223372036854775807ns1ns",
    ] {
        assert_eq!(
            text.parse::<Duration>(),
            Err(ParseError::DurationOverflow(text.to_owned())),
            "{text:?}",
        );
    }
}

#[test]
fn formats_canonically() {
    let cases = [
        ("0s", 0),
        ("1ns", 1),
        ("1.1\u{b5}s", 1_100),
        ("2.2ms", 2_200_000),
        ("3.3s", 3_300_000_000),
        ("4m5s", 4 * MINUTE + 5 * SECOND),
        ("4m5.001s", 4 * MINUTE + 5 * SECOND + 1_000_000),
        ("5h6m7.001s", 5 * HOUR + 6 * MINUTE + 7 * SECOND + 1_000_000),
        ("8m0.000000001s", 8 * MINUTE + 1),
        ("1h0m0s", HOUR),
        ("2562047h47m16.854775807s", i64::MAX),
        ("-2562047h47m16.854775808s", i64::MIN),
    ];
    for (expected, nanos) in cases {
        assert_eq!(Duration::from_nanos(nanos).to_string(), expected);
    }
}

#[test]
fn canonical_text_parses_back() {
    for nanos in [1, 1_100, 2_200_000, 4 * MINUTE + 5 * SECOND, -HOUR, i64::MAX, i64::MIN] {
        let text = Duration::from_nanos(nanos).to_string();
        assert_eq!(parse(&text), nanos, "{text}");
    }
}

#[test]
fn converts_to_and_from_std() {
    let duration = Duration::from_secs(90).unwrap();
    assert_eq!(duration.to_std(), Some(std::time::Duration::from_secs(90)));
    assert_eq!(Duration::from_std(std::time::Duration::from_secs(90)), Some(duration));
    assert!(Duration::from_nanos(-1).is_negative());
    assert!(!duration.is_negative());
    assert_eq!(Duration::from_nanos(-1).to_std(), None);
    assert_eq!(Duration::from_std(std::time::Duration::MAX), None);
    assert_eq!(Duration::from_secs(i64::MAX), None);
}

#[test]
fn serializes_as_string() {
    let duration = Duration::from_nanos(90 * SECOND);
    assert_eq!(serde_json::to_string(&duration).unwrap(), "\"1m30s\"");
    assert_eq!(serde_yaml_bw::to_string(&duration).unwrap(), "1m30s\n");
}

#[test]
fn deserializes_from_string_only() {
    let duration: Duration = serde_json::from_str("\"1m30s\"").unwrap();
    assert_eq!(duration.as_nanos(), 90 * SECOND);
    assert!(serde_json::from_str::<Duration>("null").is_err());
    assert!(serde_json::from_str::<Duration>("5").is_err());
    assert!(serde_json::from_str::<Duration>("\"5\"").is_err());
}
