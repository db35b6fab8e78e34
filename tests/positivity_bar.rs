// tests/positivity_bar.rs
//
// Public-API behaviour of resolve/render:
// - suppression flags
// - known, unknown and empty sources
// - score rounding
// - first-match table order
// - idempotence

use source_positivity_bar::{
    display_score, render, resolve, BarProps, SourceDisplayInfo, SourceTable,
};

const SOURCES: &[Option<&str>] = &[
    None,
    Some(""),
    Some("www.cnn.com"),
    Some("sub.reuters.com"),
    Some("example-news.org"),
    Some("..."),
    Some("WWW.NYTIMES.COM"),
];

const SCORES: &[Option<f64>] = &[None, Some(0.0), Some(72.6), Some(-3.5), Some(f64::NAN)];

fn info(name: &str, logo: &str) -> SourceDisplayInfo {
    SourceDisplayInfo::new(name, logo)
}

#[test]
fn any_suppression_flag_renders_nothing() {
    for &src in SOURCES {
        for &score in SCORES {
            let p = BarProps::new(src, score);
            assert!(render(&p.clone().viral(true)).is_none(), "{src:?}/{score:?}");
            assert!(render(&p.clone().first(true)).is_none(), "{src:?}/{score:?}");
            assert!(render(&p.clone().viral(true).first(true)).is_none());
        }
    }
}

#[test]
fn no_flags_always_renders() {
    for &src in SOURCES {
        for &score in SCORES {
            assert!(render(&BarProps::new(src, score)).is_some(), "{src:?}/{score:?}");
        }
    }
}

#[test]
fn known_domains_resolve_to_table_labels() {
    assert_eq!(resolve(Some("www.cnn.com")), info("CNN", "CNN"));
    assert_eq!(resolve(Some("bbc.com")), info("BBC", "BBC"));
    assert_eq!(resolve(Some("sub.reuters.com")), info("Reuters", "R"));
    assert_eq!(resolve(Some("WWW.NYTIMES.COM")), info("NY Times", "NYT"));
    assert_eq!(resolve(Some("www.redcross.org")), info("Red Cross", "RC"));
}

#[test]
fn every_builtin_key_resolves_to_its_own_entry_or_an_earlier_one() {
    let table = SourceTable::builtin();
    for (i, e) in table.entries().iter().enumerate() {
        let got = resolve(Some(e.key.as_str()));
        let pos = table
            .entries()
            .iter()
            .position(|x| x.name == got.name && x.logo == got.logo)
            .expect("resolved to a table entry");
        assert!(pos <= i, "{} resolved to later entry {}", e.key, got.name);
    }
}

#[test]
fn empty_or_absent_source_is_unknown() {
    assert_eq!(resolve(Some("")), info("Unknown", "?"));
    assert_eq!(resolve(None), info("Unknown", "?"));
}

#[test]
fn unmapped_source_uses_first_segment() {
    assert_eq!(resolve(Some("example-news.org")), info("Example", "E"));
    assert_eq!(resolve(Some("www.upworthy.com")), info("Upworthy", "U"));
}

#[test]
fn score_is_rounded_and_defaults_to_zero() {
    let bar = render(&BarProps::new(Some("cnn.com"), Some(72.6))).unwrap();
    assert_eq!(bar.score, 73.0);
    let bar = render(&BarProps::new(Some("cnn.com"), None)).unwrap();
    assert_eq!(bar.score, 0.0);
    assert_eq!(display_score(Some(9.5)), 10.0);
}

#[test]
fn first_declared_match_wins_over_later_ones() {
    // Contains "reuters" (3rd) and "bbc" (2nd) and "cnn" (1st).
    assert_eq!(resolve(Some("reuters-bbc-cnn.example")), info("CNN", "CNN"));
    // Contains "wired" (11th) and "techcrunch" (9th).
    assert_eq!(resolve(Some("wired.techcrunch.io")), info("TechCrunch", "TC"));
}

#[test]
fn repeated_calls_are_identical() {
    for &src in SOURCES {
        assert_eq!(resolve(src), resolve(src));
        let p = BarProps::new(src, Some(4.2));
        assert_eq!(render(&p), render(&p));
        assert_eq!(
            render(&p).map(|b| b.to_html()),
            render(&p).map(|b| b.to_html())
        );
    }
}
