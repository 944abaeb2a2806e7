use chrono::{Datelike, Local};
use show_scraper::{normalize_date, DateNormalizer};

fn this_year() -> i32 {
    Local::now().year()
}

#[test]
fn test_absent_input_is_no_match() {
    assert!(normalize_date(None).is_none());
}

#[test]
fn test_empty_input_is_no_match() {
    assert!(normalize_date(Some("")).is_none());
}

#[test]
fn test_long_form_gets_current_year() {
    let date = normalize_date(Some("6 de agosto")).unwrap();
    assert_eq!(date.to_string(), format!("06-08-{:04}", this_year()));
}

#[test]
fn test_leading_weekday_is_ignored() {
    let date = normalize_date(Some("Miércoles 06 de agosto")).unwrap();
    assert_eq!(date.to_string(), format!("06-08-{:04}", this_year()));
}

#[test]
fn test_short_form_keeps_captured_year() {
    assert_eq!(normalize_date(Some("19 sep. 2025")).unwrap().to_string(), "19-09-2025");
    assert_eq!(normalize_date(Some("19 set 2025")).unwrap().to_string(), "19-09-2025");
}

#[test]
fn test_unrecognized_fragments() {
    assert!(normalize_date(Some("31 xyz 2025")).is_none());
    assert!(normalize_date(Some("abc")).is_none());
}

#[test]
fn test_case_insensitive() {
    assert_eq!(normalize_date(Some("6 DE AGOSTO")), normalize_date(Some("6 de agosto")));
}

#[test]
fn test_deterministic_for_same_year() {
    let normalizer = DateNormalizer::with_year(2027);
    for raw in ["6 de agosto", "19 sep. 2025", "Sábado 1 de marzo", "nada"] {
        assert_eq!(normalizer.normalize(Some(raw)), normalizer.normalize(Some(raw)));
    }
}

#[test]
fn test_normalizer_shared_across_threads() {
    let normalizer = DateNormalizer::with_year(2027);
    let handles: Vec<_> = (1..=8)
        .map(|day| {
            std::thread::spawn(move || {
                normalizer
                    .normalize(Some(format!("{day} de octubre").as_str()))
                    .map(|d| d.to_string())
            })
        })
        .collect();

    for (day, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), Some(format!("{day:02}-10-2027")));
    }
}
