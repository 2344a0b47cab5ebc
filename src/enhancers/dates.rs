//! Date Display
//!
//! Long pt-BR dates for `.date-format[data-date]` and relative
//! "tempo atrás" labels for `.time-ago[data-date]`.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use leptos_page_events::{data_attr, query_all};
use log::debug;

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-time without offset, or a bare date at midnight
pub fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// RFC 3339 first; offset-less values are taken as browser-local time
pub fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text.trim()) {
        return Some(dt);
    }
    let naive = parse_naive(text)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

/// `19 de outubro de 2026 às 14:30`
pub fn format_long_pt_br(dt: &NaiveDateTime) -> String {
    format!(
        "{} de {} de {} às {:02}:{:02}",
        dt.day(),
        MONTHS_PT_BR[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

fn plural(count: i64, singular: &str) -> String {
    if count > 1 {
        format!("{} {}s atrás", count, singular)
    } else {
        format!("{} {} atrás", count, singular)
    }
}

/// Elapsed time label, `Agora mesmo` for anything under a minute or in the future
pub fn time_ago(published: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(published).num_seconds();
    if elapsed < 0 {
        return "Agora mesmo".to_string();
    }
    let days = elapsed / 86_400;
    let seconds = elapsed % 86_400;
    if days > 0 {
        plural(days, "dia")
    } else if seconds > 3600 {
        plural(seconds / 3600, "hora")
    } else if seconds > 60 {
        plural(seconds / 60, "minuto")
    } else {
        "Agora mesmo".to_string()
    }
}

pub fn format_dates() {
    for el in query_all(".date-format") {
        let Some(raw) = data_attr(&el, "date") else { continue };
        match parse_date(&raw) {
            Some(dt) => {
                let local = dt.with_timezone(&Local).naive_local();
                el.set_text_content(Some(&format_long_pt_br(&local)));
            }
            None => debug!("Unparseable data-date {:?}", raw),
        }
    }

    let now = Utc::now();
    for el in query_all(".time-ago") {
        if let Some(dt) = data_attr(&el, "date").as_deref().and_then(parse_date) {
            el.set_text_content(Some(&time_ago(dt, now)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    fn now(text: &str) -> DateTime<Utc> {
        at(text).with_timezone(&Utc)
    }

    #[test]
    fn test_format_long_pt_br() {
        let dt = parse_naive("2026-10-19T14:30:00").unwrap();
        assert_eq!(format_long_pt_br(&dt), "19 de outubro de 2026 às 14:30");

        let dt = parse_naive("2026-03-05 09:05").unwrap();
        assert_eq!(format_long_pt_br(&dt), "5 de março de 2026 às 09:05");
    }

    #[test]
    fn test_parse_naive_variants() {
        assert!(parse_naive("2026-10-19T14:30:00.123456").is_some());
        assert_eq!(
            parse_naive("2026-10-19").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_naive("ontem").is_none());
    }

    #[test]
    fn test_parse_date_keeps_offset() {
        let dt = parse_date("2026-10-19T14:30:00-03:00").unwrap();
        assert_eq!(format_long_pt_br(&dt.naive_local()), "19 de outubro de 2026 às 14:30");
        assert_eq!(dt.offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_time_ago_thresholds() {
        let published = at("2026-10-19T12:00:00+00:00");
        assert_eq!(time_ago(published, now("2026-10-19T12:00:30+00:00")), "Agora mesmo");
        assert_eq!(time_ago(published, now("2026-10-19T12:01:00+00:00")), "Agora mesmo");
        assert_eq!(time_ago(published, now("2026-10-19T12:01:01+00:00")), "1 minuto atrás");
        assert_eq!(time_ago(published, now("2026-10-19T12:45:00+00:00")), "45 minutos atrás");
        assert_eq!(time_ago(published, now("2026-10-19T13:00:00+00:00")), "60 minutos atrás");
        assert_eq!(time_ago(published, now("2026-10-19T13:00:01+00:00")), "1 hora atrás");
        assert_eq!(time_ago(published, now("2026-10-19T20:00:00+00:00")), "8 horas atrás");
        assert_eq!(time_ago(published, now("2026-10-20T12:00:00+00:00")), "1 dia atrás");
        assert_eq!(time_ago(published, now("2026-10-22T18:00:00+00:00")), "3 dias atrás");
    }

    #[test]
    fn test_time_ago_across_offsets_and_future() {
        let published = at("2026-10-19T09:00:00-03:00");
        assert_eq!(time_ago(published, now("2026-10-19T14:00:00+00:00")), "2 horas atrás");
        assert_eq!(time_ago(published, now("2026-10-19T11:00:00+00:00")), "Agora mesmo");
    }
}
