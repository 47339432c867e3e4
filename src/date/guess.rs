use chrono::NaiveDate;

struct NamePattern {
    splitter: char,
    format: &'static str,
}

/// Separator/format pairs in the order they are tried: separator-major, so
/// every format runs under one tokenization before the next separator is
/// considered. A date written with one separator is often isolated by
/// another, e.g. `2016_01_30 11_49_15.mp4` matches `%Y_%m_%d` only once the
/// name has been split on spaces.
static PATTERNS: &[NamePattern] = &[
    NamePattern { splitter: '_', format: "%Y%m%d" },
    NamePattern { splitter: '_', format: "%Y_%m_%d" },
    NamePattern { splitter: '_', format: "%Y-%m-%d" },
    NamePattern { splitter: ' ', format: "%Y%m%d" },
    NamePattern { splitter: ' ', format: "%Y_%m_%d" },
    NamePattern { splitter: ' ', format: "%Y-%m-%d" },
    NamePattern { splitter: '-', format: "%Y%m%d" },
    NamePattern { splitter: '-', format: "%Y_%m_%d" },
    NamePattern { splitter: '-', format: "%Y-%m-%d" },
];

/// Try to read a date out of a base file name such as
/// `VID_20190909_090909.mp4`. First successful segment parse wins.
pub fn guess_date_from_filename(file_name: &str) -> Option<NaiveDate> {
    for pat in PATTERNS {
        for segment in file_name.split(pat.splitter) {
            if let Ok(date) = NaiveDate::parse_from_str(segment, pat.format) {
                return Some(date);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn guesses_common_camera_names() {
        assert_eq!(
            guess_date_from_filename("VID_20190909_090909.mp4"),
            Some(ymd(2019, 9, 9))
        );
        assert_eq!(
            guess_date_from_filename("20160111_154215_yunle.mp4"),
            Some(ymd(2016, 1, 11))
        );
        assert_eq!(
            guess_date_from_filename("20151214_084655_001.mp4"),
            Some(ymd(2015, 12, 14))
        );
    }

    #[test]
    fn each_separator_and_format_is_tried() {
        assert_eq!(
            guess_date_from_filename("IMG 20190509 154733.jpg"),
            Some(ymd(2019, 5, 9))
        );
        assert_eq!(
            guess_date_from_filename("2016_01_30 11_49_15.mp4"),
            Some(ymd(2016, 1, 30))
        );
        assert_eq!(
            guess_date_from_filename("2019-09-01 party.jpg"),
            Some(ymd(2019, 9, 1))
        );
    }

    #[test]
    fn names_without_dates_fail() {
        assert_eq!(guess_date_from_filename("random_photo.jpg"), None);
        assert_eq!(guess_date_from_filename("IMG_1234.jpg"), None);
        assert_eq!(guess_date_from_filename(""), None);
    }

    #[test]
    fn invalid_calendar_dates_are_rejected() {
        assert_eq!(guess_date_from_filename("VID_20191345_090909.mp4"), None);
        assert_eq!(guess_date_from_filename("VID_20190231_090909.mp4"), None);
    }
}
