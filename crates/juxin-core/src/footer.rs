//! Footer copyright line

use chrono::Datelike;

/// Calendar year at render time, in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(holder: &str, year: i32) -> String {
    format!("Copyright \u{00A9} {year} {holder}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line("聚信", 2025), "Copyright © 2025 聚信");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
