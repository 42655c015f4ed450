//! Plain-text rendering of a [`Snapshot`] for the CLI. All formatting lives
//! here; the kernel and metrics modules hand over plain data only.

use crate::metrics::group_digits;
use crate::ticker::Snapshot;

const ALIGN_WIDTH: usize = 36;
const BAR_WIDTH: usize = 20;

/// Renders the full snapshot as a multi-section text report.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str(&header_line("Your Age Right Now"));
    out.push_str(&stat_row("Years", &snapshot.age.years.to_string()));
    out.push_str(&stat_row("Months", &snapshot.age.months.to_string()));
    out.push_str(&stat_row("Days", &snapshot.age.days.to_string()));
    out.push_str(&stat_row("Hours", &snapshot.age.hours.to_string()));
    out.push_str(&stat_row("Minutes", &snapshot.age.minutes.to_string()));
    out.push_str(&stat_row("Seconds", &snapshot.age.seconds.to_string()));
    out.push('\n');

    out.push_str(&header_line("Next Birthday Countdown"));
    out.push_str(&stat_row("Days", &snapshot.countdown.days.to_string()));
    out.push_str(&stat_row("Hours", &snapshot.countdown.hours.to_string()));
    out.push_str(&stat_row("Minutes", &snapshot.countdown.minutes.to_string()));
    out.push_str(&stat_row("Seconds", &snapshot.countdown.seconds.to_string()));
    out.push('\n');

    out.push_str(&header_line("Life Milestones"));
    for milestone in &snapshot.milestones {
        let progress = format!(
            "{} / {} {}",
            group_digits(milestone.current),
            group_digits(milestone.target),
            milestone.unit.label()
        );
        out.push_str(&stat_row(milestone.name, &progress));
        out.push_str(&format!(
            "  {} {:.1}%\n",
            progress_bar(milestone.percentage()),
            milestone.percentage()
        ));
    }
    out.push('\n');

    out.push_str(&header_line("In Other Units"));
    for unit in &snapshot.alternative_units {
        out.push_str(&stat_row(unit.name, &group_digits(unit.value)));
    }
    out.push('\n');

    out.push_str(&header_line("Fun Facts"));
    for fact in &snapshot.fun_facts {
        out.push_str(&format!("  * {fact}\n"));
    }

    out
}

/// "Key: ....... value" with the value right-aligned to ALIGN_WIDTH.
fn stat_row(key: &str, value: &str) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = ALIGN_WIDTH.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("  {key_part}{dots}{value}\n")
}

fn header_line(label: &str) -> String {
    let dash_count = (ALIGN_WIDTH + 2).saturating_sub(label.len() + 1);
    format!("{label} {}\n", "-".repeat(dash_count))
}

fn progress_bar(percentage: f64) -> String {
    let filled = (percentage / 100.0 * BAR_WIDTH as f64) as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn report_contains_every_section() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let now = birth.and_hms_opt(0, 0, 0).unwrap() + chrono::TimeDelta::days(9_000);
        let snapshot = Snapshot::compute(birth, now).unwrap();
        let report = render(&snapshot);

        assert!(report.contains("Your Age Right Now"));
        assert!(report.contains("Next Birthday Countdown"));
        assert!(report.contains("Life Milestones"));
        assert!(report.contains("In Other Units"));
        assert!(report.contains("Fun Facts"));
        assert!(report.contains("9,000"));
    }

    #[test]
    fn progress_bar_saturates() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(50.0), "[##########----------]");
    }
}
