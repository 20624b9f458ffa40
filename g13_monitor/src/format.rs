//! Snapshot layout for the LCD: time, CPU bar, RAM sizes, system label.

use crate::config::{LCD_COLUMNS, LCD_ROWS};
use crate::types::Sample;

pub const BAR_CELLS: usize = 10;
const BAR_FILL: char = 'X';
const BAR_EMPTY: char = '-';
const GIB: f64 = (1u64 << 30) as f64;

/// `[XXXX------]` style bar; filled cells are `floor(10 * pct / 100)`.
pub fn cpu_bar(percent: f32) -> String {
    let filled = filled_cells(percent);
    let mut bar = String::with_capacity(BAR_CELLS + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(BAR_FILL).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(BAR_CELLS - filled));
    bar.push(']');
    bar
}

fn filled_cells(percent: f32) -> usize {
    let pct = clamp_percent(percent) as f64;
    ((BAR_CELLS as f64 * pct / 100.0).floor() as usize).min(BAR_CELLS)
}

fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Bytes rendered as GiB with one decimal, e.g. `1.5GB`.
pub fn format_bytes(bytes: u64) -> String {
    let gb = bytes as f64 / GIB;
    format!("{gb:.1}GB")
}

/// Render a sample into the four-line payload (no trailing newline).
pub fn format_snapshot(sample: &Sample, system_label: &str) -> String {
    let pct = clamp_percent(sample.cpu_percent);
    let time = sample.timestamp.format("%H:%M:%S");
    let cpu = pct.trunc() as u32;
    let bar = cpu_bar(pct);
    let used = format_bytes(sample.mem_used_bytes);
    let total = format_bytes(sample.mem_total_bytes);
    let mem_pct = sample.mem_percent;
    format!(
        "TIME: {time}\nCPU: {cpu:>3}% {bar}\nRAM: {used}/{total} ({mem_pct:.1}%)\nSystem: {system_label}"
    )
}

/// Indices of lines the panel cannot show in full (too wide, or past the last row).
pub fn clipped_lines(snapshot: &str) -> Vec<usize> {
    snapshot
        .lines()
        .enumerate()
        .filter(|(i, l)| *i >= LCD_ROWS || l.chars().count() > LCD_COLUMNS)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_at(cpu: f32) -> Sample {
        Sample {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            cpu_percent: cpu,
            mem_used_bytes: 8 << 30,
            mem_total_bytes: 16 << 30,
            mem_percent: 50.0,
        }
    }

    #[test]
    fn renders_reference_layout() {
        let text = format_snapshot(&sample_at(42.7), "Arch Linux");
        assert_eq!(
            text,
            "TIME: 14:30:00\nCPU:  42% [XXXX------]\nRAM: 8.0GB/16.0GB (50.0%)\nSystem: Arch Linux"
        );
    }

    #[test]
    fn bar_edges() {
        assert_eq!(cpu_bar(0.0), "[----------]");
        assert_eq!(cpu_bar(100.0), "[XXXXXXXXXX]");
        assert_eq!(cpu_bar(9.99), "[----------]");
        assert_eq!(cpu_bar(99.9), "[XXXXXXXXX-]");
    }

    #[test]
    fn bar_fill_matches_floor_for_whole_range() {
        for tenth in 0..=1000u32 {
            let pct = tenth as f32 / 10.0;
            let bar = cpu_bar(pct);
            let inner = &bar[1..bar.len() - 1];
            assert_eq!(inner.chars().count(), BAR_CELLS, "pct={pct}");
            let filled = inner.chars().filter(|c| *c == 'X').count();
            let expected = (10.0 * pct as f64 / 100.0).floor() as usize;
            assert_eq!(filled, expected, "pct={pct}");
        }
    }

    #[test]
    fn out_of_range_percent_is_clamped() {
        assert_eq!(cpu_bar(-5.0), "[----------]");
        assert_eq!(cpu_bar(140.0), "[XXXXXXXXXX]");
        let text = format_snapshot(&sample_at(250.0), "x");
        assert!(text.contains("CPU: 100% [XXXXXXXXXX]"), "{text}");
    }

    #[test]
    fn cpu_digits_truncate_toward_zero() {
        let text = format_snapshot(&sample_at(7.99), "x");
        assert!(text.contains("CPU:   7% [----------]"), "{text}");
    }

    #[test]
    fn bytes_as_gib() {
        assert_eq!(format_bytes(0), "0.0GB");
        assert_eq!(format_bytes(1 << 30), "1.0GB");
        assert_eq!(format_bytes(3 << 29), "1.5GB");
    }

    #[test]
    fn always_four_non_empty_lines() {
        for cpu in [0.0, 0.5, 33.3, 42.7, 100.0] {
            let text = format_snapshot(&sample_at(cpu), "");
            let lines: Vec<&str> = text.split('\n').collect();
            assert_eq!(lines.len(), 4);
            assert!(lines.iter().all(|l| !l.is_empty()));
            assert!(!text.ends_with('\n'));
        }
    }

    #[test]
    fn same_sample_same_text() {
        let s = sample_at(61.2);
        assert_eq!(format_snapshot(&s, "Arch Linux"), format_snapshot(&s, "Arch Linux"));
    }

    #[test]
    fn reference_layout_fits_panel() {
        let text = format_snapshot(&sample_at(42.7), "Arch Linux");
        assert!(clipped_lines(&text).is_empty());
        let wide = Sample {
            mem_used_bytes: 100 << 30,
            mem_total_bytes: 128 << 30,
            mem_percent: 78.1,
            ..sample_at(5.0)
        };
        assert_eq!(clipped_lines(&format_snapshot(&wide, "Arch Linux")), vec![2]);
    }
}
