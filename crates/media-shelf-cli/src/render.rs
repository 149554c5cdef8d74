use chrono::{DateTime, Local};
use colored::*;
use media_shelf_core::models::{FileInfo, FileRecord, PageResult, RenameKind, RenameOutcome};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

pub fn format_modified(modified: f64) -> String {
    let secs = modified.trunc() as i64;
    let nanos = (modified.fract() * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn kind_tag(record: &FileRecord) -> ColoredString {
    if record.is_video {
        "video".cyan()
    } else if record.is_subtitle {
        "sub".yellow()
    } else {
        "other".dimmed()
    }
}

pub fn print_page(result: &PageResult) {
    for record in &result.files {
        println!(
            "{:>10}  {}  {:<5}  {}",
            format_bytes(record.size),
            format_modified(record.modified),
            kind_tag(record),
            record.relative_path
        );
    }

    let p = &result.pagination;
    let s = &result.stats;
    println!();
    println!(
        "Page {} of {} ({} per page){}{}",
        format!("{}", p.current_page).green(),
        p.total_pages,
        p.per_page,
        if p.has_previous { "  [prev]" } else { "" },
        if p.has_next { "  [next]" } else { "" },
    );
    println!(
        "{} files: {} video, {} subtitle, {} total",
        format!("{}", s.total_files).green(),
        format!("{}", s.video_files).cyan(),
        format!("{}", s.subtitle_files).yellow(),
        format_bytes(s.total_size),
    );
}

pub fn print_info(info: &FileInfo) {
    let r = &info.record;
    println!("{}", r.filename.bold());
    println!("  Path:      {}", r.full_path.display());
    println!("  Relative:  {}", r.relative_path);
    println!("  Type:      {} ({})", kind_tag(r), r.extension);
    println!("  Size:      {}", format_bytes(r.size));
    println!("  Modified:  {}", format_modified(r.modified));
    if let Some(link) = &info.subtitle {
        match &link.subtitle_path {
            Some(path) => println!("  Subtitle:  {}", path.display().to_string().yellow()),
            None => println!("  Subtitle:  {}", "none".dimmed()),
        }
    }
}

pub fn print_outcome(outcome: &RenameOutcome) {
    if outcome.success {
        println!("{}", outcome.message.green());
    } else {
        println!("{}", outcome.message.red());
    }
    for renamed in &outcome.renamed_files {
        let tag = match renamed.kind {
            RenameKind::Main => "main".cyan(),
            RenameKind::Subtitle => "subtitle".yellow(),
        };
        println!(
            "  [{}] {} -> {}",
            tag,
            renamed.old.display(),
            renamed.new.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "3.5 GB");
    }

    #[test]
    fn test_format_modified_handles_out_of_range() {
        assert_eq!(format_modified(f64::MAX), "-");
        assert_ne!(format_modified(1_700_000_000.5), "-");
    }
}
