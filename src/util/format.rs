/// Formats a millisecond offset as `M:SS` for the player bar.
pub fn format_time(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
