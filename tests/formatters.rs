#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use tasked::libs::formatter::{format_timestamp, is_valid_pattern, FormattedTask, DEFAULT_DATE_FORMAT};
    use tasked::libs::task::{Task, TaskStatus};

    #[test]
    fn test_format_timestamp_default() {
        let timestamp = Local.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).single().unwrap();
        assert_eq!(format_timestamp(&timestamp, DEFAULT_DATE_FORMAT), "05-03-2025 02:30 PM");
    }

    #[test]
    fn test_format_timestamp_morning() {
        let timestamp = Local.with_ymd_and_hms(2024, 11, 20, 9, 5, 0).single().unwrap();
        assert_eq!(format_timestamp(&timestamp, DEFAULT_DATE_FORMAT), "20-11-2024 09:05 AM");
    }

    #[test]
    fn test_format_timestamp_custom_pattern() {
        let timestamp = Local.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).single().unwrap();
        assert_eq!(format_timestamp(&timestamp, "%Y-%m-%d %H:%M"), "2025-03-05 14:30");
    }

    #[test]
    fn test_invalid_pattern_falls_back() {
        let timestamp = Local.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).single().unwrap();
        assert!(!is_valid_pattern("%Y-%"));
        assert_eq!(format_timestamp(&timestamp, "%Y-%"), "05-03-2025 02:30 PM");
    }

    #[test]
    fn test_formatted_task_fields() {
        let task = Task::new(12, "Ship release").with_status(TaskStatus::InProgress);
        let formatted = FormattedTask::new(&task, "%Y");

        assert_eq!(formatted.id, "12");
        assert_eq!(formatted.desc, "Ship release");
        assert_eq!(formatted.status, "In Progress");
        assert_eq!(formatted.created_at, task.created_at.format("%Y").to_string());
    }
}
