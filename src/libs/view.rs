use super::formatter::FormattedTask;
use super::task::{Task, TaskStatus};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints `tasks` as a table with a colored status column.
    pub fn tasks(tasks: &[&Task], date_format: &str) -> Result<()> {
        Self::tasks_table(tasks, date_format).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &[&Task], date_format: &str) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "Description", "Status", "Date Created", "Date Updated"]);
        for task in tasks {
            let formatted = FormattedTask::new(task, date_format);
            table.add_row(Row::new(vec![
                Cell::new(&formatted.id),
                Cell::new(&formatted.desc),
                Cell::new(&formatted.status).style_spec(status_style(task.status)),
                Cell::new(&formatted.created_at),
                Cell::new(&formatted.updated_at),
            ]));
        }

        table
    }
}

fn status_style(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "Fy",
        TaskStatus::InProgress => "Fc",
        TaskStatus::Done => "Fg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_table_has_one_row_per_task() {
        let first = Task::new(1, "Write docs");
        let second = Task::new(2, "Ship release").with_status(TaskStatus::Done);
        let table = View::tasks_table(&[&first, &second], "%Y-%m-%d");

        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Write docs"));
        assert!(rendered.contains("Ship release"));
        assert!(rendered.contains("Date Updated"));
    }
}
