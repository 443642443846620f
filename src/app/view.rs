//! Presentation seam between controllers and a concrete front end

use std::fmt::Write as _;

/// Capabilities a front end provides to the controllers
///
/// Controllers build all user-facing text themselves and hand it to the view;
/// a view only decides how to show it and how to read answers back.
pub trait View {
    /// Show a block of text (menus, tables, details)
    fn display(&mut self, text: &str);

    /// Show an error message
    fn display_error(&mut self, message: &str);

    /// Show a success message
    fn display_success(&mut self, message: &str);

    /// Ask for one line of input. `None` means input is exhausted.
    fn get_input(&mut self, prompt: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm_action(&mut self, message: &str) -> bool;
}

/// Render a titled menu of `(code, description)` pairs
#[must_use]
pub fn format_menu(title: &str, options: &[(&str, &str)]) -> String {
    let mut out = format!("\n{title}\n");
    for (code, description) in options {
        let _ = writeln!(out, "({code}) {description}");
    }
    out
}

/// Render left-aligned columns with a dashed rule under the header
///
/// Cells longer than their column are cut to fit.
#[must_use]
pub fn format_table<R: AsRef<[String]>>(headers: &[&str], rows: &[R], widths: &[usize]) -> String {
    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(ToString::to_string).collect();
    push_row(&mut out, &header, widths);
    out.push_str(&"-".repeat(widths.iter().sum()));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row.as_ref(), widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let cut: String = cell.chars().take(width).collect();
            format!("{cut:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_menu() {
        let menu = format_menu("Student System", &[("l", "login"), ("x", "exit")]);
        assert_eq!(menu, "\nStudent System\n(l) login\n(x) exit\n");
    }

    #[test]
    fn test_format_table_pads_and_truncates() {
        let rows = vec![vec!["123456".to_string(), "Bartholomew".to_string()]];
        let table = format_table(&["ID", "Name"], &rows, &[8, 5]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID       Name");
        assert_eq!(lines[1], "-------------");
        assert_eq!(lines[2], "123456   Barth");
    }
}
