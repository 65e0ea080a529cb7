use crate::models::RosterRow;
use crate::utils::colors::color_for_status;
use crate::utils::table::{Column, Table};

/// Render the roster view (`Student ID | Name | Attendance Status`).
pub fn render_roster(rows: &[RosterRow], colors: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Student ID"),
        Column::new("Name"),
        Column::new("Attendance Status"),
    ]);

    for row in rows {
        let colour = colors.then(|| color_for_status(row.status));
        table.add_row(vec![
            (row.id.clone(), None),
            (row.name.clone(), None),
            (row.status.to_string(), colour),
        ]);
    }

    table.render()
}
