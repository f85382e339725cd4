//! Table views built from records, and the terminal sink for them.
//!
//! Every render builds a fresh [`TableView`] from the full record list; nothing is diffed
//! against a previous render. The HTML sink is the askama templates, which iterate the
//! same view.

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::models::{InstanceRecord, MemoRecord};
use crate::pagination::{PageButton, PageWindow};

/// A record that can be shown as one table row with a delete action
pub trait TableRecord {
    /// Column headers, one per cell returned by [`TableRecord::cells`]
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
    /// Identifier the row's delete action is bound to
    fn key(&self) -> &str;
}

impl TableRecord for InstanceRecord {
    fn headers() -> &'static [&'static str] {
        &["Environment", "DB Type", "Region", "Cluster", "Instance", "Host", "Port"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.environment.clone(),
            self.db_type.clone(),
            self.region.clone(),
            self.cluster_name.clone(),
            self.instance_name.clone(),
            self.host.clone(),
            self.port.clone(),
        ]
    }

    fn key(&self) -> &str {
        &self.instance_name
    }
}

impl TableRecord for MemoRecord {
    fn headers() -> &'static [&'static str] {
        &["Memo", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.content.clone(), self.created_display()]
    }

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn from_records<R: TableRecord>(records: &[R]) -> Self {
        Self {
            headers: R::headers().to_vec(),
            rows: records
                .iter()
                .map(|r| TableRow { key: r.key().to_string(), cells: r.cells() })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// Terminal rendering. When the key is not one of the visible cells, pass `key_header` so it
/// gets a leading column and rows can be deleted by what is shown.
pub fn terminal_table(view: &TableView, key_header: Option<&str>) -> Table {
    let mut table = new_table();
    let mut header: Vec<&str> = Vec::with_capacity(view.headers.len() + 1);
    header.extend(key_header);
    header.extend(view.headers.iter().copied());
    table.set_header(header);
    for row in &view.rows {
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        if key_header.is_some() {
            cells.push(row.key.clone());
        }
        cells.extend(row.cells.iter().cloned());
        table.add_row(cells);
    }
    table
}

/// `« Prev  1  2 [3] 4  5  Next »` style line for the terminal.
pub fn pagination_line(window: &PageWindow) -> String {
    window
        .buttons()
        .iter()
        .map(|b| match b {
            PageButton::Prev(_) => yansi::Paint::new("« Prev").dim().to_string(),
            PageButton::Next(_) => yansi::Paint::new("Next »").dim().to_string(),
            PageButton::Page { number, current: true } => {
                yansi::Paint::new(format!("[{}]", number)).bold().to_string()
            }
            PageButton::Page { number, .. } => format!(" {} ", number),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::page_window;

    fn instance(name: &str, port: &str) -> InstanceRecord {
        InstanceRecord {
            environment: "prod".into(),
            db_type: "mysql".into(),
            region: "ap-northeast-2".into(),
            cluster_name: "c1".into(),
            instance_name: name.into(),
            host: format!("{}.internal", name),
            port: port.into(),
        }
    }

    #[test]
    fn test_one_row_per_record_with_matching_cells() {
        let records = vec![instance("db-1", "3306"), instance("db-2", "3307"), instance("db-3", "3308")];
        let view = TableView::from_records(&records);
        assert_eq!(view.len(), 3);
        assert_eq!(view.headers.len(), 7);
        for (row, rec) in view.rows.iter().zip(&records) {
            assert_eq!(row.key, rec.instance_name);
            assert_eq!(row.cells.len(), view.headers.len());
            assert_eq!(row.cells, vec![
                rec.environment.clone(), rec.db_type.clone(), rec.region.clone(),
                rec.cluster_name.clone(), rec.instance_name.clone(), rec.host.clone(), rec.port.clone(),
            ]);
        }
    }

    #[test]
    fn test_empty_records_render_no_rows() {
        let view = TableView::from_records::<MemoRecord>(&[]);
        assert!(view.is_empty());
        assert_eq!(view.headers, vec!["Memo", "Created"]);
    }

    #[test]
    fn test_memo_rows_bind_to_id() {
        let memos = vec![MemoRecord {
            id: "65f0".into(),
            content: "rotate replica password".into(),
            created_at: Some("2024-05-01T09:30:12".into()),
            updated_at: None,
        }];
        let view = TableView::from_records(&memos);
        assert_eq!(view.rows[0].key, "65f0");
        assert_eq!(view.rows[0].cells, vec!["rotate replica password", "2024-05-01 09:30"]);
    }

    #[test]
    fn test_terminal_table_contains_every_cell() {
        let view = TableView::from_records(&[instance("db-9", "3310")]);
        let mut table = terminal_table(&view, None);
        table.set_width(200);
        let rendered = table.to_string();
        assert!(rendered.contains("db-9.internal"));
        assert!(rendered.contains("3310"));
        assert!(rendered.contains("Environment"));
    }

    #[test]
    fn test_terminal_table_key_column() {
        let memos = vec![MemoRecord { id: "m-77".into(), content: "note".into(), ..Default::default() }];
        let view = TableView::from_records(&memos);
        let mut table = terminal_table(&view, Some("ID"));
        table.set_width(200);
        let rendered = table.to_string();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("m-77"));
    }

    #[test]
    fn test_pagination_line_marks_current_page() {
        yansi::whenever(yansi::Condition::NEVER);
        let line = pagination_line(&page_window(2, 3));
        assert!(line.starts_with("« Prev"));
        assert!(line.contains("[2]"));
        assert!(line.ends_with("Next »"));
    }
}
