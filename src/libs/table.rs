use serde::Serialize;

/// Rendered view: what is printed on screen is exactly what gets exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    /// Export file stem, e.g. `sme_summary`.
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(title: &str, file_name: &str, headers: &[S]) -> Self {
        Self {
            title: title.to_string(),
            file_name: file_name.to_string(),
            headers: headers.iter().map(|header| header.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column named `header`.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell at `row` under `header`.
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.column(header)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}
