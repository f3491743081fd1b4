use super::dashboard::Report;
use super::metrics::MetricCard;
use super::table::Table;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use prettytable::{Cell, Row, Table as PrettyTable};

pub struct View {}

impl View {
    /// Builds the terminal table for `table` without printing it.
    pub fn build(table: &Table) -> PrettyTable {
        let mut pretty = PrettyTable::new();
        pretty.set_titles(Row::new(table.headers.iter().map(|header| Cell::new(header)).collect()));
        for row in &table.rows {
            pretty.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
        }
        pretty
    }

    pub fn table(table: &Table) {
        msg_print!(table.title, true);
        if table.is_empty() {
            msg_info!(Message::ViewEmpty(table.title.clone()));
            return;
        }
        View::build(table).printstd();
    }

    /// Prints the metric cards as a single row.
    pub fn cards(cards: &[MetricCard]) {
        let mut pretty = PrettyTable::new();
        pretty.set_titles(Row::new(cards.iter().map(|card| Cell::new(&card.label)).collect()));
        pretty.add_row(Row::new(cards.iter().map(|card| Cell::new(&card.value)).collect()));
        pretty.printstd();
    }

    pub fn report(report: &Report) {
        View::cards(&report.cards);
        for table in &report.tables {
            View::table(table);
        }
    }

    /// Prints one selectable value per line.
    pub fn options(field: &str, values: &[String]) {
        msg_print!(Message::FilterOptionsHeader(field.to_string()));
        for value in values {
            msg_print!(format!("  {}", value));
        }
    }
}
