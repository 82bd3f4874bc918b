use crate::{Table, TableCell, TableRow};

/// Extract pipe-tables in document order.
///
/// A run opens on a line whose trimmed form both starts and ends with `|`,
/// then continues through every following line that starts with `|`. Runs of
/// fewer than two lines are dropped.
pub fn extract_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        let belongs = trimmed.starts_with('|') && (!run.is_empty() || trimmed.ends_with('|'));

        if belongs {
            run.push(line);
        } else if !run.is_empty() {
            tables.extend(parse_table(&run));
            run.clear();
        }
    }

    if !run.is_empty() {
        tables.extend(parse_table(&run));
    }

    tables
}

/// Parse the lines of one table run.
///
/// Line 1 gives the headers, line 2 (the alignment row) is skipped without
/// inspection, and every remaining line becomes one data row. Empty cells are
/// dropped, so a row with a blank cell is shorter than the header row and a
/// line of blank cells gives a row with no cells.
pub fn parse_table(lines: &[&str]) -> Option<Table> {
    if lines.len() < 2 {
        return None;
    }

    let headers = split_cells(lines[0]);
    let rows = lines[2..]
        .iter()
        .map(|line| TableRow {
            cells: split_cells(line)
                .into_iter()
                .map(|content| TableCell {
                    content,
                    is_header: false,
                })
                .collect(),
        })
        .collect();

    Some(Table {
        headers,
        rows,
        raw: lines.join("\n"),
    })
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let text = "| Name | Type |\n|------|------|\n| id | string |\n| amount | number |";
        let tables = extract_tables(text);

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.headers, vec!["Name", "Type"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].cell(0), Some("amount"));
        assert!(table.rows.iter().flat_map(|r| &r.cells).all(|c| !c.is_header));
        assert_eq!(table.raw, text);
    }

    #[test]
    fn test_header_and_separator_only() {
        let tables = extract_tables("| A | B |\n|---|---|");
        assert_eq!(tables.len(), 1);
        assert!(!tables[0].headers.is_empty());
        assert!(tables[0].rows.is_empty());
    }

    #[test]
    fn test_header_only_is_not_a_table() {
        assert!(extract_tables("| A | B |\nplain text").is_empty());
        assert!(parse_table(&["| A | B |"]).is_none());
    }

    #[test]
    fn test_separator_is_discarded_unconditionally() {
        let table = parse_table(&["| A |", "| not a separator |", "| row |"]).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cell(0), Some("row"));
    }

    #[test]
    fn test_lenient_continuation_lines() {
        let text = "| A | B |\n| --- | --- |\n| one | two\n| three | four |";
        let table = &extract_tables(text)[0];
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cell(1), Some("two"));
    }

    #[test]
    fn test_lenient_line_cannot_open_a_table() {
        assert!(extract_tables("| A | B\n| --- | ---").is_empty());
    }

    #[test]
    fn test_empty_cells_are_dropped() {
        let table = &extract_tables("| A | B | C |\n|---|---|---|\n| x |  | z |")[0];
        assert_eq!(table.rows[0].cells.len(), 2);
        assert_eq!(table.rows[0].cell(1), Some("z"));
    }

    #[test]
    fn test_blank_data_line_keeps_its_row() {
        let table = parse_table(&["| A | B |", "|---|---|", "| | |", "| x | y |"]).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[0].cells.is_empty());
        assert_eq!(table.rows[0].cell(0), None);
        assert_eq!(table.rows[1].cell(1), Some("y"));
    }

    #[test]
    fn test_multiple_tables_separated_by_text() {
        let text = "| A |\n|---|\n| 1 |\n\nbetween\n| B |\n|---|\n| 2 |\n";
        let tables = extract_tables(text);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].headers, vec!["B"]);
    }

    #[test]
    fn test_indented_table_lines() {
        let tables = extract_tables("  | K | V |\n  |---|---|\n  | a | b |");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[0].cell(1), Some("b"));
    }
}
