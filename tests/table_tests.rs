use opsdash::utils::table::{Column, Table};

fn columns() -> Vec<Column> {
    vec![Column::new("TYPE", 12), Column::new("GUEST", 8)]
}

#[test]
fn colored_cells_pad_like_plain_ones() {
    let mut plain = Table::new(columns());
    plain.add_row(vec!["escalation".to_string(), "Ana".to_string()]);

    let mut colored = Table::new(columns());
    colored.add_row(vec![
        "\x1b[1;31mescalation\x1b[0m".to_string(),
        "\x1b[97mAna\x1b[0m".to_string(),
    ]);

    let plain_out = plain.render();
    let colored_out = colored.render();
    let stripped = colored_out
        .replace("\x1b[1;31m", "")
        .replace("\x1b[97m", "")
        .replace("\x1b[0m", "");
    assert_eq!(stripped, plain_out);
}

#[test]
fn wide_characters_count_as_two_columns() {
    let mut table = Table::new(columns());
    table.add_row(vec!["booking".to_string(), "田中".to_string()]);

    let out = table.render();
    let row = out.lines().nth(1).unwrap();
    assert_eq!(row, format!("{:<12} 田中     ", "booking"));
}

#[test]
fn missing_cells_render_empty() {
    let mut table = Table::new(columns());
    table.add_row(vec!["call".to_string()]);

    let out = table.render();
    assert_eq!(out.lines().nth(1).unwrap(), format!("{:<12} {:<8} ", "call", ""));
}
