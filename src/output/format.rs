use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Width used when stdout is not a terminal, so long explanations still wrap
const FALLBACK_WIDTH: u16 = 88;

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
///
/// Styling is only emitted when `use_color` is set.
pub(super) fn create_styled_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    if table.width().is_none() {
        table.set_width(FALLBACK_WIDTH);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_table_has_no_escape_codes() {
        let mut table = create_styled_table(false);
        table.set_header(vec![header_cell("Title", false)]);
        table.add_row(vec![styled_cell("body", Some(Color::Green), true)]);
        let rendered = table.to_string();
        assert!(!rendered.contains('\u{1b}'));
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("body"));
    }

    #[test]
    fn long_text_wraps_to_width() {
        let mut table = create_styled_table(false);
        table.add_row(vec![Cell::new("word ".repeat(100))]);
        for line in table.to_string().lines() {
            assert!(line.chars().count() <= FALLBACK_WIDTH as usize, "{line}");
        }
    }
}
