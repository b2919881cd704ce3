//! Bit-field visualization pane
//!
//! Renders the subject's bit pattern as a row of colored bit cells.
//! Float subjects color the IEEE-754 fields separately (sign, exponent,
//! fraction) with a legend underneath; integer subjects get nibble
//! grouping, a bit-index ruler, and MSB/LSB markers.

use crate::inspect::float;
use crate::parse::Subject;
use crate::pattern::BitPattern;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the bit visualization pane.
pub fn render_bits_pane(frame: &mut Frame, area: Rect, subject: &Subject, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = format!(" Bits ({}) ", subject.type_name());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines = match subject {
        Subject::Float(v) => float_lines(*v),
        Subject::Int { pattern, .. } => int_lines(pattern),
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Bit cells for a float: sign | exponent | fraction, color-coded.
fn float_lines(value: f32) -> Vec<Line<'static>> {
    let d = float::decompose(value);
    let sign_style = Style::default()
        .fg(DEFAULT_THEME.sign_bit)
        .add_modifier(Modifier::BOLD);
    let exp_style = Style::default().fg(DEFAULT_THEME.exponent);
    let frac_style = Style::default().fg(DEFAULT_THEME.fraction);
    let sep = Span::styled(" ", Style::default());

    let mut cells: Vec<Span> = Vec::new();
    for i in (0..32u32).rev() {
        let bit = (d.raw_bits >> i) & 1;
        let style = if i == 31 {
            sign_style
        } else if i >= 23 {
            exp_style
        } else {
            frac_style
        };
        cells.push(Span::styled(format!("{}", bit), style));
        if i == 31 || i == 23 {
            cells.push(sep.clone());
        }
    }

    vec![
        Line::from(cells),
        Line::from(vec![
            Span::styled("S", sign_style),
            Span::raw(" "),
            Span::styled("EEEEEEEE", exp_style),
            Span::raw(" "),
            Span::styled("FFFFFFFFFFFFFFFFFFFFFFF", frac_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("sign ", sign_style),
            Span::styled(format!("{}", d.sign), Style::default().fg(DEFAULT_THEME.number)),
            Span::raw("   "),
            Span::styled("exponent ", exp_style),
            Span::styled(
                format!("{} (0x{:X})", d.exponent, d.exponent),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::raw("   "),
            Span::styled("fraction ", frac_style),
            Span::styled(
                format!("0x{:X}", d.fraction),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]),
        Line::from(vec![
            Span::styled("raw bits ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("0x{:08X}", d.raw_bits),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]),
    ]
}

/// Bit cells for an integer pattern: nibble groups with a ruler.
fn int_lines(pattern: &BitPattern) -> Vec<Line<'static>> {
    let n = pattern.width().bits();
    let set_style = Style::default()
        .fg(DEFAULT_THEME.bit_set)
        .add_modifier(Modifier::BOLD);
    let clear_style = Style::default().fg(DEFAULT_THEME.bit_clear);

    let mut cells: Vec<Span> = Vec::new();
    let mut ruler = String::new();
    for i in (0..n).rev() {
        let bit = pattern.bit(i);
        cells.push(Span::styled(
            format!("{}", bit),
            if bit == 1 { set_style } else { clear_style },
        ));
        // ruler marks the low bit of each nibble with its index
        ruler.push(if i % 4 == 0 { '\'' } else { ' ' });
        if i != 0 && i % 4 == 0 {
            cells.push(Span::raw(" "));
            ruler.push(' ');
        }
    }

    vec![
        Line::from(cells),
        Line::from(Span::styled(ruler, Style::default().fg(DEFAULT_THEME.comment))),
        Line::from(vec![
            Span::styled("MSB ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("{}", pattern.top_bit()),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::raw("   "),
            Span::styled("LSB ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("{}", pattern.low_bit()),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::raw("   "),
            Span::styled("hex ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(pattern.hex_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]),
    ]
}
