use ratatui::text::{Line, Span};

use crate::app::settings::runtime_keybinds;
use crate::app::{App, FormField, Mode};
use crate::ui::colors::Colors;

/// Rows of the contact form as they appear inside the page body.
pub fn form_lines(app: &App, width: usize, colors: &Colors) -> Vec<Line<'static>> {
    let form = &app.form;
    let mut out = Vec::new();

    if form.is_succeeded() {
        out.push(Line::from(Span::styled("✉  Message Sent!", colors.success_style)));
        out.push(Line::from(Span::styled(
            "Thank you for reaching out. I'll get back to you soon.",
            colors.muted_style,
        )));
        return out;
    }

    if let Some(err) = &form.failure {
        out.push(Line::from(Span::styled(format!("✗ {}", err), colors.error_style)));
        out.push(Line::default());
    }

    let focused = match app.mode {
        Mode::Form { field } => Some(field),
        _ => None,
    };
    let box_width = width.saturating_sub(2).max(8);

    for field in FormField::ALL {
        out.push(Line::from(Span::styled(field.label(), colors.heading_style)));
        let value = form.fields.get(field);
        let is_focused = focused == Some(field);
        let style = if is_focused { colors.input_focused_style } else { colors.input_style };

        let rows: Vec<String> = if value.is_empty() {
            vec![String::new()]
        } else {
            value
                .split('\n')
                .flat_map(|l| {
                    if l.is_empty() {
                        vec![String::new()]
                    } else {
                        textwrap::wrap(l, box_width)
                            .into_iter()
                            .map(|c| c.into_owned())
                            .collect()
                    }
                })
                .collect()
        };
        let last = rows.len() - 1;
        for (i, row) in rows.into_iter().enumerate() {
            let (shown, shown_style) = if value.is_empty() && !is_focused {
                (field.placeholder().to_string(), colors.muted_style)
            } else {
                (row, style)
            };
            let used = shown.chars().count() + usize::from(is_focused && i == last);
            let mut spans = vec![
                Span::styled("▏", colors.border_style),
                Span::styled(shown, shown_style),
            ];
            if is_focused && i == last {
                spans.push(Span::styled("▌", colors.accent_style));
            }
            if used < box_width {
                spans.push(Span::styled(" ".repeat(box_width - used), style));
            }
            out.push(Line::from(spans));
        }

        if let Some(e) = form.errors.get(field) {
            out.push(Line::from(Span::styled(
                format!("  {}", e.message(field)),
                colors.error_style,
            )));
        }
        out.push(Line::default());
    }

    let button = if form.is_submitting() { " ◌ Sending... " } else { " ➤ Send Message " };
    out.push(Line::from(Span::styled(button, colors.button_style)));

    let kb = runtime_keybinds::get();
    let hint = if focused.is_some() {
        format!(
            "{}/{}: switch field · {}: send · {}: leave form",
            kb.describe("tab"),
            kb.describe("backtab"),
            kb.describe("submit"),
            kb.describe("esc"),
        )
    } else {
        format!("Press {} to write a message", kb.describe("contact"))
    };
    out.push(Line::from(Span::styled(hint, colors.muted_style)));
    out
}
