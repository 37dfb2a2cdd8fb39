//! Drawing for the registration screen.

use std::io::{self, Stdout};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use enrol::{Field, RadioField, RegistrationForm, SelectField, TextField};
use unicode_width::UnicodeWidthChar;

use crate::app::Banner;
use crate::screen::Screen;

const LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 32;

pub fn draw(
    screen: &mut Screen,
    form: &RegistrationForm,
    banner: Option<&Banner>,
) -> io::Result<()> {
    let (width, _) = screen.size()?;
    let value_width = (width as usize)
        .saturating_sub(LABEL_WIDTH + 4)
        .clamp(8, VALUE_WIDTH);

    let out = screen.stdout();
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Cyan),
        Print("Create your account"),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    let mut row: u16 = 2;
    for field in Field::ALL {
        row = draw_field(out, form, field, row, value_width)?;
    }

    if let Some(banner) = banner {
        queue!(out, cursor::MoveTo(2, row + 1))?;
        match banner {
            Banner::Success => queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Green),
                Print("Registration Successfully done!"),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?,
            Banner::Errors(count) => queue!(
                out,
                SetForegroundColor(Color::Red),
                Print(format!("{count} field(s) need attention")),
                ResetColor
            )?,
        }
    }

    queue!(
        out,
        cursor::MoveTo(0, row + 3),
        SetForegroundColor(Color::DarkGrey),
        Print("Tab next  Shift+Tab previous  Enter submit  Ctrl+R reset  Ctrl+U show/hide  Esc quit"),
        ResetColor
    )?;

    screen.flush()
}

/// Draws one labeled field row plus its error line, returning the next
/// free row.
fn draw_field(
    out: &mut Stdout,
    form: &RegistrationForm,
    field: Field,
    row: u16,
    value_width: usize,
) -> io::Result<u16> {
    let focused = form.focused() == field;

    queue!(out, cursor::MoveTo(0, row))?;
    if focused {
        queue!(out, SetForegroundColor(Color::Cyan), Print("> "), ResetColor)?;
    } else {
        queue!(out, Print("  "))?;
    }

    let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH);
    if focused {
        queue!(out, SetAttribute(Attribute::Bold), Print(label), SetAttribute(Attribute::Reset))?;
    } else {
        queue!(out, Print(label))?;
    }

    match field {
        Field::Gender => draw_radio(out, &form.gender, focused)?,
        Field::Country => draw_select(out, &form.country, focused)?,
        Field::Password => {
            draw_value(out, &form.password.display_text(), form.password.text(), focused, value_width)?;
            if form.password.revealed() {
                queue!(out, SetForegroundColor(Color::DarkGrey), Print(" (shown)"), ResetColor)?;
            }
        }
        Field::ConfirmPassword => {
            draw_value(
                out,
                &form.confirm_password.display_text(),
                form.confirm_password.text(),
                focused,
                value_width,
            )?;
            if form.confirm_password.revealed() {
                queue!(out, SetForegroundColor(Color::DarkGrey), Print(" (shown)"), ResetColor)?;
            }
        }
        _ => {
            if let Some(text) = form.text_state(field) {
                draw_value(out, text.value(), text, focused, value_width)?;
            }
        }
    }

    let mut next = row + 1;
    if let Some(message) = form.field_error(field) {
        queue!(
            out,
            cursor::MoveTo(2, next),
            SetForegroundColor(Color::Red),
            Print(message),
            ResetColor
        )?;
        next += 1;
    }
    Ok(next)
}

/// Draws a text value with the cursor cell reversed when focused.
/// `display` is what to show (masked for secrets), `state` supplies
/// cursor and placeholder.
fn draw_value(
    out: &mut Stdout,
    display: &str,
    state: &TextField,
    focused: bool,
    value_width: usize,
) -> io::Result<()> {
    if !focused {
        if display.is_empty() {
            if !state.placeholder().is_empty() {
                queue!(
                    out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(state.placeholder()),
                    ResetColor
                )?;
            }
            return Ok(());
        }
        let (window, _) = visible_window(display, 0, value_width);
        queue!(out, Print(window))?;
        return Ok(());
    }

    let (window, cursor_at) = visible_window(display, state.cursor(), value_width);
    let before: String = window.chars().take(cursor_at).collect();
    let at = window.chars().nth(cursor_at);
    let after: String = window.chars().skip(cursor_at + 1).collect();

    queue!(out, Print(before))?;
    queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(at.unwrap_or(' ')),
        SetAttribute(Attribute::NoReverse)
    )?;
    queue!(out, Print(after))?;

    if display.is_empty() && !state.placeholder().is_empty() {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!(" {}", state.placeholder())),
            ResetColor
        )?;
    }
    Ok(())
}

fn draw_radio(out: &mut Stdout, radio: &RadioField, focused: bool) -> io::Result<()> {
    for (i, label) in radio.options().iter().enumerate() {
        if i > 0 {
            queue!(out, Print("   "))?;
        }
        let selected = radio.is_selected(i);
        let indicator = if selected { '◉' } else { '◯' };
        if selected && focused {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print(format!("{indicator} {label}")),
                ResetColor
            )?;
        } else if selected {
            queue!(out, Print(format!("{indicator} {label}")))?;
        } else {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{indicator} {label}")),
                ResetColor
            )?;
        }
    }
    Ok(())
}

fn draw_select(out: &mut Stdout, select: &SelectField, focused: bool) -> io::Result<()> {
    match select.selected_label() {
        Some(label) => {
            if focused {
                queue!(out, Print(format!("< {label} >")))?;
            } else {
                queue!(out, Print(label))?;
            }
        }
        None => {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(select.placeholder_text()),
                ResetColor
            )?;
        }
    }
    Ok(())
}

/// Clips `text` to a window of at most `max_width` columns that keeps
/// the character at `cursor` visible. Returns the window and the
/// cursor's char offset within it.
fn visible_window(text: &str, cursor: usize, max_width: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut start = cursor;
    let mut end = cursor;
    // One column stays reserved for the cursor cell.
    let mut used = 1;

    // Fill forward from the cursor first, then backward with whatever
    // room is left.
    while end < chars.len() {
        let w = char_width(chars[end]);
        if used + w > max_width {
            break;
        }
        end += 1;
        used += w;
    }
    while start > 0 {
        let w = char_width(chars[start - 1]);
        if used + w > max_width {
            break;
        }
        start -= 1;
        used += w;
    }

    (chars[start..end].iter().collect(), cursor - start)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0).max(1)
}
