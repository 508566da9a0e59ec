//! Box-drawing rendering of door state.
//!
//! Pure string building over a read-only status snapshot: three doors
//! drawn side by side with a status panel stitched to the right, plus a
//! standalone status box. Nothing in here touches game logic, and nothing
//! in the core depends on this module.

use crate::door::{DoorStatus, Knowledge, OpenState, PickedState};

const WINNER_GLYPH: &str = "⭐";
const LOSER_GLYPH: &str = "✖";
const UNKNOWN_GLYPH: &str = "⁇";

const RESET: &str = "\x1b[0m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

fn colored(glyph: &str, ansi: &str) -> String {
    format!("{ansi}{glyph}{RESET}")
}

/// Layout knobs for the side-by-side diagram.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw the `P`/`H`/`·` picked-state marker under each door.
    pub include_labels: bool,
    /// Left margin before the first door.
    pub initial_padding: usize,
    /// Gap between doors.
    pub space_between_doors: usize,
    /// Door width in characters, minimum 5.
    pub door_width: usize,
    /// Gap between the doors and the status panel.
    pub space_between_doors_and_status: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_labels: true,
            initial_padding: 4,
            space_between_doors: 6,
            door_width: 9,
            space_between_doors_and_status: 6,
        }
    }
}

/// Build the per-door status lines shown in the panel.
pub fn status_lines(doors: &[DoorStatus; 3]) -> Vec<String> {
    let mut lines = vec!["Current Status:".to_string()];
    lines.extend(doors.iter().map(|status| format!("  {status}")));
    lines
}

/// Render the three doors side by side with the status panel on the right.
///
/// # Panics
///
/// Panics if `options.door_width < 5`.
pub fn render_doors_with_status(
    doors: &[DoorStatus; 3],
    status_lines: &[String],
    options: &RenderOptions,
) -> String {
    assert!(options.door_width >= 5, "door width must be at least 5");

    let door_blocks: Vec<Vec<String>> = doors
        .iter()
        .enumerate()
        .map(|(i, status)| render_one_door(status, i + 1, options.include_labels, options.door_width))
        .collect();
    let door_rows = door_blocks[0].len();
    let between = " ".repeat(options.space_between_doors);
    let left_pad = " ".repeat(options.initial_padding);

    let door_row_strings: Vec<String> = (0..door_rows)
        .map(|r| {
            format!(
                "{}{between}{}{between}{}",
                door_blocks[0][r], door_blocks[1][r], door_blocks[2][r]
            )
        })
        .collect();

    let status_block = boxed_lines(status_lines);
    let status_rows = status_block.len();
    let rows = door_rows.max(status_rows);

    let gap_right = " ".repeat(options.space_between_doors_and_status);
    let blank_door_row = " ".repeat(door_row_strings[0].chars().count());
    let mut out = String::new();
    for r in 0..rows {
        let door_part = if r < door_rows {
            door_row_strings[r].as_str()
        } else {
            blank_door_row.as_str()
        };
        let status_part = if r < status_rows {
            status_block[r].as_str()
        } else {
            ""
        };
        out.push_str(&left_pad);
        out.push_str(door_part);
        out.push_str(&gap_right);
        out.push_str(status_part);
        if r < rows - 1 {
            out.push('\n');
        }
    }
    out
}

/// Render the status panel on its own, indented by `left_pad` spaces.
pub fn render_status_box(status_lines: &[String], left_pad: usize) -> String {
    let pad = " ".repeat(left_pad);
    boxed_lines(status_lines)
        .into_iter()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap lines in a `┌─┐│└┘` box sized to the widest line.
fn boxed_lines(lines: &[String]) -> Vec<String> {
    let lines: Vec<&str> = if lines.is_empty() {
        vec!["Current Status:"]
    } else {
        lines.iter().map(String::as_str).collect()
    };
    let max_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut block = Vec::with_capacity(lines.len() + 2);
    block.push(format!("┌{}┐", "─".repeat(max_width + 2)));
    for line in lines {
        block.push(format!("│ {}{} │", line, " ".repeat(max_width - line.chars().count())));
    }
    block.push(format!("└{}┘", "─".repeat(max_width + 2)));
    block
}

/// One door: a 3-row number sign, a 5-row body with the colored knowledge
/// glyph centered, and optionally the picked-state marker underneath.
fn render_one_door(
    status: &DoorStatus,
    number: usize,
    include_label: bool,
    door_width: usize,
) -> Vec<String> {
    let interior = door_width - 2;
    let fill = if status.open_state() == OpenState::Unopened {
        '░'
    } else {
        ' '
    };

    let border = "─".repeat(interior);
    let panel: String = std::iter::repeat(fill).take(interior).collect();
    let mut body = vec![
        format!("┌{border}┐"),
        format!("│{panel}│"),
        format!("│{panel}│"),
        format!("│{panel}│"),
        format!("└{border}┘"),
    ];

    let glyph = match status.knowledge() {
        Knowledge::KnownWinner => Some(colored(WINNER_GLYPH, YELLOW)),
        Knowledge::KnownLoser => Some(colored(LOSER_GLYPH, MAGENTA)),
        Knowledge::Unknown => {
            if status.open_state() == OpenState::Unopened {
                Some(colored(UNKNOWN_GLYPH, CYAN))
            } else {
                None
            }
        }
    };

    if let Some(glyph) = glyph {
        // Visual center inside the border, shifted one cell left when
        // there is room to pad both sides of the glyph.
        let mid = 1 + interior / 2;
        if interior >= 5 {
            let mut start = mid.saturating_sub(2).max(1);
            if start + 2 > interior {
                start = interior - 2;
            }
            body[2] = replace_span(&body[2], start, 3, &format!(" {glyph} "));
        } else {
            body[2] = replace_span(&body[2], mid, 1, &glyph);
        }
    }

    let mut lines = vec![
        center_to_width("┌─┐", door_width),
        center_to_width(&format!("│{number}│"), door_width),
        center_to_width("└─┘", door_width),
    ];
    lines.extend(body);

    if include_label {
        let marker = match status.picked_state() {
            PickedState::PickedByPlayer => "P",
            PickedState::PickedByHost => "H",
            PickedState::Unpicked => "·",
        };
        lines.push(center_to_width(marker, door_width));
    }
    lines
}

/// Replace `len` characters starting at `start` with `replacement`.
/// Operates on characters, not bytes; the replacement may be wider (it
/// usually carries ANSI escapes).
fn replace_span(line: &str, start: usize, len: usize, replacement: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out: String = chars[..start.min(chars.len())].iter().collect();
    out.push_str(replacement);
    out.extend(&chars[(start + len).min(chars.len())..]);
    out
}

fn center_to_width(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count >= width {
        return s.chars().take(width).collect();
    }
    let left = (width - count) / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(width - left - count))
}
