//! Inert-text primitives for untrusted audit content.
//!
//! Everything the service returns (code snapshots, descriptions, fix
//! snippets, even severity labels) originates from an LLM analysis of
//! attacker-supplied source code. Before any of it reaches the terminal
//! printer it goes through these helpers, which guarantee the text stays
//! literal: control characters are removed so no terminal escape or OSC
//! sequence survives, and code spans/fences are sized past the longest
//! backtick run in the content so the markdown printer cannot be closed
//! early by it. The HTML path gets the equivalent guarantee from askama's
//! autoescape on `.html` templates.

/// Removes control characters, keeping `\n` and `\t`. Covers C0, DEL and
/// the C1 range, which is enough to kill ANSI/OSC injection at the root:
/// without ESC, BEL or CSI bytes no escape sequence can start.
pub fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Wraps untrusted text in an inline code span. The delimiter uses one more
/// backtick than the longest run inside the content, so the content can
/// never terminate the span. Newlines collapse to spaces (inline context).
pub fn code_span(text: &str) -> String {
    let cleaned = strip_control(text).replace(['\n', '\t'], " ");
    let delimiter = "`".repeat(longest_backtick_run(&cleaned) + 1);

    if cleaned.starts_with('`') || cleaned.ends_with('`') {
        format!("{delimiter} {cleaned} {delimiter}")
    } else {
        format!("{delimiter}{cleaned}{delimiter}")
    }
}

/// Wraps untrusted multi-line text in a fenced code block whose fence is
/// longer than any backtick run in the content, so no line of the content
/// can close the fence early.
pub fn code_block(text: &str) -> String {
    let cleaned = strip_control(text);
    let fence = "`".repeat((longest_backtick_run(&cleaned) + 1).max(3));

    format!("{fence}\n{cleaned}\n{fence}")
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}
