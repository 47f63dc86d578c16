use colored::Colorize;
use oneside_fragment::CombinedDiff;
use oneside_types::Side;

/// Render the combined view with a two-column gutter of original line
/// numbers (one-based, blank where a side has no line).
pub fn render_text(diff: &CombinedDiff) -> String {
    let width = diff.line_count.max(1).to_string().len();
    let mut out = String::new();

    for (line, content) in diff.lines().enumerate() {
        if diff.is_separator(line) {
            let separator = format!("{:>w$} {:>w$}   ...", "", "", w = width);
            out.push_str(&format!("{}\n", separator.dimmed()));
            continue;
        }

        let left = diff.convertor.get(Side::Left, line);
        let right = diff.convertor.get(Side::Right, line);
        let gutter = format!(
            "{:>w$} {:>w$}",
            left.map(|l| (l + 1).to_string()).unwrap_or_default(),
            right.map(|r| (r + 1).to_string()).unwrap_or_default(),
            w = width,
        );

        let changed = diff.block_at(line).is_some();
        let body = match (changed, left, right) {
            (true, Some(_), None) => format!("- {content}").red().to_string(),
            (true, None, Some(_)) => format!("+ {content}").green().to_string(),
            _ => format!("  {content}"),
        };
        out.push_str(&format!("{} │ {}\n", gutter.dimmed(), body));
    }
    out
}

/// One-line summary printed under the view.
pub fn summary(diff: &CombinedDiff) -> String {
    if diff.is_equal {
        return "Contents are identical.".to_string();
    }
    let count = |side: Side| -> usize {
        diff.blocks
            .iter()
            .map(|block| diff.text[block.range(side)].lines().count())
            .sum()
    };
    let (removed, added) = (count(Side::Left), count(Side::Right));
    format!(
        "{} change(s): {} {}",
        diff.blocks.len(),
        format!("-{removed}").red(),
        format!("+{added}").green()
    )
}
