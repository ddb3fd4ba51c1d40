//! Text helpers shared by the reports

use crate::tree::DecisionNode;
use std::fmt::Write;

/// Horizontal bar filled in proportion to `fraction` (clamped to 0..=1)
#[must_use]
pub fn share_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Indented outline of a decision tree, one line per node
///
/// Subtrees deeper than `max_depth` guesses are elided.
#[must_use]
pub fn tree_outline(tree: &DecisionNode, max_depth: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tree.guess.text().to_uppercase());
    outline_children(tree, 1, max_depth, &mut out);
    out
}

fn outline_children(node: &DecisionNode, depth: usize, max_depth: usize, out: &mut String) {
    for (pattern, children) in &node.next_guesses {
        for child in children {
            let indent = "  ".repeat(depth);
            if depth >= max_depth {
                let _ = writeln!(out, "{indent}{} …", pattern.to_emoji());
                continue;
            }
            let _ = writeln!(
                out,
                "{indent}{} {}",
                pattern.to_emoji(),
                child.guess.text().to_uppercase()
            );
            outline_children(child, depth + 1, max_depth, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn bar_fills_by_share() {
        assert_eq!(share_bar(0.0, 8), "░░░░░░░░");
        assert_eq!(share_bar(0.5, 8), "████░░░░");
        assert_eq!(share_bar(1.0, 8), "████████");
    }

    #[test]
    fn bar_clamps_out_of_range() {
        assert_eq!(share_bar(-1.0, 4), "░░░░");
        assert_eq!(share_bar(3.0, 4), "████");
        assert_eq!(share_bar(f64::NAN, 4).chars().count(), 4);
    }

    #[test]
    fn outline_lists_each_branch() {
        let mut trace = DecisionNode::new(Word::new("trace").unwrap());
        trace.insert(
            "bgggg".parse().unwrap(),
            DecisionNode::leaf(Word::new("brace").unwrap()),
        );
        let mut root = DecisionNode::new(Word::new("crane").unwrap());
        root.insert("yggbg".parse().unwrap(), trace);

        let full = tree_outline(&root, 6);
        assert_eq!(full, "CRANE\n  🟨🟩🟩⬜🟩 TRACE\n    ⬜🟩🟩🟩🟩 BRACE\n");

        let short = tree_outline(&root, 1);
        assert_eq!(short, "CRANE\n  🟨🟩🟩⬜🟩 …\n");
    }
}
