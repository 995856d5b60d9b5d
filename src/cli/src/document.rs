//! Reads a fewest-moves attempt written as plain text: the scramble on the
//! first line, then blocks of moves separated by blank lines, with `//` or `#`
//! comments anywhere.

use fmc_core::{Token, normalize, tokenize};
use itertools::Itertools;

/// Everything before the first `//` or `#` on the line.
pub fn strip_comments(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());

    &line[..end]
}

/// Counts face, wide and slice turns. Rotations and NISS markers are free.
pub fn move_count(line: &str) -> usize {
    tokenize(strip_comments(line))
        .iter()
        .filter(|token| Token::is_turn(token))
        .count()
}

/// The first line of `text` without its comment.
pub fn scramble(text: &str) -> Option<&str> {
    text.lines()
        .next()
        .map(|line| strip_comments(line).trim())
        .filter(|line| !line.is_empty())
}

/// The blank-line separated blocks of `text` with comments removed.
pub fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.drain(..).join("\n"));
            }
        } else {
            current.push(strip_comments(line));
        }
    }

    if !current.is_empty() {
        blocks.push(current.into_iter().join("\n"));
    }

    blocks
}

/// The normalized skeleton in block `idx`, or in the last block.
pub fn skeleton(text: &str, idx: Option<usize>) -> Option<String> {
    let blocks = blocks(text);

    let block = match idx {
        Some(idx) => blocks.get(idx)?,
        None => blocks.last()?,
    };

    Some(normalize(block))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "move" } else { "moves" }
}

fn total_line(line_number: usize, total: usize) -> Option<String> {
    (line_number > 2 && total > 0).then(|| format!("(total: {total} {})", plural(total)))
}

/// Copies `text` with the move count appended to each line that has moves,
/// and a total after every block past the scramble.
pub fn annotate(text: &str) -> String {
    let mut lines = Vec::new();
    let mut total = 0;
    let mut line_number = 0;

    for line in text.lines() {
        line_number += 1;

        let count = move_count(line);
        total += count;

        if strip_comments(line).trim().is_empty() {
            lines.extend(total_line(line_number, total));
            total = 0;
        }

        if count > 0 {
            lines.push(format!("{line}  ({count} {})", plural(count)));
        } else {
            lines.push(line.to_owned());
        }
    }

    lines.extend(total_line(line_number, total));

    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTEMPT: &str = "R' U' F D2 L2 F R2 U2 R2 B D2 L B2 D' B' L2 R' F' R' U' F\n\
                           \n\
                           // EO\n\
                           B U' L' // 3/3\n\
                           x Rw2 [f] NISS D\n\
                           \n\
                           B U' L' F2 D # skeleton\n";

    #[test]
    fn comments() {
        assert_eq!(strip_comments("R U // F"), "R U ");
        assert_eq!(strip_comments("R U # F"), "R U ");
        assert_eq!(strip_comments("# R // U"), "");
        assert_eq!(strip_comments("R U"), "R U");
    }

    #[test]
    fn counts() {
        assert_eq!(move_count("R U2 F'"), 3);
        assert_eq!(move_count("Rw [r] x y2 NISS"), 2);
        assert_eq!(move_count("// R U"), 0);
        assert_eq!(move_count("hello"), 0);
    }

    #[test]
    fn scramble_and_blocks() {
        assert_eq!(
            scramble(ATTEMPT),
            Some("R' U' F D2 L2 F R2 U2 R2 B D2 L B2 D' B' L2 R' F' R' U' F")
        );
        assert_eq!(scramble(""), None);
        assert_eq!(scramble("R U F // xcross\nD"), Some("R U F"));
        assert_eq!(scramble("# no scramble\nR"), None);

        let blocks = blocks(ATTEMPT);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], "\nB U' L' \nx Rw2 [f] NISS D");
        assert_eq!(blocks[2], "B U' L' F2 D ");
    }

    #[test]
    fn skeletons() {
        assert_eq!(skeleton(ATTEMPT, None).as_deref(), Some("B U' L' F2 D"));
        assert_eq!(skeleton(ATTEMPT, Some(2)).as_deref(), Some("B U' L' F2 D"));
        assert_eq!(skeleton(ATTEMPT, Some(7)), None);
        assert_eq!(skeleton("", None), None);
    }

    #[test]
    fn annotations() {
        assert_eq!(
            annotate("R U\n\nF\nR2 // R2\n\nx\n"),
            "R U  (2 moves)\n\
             \n\
             F  (1 move)\n\
             R2 // R2  (1 move)\n\
             (total: 2 moves)\n\
             \n\
             x\n"
        );
    }

    #[test]
    fn trailing_block_total() {
        assert_eq!(
            annotate("R U\n\nF\nx R2"),
            "R U  (2 moves)\n\
             \n\
             F  (1 move)\n\
             x R2  (1 move)\n\
             (total: 2 moves)\n"
        );
        assert_eq!(annotate(""), "");
    }
}
