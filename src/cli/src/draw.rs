use fmc_core::FaceletCube;
use owo_colors::OwoColorize;

use crate::config::FaceColors;

const CELL: &str = "  ";

/// Draws the unfolded cube with each sticker as a colored block.
pub fn draw(cube: &FaceletCube, colors: &FaceColors) -> String {
    let mut out = String::new();

    for row in cube.net() {
        // Stop after the last sticker so that no line ends in padding
        let len = row.iter().rposition(Option::is_some).map_or(0, |idx| idx + 1);

        for cell in &row[..len] {
            match cell {
                Some(face) => {
                    let color = colors[*face];
                    out.push_str(&CELL.on_truecolor(color.0, color.1, color.2).to_string());
                }
                None => out.push_str(CELL),
            }
        }

        out.push('\n');
    }

    out
}
