use crate::entities::{RodInstance, RodSolution};
use crate::io::svg::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text, Title};

const MARGIN: f64 = 10.0;
const HEADER_HEIGHT: f64 = 20.0;

/// Draws the rod as a horizontal bar divided into the pieces of `solution`, left to right in cut order.
pub fn rod_to_svg(
    instance: &RodInstance,
    solution: &RodSolution,
    options: SvgDrawOptions,
) -> Document {
    let theme = options.theme.get_theme();
    let rod_width = instance.length() as f64 * options.unit_width;
    let vbox = (
        0.0,
        0.0,
        rod_width + 2.0 * MARGIN,
        options.rod_height + HEADER_HEIGHT + 2.0 * MARGIN,
    );
    let rod_y = MARGIN + HEADER_HEIGHT;

    let header = Text::new(format!(
        "{} solver, profit: {}, pieces: {}, cuts: {}",
        solution.solver,
        solution.max_profit,
        solution.number_of_pieces(),
        solution.number_of_cuts()
    ))
    .set("x", MARGIN)
    .set("y", MARGIN + HEADER_HEIGHT * 0.6)
    .set("font-size", HEADER_HEIGHT * 0.6)
    .set("fill", theme.text_fill);

    let mut pieces_group = Group::new().set("id", "pieces");
    let mut cuts_group = Group::new().set("id", "cuts");

    let mut x = MARGIN;
    for (i, &piece_length) in solution.cuts.iter().enumerate() {
        let width = piece_length as f64 * options.unit_width;
        let fill = theme.piece_fills[i % theme.piece_fills.len()];

        let mut piece = Group::new()
            .set("id", format!("piece_{i}"))
            .add(Title::new(format!(
                "piece {i}, length: {piece_length}, price: {}",
                instance.price(piece_length)
            )))
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", rod_y)
                    .set("width", width)
                    .set("height", options.rod_height)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", theme.stroke_width),
            );
        if options.piece_labels {
            piece = piece.add(
                Text::new(piece_length.to_string())
                    .set("x", x + width / 2.0)
                    .set("y", rod_y + options.rod_height / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", options.rod_height * 0.4)
                    .set("fill", theme.text_fill),
            );
        }
        pieces_group = pieces_group.add(piece);

        x += width;
        if options.cut_markers && i + 1 < solution.cuts.len() {
            cuts_group = cuts_group.add(
                Line::new()
                    .set("x1", x)
                    .set("y1", rod_y - MARGIN / 2.0)
                    .set("x2", x)
                    .set("y2", rod_y + options.rod_height + MARGIN / 2.0)
                    .set("stroke", theme.cut_stroke)
                    .set("stroke-width", 2.0 * theme.stroke_width)
                    .set("stroke-dasharray", "4 2"),
            );
        }
    }

    Document::new()
        .set("viewBox", vbox)
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", theme.background_fill),
        )
        .add(header)
        .add(pieces_group)
        .add(cuts_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{MemoizedSolver, RodCutSolver};

    #[test]
    fn draws_one_rectangle_per_piece_and_a_marker_per_cut() {
        let instance = crate::io::validate(5, &[2, 5, 7, 8, 10]).unwrap();
        let solution = MemoizedSolver::new(&instance).solve();
        let svg = rod_to_svg(&instance, &solution, SvgDrawOptions::default()).to_string();

        // background + one per piece
        assert_eq!(svg.matches("<rect").count(), 1 + solution.number_of_pieces());
        assert_eq!(svg.matches("<line").count(), solution.number_of_cuts());
    }

    #[test]
    fn markers_can_be_disabled() {
        let instance = crate::io::validate(4, &[3, 5, 6, 7]).unwrap();
        let solution = MemoizedSolver::new(&instance).solve();
        let options = SvgDrawOptions {
            cut_markers: false,
            ..SvgDrawOptions::default()
        };
        let svg = rod_to_svg(&instance, &solution, options).to_string();
        assert_eq!(svg.matches("<line").count(), 0);
    }
}
