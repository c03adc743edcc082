use rodcut::io::svg::SvgDrawOptions;
use rodcut::solvers::SolverKind;
use serde::{Deserialize, Serialize};

/// Configuration of a rod cutting run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RodCutConfig {
    /// Solvers to run, in this order
    pub solvers: Vec<SolverKind>,
    /// Fail the run if the solvers disagree on the maximum profit
    pub cross_validate: bool,
    /// Write an SVG drawing of every solution next to the JSON output
    pub write_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for RodCutConfig {
    fn default() -> Self {
        Self {
            solvers: SolverKind::ALL.to_vec(),
            cross_validate: true,
            write_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
