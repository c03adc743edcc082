mod rod_to_svg;
mod svg_util;

#[doc(inline)]
pub use rod_to_svg::*;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgRodTheme;
#[doc(inline)]
pub use svg_util::SvgRodThemes;
