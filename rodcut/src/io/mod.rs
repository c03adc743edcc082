mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for creating SVG from [`RodSolution`](crate::entities::RodSolution)s
pub mod svg;

/// Exports a solution out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;

/// Validates raw rod length and prices, producing an instance.
pub use import::validate;
