pub mod color;
pub mod svg;
pub mod table;

pub use svg::Renderer;
pub use table::segments_csv;
