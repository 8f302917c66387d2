pub mod decode;
pub mod png;
pub mod svg;

pub use decode::load_rgba;
pub use png::{encode_rgba_png, write_file};
pub use svg::render_svg;
