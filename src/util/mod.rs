pub mod display;

pub use self::display::render_tree;
