//! inkcore — shared library for the inkpad notepad

pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::InkTheme;
