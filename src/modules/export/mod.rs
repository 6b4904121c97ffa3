//! Export Bezier curves to various formats
//!
//! This module provides functionality to export fitted curves to different
//! formats for visualization, sharing, or further processing.
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - the `d` attribute of an SVG `<path>`

pub mod svg_path;
