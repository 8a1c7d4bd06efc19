//! Layout and style-resolution engine.
//!
//! Turns a parsed HTML document plus its `<style>` rules into a positioned
//! tree of design nodes: for every visually relevant element, an absolute
//! box (x, y, w, h, rounded integers in viewport space) and a filtered
//! style record, JSON-serializable for downstream viewers and exporters.
//!
//! The pipeline, leaves first:
//!
//! 1. value parsers and style resolution (the `maquette-css` crate),
//! 2. box model + content-height estimation ([`boxmodel`]),
//! 3. depth-first tree assembly with vertical flow accumulation
//!    ([`assemble`]),
//! 4. an optional, explicitly invoked flex repositioning pass ([`flex`]),
//! 5. palette extraction over the finished tree ([`palette`]).
//!
//! Not a conformant layout engine: no text shaping, no word-boundary line
//! breaking, no floats, no grid, no cascade specificity. The approximation
//! policies are part of the contract and covered by tests.
//!
//! Everything is single-threaded and synchronous; each conversion call
//! builds fresh state and returns a fresh tree, so independent calls are
//! safe to run concurrently. The only I/O lives in [`convert_url`].

/// Depth-first design-tree assembly.
pub mod assemble;
/// Simplified box model and content-height estimation.
pub mod boxmodel;
/// Standalone flex repositioning pass.
pub mod flex;
/// The design-tree data model.
pub mod node;
/// Effective-style to output-record projection.
pub mod output;
/// Palette extraction over a finished tree.
pub mod palette;

pub use assemble::{build_node, classify, convert_dom};
pub use boxmodel::{ComputedBox, ContentSignal, compute_box, estimate_height};
pub use flex::apply_flex_layout;
pub use node::{DesignNode, LayoutBox, NodeKind, StyleOutput, Viewport};
pub use output::build_style_output;
pub use palette::extract_palette;

use maquette_common::net::{FetchError, fetch_text};
use maquette_html::parse_html;

/// Conversion failure.
///
/// The engine itself never fails on malformed markup or styles; the only
/// error source is fetching a document over the network.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The document could not be fetched.
    #[error("failed to fetch document: {0}")]
    Fetch(#[from] FetchError),
}

/// Convert raw HTML text into a design tree.
///
/// Infallible: malformed markup parses to whatever DOM the parser can
/// recover, and a document with no visible content yields a viewport-sized
/// white frame.
#[must_use]
pub fn convert_document(html: &str, viewport: Viewport) -> DesignNode {
    let tree = parse_html(html);
    convert_dom(&tree, viewport)
}

/// Fetch a document over HTTP(S) and convert it.
///
/// # Errors
///
/// Returns [`ConvertError::Fetch`] when the request fails or the server
/// answers with a non-success status.
pub fn convert_url(url: &str, viewport: Viewport) -> Result<DesignNode, ConvertError> {
    let html = fetch_text(url)?;
    Ok(convert_document(&html, viewport))
}
