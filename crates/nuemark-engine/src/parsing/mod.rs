pub mod attrs;
pub mod blocks;
pub mod front_matter;
pub mod inline;
pub mod lines;
pub mod reflinks;

use blocks::{Block, BlockBuilder};
use reflinks::Reflinks;

/// Parses source lines (front matter already removed) into blocks and the
/// reflink definitions they contain.
pub fn parse_blocks(lines: &[String]) -> (Vec<Block>, Reflinks) {
    let mut reflinks = Reflinks::new();
    let blocks = BlockBuilder::new(&mut reflinks).build(lines);
    (blocks, reflinks)
}
