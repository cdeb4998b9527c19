/// Link, image and reference placeholder delimiters.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE: &'static [u8; 2] = b"![";
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
    pub const ESCAPE: u8 = b'\\';
}
