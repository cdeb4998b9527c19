/// Emphasis delimiters. Doubled runs produce `Strong`, single ones `Em`,
/// tripled ones `Strong` nested in `Em`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Delimiters in match precedence: longest run first.
    pub const DELIMITERS: [&'static [u8]; 6] = [b"***", b"___", b"**", b"__", b"*", b"_"];

    /// Underscores only delimit at word boundaries (`snake_case` stays text).
    pub fn is_intraword_sensitive(delim: &[u8]) -> bool {
        delim[0] == Self::UNDERSCORE
    }
}
