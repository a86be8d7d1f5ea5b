//! Greedy line wrapping for the word list label
//!
//! Widths are column counts, measured in characters. Tokens are separated
//! by single spaces; runs of spaces produce empty tokens, which are kept.

/// Greedy word wrapper
pub struct GreedyLineWrapper;

impl GreedyLineWrapper {
    /// Wrap `text` so that lines stay within `max_width` columns
    ///
    /// Words are packed onto the current line while they fit, otherwise they
    /// start a new one. A word of at least `max_width + 2` characters is cut
    /// into `max_width` sized pieces, each on its own line, starting on a
    /// fresh line; its last piece becomes the current line.
    pub fn wrap(text: &str, max_width: usize) -> String {
        let chunk_width = max_width.max(1);
        let mut output = String::with_capacity(text.len() + text.len() / max_width.max(1));
        let mut line_len = 0;

        for (index, token) in text.split(' ').enumerate() {
            let token_len = token.chars().count();

            if token_len >= max_width + 2 {
                let chars: Vec<char> = token.chars().collect();
                let mut rest = chars.as_slice();
                output.push('\n');
                while rest.len() > chunk_width {
                    let (piece, tail) = rest.split_at(chunk_width);
                    output.extend(piece);
                    output.push('\n');
                    rest = tail;
                }
                output.extend(rest);
                line_len = rest.len();
            } else if index == 0 {
                output.push_str(token);
                line_len = token_len;
            } else if line_len + 1 + token_len <= max_width {
                output.push(' ');
                output.push_str(token);
                line_len += 1 + token_len;
            } else {
                output.push('\n');
                output.push_str(token);
                line_len = token_len;
            }
        }

        output
    }
}
