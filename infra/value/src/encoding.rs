use encoding_rs::{EncoderResult, Encoding, SHIFT_JIS, UTF_8, WINDOWS_1252};
use std::fmt;

/// Scratch buffer for byte counting. Two bytes per character is the widest legacy case.
const COUNT_BUFFER_LEN: usize = 256;

/// Text encodings a length limit can be declared against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// The encoding the editor uses for every string stored in project files.
    ShiftJis,
    /// Single-byte Latin encoding (what the `ascii` and `latin1` labels resolve to).
    Windows1252,
}

impl TextEncoding {
    /// Resolves a WHATWG encoding label (`"sjis"`, `"utf-8"`, `"latin1"`, ...).
    ///
    /// Returns `None` for unknown labels and for encodings this crate does not count in.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())?;
        [Self::Utf8, Self::ShiftJis, Self::Windows1252]
            .into_iter()
            .find(|candidate| candidate.encoding() == encoding)
    }

    #[must_use]
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::ShiftJis => SHIFT_JIS,
            Self::Windows1252 => WINDOWS_1252,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::ShiftJis => "Shift_JIS",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Number of bytes `text` occupies once encoded.
    ///
    /// A character with no mapping in the target encoding counts as one byte, the size of
    /// the `?` substitute legacy encoders write in its place.
    #[must_use]
    pub fn encoded_len(self, text: &str) -> usize {
        if self == Self::Utf8 {
            return text.len();
        }

        let mut encoder = self.encoding().new_encoder();
        let mut buffer = [0u8; COUNT_BUFFER_LEN];
        let mut rest = text;
        let mut total = 0usize;

        loop {
            let (result, read, written) =
                encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
            total += written;
            rest = &rest[read..];

            match result {
                EncoderResult::InputEmpty => return total,
                EncoderResult::OutputFull => {},
                EncoderResult::Unmappable(_) => total += 1,
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_to_supported_encodings() {
        assert_eq!(TextEncoding::from_label("sjis"), Some(TextEncoding::ShiftJis));
        assert_eq!(TextEncoding::from_label("Shift_JIS"), Some(TextEncoding::ShiftJis));
        assert_eq!(TextEncoding::from_label("utf-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::from_label("latin1"), Some(TextEncoding::Windows1252));
        assert_eq!(TextEncoding::from_label("utf-16le"), None);
        assert_eq!(TextEncoding::from_label("no-such-encoding"), None);
    }

    #[test]
    fn shift_jis_counts_double_byte_characters() {
        assert_eq!(TextEncoding::ShiftJis.encoded_len("abc"), 3);
        assert_eq!(TextEncoding::ShiftJis.encoded_len("あいう"), 6);
        assert_eq!(TextEncoding::ShiftJis.encoded_len("ｱｲｳ"), 3, "half-width kana are single byte");
        assert_eq!(TextEncoding::Utf8.encoded_len("あいう"), 9);
    }

    #[test]
    fn unmappable_characters_count_as_one_byte() {
        assert_eq!(TextEncoding::Windows1252.encoded_len("aあb"), 3);
        assert_eq!(TextEncoding::ShiftJis.encoded_len("😀"), 1);
    }

    #[test]
    fn long_input_spans_multiple_buffers() {
        let text = "あ".repeat(COUNT_BUFFER_LEN * 3);
        assert_eq!(TextEncoding::ShiftJis.encoded_len(&text), COUNT_BUFFER_LEN * 6);
    }
}
