use std::io::{self, Write};

use rand::Rng;

// ---------------------------------------------------------------------------
// ContentSpec
// ---------------------------------------------------------------------------

/// Bounds for random text generation.
///
/// Each generated line holds `1..=max_words_per_line` lowercase words of
/// `1..=max_word_len` characters, single-space separated and `\n` terminated.
#[derive(Debug, Clone)]
pub struct ContentSpec {
    /// Number of lines to generate.
    pub lines: u32,

    /// Upper bound on words per line.
    pub max_words_per_line: u32,

    /// Upper bound on characters per word.
    pub max_word_len: u32,
}

impl Default for ContentSpec {
    fn default() -> Self {
        Self {
            lines:              10,
            max_words_per_line: 8,
            max_word_len:       10,
        }
    }
}

/// Exact counts for a completed generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    /// Bytes written to the sink, including separators and line terminators.
    pub bytes: u64,

    /// Line terminators written.
    pub lines: u32,
}

// ---------------------------------------------------------------------------
// generate()
// ---------------------------------------------------------------------------

/// Write random text to `sink` per `spec` and return exact counts.
///
/// Generation is decoupled from storage: the sink is any [`Write`], so the
/// populator hands in a buffered file while tests hand in a `Vec<u8>`.
/// The returned byte count is authoritative — it is what the caller records
/// in the manifest, and it equals the sink's growth exactly.
///
/// # Errors
///
/// Only fails if the sink rejects a write; the randomness source itself
/// cannot fail.
pub fn generate<W: Write, R: Rng>(
    sink: &mut W,
    rng: &mut R,
    spec: &ContentSpec,
) -> io::Result<ContentStats> {
    let mut bytes: u64 = 0;
    let mut lines: u32 = 0;
    let mut word = [0u8; 64];

    for _ in 0..spec.lines {
        let words_in_line = rng.gen_range(1..=spec.max_words_per_line);
        for w in 0..words_in_line {
            // Word length is capped by the scratch buffer.
            let len = (rng.gen_range(1..=spec.max_word_len) as usize).min(word.len());
            for slot in word.iter_mut().take(len) {
                *slot = b'a' + rng.gen_range(0..26u8);
            }
            sink.write_all(&word[..len])?;
            bytes += len as u64;

            if w < words_in_line - 1 {
                sink.write_all(b" ")?;
                bytes += 1;
            }
        }
        sink.write_all(b"\n")?;
        bytes += 1;
        lines += 1;
    }

    Ok(ContentStats { bytes, lines })
}
