//! Rendering of searched magic numbers.

use std::io::{self, Write};

use board_magic::Slider;
use serde::Serialize;

/// The 64 magic numbers of one slider kind together with the seed that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagicSet {
    pub slider: Slider,
    pub seed: u32,
    /// One constant per square, a8 first.
    pub magics: Vec<u64>,
}

impl MagicSet {
    pub fn new(slider: Slider, seed: u32, magics: &[u64; 64]) -> Self {
        MagicSet {
            slider,
            seed,
            magics: magics.to_vec(),
        }
    }

    /// Name of the constant this set is emitted as, e.g. `ROOK_MAGICS`.
    pub fn const_name(&self) -> String {
        format!("{}_MAGICS", self.slider.to_string().to_uppercase())
    }
}

/// Writes each set as a Rust array constant.
pub fn write_rust<W: Write>(out: &mut W, sets: &[MagicSet]) -> io::Result<()> {
    for (i, set) in sets.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "/// {} magics found from seed {}.", set.slider, set.seed)?;
        writeln!(
            out,
            "pub const {}: [u64; {}] = [",
            set.const_name(),
            set.magics.len()
        )?;
        for magic in &set.magics {
            writeln!(out, "    {:#018x},", magic)?;
        }
        writeln!(out, "];")?;
    }
    Ok(())
}

/// Writes all sets as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, sets: &[MagicSet]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, sets)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_magic::magic::{BISHOP_MAGICS, ROOK_MAGICS};

    fn render_rust(sets: &[MagicSet]) -> String {
        let mut buf = Vec::new();
        write_rust(&mut buf, sets).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn const_names() {
        assert_eq!(MagicSet::new(Slider::Rook, 1, &ROOK_MAGICS).const_name(), "ROOK_MAGICS");
        assert_eq!(
            MagicSet::new(Slider::Bishop, 1, &BISHOP_MAGICS).const_name(),
            "BISHOP_MAGICS"
        );
    }

    #[test]
    fn rust_output_lists_every_square() {
        let text = render_rust(&[MagicSet::new(Slider::Rook, 7, &ROOK_MAGICS)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "/// rook magics found from seed 7.");
        assert_eq!(lines[1], "pub const ROOK_MAGICS: [u64; 64] = [");
        assert_eq!(lines[2], format!("    {:#018x},", ROOK_MAGICS[0]));
        assert_eq!(*lines.last().unwrap(), "];");
        assert_eq!(lines.len(), 64 + 3);
    }

    #[test]
    fn rust_output_separates_sets() {
        let text = render_rust(&[
            MagicSet::new(Slider::Rook, 7, &ROOK_MAGICS),
            MagicSet::new(Slider::Bishop, 7, &BISHOP_MAGICS),
        ]);
        assert!(text.contains("];\n\n/// bishop magics"));
        assert!(text.contains("pub const BISHOP_MAGICS: [u64; 64] = ["));
    }

    #[test]
    fn json_output_parses_back() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[MagicSet::new(Slider::Bishop, 42, &BISHOP_MAGICS)]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let set = &value[0];
        assert_eq!(set["slider"], "bishop");
        assert_eq!(set["seed"], 42);
        assert_eq!(set["magics"].as_array().unwrap().len(), 64);
        assert_eq!(set["magics"][0].as_u64(), Some(BISHOP_MAGICS[0]));
    }
}
