//! Static Helvetica metrics for the preview renderer.
//!
//! Character widths are in em units (relative to font size), taken from
//! the standard Type 1 AFM data for Helvetica and covering ASCII
//! 0x20..=0x7E. The preview only needs centering, right-alignment, and
//! wrap points, so the regular-face table also stands in for the bold and
//! oblique faces; the few-percent error is absorbed by the page margins.

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

const PT_TO_MM: f32 = 0.352_778;

/// Static character-width table. `widths[i]` is the width of ASCII
/// character `(i + 32)` at 1 em.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Rendered width of a string in em units. Non-ASCII characters fall
    /// back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Rendered width in millimetres at the given point size.
    pub fn width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * PT_TO_MM
    }

    /// Greedy word-wrap into lines that fit `max_width_mm` at `size_pt`.
    /// A word wider than the line gets a line of its own; there is no
    /// mid-word splitting.
    pub fn wrap_to_width(&self, text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if self.width_mm(&candidate, size_pt) > max_width_mm && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica regular, AFM widths / 1000.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(HELVETICA.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_space_width() {
        let width = HELVETICA.measure_str(" ");
        assert!((width - 0.278).abs() < 1e-4);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let width = HELVETICA.measure_str("\u{e9}");
        assert!((width - HELVETICA.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_width_mm_scales_with_point_size() {
        let small = HELVETICA.width_mm("Resume", 10.0);
        let large = HELVETICA.width_mm("Resume", 20.0);
        assert!((large - small * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let lines = HELVETICA.wrap_to_width("Did a thing", 10.0, 175.0);
        assert_eq!(lines, vec!["Did a thing"]);
    }

    #[test]
    fn test_wrap_long_text_splits_and_preserves_words() {
        let text = "word ".repeat(60);
        let lines = HELVETICA.wrap_to_width(&text, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(HELVETICA.width_mm(line, 10.0) <= 60.0);
            assert!(line.split_whitespace().all(|w| w == "word"));
        }
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let lines = HELVETICA.wrap_to_width("a verylongunbreakabletokenthatcannotfit b", 12.0, 20.0);
        assert!(lines.contains(&"verylongunbreakabletokenthatcannotfit".to_string()));
    }

    #[test]
    fn test_wrap_empty_text_yields_no_lines() {
        assert!(HELVETICA.wrap_to_width("   ", 10.0, 100.0).is_empty());
    }
}
