// src/morse.rs
// 把文本编码成摩尔斯电码，再合成为可供绘图的音频样本
use std::f64::consts::PI;
use log::debug;
/// Tone used for every dot and dash.
#[derive(Clone, Copy, Debug)]
pub struct ToneSpec {
    /// Length of one dot in seconds; every other timing is a multiple of it.
    pub unit_seconds: f64,
    pub frequency_hz: f64,
    pub amplitude: f64,
}
impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            unit_seconds: 0.1,
            frequency_hz: 440.0,
            amplitude: 1.0,
        }
    }
}
const DASH_UNITS: usize = 3;
const SYMBOL_GAP_UNITS: usize = 1;
const LETTER_GAP_UNITS: usize = 3;
const WORD_GAP_UNITS: usize = 7;
fn code_for(c: char) -> Option<&'static str> {
    let code = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '\'' => ".----.",
        '!' => "-.-.--",
        '/' => "-..-.",
        '(' => "-.--.",
        ')' => "-.--.-",
        '&' => ".-...",
        ':' => "---...",
        ';' => "-.-.-.",
        '=' => "-...-",
        '+' => ".-.-.",
        '-' => "-....-",
        '"' => ".-..-.",
        '@' => ".--.-.",
        _ => return None,
    };
    Some(code)
}
/// Letters are separated by a space and words by `" / "`. Characters without a
/// code are dropped, and so are words that end up empty.
pub fn text_to_morse(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .flat_map(char::to_uppercase)
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
/// Render morse produced by [`text_to_morse`] as a tone/silence sample train.
pub fn morse_to_samples(morse: &str, sample_rate_hz: f64, tone: &ToneSpec) -> Vec<f64> {
    // Each segment is truncated on its own, so a dash is not always three dots long.
    let span = |units: usize| (units as f64 * tone.unit_seconds * sample_rate_hz) as usize;
    let mut samples = Vec::new();
    for (w, word) in morse.split('/').map(str::trim).filter(|w| !w.is_empty()).enumerate() {
        if w > 0 {
            silence(&mut samples, span(WORD_GAP_UNITS));
        }
        for (l, letter) in word.split_whitespace().enumerate() {
            if l > 0 {
                silence(&mut samples, span(LETTER_GAP_UNITS));
            }
            let mut first = true;
            for symbol in letter.chars() {
                let units = match symbol {
                    '.' => 1,
                    '-' => DASH_UNITS,
                    _ => continue,
                };
                if !first {
                    silence(&mut samples, span(SYMBOL_GAP_UNITS));
                }
                first = false;
                samples.extend((0..span(units)).map(|i| {
                    let t = i as f64 / sample_rate_hz;
                    (2.0 * PI * tone.frequency_hz * t).sin() * tone.amplitude
                }));
            }
        }
    }
    debug!("synthesized {} samples for {:?}", samples.len(), morse);
    samples
}
fn silence(samples: &mut Vec<f64>, count: usize) {
    samples.resize(samples.len() + count, 0.0);
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn encodes_words_and_letters() {
        assert_eq!(text_to_morse("sos"), "... --- ...");
        assert_eq!(text_to_morse("Hi  there"), ".... .. / - .... . .-. .");
        assert_eq!(text_to_morse("a # b"), ".- / -...");
        assert_eq!(text_to_morse("   "), "");
    }
    #[test]
    fn single_dot_lasts_one_unit() {
        let samples = morse_to_samples(&text_to_morse("E"), 1000.0, &ToneSpec::default());
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|v| v.abs() <= 1.0));
        assert!(samples.iter().any(|v| v.abs() > 0.9));
    }
    #[test]
    fn gaps_follow_unit_multiples() {
        let tone = ToneSpec::default();
        // dot + letter gap + dash
        assert_eq!(morse_to_samples(". -", 1000.0, &tone).len(), 100 + 300 + 300);
        // dot + symbol gap + dot
        assert_eq!(morse_to_samples("..", 1000.0, &tone).len(), 300);
        // dot + word gap + dot
        let samples = morse_to_samples(". / .", 1000.0, &tone);
        assert_eq!(samples.len(), 100 + 700 + 100);
        assert!(samples[100..800].iter().all(|v| *v == 0.0));
    }
    #[test]
    fn segments_round_from_their_own_duration() {
        // One unit is 1102.5 samples at 11025 Hz: a dot truncates to 1102, a dash to 3307.
        let tone = ToneSpec::default();
        assert_eq!(morse_to_samples(".", 11_025.0, &tone).len(), 1102);
        assert_eq!(morse_to_samples("-", 11_025.0, &tone).len(), 3307);
        assert_eq!(morse_to_samples(". / .", 11_025.0, &tone).len(), 1102 + 7717 + 1102);
    }
}
