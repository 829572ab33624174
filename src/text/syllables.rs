//! Syllable approximation for lowercased English words.
//!
//! The heuristic is the regular expression in [`SYLLABLE_PATTERN`], applied
//! globally with leftmost-first alternation. The `regex` crate has no
//! lookahead, so the pattern is evaluated by a small hand-written scanner
//! that tries the four alternatives in order at each position:
//!
//! 1. `[aiouy]+e*` - a vowel run plus any trailing `e`s
//! 2. `e(?!d$|ly).` - an `e` and the next character, unless the word ends
//!    in `ed` there or continues with `ly`
//! 3. `[td]ed` - past-tense endings that are pronounced
//! 4. `le$` - a final `le`
//!
//! `.` never matches a line terminator and `$` is the end of the word.

/// Reference form of the heuristic evaluated by [`syllable_matches`]
pub const SYLLABLE_PATTERN: &str = r"[aiouy]+e*|e(?!d$|ly).|[td]ed|le$";

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'o' | 'u' | 'y')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Length of the match starting at `at`, if any alternative matches there.
fn match_at(chars: &[char], at: usize) -> Option<usize> {
    let len = chars.len();
    let next = |offset: usize| chars.get(at + offset).copied();

    match chars.get(at).copied()? {
        c if is_vowel(c) => {
            let vowels_end = (at..len).find(|&i| !is_vowel(chars[i])).unwrap_or(len);
            let es_end = (vowels_end..len)
                .find(|&i| chars[i] != 'e')
                .unwrap_or(len);
            Some(es_end - at)
        }
        'e' => {
            let follower = next(1)?;
            let ends_in_ed = follower == 'd' && at + 2 == len;
            let continues_ly = follower == 'l' && next(2) == Some('y');
            if is_line_terminator(follower) || ends_in_ed || continues_ly {
                None
            } else {
                Some(2)
            }
        }
        't' | 'd' if next(1) == Some('e') && next(2) == Some('d') => Some(3),
        'l' if next(1) == Some('e') && at + 2 == len => Some(2),
        _ => None,
    }
}

/// Number of non-overlapping heuristic matches in `word`
pub fn syllable_matches(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut at = 0;
    let mut matches = 0;

    while at < chars.len() {
        match match_at(&chars, at) {
            Some(width) => {
                matches += 1;
                at += width;
            }
            None => at += 1,
        }
    }

    matches
}

/// Syllables in one lowercased token; a token without matches counts as one.
pub fn syllables_in_word(word: &str) -> usize {
    match syllable_matches(word) {
        0 => 1,
        n => n,
    }
}
