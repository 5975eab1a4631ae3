use crate::core::{dictionary::Dictionary, grid::Grid, letter::Letter, line::Line};

/// End-of-game scoring: the single longest dictionary word found in each of
/// the grid's `2 * size` lines, in line index order.
///
/// Lines with no valid word contribute nothing. This is the final scoring
/// rule, not the in-search heuristic: only one word counts per line.
#[must_use]
pub fn scoring_words(grid: &Grid, dictionary: &Dictionary, min_word_len: usize) -> Vec<String> {
    grid.lines()
        .filter_map(|line| longest_word_in_line(&line, dictionary, min_word_len))
        .collect()
}

/// Game score for a set of scoring words: the sum of their lengths.
#[must_use]
pub fn game_score(words: &[String]) -> usize {
    words.iter().map(String::len).sum()
}

fn longest_word_in_line(
    line: &Line,
    dictionary: &Dictionary,
    min_word_len: usize,
) -> Option<String> {
    line.slices(min_word_len)
        .filter_map(|slice| {
            let word: String = slice
                .iter()
                .map(|cell| cell.map(Letter::as_char))
                .collect::<Option<_>>()?;
            dictionary.contains(&word).then_some(word)
        })
        .max_by_key(String::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::CellPos;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (row, content) in rows.iter().enumerate() {
            for (col, ch) in content.chars().enumerate() {
                if let Some(letter) = Letter::from_char(ch) {
                    grid.set_letter(CellPos::new(row, col), letter).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_longest_word_per_line_only() {
        let dictionary = Dictionary::new(["cat", "cats", "at"]);
        // Row 0 contains both "cat" and "cats"; only the longest scores.
        let grid = grid_from_rows(&["cats", "....", "....", "...."]);
        let words = scoring_words(&grid, &dictionary, 3);
        assert_eq!(words, ["cats"]);
        assert_eq!(game_score(&words), 4);
    }

    #[test]
    fn test_lines_with_holes_skip_unfilled_slices() {
        let dictionary = Dictionary::new(["cat", "cot"]);
        let grid = grid_from_rows(&["cat", "o..", "t.."]);
        // Row 0 reads "cat"; column 0 reads "cot".
        let words = scoring_words(&grid, &dictionary, 3);
        assert_eq!(words, ["cat", "cot"]);
    }

    #[test]
    fn test_no_valid_words_scores_zero() {
        let dictionary = Dictionary::new(["dog"]);
        let grid = grid_from_rows(&["cat", "...", "..."]);
        assert!(scoring_words(&grid, &dictionary, 3).is_empty());
        assert_eq!(game_score(&[]), 0);
    }
}
