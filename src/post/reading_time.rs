use super::ContentSection;

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Words in a heading or paragraph, split on single spaces.
///
/// Consecutive spaces produce empty words and an empty string counts as one
/// word, so the estimate matches what a plain `split(' ')` reports.
pub fn count_words(text: &str) -> usize {
    text.split(' ').count()
}

/// Estimated minutes to read `content`, rounded up.
pub fn compute_reading_time_minutes(content: &[ContentSection]) -> usize {
    let words: usize = content
        .iter()
        .map(|section| {
            count_words(&section.heading)
                + section
                    .paragraphs
                    .iter()
                    .map(|paragraph| count_words(paragraph))
                    .sum::<usize>()
        })
        .sum();

    words.div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, paragraphs: &[&str]) -> ContentSection {
        ContentSection {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn no_sections_is_zero_minutes() {
        assert_eq!(compute_reading_time_minutes(&[]), 0);
    }

    #[test]
    fn short_post_rounds_up_to_one_minute() {
        let content = [section("Intro", &["one two three"])];
        assert_eq!(compute_reading_time_minutes(&content), 1);
    }

    #[test]
    fn counts_like_a_naive_split() {
        assert_eq!(count_words(""), 1);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("one  two"), 3);
        assert_eq!(count_words(" lead"), 2);
    }

    #[test]
    fn boundaries_of_the_words_per_minute_rate() {
        // heading contributes one word
        let exactly = [section("h", &[&words(199)])];
        assert_eq!(compute_reading_time_minutes(&exactly), 1);

        let over = [section("h", &[&words(200)])];
        assert_eq!(compute_reading_time_minutes(&over), 2);
    }

    #[test]
    fn sums_every_section_and_paragraph() {
        let content = [
            section("Two words", &[&words(150), &words(48)]),
            section("One", &[&words(100)]),
        ];
        // 2 + 150 + 48 + 1 + 100 = 301
        assert_eq!(compute_reading_time_minutes(&content), 2);
    }

    #[test]
    fn never_decreases_as_words_are_added() {
        let mut previous = 0;
        for n in (0..1_000).step_by(37) {
            let minutes = compute_reading_time_minutes(&[section("h", &[&words(n)])]);
            assert!(minutes >= previous);
            previous = minutes;
        }
    }
}
