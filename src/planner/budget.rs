use crate::config::WordsPerLink;

/// Number of links an article may receive.
///
/// `floor(word_count / average(words_per_link))` unless `override_links` is set.
///
/// # Examples
/// ```
/// # use kodegen_tools_interlink::config::WordsPerLink;
/// # use kodegen_tools_interlink::planner::link_budget;
/// assert_eq!(link_budget(900, WordsPerLink::new(300, 400), None), 2);
/// assert_eq!(link_budget(900, WordsPerLink::new(300, 400), Some(5)), 5);
/// assert_eq!(link_budget(120, WordsPerLink::new(300, 400), None), 0);
/// ```
#[must_use]
pub fn link_budget(word_count: usize, words_per_link: WordsPerLink, override_links: Option<usize>) -> usize {
    if let Some(max_links) = override_links {
        return max_links;
    }

    let average = words_per_link.average();
    if average <= 0.0 {
        return 0;
    }
    (word_count as f64 / average).floor() as usize
}
