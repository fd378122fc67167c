//! Fuzzy ranking for the global search box
//!
//! Ranks haystacks against a needle with a tiered score: exact match, then
//! prefix, then substring, then in-order subsequence. Rows that match nowhere
//! rank as `None` and are filtered out by the caller.

/// Ranking scorer used by the global filter.
///
/// Scores are comparable only within one needle: a higher score means a
/// closer match. Ties are broken alphanumerically (case-insensitive) by
/// [`rank_rows`](Self::rank_rows) so the ordering is deterministic.
///
/// # Examples
///
/// ```
/// use grappelli_filters::FuzzyScorer;
///
/// let scorer = FuzzyScorer::new();
/// let exact = scorer.rank("jo", "jo").unwrap();
/// let prefix = scorer.rank("John", "jo").unwrap();
/// let scattered = scorer.rank("Jason Mraz", "jo").unwrap();
/// assert!(exact > prefix);
/// assert!(prefix > scattered);
/// assert_eq!(scorer.rank("Pierre", "jo"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer {
	case_sensitive: bool,
}

const EXACT_SCORE: u32 = 1000;
const PREFIX_SCORE: u32 = 750;
const SUBSTRING_SCORE: u32 = 500;
const SUBSEQUENCE_SCORE: u32 = 250;

impl FuzzyScorer {
	pub fn new() -> Self {
		Self {
			case_sensitive: false,
		}
	}

	/// Makes matching case sensitive
	pub fn case_sensitive(mut self, sensitive: bool) -> Self {
		self.case_sensitive = sensitive;
		self
	}

	/// Ranks `haystack` against `needle`; `None` means no match.
	///
	/// An empty needle matches everything with the lowest possible score.
	pub fn rank(&self, haystack: &str, needle: &str) -> Option<u32> {
		if needle.is_empty() {
			return Some(0);
		}
		let (haystack, needle) = if self.case_sensitive {
			(haystack.to_string(), needle.to_string())
		} else {
			(haystack.to_lowercase(), needle.to_lowercase())
		};

		if haystack == needle {
			return Some(EXACT_SCORE);
		}
		if haystack.starts_with(&needle) {
			// Closer lengths rank higher among prefix matches.
			let slack = (haystack.chars().count() - needle.chars().count()).min(200);
			return Some(PREFIX_SCORE - slack as u32);
		}
		if let Some(position) = haystack.find(&needle) {
			let offset = haystack[..position].chars().count().min(200);
			return Some(SUBSTRING_SCORE - offset as u32);
		}
		subsequence_spread(&haystack, &needle)
			.map(|spread| SUBSEQUENCE_SCORE.saturating_sub(spread.min(200) as u32))
	}

	/// Retains the rows matching `needle`, sorted by descending score with a
	/// case-insensitive alphanumeric tiebreak on the haystack.
	pub fn rank_rows<R>(
		&self,
		rows: &mut Vec<R>,
		needle: &str,
		haystack: impl Fn(&R) -> String,
	) {
		let mut scored: Vec<(u32, String, R)> = Vec::with_capacity(rows.len());
		for row in rows.drain(..) {
			let text = haystack(&row);
			if let Some(score) = self.rank(&text, needle) {
				scored.push((score, text.to_lowercase(), row));
			}
		}
		scored.sort_by(|(score_a, text_a, _), (score_b, text_b, _)| {
			score_b.cmp(score_a).then_with(|| text_a.cmp(text_b))
		});
		rows.extend(scored.into_iter().map(|(_, _, row)| row));
	}
}

/// Distance between the first and last matched character when `needle`
/// appears in `haystack` as an in-order subsequence; `None` when it does not.
fn subsequence_spread(haystack: &str, needle: &str) -> Option<usize> {
	let mut needle_chars = needle.chars();
	let mut wanted = needle_chars.next()?;
	let mut first_hit = None;

	for (index, ch) in haystack.chars().enumerate() {
		if ch == wanted {
			let first = *first_hit.get_or_insert(index);
			match needle_chars.next() {
				Some(next) => wanted = next,
				None => return Some(index - first),
			}
		}
	}
	None
}
