//! Sentence splitting and fixed-count segmentation.

/// Number of display parts every accepted narrative is segmented into.
pub const STORY_PART_COUNT: usize = 10;

/// Splits text into sentence units.
///
/// A sentence ends at terminal punctuation (`.`, `!`, `?`) followed by
/// whitespace. Runs of terminal punctuation stay with their sentence,
/// so "Что?!" splits after the "!".
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_index, next)) = chars.peek() {
                if next.is_whitespace() {
                    let sentence = text[start..index + c.len_utf8()].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = next_index;
                }
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Segments a narrative into exactly [`STORY_PART_COUNT`] ordered
/// parts.
///
/// Sentences are grouped into contiguous chunks of size
/// `ceil(sentence_count / 10)`, each chunk joined by a single space.
/// When the narrative has fewer than ten sentences the trailing parts
/// are empty; chunk sizes always sum to the sentence count.
pub fn segment_story(text: &str) -> Vec<String> {
    let sentences = split_sentences(text);
    let chunk_size = sentences.len().div_ceil(STORY_PART_COUNT);

    (0..STORY_PART_COUNT)
        .map(|part| {
            let start = (part * chunk_size).min(sentences.len());
            let end = ((part + 1) * chunk_size).min(sentences.len());
            sentences[start..end].join(" ")
        })
        .collect()
}
