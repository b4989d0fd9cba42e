//! Prompt templates and pipeline constants.
//!
//! The narrative template is an opaque creative product; its literal
//! wording may change freely as long as the structural slots survive:
//! persona, quote, optional source material, and the avoid-list of
//! existing plots.

/// Persona used when the caller supplies no style inspiration.
pub const DEFAULT_INSPIRATION: &str = "Hannibal Lecter";

/// In-character line returned whenever narrative generation fails.
///
/// Shared by every generation-failure path so the product's failure
/// voice stays consistent.
pub const FALLBACK_NARRATIVE: &str = "The whispers grow louder as the darkness deepens. Soon, you'll understand the meaning behind these words. Soon, you'll see what lies beneath the surface.";

/// Placeholder plot summary used when summarization fails.
///
/// Downstream duplicate comparison still proceeds against this text.
pub const FALLBACK_SUMMARY: &str = "A mysterious tale of suspense and psychological intrigue.";

/// Message for an empty or missing quote.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input provided.";

/// Message for missing generation credentials.
pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error. Please contact the administrator.";

/// Clause appended to the quote when a duplicate plot forces a retry.
pub const UNIQUENESS_SUFFIX: &str = " Make the story completely unique.";

/// Output bound for the main narrative call.
pub const NARRATIVE_MAX_TOKENS: u32 = 400;

/// Output bound for the summarization call.
pub const SUMMARY_MAX_TOKENS: u32 = 100;

/// Output bound for a single pairwise plot comparison.
pub const COMPARISON_MAX_TOKENS: u32 = 10;

/// Maximum generation attempts before accepting a possibly-duplicate
/// narrative.
pub const DEFAULT_RETRY_CEILING: usize = 3;

/// Builds the long-form narrative instruction.
///
/// Structural slots: `inspiration` (persona), `quote`, optional
/// `source_material`, and `existing_plots` (avoid-list, omitted when
/// empty).
pub fn narrative_prompt(
    quote: &str,
    source_material: Option<&str>,
    inspiration: &str,
    existing_plots: &[String],
) -> String {
    let source_block = source_material
        .filter(|material| !material.trim().is_empty())
        .map(|material| {
            format!(
                "This story should incorporate elements from this book or text: \"{}\"\n",
                material
            )
        })
        .unwrap_or_default();

    let avoid_block = if existing_plots.is_empty() {
        String::new()
    } else {
        format!(
            "Avoid plots similar to any of these existing story plots:\n{}\n",
            existing_plots.join("\n")
        )
    };

    format!(
        r#"You are writing a dark psychological thriller in Russian, inspired by the writing style of {inspiration}.
Craft a gripping, unsettling short story based on this quote:

"{quote}"

{source_block}The story should evolve dynamically, featuring a clear beginning, development, climax, and resolution. Avoid keeping the story stuck in a single moment or scene. Significant events must unfold, leading to new discoveries, conflicts, and emotional shifts.

Follow a three-act structure:
1. Introduction & Setup: establish the protagonist, their initial state, and a mysterious or unsettling event.
2. Development & Conflict: escalate the tension with unexpected twists, moral dilemmas, and deepening character psychology.
3. Climax & Resolution: deliver a psychologically intense turning point, followed by a haunting conclusion.

Character development and internal struggles are central. Dive deeply into their thoughts, emotions, and the hidden fears that drive them forward.

Here is the ongoing backstory:

Sasha, an FBI agent secretly fascinated by the infamous Hannibal Lecter, struggles with her dual life: outwardly dedicated to justice, yet secretly aiding his crimes. The only person she can confide in is German, her psychologist. German himself is a serial killer, posing as a therapist to find his next victims. He falls obsessively in love with her, unable to decide whether to kill her or prolong their sessions.

This time, take the story in a new direction. Change the circumstances, challenge the characters with new dilemmas, introduce a significant event that forces their dynamic to shift.

Keep the story within 400 words, maintaining a refined yet chilling tone. Write in Russian. Do not include introductory explanations.

{avoid_block}"#
    )
}

/// Builds the summarization instruction.
pub fn summary_prompt(story_text: &str) -> String {
    format!(
        "Summarize the following story into a single concise sentence that captures its essence and main plot points:\n\n{}",
        story_text
    )
}

/// Builds the pairwise plot-comparison instruction.
///
/// The model is asked for a strict "yes"/"no" answer.
pub fn comparison_prompt(candidate: &str, existing: &str) -> String {
    format!(
        "Compare these two plot summaries and determine if they are essentially telling the same story with different words. Answer only with \"yes\" if they are similar or \"no\" if they are different:\n\nPlot 1: {}\nPlot 2: {}",
        candidate, existing
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_prompt_fills_structural_slots() {
        let plots = vec!["An old plot.".to_string()];
        let prompt = narrative_prompt(
            "darkness falls",
            Some("The Silence of the Lambs"),
            "Edgar Allan Poe",
            &plots,
        );

        assert!(prompt.contains("darkness falls"));
        assert!(prompt.contains("Edgar Allan Poe"));
        assert!(prompt.contains("The Silence of the Lambs"));
        assert!(prompt.contains("An old plot."));
    }

    #[test]
    fn narrative_prompt_omits_empty_slots() {
        let prompt = narrative_prompt("darkness falls", None, DEFAULT_INSPIRATION, &[]);
        assert!(!prompt.contains("incorporate elements"));
        assert!(!prompt.contains("Avoid plots similar"));
    }

    #[test]
    fn narrative_prompt_ignores_blank_source_material() {
        let prompt = narrative_prompt("darkness falls", Some("   "), DEFAULT_INSPIRATION, &[]);
        assert!(!prompt.contains("incorporate elements"));
    }

    #[test]
    fn comparison_prompt_embeds_both_summaries() {
        let prompt = comparison_prompt("A new plot.", "An old plot.");
        assert!(prompt.contains("Plot 1: A new plot."));
        assert!(prompt.contains("Plot 2: An old plot."));
    }
}
