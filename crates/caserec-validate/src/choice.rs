//! Controlled-vocabulary ("choice") validation.

use caserec_model::{ChoiceValidity, Vocabulary};

use crate::normalize::normalize_diacritics;

/// Resolve a raw cell against a vocabulary.
///
/// The cell is case-folded per the vocabulary convention, run through the
/// diacritics normalizer, optionally stripped of a leading `<code>-`
/// prefix, and mapped through the alias table. The returned string is the
/// canonical value when one was found, otherwise the best-effort normalized
/// form. The validity flag follows the configured policy: `Membership`
/// reports real set membership, `Permissive` mirrors the historical
/// always-valid behavior.
pub fn validate_choice(
    raw: &str,
    vocabulary: &Vocabulary,
    validity: ChoiceValidity,
) -> (String, bool) {
    let folded = vocabulary.case_fold.apply(raw);
    let mut normalized = normalize_diacritics(&folded);
    if vocabulary.strip_code_prefix
        && let Some((_, rest)) = normalized.split_once('-')
    {
        normalized = rest.trim().to_string();
    }
    let resolved = vocabulary.resolve_alias(&normalized).to_string();
    let valid = match validity {
        ChoiceValidity::Membership => vocabulary.contains(&resolved),
        ChoiceValidity::Permissive => true,
    };
    (resolved, valid)
}
