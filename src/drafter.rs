use crate::{
    completion::{ChatMessage, CompletionError, CompletionProvider},
    domain::{Category, Coordinate, ProblemText},
};

/// Used when neither an address nor a coordinate is known.
pub const UNSPECIFIED_LOCATION: &str = "неуточнена";

/// Shown in place of an address when reverse geocoding found nothing.
pub const ADDRESS_NOT_FOUND: &str = "Адресът не е намерен";

/// Returned instead of a letter when the model answers with no content.
pub const EMPTY_LETTER_PLACEHOLDER: &str = "Не беше генериран текст на сигнала. Моля, опитайте отново.";

const SYSTEM_PROMPT: &str = "Ти пишеш кратки официални сигнали до общинска администрация на български. Тон: учтив, конкретен, без емоции.";

/// Human-readable location for the letter.
///
/// A usable address is paired with the coordinate text; a blank or
/// placeholder address is ignored.
pub fn describe_location(coordinate: Option<Coordinate>, address: Option<&str>) -> String {
    let address = address
        .map(str::trim)
        .filter(|a| !a.is_empty() && *a != ADDRESS_NOT_FOUND);

    match (address, coordinate) {
        (Some(address), Some(coordinate)) => format!("{} ({})", address, coordinate),
        (Some(address), None) => address.to_string(),
        (None, Some(coordinate)) => coordinate.to_display_text(),
        (None, None) => UNSPECIFIED_LOCATION.to_string(),
    }
}

fn user_prompt(
    authority: &str,
    problem: &ProblemText,
    category: Category,
    location_description: &str,
) -> String {
    format!(
        "Създай кратък официален сигнал (5–7 изречения) до {authority}.\n\
         Проблем: {problem}\n\
         Категория: {category}\n\
         Локация: {location}\n\
         Изисквания: посочи конкретен участък, очаквано действие, и добави финално благодарствено изречение.",
        authority = authority,
        problem = problem.as_str(),
        category = category.label(),
        location = location_description,
    )
}

/// Draft the letter to `authority`.
///
/// The model's text is returned trimmed and otherwise untouched: sentence
/// count and content are not checked.
#[tracing::instrument(
    name = "Drafting a municipal letter",
    skip(provider, problem),
    fields(provider = provider.name(), category = %category)
)]
pub async fn draft(
    provider: &dyn CompletionProvider,
    authority: &str,
    problem: &ProblemText,
    category: Category,
    location_description: &str,
) -> Result<String, CompletionError> {
    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(
            authority,
            problem,
            category,
            location_description,
        )),
    ];

    match provider.complete(&messages).await {
        Ok(letter) => Ok(letter.trim().to_string()),
        Err(CompletionError::EmptyResult) => {
            tracing::warn!("Completion returned no letter, using placeholder");
            Ok(EMPTY_LETTER_PLACEHOLDER.to_string())
        }
        Err(e) => Err(e),
    }
}
