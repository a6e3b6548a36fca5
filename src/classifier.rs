use crate::{
    completion::{ChatMessage, CompletionError, CompletionProvider},
    domain::{Category, ProblemText},
};

fn system_prompt() -> String {
    format!(
        "Ти си класификатор. Върни САМО една от категориите: {}.",
        Category::label_list()
    )
}

// The problem text is embedded verbatim, quotes and all.
fn user_prompt(problem: &ProblemText) -> String {
    format!(
        "Класифицирай следния сигнал: \"{}\". Избери само една категория от списъка.",
        problem.as_str()
    )
}

/// Ask the model for exactly one category label and fold the reply into the
/// closed set.
///
/// One call, no retries. Unrecognised or empty replies become
/// [`Category::FALLBACK`]; only transport and service failures are errors.
#[tracing::instrument(
    name = "Classifying a problem report",
    skip(provider, problem),
    fields(provider = provider.name(), raw_reply = tracing::field::Empty)
)]
pub async fn classify(
    provider: &dyn CompletionProvider,
    problem: &ProblemText,
) -> Result<Category, CompletionError> {
    let messages = [
        ChatMessage::system(system_prompt()),
        ChatMessage::user(user_prompt(problem)),
    ];

    let raw = match provider.complete(&messages).await {
        Ok(raw) => raw,
        Err(CompletionError::EmptyResult) => String::new(),
        Err(e) => return Err(e),
    };
    tracing::Span::current().record("raw_reply", raw.as_str());

    let category = Category::normalize(&raw);
    tracing::info!(category = %category, "Problem classified");

    Ok(category)
}
