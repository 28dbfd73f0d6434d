use super::params::{split_counts, GenerationParams, QuestionType};
use super::InvalidParamsError;

/// System instruction carrying the exact JSON schema the Response
/// Parser depends on. The schema string is part of the external
/// contract with the completion service; changing it without updating
/// the parser's extraction heuristic breaks generation silently.
pub const QUIZ_SYSTEM_PROMPT: &str = r#"You are an expert quiz generator. Generate educational quiz questions from the provided document content. Create clear, accurate questions that test comprehension and knowledge. For short questions, provide multiple choice options with one correct answer. For long questions, provide open-ended questions that require detailed explanations. Respond with a single JSON object and nothing else, using the following structure:

{
  "title": "Quiz Title",
  "questions": [
    {
      "id": "1",
      "question": "Question text",
      "type": "short",
      "options": ["A", "B", "C", "D"],
      "correctAnswer": "A"
    },
    {
      "id": "2",
      "question": "Question text",
      "type": "long"
    }
  ]
}"#;

/// Build the user prompt from bounded document text and generation
/// parameters. Fails only on invalid parameters.
pub fn build_generation_prompt(
    text: &str,
    params: &GenerationParams,
) -> Result<String, InvalidParamsError> {
    params.validate()?;

    let request = match params.question_type {
        QuestionType::Mixed => {
            let (short, long) = split_counts(params.question_count);
            format!("generate a mix of {short} short questions and {long} long questions")
        }
        kind => format!("generate {} {} questions", params.question_count, kind.as_str()),
    };

    Ok(format!(
        r#"<document>
{text}
</document>

Analyze the document above and {request} at {difficulty} difficulty level. Make sure questions cover the key concepts and information from the document. Return ONLY the single JSON object described in the system instructions."#,
        difficulty = params.difficulty.as_str(),
    ))
}
