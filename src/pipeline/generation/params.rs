use serde::{Deserialize, Serialize};

use super::InvalidParamsError;

/// Requested question style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Multiple choice.
    Short,
    /// Open-ended.
    Long,
    /// Half short, half long (long gets the odd remainder).
    Mixed,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Short => "short",
            QuestionType::Long => "long",
            QuestionType::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Caller-tunable generation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub question_type: QuestionType,
    pub question_count: u32,
    pub difficulty: Difficulty,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            question_type: QuestionType::Mixed,
            question_count: 10,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GenerationParams {
    /// A zero question count is the only invalid combination.
    pub fn validate(&self) -> Result<(), InvalidParamsError> {
        if self.question_count == 0 {
            return Err(InvalidParamsError(
                "question_count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Mixed-mode split of `n` questions into (short, long): short takes the
/// floor, long takes the remainder when `n` is odd.
pub fn split_counts(n: u32) -> (u32, u32) {
    (n / 2, n - n / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_floor_ceil() {
        assert_eq!(split_counts(10), (5, 5));
        assert_eq!(split_counts(15), (7, 8));
        assert_eq!(split_counts(5), (2, 3));
        assert_eq!(split_counts(1), (0, 1));
    }

    #[test]
    fn zero_count_is_invalid() {
        let params = GenerationParams {
            question_count: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn defaults_match_ui_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.question_type, QuestionType::Mixed);
        assert_eq!(params.question_count, 10);
        assert_eq!(params.difficulty, Difficulty::Medium);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: GenerationParams =
            serde_json::from_str(r#"{"question_count": 5}"#).unwrap();
        assert_eq!(params.question_count, 5);
        assert_eq!(params.question_type, QuestionType::Mixed);
    }

    #[test]
    fn enums_use_snake_case_tags() {
        let params: GenerationParams = serde_json::from_str(
            r#"{"question_type": "short", "question_count": 3, "difficulty": "hard"}"#,
        )
        .unwrap();
        assert_eq!(params.question_type, QuestionType::Short);
        assert_eq!(params.difficulty, Difficulty::Hard);
    }
}
