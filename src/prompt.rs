// Prompt templates for the study tasks

/// Number of characters of a document sent to the model.
pub const EXCERPT_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Summary,
    Mcqs,
    Flashcards,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::Summary => write!(f, "summary"),
            TaskKind::Mcqs => write!(f, "mcqs"),
            TaskKind::Flashcards => write!(f, "flashcards"),
        }
    }
}

impl TaskKind {
    fn instruction(&self) -> &'static str {
        match self {
            TaskKind::Summary => concat!(
                "You are an assistant that summarizes study notes. ",
                "Given the following notes, return a JSON object with fields: ",
                "paragraph_summary (string), key_points (array of up to 5 strings).",
            ),
            TaskKind::Mcqs => concat!(
                "Generate 5 multiple choice questions (A-D) from the notes. ",
                "Return results as a JSON array of objects with: question, ",
                "options (array of 4), correct (index 0-3), explanation.",
            ),
            TaskKind::Flashcards => concat!(
                "Create 10 flashcards as JSON array of objects with: front, back. ",
                "Keep answers concise.",
            ),
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            TaskKind::Summary => 0.3,
            TaskKind::Mcqs | TaskKind::Flashcards => 0.4,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            TaskKind::Summary => 400,
            TaskKind::Mcqs | TaskKind::Flashcards => 800,
        }
    }

    /// JSON field carrying the raw model output in the HTTP response.
    pub fn response_field(&self) -> &'static str {
        match self {
            TaskKind::Summary => "raw_summary",
            TaskKind::Mcqs => "raw_mcqs",
            TaskKind::Flashcards => "raw_flashcards",
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of `text` (all of it if shorter).
pub fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_prompt(kind: TaskKind, text: &str) -> String {
    format!("{}\n\nNotes:\n{}", kind.instruction(), excerpt(text))
}
