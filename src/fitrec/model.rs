use serde::{Deserialize, Serialize};

/// Rest time recorded for a set when the user leaves the prompt empty.
pub const DEFAULT_REST_SECONDS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Compound,
    Isolation,
    Cardio,
}

impl Category {
    /// Maps a menu answer ("1", "2", "3") to a category.
    ///
    /// Anything else, including an empty answer, falls back to
    /// [`Category::Compound`] instead of failing.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Category::Compound,
            "2" => Category::Isolation,
            "3" => Category::Cardio,
            _ => Category::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Compound => "Compound",
            Category::Isolation => "Isolation",
            Category::Cardio => "Cardio",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Compound => "multi-joint",
            Category::Isolation => "single-joint",
            Category::Cardio => "conditioning",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Compound, Category::Isolation, Category::Cardio]
    }
}

/// One performed set of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub weight_kg: f64,
    pub reps: u32,
    #[serde(default = "default_rest_seconds")]
    pub rest_time_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
}

fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

impl Set {
    pub fn new(weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg,
            reps,
            rest_time_seconds: DEFAULT_REST_SECONDS,
            rpe: None,
        }
    }

    pub fn with_rest(mut self, seconds: u32) -> Self {
        self.rest_time_seconds = seconds;
        self
    }

    pub fn with_rpe(mut self, rpe: u8) -> Self {
        self.rpe = Some(rpe);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub category: Category,
    pub sets: Vec<Set>,
}

impl Exercise {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            sets: Vec::new(),
        }
    }

    pub fn with_set(mut self, set: Set) -> Self {
        self.sets.push(set);
        self
    }
}

/// A full training session as sent to the worker's `record_training` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSubmission {
    pub date: String,
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub notes: String,
}

impl TrainingSubmission {
    pub fn new(
        date: impl Into<String>,
        exercises: Vec<Exercise>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            exercises,
            notes: notes.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
