use infix_calculator::evaluator::error::EvalError;

use crate::display;

/// The accumulated input and last result of one interactive calculator
/// session.
///
/// This is the only mutable state outside the evaluation pipeline, and it is
/// owned by the front end: the core evaluates one expression string at a
/// time and keeps nothing between calls.
pub struct Session {
    input: String,
    result: Option<f64>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            input: String::new(),
            result: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Appends pressed text to the accumulated input.
    ///
    /// A result that is still being shown seeds the new input, so the user
    /// keeps calculating with the value they just produced.
    pub fn press(&mut self, text: &str) {
        if let Some(result) = self.result.take() {
            self.input = result.to_string();
        }
        self.input.push_str(text);
    }

    /// Removes the last entered character and hides any shown result while
    /// editing resumes.
    pub fn backspace(&mut self) {
        self.result = None;
        self.input.pop();
    }

    /// Clears the accumulated input and any shown result.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
    }

    /// Evaluates the accumulated input and keeps the rounded result shown
    /// for reuse by the next key press. A failing evaluation leaves the
    /// input untouched so it can be corrected.
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        let result = display::round_for_display(infix_calculator::evaluate(self.input.clone())?);
        self.result = Some(result);
        Ok(result)
    }
}
