//!
//! Post-build action
//!
//! A list of commands run after the final link. Arguments may hold
//! `$TARGET`, which stands for the linked image until `bind` fills it in
//!

use serde::Serialize;

pub const TARGET_PLACEHOLDER: &str = "$TARGET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostStep {
    pub program: String,
    pub args: Vec<String>,
}

impl PostStep {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostAction {
    pub steps: Vec<PostStep>,
}

impl PostAction {
    ///
    /// Convert the linked image to a raw binary, then report its size
    ///
    pub fn objcopy_and_size(objcopy: &str, size: &str, binary_name: &str) -> Self {
        Self {
            steps: vec![
                PostStep::new(objcopy, ["-O", "binary", TARGET_PLACEHOLDER, binary_name]),
                PostStep::new(size, [TARGET_PLACEHOLDER]),
            ],
        }
    }

    /// Replace every `$TARGET` with the given image path
    pub fn bind(&self, target: &str) -> PostAction {
        let steps = self
            .steps
            .iter()
            .map(|step| PostStep {
                program: step.program.clone(),
                args: step
                    .args
                    .iter()
                    .map(|arg| arg.replace(TARGET_PLACEHOLDER, target))
                    .collect(),
            })
            .collect();

        PostAction { steps }
    }

    /// One newline-terminated line per step
    pub fn render(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.render() + "\n")
            .collect()
    }
}
