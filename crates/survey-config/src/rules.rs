//! Business-rule limits enforced by the survey service.

use serde::{Deserialize, Serialize};

const fn default_max_questions() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Upper bound on questions per survey and answers per response.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
        }
    }
}
