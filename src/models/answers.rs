//! Answer set collected by the init wizard.
//!
//! Supplied once per run and never mutated; every downstream step derives
//! from this record.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the generated config should check for.
pub enum Purpose {
    /// Syntax errors only.
    Syntax,
    /// Syntax errors plus problem-finding rules (eslint:recommended).
    Problems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Module system used by the target project.
pub enum ModuleType {
    Esm,
    CommonJs,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Frontend framework in use, if any.
pub enum Framework {
    React,
    Vue,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Runtime environments the code targets.
pub enum TargetEnv {
    Browser,
    Node,
}

impl TargetEnv {
    /// ESLint `env` key for this environment.
    pub fn key(self) -> &'static str {
        match self {
            TargetEnv::Browser => "browser",
            TargetEnv::Node => "node",
        }
    }
}

#[derive(Debug, Clone)]
/// Complete answer set for one `fee init` run.
pub struct Answers {
    pub purpose: Purpose,
    pub module_type: ModuleType,
    pub framework: Framework,
    pub env: Vec<TargetEnv>,
    pub prettier: bool,
}

impl Answers {
    /// Defaults used by `--yes`: the most common frontend setup.
    pub fn defaults() -> Self {
        Answers {
            purpose: Purpose::Problems,
            module_type: ModuleType::Esm,
            framework: Framework::None,
            env: vec![TargetEnv::Browser],
            prettier: true,
        }
    }
}
