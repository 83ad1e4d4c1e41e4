//! Interactive question stages for `fee init`.
//!
//! One suspension point per question; the answers flow into a single
//! immutable `Answers` record consumed by the synthesizer. No shared state
//! lives outside that record.

use crate::models::answers::{Answers, Framework, ModuleType, Purpose, TargetEnv};
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};

/// Run the full question sequence and collect an answer set.
pub fn collect_answers() -> dialoguer::Result<Answers> {
    let theme = ColorfulTheme::default();

    let purpose_items = [
        "To check syntax only",
        "To check syntax and find problems",
    ];
    let purpose = match Select::with_theme(&theme)
        .with_prompt("How would you like to use ESLint?")
        .items(&purpose_items)
        .default(1)
        .interact()?
    {
        0 => Purpose::Syntax,
        _ => Purpose::Problems,
    };

    let module_items = [
        "JavaScript modules (import/export)",
        "CommonJS (require/exports)",
        "None of these",
    ];
    let module_type = match Select::with_theme(&theme)
        .with_prompt("What type of modules does your project use?")
        .items(&module_items)
        .default(0)
        .interact()?
    {
        0 => ModuleType::Esm,
        1 => ModuleType::CommonJs,
        _ => ModuleType::None,
    };

    let framework_items = ["React", "Vue.js", "None of these"];
    let framework = match Select::with_theme(&theme)
        .with_prompt("Which framework does your project use?")
        .items(&framework_items)
        .default(2)
        .interact()?
    {
        0 => Framework::React,
        1 => Framework::Vue,
        _ => Framework::None,
    };

    let env_items = ["Browser", "Node"];
    let selected = MultiSelect::with_theme(&theme)
        .with_prompt("Where does your code run? (space to toggle)")
        .items(&env_items)
        .defaults(&[true, false])
        .interact()?;
    let env = selected
        .into_iter()
        .map(|i| match i {
            0 => TargetEnv::Browser,
            _ => TargetEnv::Node,
        })
        .collect();

    let prettier = Confirm::with_theme(&theme)
        .with_prompt("Do you use Prettier to format your code?")
        .default(true)
        .interact()?;

    Ok(Answers {
        purpose,
        module_type,
        framework,
        env,
        prettier,
    })
}

/// Ask whether to set up IDE file watchers after the configs are written.
pub fn confirm_watchers() -> dialoguer::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Generate JetBrains file watchers for Prettier-on-save?")
        .default(false)
        .interact()
}
