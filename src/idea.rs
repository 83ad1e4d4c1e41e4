//! JetBrains file-watcher generation for Prettier-on-save.
//!
//! Two outputs per run:
//! - `.idea/watcherTasks.xml`, written fresh: one task per watched file
//!   type invoking Prettier on the saved file, restricted to a named scope.
//! - Named scope elements merged into `.idea/workspace.xml`: every stale
//!   scope owned by fee is removed first, then the current run's scopes are
//!   appended, so regeneration is idempotent and never duplicates entries.
//!
//! Scope patterns are JetBrains boolean expressions over `file[<project>]`
//! path matches; the project name token comes from the `.iml` file stem.

use crate::models::WatchRule;
use crate::utils;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use xmltree::{Element, EmitterConfig, XMLNode};

/// Fixed file-type -> scope-name table. A file type outside this table is
/// rejected during normalization, never silently passed through.
pub const SCOPE_TABLE: [(&str, &str); 4] = [
    ("js", "fee_scope_js"),
    ("scss", "fee_scope_scss"),
    ("md", "fee_scope_md"),
    ("vue", "fee_scope_vue"),
];

/// Directories excluded when a watch rule has no patterns of its own.
const DEFAULT_EXCLUDES: [&str; 3] = ["node_modules", ".git", ".svn"];

const SCOPE_MANAGER: &str = "NamedScopeManager";

#[derive(Debug, Error)]
pub enum IdeaError {
    #[error("failed to read/write IDE files: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid workspace.xml: {0}")]
    Parse(#[from] xmltree::ParseError),
    #[error("failed to serialize workspace.xml: {0}")]
    Emit(#[from] xmltree::Error),
}

#[derive(Debug, Clone)]
/// A discovered JetBrains project: its `.idea` directory, the workspace
/// settings file, and the project name token from the `.iml` stem.
pub struct IdeProject {
    pub idea_dir: PathBuf,
    pub workspace: PathBuf,
    pub project_name: String,
}

#[derive(Debug, Clone)]
/// One validated watch entry with its resolved scope name attached.
pub struct WatchTarget {
    pub file_type: String,
    pub scope: &'static str,
    pub rule: WatchRule,
}

/// Derive and install watcher rules for `root`.
///
/// Returns `Ok(false)` without touching any file when the project layout
/// is not usable (zero or multiple workspace/.iml files); that condition
/// is reported on stderr, not raised.
pub fn generate(root: &Path, rules: &[(String, WatchRule)]) -> Result<bool, IdeaError> {
    let Some(project) = discover(root) else {
        return Ok(false);
    };
    let targets = normalize_targets(rules);
    fs::write(
        project.idea_dir.join("watcherTasks.xml"),
        watcher_tasks_xml(&targets),
    )?;
    merge_scopes(&project, &targets)?;
    Ok(true)
}

/// Locate exactly one `workspace.xml` and exactly one `*.iml` under
/// `<root>/.idea`. Anything else is reported and yields `None`.
pub fn discover(root: &Path) -> Option<IdeProject> {
    let idea_dir = root.join(".idea");
    let entries = match fs::read_dir(&idea_dir) {
        Ok(e) => e,
        Err(_) => {
            eprintln!(
                "{} no .idea directory under {}",
                utils::error_prefix(),
                root.to_string_lossy()
            );
            return None;
        }
    };
    let mut workspaces: Vec<PathBuf> = Vec::new();
    let mut imls: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some("workspace.xml") {
            workspaces.push(path);
        } else if path.extension().and_then(|e| e.to_str()) == Some("iml") {
            imls.push(path);
        }
    }
    if workspaces.len() != 1 || imls.len() != 1 {
        eprintln!(
            "{} expected exactly one workspace.xml and one .iml under {} (found {} and {})",
            utils::error_prefix(),
            idea_dir.to_string_lossy(),
            workspaces.len(),
            imls.len()
        );
        return None;
    }
    let project_name = imls[0]
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    Some(IdeProject {
        idea_dir,
        workspace: workspaces.remove(0),
        project_name,
    })
}

/// Resolve scope names for the caller's watch rules.
///
/// Unknown file types are logged and dropped; the run continues with the
/// remaining entries.
pub fn normalize_targets(rules: &[(String, WatchRule)]) -> Vec<WatchTarget> {
    let mut targets = Vec::new();
    for (file_type, rule) in rules {
        match scope_name(file_type) {
            Some(scope) => targets.push(WatchTarget {
                file_type: file_type.clone(),
                scope,
                rule: rule.clone(),
            }),
            None => {
                eprintln!(
                    "{} unknown watch file type \"{}\"; expected one of: {}",
                    utils::error_prefix(),
                    file_type,
                    SCOPE_TABLE
                        .iter()
                        .map(|(t, _)| *t)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
    }
    targets
}

fn scope_name(file_type: &str) -> Option<&'static str> {
    SCOPE_TABLE
        .iter()
        .find(|(t, _)| *t == file_type)
        .map(|(_, s)| *s)
}

/// Render the full `watcherTasks.xml` document for the given targets.
pub fn watcher_tasks_xml(targets: &[WatchTarget]) -> String {
    let mut tasks = String::new();
    for t in targets {
        tasks.push_str(&format!(
            r#"    <TaskOptions isEnabled="true">
      <option name="arguments" value="--write $FilePathRelativeToProjectRoot$" />
      <option name="checkSyntaxErrors" value="true" />
      <option name="description" value="" />
      <option name="exitCodeBehavior" value="ERROR" />
      <option name="fileExtension" value="{ty}" />
      <option name="immediateSync" value="false" />
      <option name="name" value="fee-prettier-{ty}" />
      <option name="output" value="$FilePathRelativeToProjectRoot$" />
      <option name="outputFilters">
        <array />
      </option>
      <option name="outputFromStdout" value="false" />
      <option name="program" value="$ProjectFileDir$/node_modules/.bin/prettier" />
      <option name="runOnExternalChanges" value="false" />
      <option name="scopeName" value="{scope}" />
      <option name="trackOnlyRoot" value="true" />
      <option name="workingDir" value="$ProjectFileDir$" />
      <envs />
    </TaskOptions>
"#,
            ty = t.file_type,
            scope = t.scope,
        ));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project version=\"4\">\n  <component name=\"ProjectTasksOptions\">\n{tasks}  </component>\n</project>"
    )
}

/// Build the boolean path-match pattern for one watch rule.
///
/// Empty rule lists mean "everything except the default exclusions", so the
/// expression must be a conjunction of negated terms. Include lists become a
/// disjunction of positive terms; exclude lists a conjunction of negated
/// ones. Directory entries (trailing `/`) match recursively.
pub fn scope_pattern(project: &str, rule: &WatchRule) -> String {
    if rule.patterns.is_empty() {
        return DEFAULT_EXCLUDES
            .iter()
            .map(|d| format!("!file[{project}]:{d}//*"))
            .collect::<Vec<_>>()
            .join("&&");
    }
    let terms: Vec<String> = rule
        .patterns
        .iter()
        .map(|p| match p.strip_suffix('/') {
            Some(dir) => format!("file[{project}]:{dir}//*"),
            None => format!("file[{project}]:{p}"),
        })
        .collect();
    if rule.include {
        terms.join("||")
    } else {
        terms
            .iter()
            .map(|t| format!("!{t}"))
            .collect::<Vec<_>>()
            .join("&&")
    }
}

/// Merge scope elements for `targets` into the project's workspace.xml.
///
/// The scope container is created when absent. Every scope name owned by
/// fee (the whole fixed table, not just the current run) is cleared first
/// so stale entries from previous runs never accumulate.
pub fn merge_scopes(project: &IdeProject, targets: &[WatchTarget]) -> Result<(), IdeaError> {
    let content = fs::read_to_string(&project.workspace)?;
    let mut doc = Element::parse(content.as_bytes())?;

    let idx = match scope_manager_index(&doc) {
        Some(i) => i,
        None => {
            let mut el = Element::new("component");
            el.attributes
                .insert("name".to_string(), SCOPE_MANAGER.to_string());
            doc.children.push(XMLNode::Element(el));
            doc.children.len() - 1
        }
    };
    let manager = match &mut doc.children[idx] {
        XMLNode::Element(e) => e,
        _ => unreachable!(),
    };

    let owned: HashSet<&str> = SCOPE_TABLE.iter().map(|(_, s)| *s).collect();
    manager.children.retain(|node| match node {
        XMLNode::Element(e) if e.name == "scope" => !e
            .attributes
            .get("name")
            .map(|n| owned.contains(n.as_str()))
            .unwrap_or(false),
        _ => true,
    });

    for t in targets {
        let mut el = Element::new("scope");
        el.attributes.insert("name".to_string(), t.scope.to_string());
        el.attributes.insert(
            "pattern".to_string(),
            scope_pattern(&project.project_name, &t.rule),
        );
        manager.children.push(XMLNode::Element(el));
    }

    let mut buf = Vec::new();
    doc.write_with_config(&mut buf, EmitterConfig::new().perform_indent(true))?;
    fs::write(&project.workspace, buf)?;
    Ok(())
}

fn scope_manager_index(doc: &Element) -> Option<usize> {
    doc.children.iter().position(|node| {
        matches!(node, XMLNode::Element(e)
            if e.name == "component"
                && e.attributes.get("name").map(String::as_str) == Some(SCOPE_MANAGER))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WORKSPACE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project version="4">
  <component name="PropertiesComponent">
    <property name="settings.editor.selected" value="preferences.lookFeel" />
  </component>
</project>
"#;

    fn ide_root(dir: &Path) -> PathBuf {
        let idea = dir.join(".idea");
        fs::create_dir_all(&idea).unwrap();
        fs::write(idea.join("workspace.xml"), WORKSPACE).unwrap();
        fs::write(idea.join("myapp.iml"), "<module type=\"WEB_MODULE\" />").unwrap();
        dir.to_path_buf()
    }

    fn rule(patterns: &[&str], include: bool) -> WatchRule {
        WatchRule {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            include,
        }
    }

    fn count_scopes(workspace: &Path) -> Vec<(String, String)> {
        let content = fs::read_to_string(workspace).unwrap();
        let doc = Element::parse(content.as_bytes()).unwrap();
        let mut scopes = Vec::new();
        for node in &doc.children {
            if let XMLNode::Element(e) = node {
                if e.name == "component"
                    && e.attributes.get("name").map(String::as_str) == Some(SCOPE_MANAGER)
                {
                    for child in &e.children {
                        if let XMLNode::Element(s) = child {
                            if s.name == "scope" {
                                scopes.push((
                                    s.attributes["name"].clone(),
                                    s.attributes["pattern"].clone(),
                                ));
                            }
                        }
                    }
                }
            }
        }
        scopes
    }

    #[test]
    fn test_empty_rule_is_three_negated_exclusions() {
        let p = scope_pattern("myapp", &rule(&[], true));
        assert_eq!(
            p,
            "!file[myapp]:node_modules//*&&!file[myapp]:.git//*&&!file[myapp]:.svn//*"
        );
        assert!(!p.contains("||"));
        assert_eq!(p.matches('!').count(), 3);
    }

    #[test]
    fn test_include_list_is_disjunction() {
        let p = scope_pattern("myapp", &rule(&["src/", "index.js"], true));
        assert_eq!(p, "file[myapp]:src//*||file[myapp]:index.js");
    }

    #[test]
    fn test_exclude_list_is_negated_conjunction() {
        let p = scope_pattern("myapp", &rule(&["dist/", "vendor.js"], false));
        assert_eq!(p, "!file[myapp]:dist//*&&!file[myapp]:vendor.js");
    }

    #[test]
    fn test_unknown_file_type_is_dropped() {
        let rules = vec![
            ("js".to_string(), rule(&[], true)),
            ("xyz".to_string(), rule(&[], true)),
        ];
        let targets = normalize_targets(&rules);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].file_type, "js");
        let xml = watcher_tasks_xml(&targets);
        assert!(xml.contains("fee-prettier-js"));
        assert!(!xml.contains("xyz"));
    }

    #[test]
    fn test_watcher_tasks_document_shape() {
        let targets = normalize_targets(&[
            ("js".to_string(), rule(&[], true)),
            ("vue".to_string(), rule(&[], true)),
        ]);
        let xml = watcher_tasks_xml(&targets);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<TaskOptions").count(), 2);
        assert!(xml.contains("name=\"ProjectTasksOptions\""));
        assert!(xml.contains("scopeName\" value=\"fee_scope_vue\""));
        assert!(xml.contains("fileExtension\" value=\"js\""));
        assert!(xml.contains("node_modules/.bin/prettier"));
    }

    #[test]
    fn test_discovery_happy_path() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        let project = discover(&root).unwrap();
        assert_eq!(project.project_name, "myapp");
        assert!(project.workspace.ends_with(".idea/workspace.xml"));
    }

    #[test]
    fn test_two_iml_files_refuse_without_writing() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        fs::write(root.join(".idea/other.iml"), "<module />").unwrap();
        assert!(discover(&root).is_none());
        let wrote = generate(&root, &[("js".to_string(), rule(&[], true))]).unwrap();
        assert!(!wrote);
        assert!(!root.join(".idea/watcherTasks.xml").exists());
        assert_eq!(fs::read_to_string(root.join(".idea/workspace.xml")).unwrap(), WORKSPACE);
    }

    #[test]
    fn test_generate_writes_tasks_and_scopes() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        let rules = vec![
            ("js".to_string(), rule(&["src/"], true)),
            ("scss".to_string(), rule(&[], true)),
        ];
        assert!(generate(&root, &rules).unwrap());
        assert!(root.join(".idea/watcherTasks.xml").exists());
        let scopes = count_scopes(&root.join(".idea/workspace.xml"));
        assert_eq!(
            scopes,
            vec![
                ("fee_scope_js".to_string(), "file[myapp]:src//*".to_string()),
                (
                    "fee_scope_scss".to_string(),
                    "!file[myapp]:node_modules//*&&!file[myapp]:.git//*&&!file[myapp]:.svn//*"
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        let rules = vec![
            ("js".to_string(), rule(&[], true)),
            ("md".to_string(), rule(&[], true)),
        ];
        assert!(generate(&root, &rules).unwrap());
        assert!(generate(&root, &rules).unwrap());
        let scopes = count_scopes(&root.join(".idea/workspace.xml"));
        assert_eq!(scopes.len(), 2);
    }

    #[test]
    fn test_merge_preserves_unrelated_components() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        assert!(generate(&root, &[("js".to_string(), rule(&[], true))]).unwrap());
        let content = fs::read_to_string(root.join(".idea/workspace.xml")).unwrap();
        assert!(content.contains("PropertiesComponent"));
        assert!(content.contains("preferences.lookFeel"));
    }

    #[test]
    fn test_rerun_drops_types_no_longer_watched() {
        let dir = tempdir().unwrap();
        let root = ide_root(dir.path());
        let all = vec![
            ("js".to_string(), rule(&[], true)),
            ("md".to_string(), rule(&[], true)),
        ];
        assert!(generate(&root, &all).unwrap());
        let only_js = vec![("js".to_string(), rule(&[], true))];
        assert!(generate(&root, &only_js).unwrap());
        let scopes = count_scopes(&root.join(".idea/workspace.xml"));
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].0, "fee_scope_js");
    }
}
