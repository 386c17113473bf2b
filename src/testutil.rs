//! Shared test utilities: filesystem fixtures and a scripted prompter.

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::InstallMode;
use crate::prompt::Prompter;

/// Writes each `(relative path, contents)` pair under `root`, creating parent dirs.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
}

/// Lists every entry under `root` keyed by relative path. Directories map to `None`.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Option<Vec<u8>>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path.strip_prefix(root).unwrap().to_path_buf();
        if path.is_dir() {
            out.insert(rel, None);
            walk(root, &path, out);
        } else {
            out.insert(rel, Some(fs::read(&path).unwrap()));
        }
    }
}

/// Asserts both trees hold the same relative paths with identical file bytes.
pub fn assert_same_tree(want: &Path, got: &Path) {
    assert_eq!(
        snapshot(want),
        snapshot(got),
        "{} and {} differ",
        want.display(),
        got.display()
    );
}

/// A [`Prompter`] that replays queued answers. `None` answers simulate Esc/Ctrl-C.
/// Panics if the flow asks a question that was not scripted.
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: VecDeque<Option<InstallMode>>,
    confirms: VecDeque<Option<bool>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, answer: Option<InstallMode>) -> Self {
        self.selections.push_back(answer);
        self
    }

    pub fn with_confirm(mut self, answer: Option<bool>) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn confirm_count(&self) -> usize {
        self.asked.iter().filter(|q| q.starts_with("confirm:")).count()
    }
}

impl Prompter for ScriptedPrompter {
    fn select_location(
        &mut self,
        message: &str,
        options: &[InstallMode],
    ) -> Result<Option<InstallMode>> {
        self.asked.push(format!("select: {}", message));
        let answer = self
            .selections
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected select prompt: {}", message));
        if let Some(mode) = answer {
            assert!(options.contains(&mode), "{} not offered", mode);
        }
        Ok(answer)
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        self.asked.push(format!("confirm: {}", message));
        Ok(self
            .confirms
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirm prompt: {}", message)))
    }
}
