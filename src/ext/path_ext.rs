use std::path::{Component, Path, PathBuf};

/// Renders `path` for humans: canonical when it exists, otherwise made
/// absolute against the current directory with `.` and `..` folded away.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|current_dir| current_dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    fold_dots(&absolute).display().to_string()
}

fn fold_dots(path: &Path) -> PathBuf {
    let mut folded: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(folded.last(), Some(Component::Normal(_))) {
                    folded.pop();
                }
            }
            other => folded.push(other),
        }
    }

    folded.iter().collect()
}

/// Joins the normal components of a relative path with `/`, whatever the
/// platform separator is. Names that are not valid UTF-8 are converted lossily.
pub fn to_slash_string(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub trait PathExt {
    fn best_effort_path_display(&self) -> String;
    fn to_slash_string(&self) -> String;
}

impl PathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn to_slash_string(&self) -> String {
        to_slash_string(self)
    }
}

impl PathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn to_slash_string(&self) -> String {
        to_slash_string(self)
    }
}
