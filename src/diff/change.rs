use derive_more::Display;

/// How a path differs between a baseline snapshot and a later one.
///
/// Displays as the report line for the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Change<'a> {
    #[display("+ {_0}")]
    Added(&'a str),
    #[display("- {_0}")]
    Removed(&'a str),
    #[display("* {_0}")]
    Modified(&'a str),
}

impl<'a> Change<'a> {
    pub fn path(&self) -> &'a str {
        match self {
            Change::Added(path) | Change::Removed(path) | Change::Modified(path) => path,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Change::Added(_) => '+',
            Change::Removed(_) => '-',
            Change::Modified(_) => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(Change::Added("src/new.rs"), "+ src/new.rs", '+')]
    #[case(Change::Removed("old.txt"), "- old.txt", '-')]
    #[case(Change::Modified("a b/c.txt"), "* a b/c.txt", '*')]
    fn test_change_display(#[case] change: Change, #[case] line: &str, #[case] marker: char) {
        assert_eq!(change.to_string(), line);
        assert_eq!(change.marker(), marker);
        assert_eq!(&line[2..], change.path());
    }
}
