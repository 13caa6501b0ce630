//! CLI overrides on top of file configuration.

use crate::domain::{Config, TreeOrder};

/// Settings given explicitly on the command line. `None`/`false` means
/// "not given" and leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tree_order: Option<TreeOrder>,
    pub exclude_globs: Option<Vec<String>>,
    pub include_hidden: bool,
}

/// CLI > file > defaults. Exclude globs from both sources are combined.
pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(order) = overrides.tree_order {
        config.tree_order = order;
    }
    if let Some(globs) = overrides.exclude_globs {
        for glob in globs {
            if !config.exclude_globs.contains(&glob) {
                config.exclude_globs.push(glob);
            }
        }
    }
    if overrides.include_hidden {
        config.include_hidden = true;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_win_over_file_values() {
        let file = Config {
            tree_order: TreeOrder::Insertion,
            exclude_globs: vec!["*.lock".to_string()],
            include_hidden: false,
        };
        let merged = merge_cli_with_config(
            file,
            CliOverrides {
                tree_order: Some(TreeOrder::DirsFirst),
                exclude_globs: Some(vec!["*.lock".to_string(), "dist/**".to_string()]),
                include_hidden: true,
            },
        );

        assert_eq!(merged.tree_order, TreeOrder::DirsFirst);
        assert_eq!(merged.exclude_globs, vec!["*.lock".to_string(), "dist/**".to_string()]);
        assert!(merged.include_hidden);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let file = Config { tree_order: TreeOrder::Insertion, ..Config::default() };
        let merged = merge_cli_with_config(file.clone(), CliOverrides::default());
        assert_eq!(merged, file);
    }
}
