//! Built-in component catalogue

use super::{Component, Registry};
use crate::error::Result;

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    script: &'static str,
    estimated_time: &'static str,
    dependencies: &'static [&'static str],
    standalone: bool,
    auto_select: bool,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "termux-prep",
        name: "Termux Preparation",
        description: "Environment detection, storage permissions, PATH configuration",
        script: "prepare-termux.sh",
        estimated_time: "30 seconds",
        dependencies: &[],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "prerequisites",
        name: "Prerequisites",
        description: "Install nodejs, npm, git, openssh, curl, python",
        script: "install-prereqs.sh",
        estimated_time: "2-3 minutes",
        dependencies: &["termux-prep"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "proot-setup",
        name: "Proot-Distro Setup",
        description: "Ubuntu container for tools incompatible with Termux",
        script: "setup-proot.sh",
        estimated_time: "3-5 minutes",
        dependencies: &["prerequisites"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "cli-tools",
        name: "CLI Tools Installation",
        description: "Install development CLIs with automatic fallback",
        script: "install-cli-suite.js",
        estimated_time: "2-4 minutes",
        dependencies: &["prerequisites"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "shim-generation",
        name: "Command Shim Generation",
        description: "Seamless access to proot-installed tools",
        script: "generate-shims.js",
        estimated_time: "10 seconds",
        dependencies: &["proot-setup", "cli-tools"],
        standalone: false,
        auto_select: true,
    },
    Entry {
        id: "github-setup",
        name: "GitHub Automation",
        description: "SSH key generation, authentication, git config",
        script: "setup-github.js",
        estimated_time: "1-2 minutes",
        dependencies: &["prerequisites"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "repo-cloning",
        name: "Repository Cloning",
        description: "Clone project repository to ~/projects",
        script: "clone-repo.js",
        estimated_time: "1-2 minutes",
        dependencies: &["github-setup"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "shell-customization",
        name: "Shell Customization",
        description: "Helpful aliases, git-aware PS1 prompt",
        script: "apply-shell-config.sh",
        estimated_time: "10 seconds",
        dependencies: &["termux-prep"],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "verification",
        name: "Verification",
        description: "Comprehensive health checks for installed components",
        script: "verify-installation.sh",
        estimated_time: "30 seconds",
        dependencies: &[],
        standalone: false,
        auto_select: false,
    },
    Entry {
        id: "uninstallation",
        name: "Uninstallation",
        description: "Complete removal of all installed components",
        script: "uninstall.sh",
        estimated_time: "1-2 minutes",
        dependencies: &[],
        standalone: true,
        auto_select: false,
    },
];

impl Entry {
    fn to_component(&self) -> Component {
        Component {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            estimated_time: self.estimated_time.to_string(),
            script: self.script.to_string(),
            dependencies: self
                .dependencies
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
            required: false,
            standalone: self.standalone,
            auto_select: self.auto_select,
        }
    }
}

impl Registry {
    /// The built-in catalogue; the declaration order is the canonical execution order
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table itself is inconsistent, which the tests below rule out.
    pub fn builtin() -> Result<Self> {
        Self::from_declaration_order(ENTRIES.iter().map(Entry::to_component).collect())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn builtin() -> Registry {
        Registry::builtin().expect("built-in registry must be valid")
    }

    #[test]
    fn test_builtin_has_all_components() {
        let registry = builtin();
        assert_eq!(registry.components().len(), 10);
        assert_eq!(registry.canonical_order().first().map(String::as_str), Some("termux-prep"));
        assert_eq!(
            registry.canonical_order().last().map(String::as_str),
            Some("uninstallation")
        );
    }

    #[test]
    fn test_builtin_components_have_metadata() {
        for component in builtin().components() {
            assert!(!component.name.is_empty(), "{} has a name", component.id);
            assert!(!component.description.is_empty(), "{} has a description", component.id);
            assert!(!component.script.is_empty(), "{} has a script", component.id);
            assert!(
                !component.estimated_time.is_empty(),
                "{} has an estimated time",
                component.id
            );
        }
    }

    #[test]
    fn test_builtin_dependency_chains() {
        let registry = builtin();
        let deps = |id: &str| registry.find(id).expect("component exists").dependencies.clone();

        assert!(deps("termux-prep").is_empty());
        assert_eq!(deps("cli-tools"), vec!["prerequisites"]);
        assert_eq!(deps("repo-cloning"), vec!["github-setup"]);
        assert_eq!(deps("github-setup"), vec!["prerequisites"]);
        assert_eq!(deps("shim-generation"), vec!["proot-setup", "cli-tools"]);
    }

    #[test]
    fn test_builtin_flags() {
        let registry = builtin();
        let uninstall = registry.find("uninstallation").expect("component exists");
        assert!(uninstall.standalone);
        assert!(uninstall.dependencies.is_empty());

        let shims = registry.find("shim-generation").expect("component exists");
        assert!(shims.auto_select);
    }

    #[test]
    fn test_builtin_script_interpreters() {
        let registry = builtin();
        assert!(
            registry
                .find("cli-tools")
                .expect("component exists")
                .script
                .ends_with(".js")
        );
        assert!(
            registry
                .find("termux-prep")
                .expect("component exists")
                .script
                .ends_with(".sh")
        );
    }
}
