//! Command dispatch: load settings and the tree, then print query results

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, RenderStyle, Settings};
use crate::domain::display::MAX_TREE_STYLE_DEPTH;
use crate::domain::{DomainError, FamilyTree, TreeDisplay};
use crate::infrastructure::ServiceContainer;

/// Separator printed between the tree and the query in `report`.
pub const REPORT_RULE: &str = "**************";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = cli.project_dir.as_deref().unwrap_or(Path::new("."));
    let settings = Settings::load(Some(project_dir))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);
    let file = cli.file.as_deref();

    match &cli.command {
        Some(Commands::Show { style }) => cmd_show(&container, file, *style),
        Some(Commands::Mrca { first, second }) => {
            cmd_mrca(&container, file, first.as_deref(), second.as_deref())
        }
        Some(Commands::Ancestors { name }) => cmd_ancestors(&container, file, name),
        Some(Commands::Find { name }) => cmd_find(&container, file, name),
        Some(Commands::Report) | None => cmd_report(&container, file),
        Some(Commands::Config { command }) => cmd_config(&container, project_dir, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Text for `show`, in the requested style.
///
/// Trees deeper than [`MAX_TREE_STYLE_DEPTH`] are always printed indented.
pub fn render_tree(tree: &FamilyTree, style: RenderStyle) -> String {
    match style {
        RenderStyle::Indent => tree.render(),
        RenderStyle::Tree => {
            let depth = tree.depth();
            if depth > MAX_TREE_STYLE_DEPTH {
                warn!(
                    "tree has {} generations, printing indented (limit {})",
                    depth, MAX_TREE_STYLE_DEPTH
                );
                return tree.render();
            }
            tree.to_tree_string().to_string()
        }
    }
}

/// Text for `report`: the tree dump followed by the MRCA sentence.
pub fn report_text(tree: &FamilyTree, first: &str, second: &str) -> CliResult<String> {
    let ancestor = tree.most_recent_common_ancestor(first, second)?;
    let name = tree.name_of(ancestor).unwrap_or_default();
    Ok(format!(
        "Tree:\n{}\n{}\n\nMost recent common ancestor of {} and {} is {}",
        tree, REPORT_RULE, first, second, name
    ))
}

#[instrument(level = "debug", skip(container))]
fn cmd_show(
    container: &ServiceContainer,
    file: Option<&Path>,
    style: Option<RenderStyle>,
) -> CliResult<()> {
    let tree = container.genealogy.load_input(file)?;
    if tree.is_empty() {
        output::warning("family tree file is empty");
        return Ok(());
    }
    let style = style.unwrap_or(container.settings.style);
    print!("{}", render_tree(&tree, style));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_mrca(
    container: &ServiceContainer,
    file: Option<&Path>,
    first: Option<&str>,
    second: Option<&str>,
) -> CliResult<()> {
    let (first, second) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => (
            container.settings.query.first.as_str(),
            container.settings.query.second.as_str(),
        ),
        _ => {
            return Err(CliError::InvalidArgs(
                "give both names or none".to_string(),
            ))
        }
    };
    let tree = container.genealogy.load_input(file)?;
    let ancestor = container.genealogy.mrca(&tree, first, second)?;
    output::info(&ancestor);
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_ancestors(container: &ServiceContainer, file: Option<&Path>, name: &str) -> CliResult<()> {
    let tree = container.genealogy.load_input(file)?;
    let ancestors = container.genealogy.ancestors(&tree, name)?;
    output::info(&std::iter::once(name.to_string()).chain(ancestors).join(" <- "));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_find(container: &ServiceContainer, file: Option<&Path>, name: &str) -> CliResult<()> {
    let tree = container.genealogy.load_input(file)?;
    let idx = tree
        .find(name)
        .ok_or_else(|| DomainError::NameNotFound(name.to_string()))?;
    let node = tree
        .get_node(idx)
        .ok_or_else(|| DomainError::NameNotFound(name.to_string()))?;

    output::header(name);
    output::detail(&format!("generation: {}", tree.depth_of(idx)));
    output::detail(&format!("children: {}", node.children.len()));
    let lineage = container.genealogy.ancestors(&tree, name)?;
    if !lineage.is_empty() {
        output::detail(&format!("ancestors: {}", lineage.join(" <- ")));
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_report(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let tree = container.genealogy.load_input(file)?;
    let query = &container.settings.query;
    output::info(&report_text(&tree, &query.first, &query.second)?);
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    project_dir: &Path,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "unavailable"),
            }
            output::action("local", &local_config_path(project_dir).display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TreeBuilder;

    #[test]
    fn test_report_text_layout() {
        let tree = TreeBuilder::build_from_lines(["Bungo:Bilbo,Drogo", "Drogo:Frodo"]).unwrap();
        let text = report_text(&tree, "Bilbo", "Frodo").unwrap();
        assert_eq!(
            text,
            "Tree:\nFamily Tree:\n\nBungo\n  Bilbo\n  Drogo\n    Frodo\n\n**************\n\n\
             Most recent common ancestor of Bilbo and Frodo is Bungo"
        );
    }

    #[test]
    fn test_render_tree_styles_differ() {
        let tree = TreeBuilder::build_from_lines(["A:B"]).unwrap();
        assert_eq!(render_tree(&tree, RenderStyle::Indent), "A\n  B\n");
        assert_eq!(render_tree(&tree, RenderStyle::Tree), "A\n└── B\n");
    }

    #[test]
    fn test_render_tree_style_on_deep_chain_falls_back_to_indent() {
        let mut tree = FamilyTree::new();
        let mut current = tree.add_root("G0");
        for i in 1..2 * MAX_TREE_STYLE_DEPTH {
            current = tree.add_child(current, &format!("G{i}"));
        }

        let rendered = render_tree(&tree, RenderStyle::Tree);

        assert!(rendered.starts_with("G0\n  G1\n    G2\n"));
        assert_eq!(rendered, tree.render());
    }
}
