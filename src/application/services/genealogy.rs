//! Genealogy service
//!
//! Locates the family tree file, feeds its lines to the builder and answers
//! name-level queries for the CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{DomainError, FamilyTree, TreeBuilder};
use crate::infrastructure::traits::FileSystem;

/// Service for loading family trees and querying them by name.
pub struct GenealogyService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl GenealogyService {
    /// Create a new genealogy service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Pick the input file.
    ///
    /// An explicit path wins. Otherwise the configured data directory (or the
    /// current directory when it does not exist) must hold exactly one file
    /// with the configured extension.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_input(&self, explicit: Option<&Path>) -> ApplicationResult<PathBuf> {
        if let Some(path) = explicit {
            if !self.fs.is_file(path) {
                return Err(ApplicationError::InputNotFound(path.to_path_buf()));
            }
            return Ok(path.to_path_buf());
        }

        let dir = if self.fs.is_dir(&self.settings.data_dir) {
            self.settings.data_dir.clone()
        } else {
            debug!(
                "data dir {} missing, searching current directory",
                self.settings.data_dir.display()
            );
            PathBuf::from(".")
        };

        let mut candidates: Vec<PathBuf> = self
            .fs
            .read_dir(&dir)
            .with_path_context("list directory", &dir)?
            .into_iter()
            .filter(|p| self.fs.is_file(p) && self.has_input_extension(p))
            .collect();

        match candidates.len() {
            0 => Err(ApplicationError::NoInputFiles(dir)),
            1 => Ok(candidates.remove(0)),
            _ => Err(ApplicationError::AmbiguousInput { dir, candidates }),
        }
    }

    fn has_input_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.settings.extension.as_str()))
    }

    /// Read `path` and build the tree from its lines in file order.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<FamilyTree> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read family tree", path)?;

        let tree = TreeBuilder::build_from_lines(content.lines()).map_err(|source| {
            ApplicationError::Build {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!("loaded {} individuals from {}", tree.len(), path.display());
        Ok(tree)
    }

    /// Resolve the input file and load it.
    pub fn load_input(&self, explicit: Option<&Path>) -> ApplicationResult<FamilyTree> {
        let path = self.resolve_input(explicit)?;
        self.load(&path)
    }

    /// Name of the most recent common ancestor of `name1` and `name2`.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn mrca(&self, tree: &FamilyTree, name1: &str, name2: &str) -> ApplicationResult<String> {
        let idx = tree.most_recent_common_ancestor(name1, name2)?;
        Ok(Self::name(tree, idx))
    }

    /// Ancestor names of `name`, nearest first.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn ancestors(&self, tree: &FamilyTree, name: &str) -> ApplicationResult<Vec<String>> {
        let idx = tree
            .find(name)
            .ok_or_else(|| DomainError::NameNotFound(name.to_string()))?;
        Ok(tree
            .ancestor_chain(idx)
            .into_iter()
            .map(|a| Self::name(tree, a))
            .collect())
    }

    fn name(tree: &FamilyTree, idx: generational_arena::Index) -> String {
        tree.name_of(idx).unwrap_or_default().to_string()
    }
}
