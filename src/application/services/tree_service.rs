//! Tree service
//!
//! Front door for interactive callers: parses raw text input, applies it to
//! the tree and reports failures as [`ApplicationError`]s.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::application::services::RandomTreeGenerator;
use crate::application::{ApplicationError, ApplicationResult, Value};
use crate::domain::BinaryContainerTree;

/// Outcome of a membership query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub value: Value,
    pub found: bool,
    /// Depth of the node (root = 0), only when found
    pub depth: Option<i32>,
}

/// Owns the working tree of an interactive session.
#[derive(Debug, Default)]
pub struct TreeService {
    tree: BinaryContainerTree<Value>,
}

impl TreeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(tree: BinaryContainerTree<Value>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &BinaryContainerTree<Value> {
        &self.tree
    }

    pub fn into_tree(self) -> BinaryContainerTree<Value> {
        self.tree
    }

    /// Parse one integer from raw user input (surrounding whitespace ignored).
    pub fn parse_value(raw: &str) -> ApplicationResult<Value> {
        let trimmed = raw.trim();
        trimmed
            .parse::<Value>()
            .map_err(|_| ApplicationError::InvalidInput {
                input: trimmed.to_string(),
            })
    }

    /// Add a value, refusing duplicates explicitly.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_value(&mut self, value: Value) -> ApplicationResult<Value> {
        if !self.tree.is_empty() && self.tree.contains(&value)? {
            return Err(ApplicationError::Duplicate(value));
        }
        self.tree.add(value);
        if !self.tree.validate_structure() {
            warn!("insert_value: invalid structure after adding {}", value);
        }
        info!("inserted {}", value);
        Ok(value)
    }

    pub fn insert(&mut self, raw: &str) -> ApplicationResult<Value> {
        let value = Self::parse_value(raw)?;
        self.insert_value(value)
    }

    /// Remove a value that must be present.
    ///
    /// # Errors
    /// Empty tree (domain error) or [`ApplicationError::NotFound`].
    #[instrument(level = "debug", skip(self))]
    pub fn remove_value(&mut self, value: Value) -> ApplicationResult<Value> {
        if !self.tree.contains(&value)? {
            return Err(ApplicationError::NotFound(value));
        }
        self.tree.remove(&value)?;
        info!("removed {}", value);
        Ok(value)
    }

    pub fn remove(&mut self, raw: &str) -> ApplicationResult<Value> {
        let value = Self::parse_value(raw)?;
        self.remove_value(value)
    }

    /// Membership plus depth of the node when present.
    pub fn lookup_value(&self, value: Value) -> ApplicationResult<Lookup> {
        let found = self.tree.contains(&value)?;
        let depth = if found {
            Some(self.tree.height_of(&value)?)
        } else {
            None
        };
        Ok(Lookup {
            value,
            found,
            depth,
        })
    }

    pub fn lookup(&self, raw: &str) -> ApplicationResult<Lookup> {
        let value = Self::parse_value(raw)?;
        self.lookup_value(value)
    }

    /// Replace the tree with a freshly generated one; returns its size.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        generator: &RandomTreeGenerator,
        rng: &mut R,
    ) -> usize {
        self.tree = generator.generate(rng);
        if !self.tree.validate_structure() {
            warn!("regenerate: invalid structure in generated tree");
        }
        let size = self.tree.size().unwrap_or(0);
        debug!("regenerate: {} nodes", size);
        size
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::rng_from_seed;
    use crate::domain::TreeError;
    use rstest::rstest;

    fn service() -> TreeService {
        TreeService::with_tree([20, 30, 18, 4, 5, 50, 70].into_iter().collect())
    }

    #[rstest]
    #[case(" 42 ", 42)]
    #[case("-7", -7)]
    #[case("0", 0)]
    fn given_numeric_text_when_parsing_then_returns_value(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(TreeService::parse_value(raw), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("4.5")]
    #[case("99999999999")]
    fn given_malformed_text_when_parsing_then_invalid_input(#[case] raw: &str) {
        assert!(matches!(
            TreeService::parse_value(raw),
            Err(ApplicationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn given_existing_value_when_inserting_then_duplicate_error() {
        let mut service = service();
        assert_eq!(service.insert("18"), Err(ApplicationError::Duplicate(18)));
        assert_eq!(service.tree().size(), Ok(7));
    }

    #[test]
    fn given_empty_service_when_inserting_then_value_becomes_root() {
        let mut service = TreeService::new();
        assert_eq!(service.insert("3"), Ok(3));
        assert_eq!(service.tree().path_of(&3), Some("root"));
    }

    #[test]
    fn given_absent_value_when_removing_then_not_found() {
        let mut service = service();
        assert_eq!(service.remove("99"), Err(ApplicationError::NotFound(99)));
    }

    #[test]
    fn given_empty_service_when_removing_then_empty_tree_error() {
        let mut service = TreeService::new();
        assert_eq!(
            service.remove("1"),
            Err(ApplicationError::Tree(TreeError::EmptyTree))
        );
    }

    #[test]
    fn given_present_value_when_looking_up_then_reports_depth() {
        let service = service();
        assert_eq!(
            service.lookup("50"),
            Ok(Lookup {
                value: 50,
                found: true,
                depth: Some(2)
            })
        );
        assert_eq!(service.lookup("51").unwrap().depth, None);
    }

    #[test]
    fn given_seeded_rng_when_regenerating_then_replaces_tree() {
        let mut service = service();
        let generator = RandomTreeGenerator::new(12, 20).unwrap();
        let size = service.regenerate(&generator, &mut rng_from_seed(Some(5)));
        assert_eq!(size, 12);
        assert_eq!(service.tree().size(), Ok(12));
    }
}
