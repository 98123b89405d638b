//! Interactive session over any line source and sink.
//!
//! Failed commands are reported and the loop keeps going; only I/O failures
//! on the sink (or the source) end the session with an error.

use std::io::{BufRead, Write};

use colored::Colorize;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use crate::application::services::{RandomTreeGenerator, TreeService, TreeStatistics};
use crate::application::{ApplicationError, ApplicationResult};
use crate::cli::error::{CliError, CliResult};
use crate::domain::{TraversalOrder, TreeRender};

const PROMPT: &str = "bintree> ";

const HELP: &str = "\
Commands:
  add N        insert N
  remove N     delete N
  contains N   membership and depth of N
  height [N]   tree height, or depth of N
  size         number of elements
  leaves       list leaves
  pre|in|post  traversal
  show         draw the tree
  stats        statistics
  random       replace the tree with a random one
  clear        remove all elements
  help         this text
  quit         leave the shell";

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Shell<R, W> {
    service: TreeService,
    generator: RandomTreeGenerator,
    rng: StdRng,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        service: TreeService,
        generator: RandomTreeGenerator,
        rng: StdRng,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            generator,
            rng,
            input,
            output,
        }
    }

    pub fn service(&self) -> &TreeService {
        &self.service
    }

    pub fn into_service(self) -> TreeService {
        self.service
    }

    /// Read-eval-print until `quit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}").map_err(|e| CliError::io("write prompt", e))?;
            self.output
                .flush()
                .map_err(|e| CliError::io("flush output", e))?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| CliError::io("read input", e))?;
            if read == 0 {
                writeln!(self.output).map_err(|e| CliError::io("write output", e))?;
                return Ok(());
            }

            let text = match self.respond(&line) {
                Ok(Reply::Quit) => return Ok(()),
                Ok(Reply::Text(text)) => text,
                Err(e) => format!("{}: {}", "error".red().bold(), e),
            };
            if !text.is_empty() {
                writeln!(self.output, "{text}").map_err(|e| CliError::io("write output", e))?;
            }
        }
    }

    /// Evaluate one input line against the session tree.
    #[instrument(level = "debug", skip(self))]
    pub fn respond(&mut self, line: &str) -> ApplicationResult<Reply> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Reply::Text(String::new()));
        };
        let argument = words.next();
        debug!("respond: {} {:?}", command, argument);

        let tree = self.service.tree();
        let text = match (command.to_lowercase().as_str(), argument) {
            ("quit" | "exit" | "q", _) => return Ok(Reply::Quit),
            ("help" | "?", _) => HELP.to_string(),
            ("add", Some(raw)) => format!("added {}", self.service.insert(raw)?),
            ("remove", Some(raw)) => format!("removed {}", self.service.remove(raw)?),
            ("contains", Some(raw)) => {
                let lookup = self.service.lookup(raw)?;
                match lookup.depth {
                    Some(depth) => format!("{} exists in the tree (depth {})", lookup.value, depth),
                    None => format!("{} does not exist in the tree", lookup.value),
                }
            }
            ("height", Some(raw)) => {
                let lookup = self.service.lookup(raw)?;
                match lookup.depth {
                    Some(depth) => format!("Height of {}: {}", lookup.value, depth),
                    None => format!("{} does not exist in the tree", lookup.value),
                }
            }
            ("height", None) => format!("Tree height: {}", tree.height()?),
            ("size", _) => format!("Number of elements: {}", tree.size()?),
            ("leaves", _) => format!(
                "{}\nTotal leaves: {}",
                tree.print_leaves()?,
                tree.total_leaves()?
            ),
            ("pre", _) => traversal_line(tree, TraversalOrder::Pre)?,
            ("in", _) => traversal_line(tree, TraversalOrder::In)?,
            ("post", _) => traversal_line(tree, TraversalOrder::Post)?,
            ("show", _) => tree.to_tree_string().to_string().trim_end().to_string(),
            ("stats", _) => TreeStatistics::from_tree(tree)?.to_string(),
            ("random", _) => {
                let size = self.service.regenerate(&self.generator, &mut self.rng);
                format!("generated a random tree with {size} elements")
            }
            ("clear", _) => {
                self.service.clear();
                "tree cleared".to_string()
            }
            ("add" | "remove" | "contains", None) => {
                return Err(ApplicationError::MissingArgument {
                    command: command.to_string(),
                })
            }
            _ => {
                return Err(ApplicationError::UnknownCommand(line.trim().to_string()))
            }
        };
        Ok(Reply::Text(text))
    }
}

fn traversal_line(
    tree: &crate::domain::BinaryContainerTree<crate::application::Value>,
    order: TraversalOrder,
) -> ApplicationResult<String> {
    Ok(format!("{}: {}", order, tree.traversal(order)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::rng_from_seed;
    use std::io::Cursor;

    fn shell(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell::new(
            TreeService::with_tree([20, 30, 18, 4, 5, 50, 70].into_iter().collect()),
            RandomTreeGenerator::new(10, 20).unwrap(),
            rng_from_seed(Some(3)),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn text(reply: ApplicationResult<Reply>) -> String {
        match reply {
            Ok(Reply::Text(t)) => t,
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn given_sample_when_asking_traversals_then_prints_orders() {
        let mut shell = shell("");
        assert_eq!(text(shell.respond("pre")), "PreOrder: 20 30 4 70 50 18 5");
        assert_eq!(text(shell.respond("in")), "InOrder: 70 4 30 50 20 5 18");
        assert_eq!(text(shell.respond("post")), "PostOrder: 70 4 50 30 5 18 20");
    }

    #[test]
    fn given_value_when_adding_then_size_grows() {
        let mut shell = shell("");
        assert_eq!(text(shell.respond("add 9")), "added 9");
        assert_eq!(text(shell.respond("size")), "Number of elements: 8");
    }

    #[test]
    fn given_duplicate_when_adding_then_error_and_tree_unchanged() {
        let mut shell = shell("");
        assert_eq!(shell.respond("add 20"), Err(ApplicationError::Duplicate(20)));
        assert_eq!(shell.service().tree().size(), Ok(7));
    }

    #[test]
    fn given_malformed_number_when_adding_then_invalid_input() {
        let mut shell = shell("");
        assert!(matches!(
            shell.respond("add x"),
            Err(ApplicationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn given_unknown_word_when_responding_then_unknown_command() {
        let mut shell = shell("");
        assert_eq!(
            shell.respond("frobnicate 3"),
            Err(ApplicationError::UnknownCommand("frobnicate 3".to_string()))
        );
        let err = shell.respond("remove").unwrap_err();
        assert_eq!(
            err,
            ApplicationError::MissingArgument {
                command: "remove".to_string()
            }
        );
        assert_eq!(err.to_string(), "remove needs a value");
    }

    #[test]
    fn given_cleared_tree_when_asking_height_then_empty_tree_error() {
        let mut shell = shell("");
        assert_eq!(text(shell.respond("clear")), "tree cleared");
        assert_eq!(
            shell.respond("height"),
            Err(ApplicationError::Tree(crate::domain::TreeError::EmptyTree))
        );
    }

    #[test]
    fn given_value_when_asking_height_then_reports_depth() {
        let mut shell = shell("");
        assert_eq!(text(shell.respond("height 50")), "Height of 50: 2");
        assert_eq!(text(shell.respond("height 51")), "51 does not exist in the tree");
    }

    #[test]
    fn given_script_when_running_then_errors_do_not_stop_loop() {
        let mut shell = shell("bogus\nremove 20\ncontains 20\nquit\nsize\n");
        shell.run().unwrap();
        let out = String::from_utf8(shell.output.clone()).unwrap();
        assert!(out.contains("bogus"));
        assert!(out.contains("removed 20"));
        assert!(out.contains("20 does not exist in the tree"));
        assert!(!out.contains("Number of elements"));
        assert_eq!(shell.service().tree().size(), Ok(6));
    }

    #[test]
    fn given_end_of_input_when_running_then_returns_ok() {
        let mut shell = shell("size\n");
        assert!(shell.run().is_ok());
        let out = String::from_utf8(shell.output.clone()).unwrap();
        assert!(out.contains("Number of elements: 7"));
    }

    #[test]
    fn given_seeded_rng_when_randomizing_then_tree_replaced() {
        let mut shell = shell("");
        assert_eq!(
            text(shell.respond("random")),
            "generated a random tree with 10 elements"
        );
        assert!(shell.service().tree().validate_structure());
    }
}
