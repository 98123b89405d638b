//! Command dispatch: builds the working tree and runs one subcommand on it

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::services::{
    complete_report, rng_from_seed, RandomTreeGenerator, TreeService, TreeStatistics,
};
use crate::application::{ApplicationError, Value};
use crate::cli::args::{ChildrenArg, Cli, Commands, ConfigCommands, OrderArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::shell::Shell;
use crate::config::{global_config_path, Settings};
use crate::domain::{BinaryContainerTree, TraversalOrder, TreeRender};

/// Execute a CLI command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // completions need neither settings nor a tree
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = effective_settings(cli)?;

    if let Some(Commands::Config { command }) = &cli.command {
        return cmd_config(command, &settings);
    }

    let tree = build_tree(cli, &settings)?;
    let default = Commands::Show {
        paths: settings.show_paths,
    };

    match cli.command.as_ref().unwrap_or(&default) {
        Commands::Show { paths } => cmd_show(&tree, *paths || settings.show_paths),
        Commands::Traverse { order, numbered } => cmd_traverse(&tree, *order, *numbered),
        Commands::Stats => cmd_stats(&tree),
        Commands::Report => {
            output::info(&complete_report(&tree)?);
            Ok(())
        }
        Commands::Leaves => cmd_leaves(&tree),
        Commands::Nodes { children } => cmd_nodes(&tree, *children),
        Commands::Subtree { value } => {
            output::info(&tree.print_sub_tree(value)?);
            Ok(())
        }
        Commands::Contains { value } => cmd_contains(tree, *value),
        Commands::Height { value } => cmd_height(tree, *value),
        Commands::Add { values } => cmd_add(tree, values, settings.show_paths),
        Commands::Remove { values } => cmd_remove(tree, values, settings.show_paths),
        Commands::Validate => cmd_validate(&tree),
        Commands::Shell => cmd_shell(tree, &settings),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

/// Loaded settings with the generator flags applied on top.
fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(count) = cli.count {
        settings.generator.count = count;
    }
    if let Some(max) = cli.max {
        settings.generator.max_value = max;
    }
    if cli.seed.is_some() {
        settings.generator.seed = cli.seed;
    }
    debug!("effective_settings: {:?}", settings);
    Ok(settings)
}

/// Tree from `--values` in the given order, otherwise a random one.
#[instrument(level = "debug", skip_all)]
fn build_tree(cli: &Cli, settings: &Settings) -> CliResult<BinaryContainerTree<Value>> {
    if !cli.values.is_empty() {
        if cli.seed.is_some() || cli.count.is_some() || cli.max.is_some() {
            return Err(CliError::Usage(
                "--values cannot be combined with --seed, --count or --max".to_string(),
            ));
        }
        info!("build_tree: {} explicit values", cli.values.len());
        return Ok(cli.values.iter().copied().collect());
    }
    let generator = RandomTreeGenerator::from_settings(&settings.generator)?;
    let mut rng = rng_from_seed(settings.generator.seed);
    let tree = generator.generate(&mut rng);
    info!(
        "build_tree: random tree of {} values in [0, {}]",
        generator.effective_count(),
        generator.max_value()
    );
    Ok(tree)
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "exists" } else { "not found" };
                output::action("Global", &format!("{} ({})", path.display(), state));
            }
            None => {
                return Err(CliError::Application(ApplicationError::config(
                    "cannot determine config directory",
                )))
            }
        },
        ConfigCommands::Init => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_show(tree: &BinaryContainerTree<Value>, paths: bool) -> CliResult<()> {
    output::header("Binary tree");
    let rendered = if paths {
        tree.to_path_tree_string()
    } else {
        tree.to_tree_string()
    };
    output::info(&rendered);
    if !tree.is_empty() {
        output::info(tree);
    }
    Ok(())
}

fn cmd_traverse(tree: &BinaryContainerTree<Value>, order: OrderArg, numbered: bool) -> CliResult<()> {
    for order in order.orders() {
        let line = if numbered {
            numbered_line(tree, order)?
        } else {
            tree.traversal(order)?
        };
        output::action(order.label(), &line);
    }
    Ok(())
}

fn numbered_line(tree: &BinaryContainerTree<Value>, order: TraversalOrder) -> CliResult<String> {
    if tree.is_empty() {
        return Err(crate::domain::TreeError::EmptyTree.into());
    }
    Ok(tree
        .numbered(order)
        .into_iter()
        .map(|(n, v)| format!("{n}:{v}"))
        .join(" "))
}

fn cmd_stats(tree: &BinaryContainerTree<Value>) -> CliResult<()> {
    let stats = TreeStatistics::from_tree(tree)?;
    output::header("Statistics");
    output::info(&stats);
    Ok(())
}

fn cmd_leaves(tree: &BinaryContainerTree<Value>) -> CliResult<()> {
    output::info(&tree.print_leaves()?);
    output::action("Total leaves", &tree.total_leaves()?);
    Ok(())
}

fn cmd_nodes(tree: &BinaryContainerTree<Value>, children: ChildrenArg) -> CliResult<()> {
    let listing = match children {
        ChildrenArg::One => tree.print_nodes_1_child()?,
        ChildrenArg::Two => tree.print_nodes_2_children()?,
        ChildrenArg::Any => tree.print_nodes_with_children()?,
    };
    output::info(listing.trim_end());
    Ok(())
}

fn cmd_contains(tree: BinaryContainerTree<Value>, value: Value) -> CliResult<()> {
    let lookup = TreeService::with_tree(tree).lookup_value(value)?;
    match lookup.depth {
        Some(depth) => output::success(&format!("{value} exists in the tree (depth {depth})")),
        None => output::failure(&format!("{value} does not exist in the tree")),
    }
    Ok(())
}

fn cmd_height(tree: BinaryContainerTree<Value>, value: Option<Value>) -> CliResult<()> {
    match value {
        None => {
            output::action("Tree height", &tree.height()?);
            output::action("Number of elements", &tree.size()?);
        }
        Some(value) => {
            let lookup = TreeService::with_tree(tree).lookup_value(value)?;
            match lookup.depth {
                Some(depth) => output::action(&format!("Height of {value}"), &depth),
                None => output::failure(&format!("{value} does not exist in the tree")),
            }
        }
    }
    Ok(())
}

/// Rejected values are reported and skipped, the rest are applied.
fn cmd_add(tree: BinaryContainerTree<Value>, values: &[Value], paths: bool) -> CliResult<()> {
    let mut service = TreeService::with_tree(tree);
    for value in values {
        match service.insert_value(*value) {
            Ok(v) => output::success(&format!("added {v}")),
            Err(e) => output::warning(&e),
        }
    }
    cmd_show(service.tree(), paths)
}

fn cmd_remove(tree: BinaryContainerTree<Value>, values: &[Value], paths: bool) -> CliResult<()> {
    let mut service = TreeService::with_tree(tree);
    for value in values {
        match service.remove_value(*value) {
            Ok(v) => output::success(&format!("removed {v}")),
            Err(e) => output::warning(&e),
        }
    }
    cmd_show(service.tree(), paths)
}

/// Fails only on a broken structure; balance is reported, not enforced.
fn cmd_validate(tree: &BinaryContainerTree<Value>) -> CliResult<()> {
    let valid = tree.validate_structure();
    if valid {
        output::success("structure: ok");
    } else {
        output::failure("structure: violated");
    }
    if tree.is_height_balanced() {
        output::success("height balance: ok");
    } else {
        output::action("height balance", "subtree heights differ by more than one");
    }
    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidStructure)
    }
}

fn cmd_shell(tree: BinaryContainerTree<Value>, settings: &Settings) -> CliResult<()> {
    let generator = RandomTreeGenerator::from_settings(&settings.generator)?;
    let rng = rng_from_seed(settings.generator.seed);
    let stdin = io::stdin();
    let mut shell = Shell::new(
        TreeService::with_tree(tree),
        generator,
        rng,
        stdin.lock(),
        io::stdout(),
    );
    shell.run()
}
