//! Parsing of intent scripts given on the command line.
//!
//! One intent per string; words are whitespace separated and trailing words
//! form the name or title. `-` stands for the root level.

use crate::application::{BoardIntent, TreeIntent};
use crate::cli::error::{CliError, CliResult};
use crate::domain::NodeId;

const ROOT: &str = "-";

fn split(line: &str) -> CliResult<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or_else(|| CliError::InvalidArgs("empty intent".to_string()))?;
    Ok((verb, words.collect()))
}

fn arg<'a>(args: &[&'a str], pos: usize, what: &str, line: &str) -> CliResult<&'a str> {
    args.get(pos)
        .copied()
        .ok_or_else(|| CliError::InvalidArgs(format!("missing {} in '{}'", what, line)))
}

fn rest(args: &[&str], from: usize, what: &str, line: &str) -> CliResult<String> {
    if args.len() <= from {
        return Err(CliError::InvalidArgs(format!("missing {} in '{}'", what, line)));
    }
    Ok(args[from..].join(" "))
}

fn node_or_root(word: &str) -> Option<NodeId> {
    (word != ROOT).then(|| NodeId::from(word))
}

fn no_extra(args: &[&str], expected: usize, line: &str) -> CliResult<()> {
    if args.len() > expected {
        return Err(CliError::InvalidArgs(format!("unexpected arguments in '{}'", line)));
    }
    Ok(())
}

pub fn parse_tree_intent(line: &str) -> CliResult<TreeIntent> {
    let (verb, args) = split(line)?;
    let intent = match verb {
        "add" => TreeIntent::Add {
            parent: node_or_root(arg(&args, 0, "parent", line)?),
            name: rest(&args, 1, "name", line)?,
        },
        "rename" => TreeIntent::Rename {
            id: arg(&args, 0, "node id", line)?.into(),
            name: rest(&args, 1, "name", line)?,
        },
        "delete" => {
            no_extra(&args, 1, line)?;
            TreeIntent::Delete {
                id: arg(&args, 0, "node id", line)?.into(),
            }
        }
        "move" => {
            no_extra(&args, 2, line)?;
            TreeIntent::Move {
                id: arg(&args, 0, "node id", line)?.into(),
                target: node_or_root(arg(&args, 1, "target", line)?),
            }
        }
        "toggle" => {
            no_extra(&args, 1, line)?;
            TreeIntent::Toggle {
                id: arg(&args, 0, "node id", line)?.into(),
            }
        }
        "expand" => {
            no_extra(&args, 1, line)?;
            TreeIntent::Expand {
                id: arg(&args, 0, "node id", line)?.into(),
            }
        }
        other => return Err(CliError::InvalidArgs(format!("unknown tree intent: {}", other))),
    };
    Ok(intent)
}

pub fn parse_board_intent(line: &str) -> CliResult<BoardIntent> {
    let (verb, args) = split(line)?;
    let intent = match verb {
        "add" => BoardIntent::Add {
            column: arg(&args, 0, "column", line)?.into(),
            title: rest(&args, 1, "title", line)?,
        },
        "rename" => BoardIntent::Rename {
            id: arg(&args, 0, "card id", line)?.into(),
            title: rest(&args, 1, "title", line)?,
        },
        "delete" => {
            no_extra(&args, 1, line)?;
            BoardIntent::Delete {
                id: arg(&args, 0, "card id", line)?.into(),
            }
        }
        "move" => {
            no_extra(&args, 3, line)?;
            let index = args
                .get(2)
                .map(|raw| {
                    raw.parse::<usize>()
                        .map_err(|_| CliError::InvalidArgs(format!("invalid index '{}' in '{}'", raw, line)))
                })
                .transpose()?;
            BoardIntent::Move {
                id: arg(&args, 0, "card id", line)?.into(),
                to: arg(&args, 1, "column", line)?.into(),
                index,
            }
        }
        other => return Err(CliError::InvalidArgs(format!("unknown board intent: {}", other))),
    };
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add - New Folder", TreeIntent::Add { parent: None, name: "New Folder".into() })]
    #[case("add root3 notes.md", TreeIntent::Add { parent: Some("root3".into()), name: "notes.md".into() })]
    #[case("rename a1  UI   Kit", TreeIntent::Rename { id: "a1".into(), name: "UI Kit".into() })]
    #[case("move a1 -", TreeIntent::Move { id: "a1".into(), target: None })]
    #[case("move a1 root2", TreeIntent::Move { id: "a1".into(), target: Some("root2".into()) })]
    #[case("expand root1", TreeIntent::Expand { id: "root1".into() })]
    fn given_tree_line_when_parsing_then_yields_intent(#[case] line: &str, #[case] expected: TreeIntent) {
        assert_eq!(parse_tree_intent(line).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("add -")]
    #[case("rename a1")]
    #[case("delete")]
    #[case("delete a b")]
    #[case("fly a1")]
    fn given_malformed_tree_line_when_parsing_then_invalid_args(#[case] line: &str) {
        assert!(matches!(parse_tree_intent(line), Err(CliError::InvalidArgs(_))));
    }

    #[rstest]
    #[case("add todo Write docs", BoardIntent::Add { column: "todo".into(), title: "Write docs".into() })]
    #[case("move 1 done", BoardIntent::Move { id: "1".into(), to: "done".into(), index: None })]
    #[case("move 1 done 0", BoardIntent::Move { id: "1".into(), to: "done".into(), index: Some(0) })]
    #[case("delete 3", BoardIntent::Delete { id: "3".into() })]
    fn given_board_line_when_parsing_then_yields_intent(#[case] line: &str, #[case] expected: BoardIntent) {
        assert_eq!(parse_board_intent(line).unwrap(), expected);
    }

    #[test]
    fn given_non_numeric_index_when_parsing_then_invalid_args() {
        assert!(matches!(
            parse_board_intent("move 1 done top"),
            Err(CliError::InvalidArgs(_))
        ));
    }
}
