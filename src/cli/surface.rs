//! Turns the clap declaration and parse result into an [`OptionSet`].

use crate::resolve::{CommandOption, OptionKind, OptionSet};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// How a declared argument takes values.
pub fn option_kind(arg: &Arg) -> OptionKind {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse | ArgAction::Count => OptionKind::NoValue,
        ArgAction::Append => OptionKind::MultipleValue,
        _ => match arg.get_num_args() {
            Some(range) if range.min_values() == 0 => OptionKind::SingleOrNoValue,
            Some(range) if range.max_values() > 1 => OptionKind::MultipleValue,
            _ => OptionKind::SingleValue,
        },
    }
}

/// Options declared on `command` with the values the user supplied.
///
/// `command` must be built so propagated globals are included. Arguments
/// without a long name and help/version switches are skipped. Defaults do
/// not count as supplied values.
pub fn option_set(command: &Command, matches: &ArgMatches) -> OptionSet {
    let mut set = OptionSet::default();
    for arg in command.get_arguments() {
        let Some(long) = arg.get_long() else {
            continue;
        };
        if matches!(
            arg.get_action(),
            ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
        ) {
            continue;
        }

        let id = arg.get_id().as_str();
        let kind = option_kind(arg);
        let mut option = CommandOption::new(long, kind);

        let supplied = matches!(
            matches.value_source(id),
            Some(ValueSource::CommandLine | ValueSource::EnvVariable)
        );
        if supplied {
            let values = match kind {
                OptionKind::NoValue => Vec::new(),
                _ => raw_values(matches, id),
            };
            option = option.with_values(values);
        }
        set.push(option);
    }
    set
}

/// Option set of the invoked subcommand, or of `root` when none was given.
pub fn subcommand_option_set(root: &mut Command, matches: &ArgMatches) -> OptionSet {
    root.build();
    match matches.subcommand() {
        Some((name, sub_matches)) => match root.find_subcommand(name) {
            Some(sub) => option_set(sub, sub_matches),
            None => OptionSet::default(),
        },
        None => option_set(root, matches),
    }
}

fn raw_values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .try_get_raw(id)
        .ok()
        .flatten()
        .map(|values| values.map(|v| v.to_string_lossy().into_owned()).collect())
        .unwrap_or_default()
}
