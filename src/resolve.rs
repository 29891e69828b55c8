//! Option resolution: typed parsing, filesystem checks, option lookup, and
//! configuration fallback.
//!
//! A value is chosen from the command line first, then from the
//! configuration store, then from the parser's own default.

mod context;
mod fallback;
mod fs;
mod options;
mod parse;

pub use context::ResolutionContext;
pub use fallback::resolve_with_fallback;
pub use fs::{full_path, resolve_directory, resolve_file, ResolvedPath};
pub use options::{
    find_option, CommandOption, OptionId, OptionKind, OptionRegistry, OptionSet,
};
pub use parse::{
    parse_bool, parse_date, parse_date_time, parse_decimal, parse_int, parse_list, parse_long,
    parse_string, parse_time, parse_uri, DEFAULT_LIST_SEPARATORS,
};
