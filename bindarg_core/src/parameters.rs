use std::collections::HashMap;
use std::convert::Infallible;
use std::env;
use std::str::FromStr;

use crate::text::strip_program;
use crate::tokens::{tokenize, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The flags parsed from a command line, each with its (possibly empty) list of values.
///
/// Flag names are matched case-insensitively and never include the leading `-` marker.
/// Entries keep the order in which their flag was first declared.
/// When a flag is declared more than once, the last declaration wins.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::Parameters;
///
/// let parameters = Parameters::from_command_line("foo.exe -One two three -verbose -one four");
///
/// assert_eq!(parameters.get("ONE"), Some(["four".to_string()].as_slice()));
/// assert_eq!(parameters.get("verbose"), Some([].as_slice()));
/// assert_eq!(parameters.get("foo.exe"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    values: Vec<String>,
}

impl Parameters {
    /// Parse the flags of a command line which does not start with the program path.
    ///
    /// Use [`Parameters::from_command_line`] when the line includes the program path.
    pub fn parse(line: &str) -> Self {
        Self::from_tokens(tokenize(line))
    }

    /// Parse a full command line, whose first token is the program path.
    ///
    /// The program path may be quoted (ex: `"C:\Program Files\foo.exe" -one two`).
    /// When the first token is already a flag, nothing is discarded.
    pub fn from_command_line(line: &str) -> Self {
        let flags = strip_program(line);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Skipping program '{}'.", line[..line.len() - flags.len()].trim());
        }

        Self::parse(flags)
    }

    /// Build from an argument vector which has already been split into tokens (without the program path).
    ///
    /// Each argument starting with `-` is a flag, since any quoting has already been removed by the shell.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens(args.into_iter().map(|arg| Token::plain(arg.as_ref())))
    }

    fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut parameters = Parameters::default();
        let mut current: Option<usize> = None;

        for token in tokens {
            match token.flag_name() {
                Some(name) => {
                    current.replace(parameters.declare(name));
                }
                None => match current {
                    Some(position) => parameters.entries[position].values.push(token.text),
                    None => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Discarding '{}', which does not follow any flag.", token.text);
                        }
                    }
                },
            }
        }

        parameters
    }

    /// Build from the arguments of the current process ([`env::args`]), skipping the program path.
    pub fn from_env() -> Self {
        Self::from_args(env::args().skip(1))
    }

    fn declare(&mut self, name: &str) -> usize {
        let key = name.to_lowercase();

        match self.index.get(&key) {
            Some(&position) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag '{name}' declared again, discarding its previous values.");
                }

                self.entries[position].values.clear();
                position
            }
            None => {
                let position = self.entries.len();
                self.entries.push(Entry {
                    name: name.to_string(),
                    values: Vec::default(),
                });
                self.index.insert(key, position);
                position
            }
        }
    }

    /// The values of flag `name` (case-insensitive), or `None` when the flag was not specified.
    ///
    /// A flag specified without values (a switch) gives an empty slice.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| self.entries[position].values.as_slice())
    }

    /// Whether flag `name` (case-insensitive) was specified.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// The number of distinct flags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no flags were specified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the flags (as first spelled) and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }
}

impl FromStr for Parameters {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Parameters::parse(s))
    }
}
