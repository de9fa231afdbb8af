use std::fmt::Display;

use terminal_size::{terminal_size, Width};

use crate::api::BindOptions;
use crate::constant::*;
use crate::dispatch::UserInterface;
use crate::model::Nargs;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FlagUsage {
    flag: &'static str,
    required: bool,
    nargs: Nargs,
    help: Option<&'static str>,
}

impl FlagUsage {
    fn grammar(&self) -> String {
        let name_example = self.flag.to_ascii_uppercase().replace('-', "_");

        match self.nargs {
            Nargs::Precisely(0) => "".to_string(),
            Nargs::Precisely(n) => format!(
                " {}",
                (0..n)
                    .map(|_| name_example.clone())
                    .collect::<Vec<String>>()
                    .join(" ")
            ),
            Nargs::Any => format!(" [{name_example} ...]"),
            Nargs::AtLeastOne => format!(" {name_example} [...]"),
        }
    }

    fn description(&self) -> String {
        match (self.help, self.required) {
            (Some(help), true) => format!("{help} (required)"),
            (Some(help), false) => help.to_string(),
            (None, true) => "(required)".to_string(),
            (None, false) => "".to_string(),
        }
    }
}

/// The usage message of a program whose options are `T`.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::Usage;
/// # use bindarg::{BindOptions, Binding, InvalidCapture, Nargs};
/// # #[derive(Default)]
/// # struct Options;
/// # fn ignore(_target: &mut Options, _values: &[String]) -> Result<(), InvalidCapture> {
/// #     Ok(())
/// # }
/// # impl BindOptions for Options {
/// #     fn bindings() -> &'static [Binding<Self>] {
/// #         static BINDINGS: &[Binding<Options>] = &[
/// #             Binding::new("name", true, Nargs::Precisely(1), Some("Who to greet."), ignore),
/// #             Binding::new("verbose", false, Nargs::Precisely(0), None, ignore),
/// #         ];
/// #         BINDINGS
/// #     }
/// # }
///
/// let usage = Usage::of::<Options>("greeter");
///
/// assert_eq!(
///     usage.render_width(80),
///     "usage: greeter -name NAME [-verbose]\n\noptions:\n -name NAME   Who to greet. (required)\n -verbose"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    program: String,
    flags: Vec<FlagUsage>,
}

impl Usage {
    /// Describe the bindings of `T`, in declaration order.
    pub fn of<T: BindOptions>(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flags: T::bindings()
                .iter()
                .map(|binding| FlagUsage {
                    flag: binding.flag(),
                    required: binding.is_required(),
                    nargs: binding.nargs(),
                    help: binding.help(),
                })
                .collect(),
        }
    }

    /// Render the message, wrapped to the width of the terminal.
    ///
    /// Falls back to 80 columns when the terminal width cannot be detected.
    pub fn render(&self) -> String {
        self.render_width(self.width())
    }

    /// Render the message, wrapped to `width` columns.
    ///
    /// Help text is never squeezed below a minimum width, so very narrow widths may be exceeded.
    pub fn render_width(&self, width: usize) -> String {
        self.lines(width).join("\n")
    }

    pub(crate) fn print(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.lines(self.width()) {
            user_interface.print(line);
        }
    }

    fn width(&self) -> usize {
        if let Some((Width(terminal_width), _)) = terminal_size() {
            terminal_width as usize
        } else {
            DEFAULT_TERMINAL_WIDTH
        }
    }

    fn lines(&self, width: usize) -> Vec<String> {
        let mut summary = vec![format!("usage: {p}", p = self.program)];
        let mut lefts = Vec::default();

        for flag_usage in &self.flags {
            let left = format!("-{f}{g}", f = flag_usage.flag, g = flag_usage.grammar());

            if flag_usage.required {
                summary.push(left.clone());
            } else {
                summary.push(format!("[{left}]"));
            }

            lefts.push(left);
        }

        let mut out = vec![summary.join(" ")];

        if self.flags.is_empty() {
            return out;
        }

        let left_width = lefts
            .iter()
            .map(|left| left.chars().count())
            .max()
            .unwrap_or_default();
        let help_width = std::cmp::max(
            width.saturating_sub(INDENT + left_width + PADDING),
            MINIMUM_HELP_WIDTH,
        );
        let indent = " ".repeat(INDENT);
        let padding = " ".repeat(PADDING);

        out.push("".to_string());
        out.push("options:".to_string());

        for (flag_usage, left) in self.flags.iter().zip(lefts) {
            let parts = chunk(&flag_usage.description(), help_width);

            if parts.is_empty() {
                out.push(format!("{indent}{left}"));
            }

            for (i, part) in parts.iter().enumerate() {
                if i == 0 {
                    out.push(format!("{indent}{left:left_width$}{padding}{part}"));
                } else {
                    out.push(format!("{indent}{:left_width$}{padding}{part}", ""));
                }
            }
        }

        out
    }
}

impl Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Requires a width of at least 2, leaving room for the hyphen.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
