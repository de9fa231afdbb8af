use crate::api::BindOptions;
use crate::binder::BindError;
use crate::parameters::Parameters;

#[cfg(feature = "async")]
mod asynchronous;
#[cfg(feature = "async")]
pub use asynchronous::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The exit codes reserved by bindarg.
///
/// Commands may return any other (positive) code for their own failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// `0`: the command succeeded.
    Success,
    /// `-1`: the command failed.
    GeneralError,
    /// `-2`: no options were bound, so there was nothing to execute.
    NoCommand,
}

impl ExitCode {
    /// The process exit code.
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::GeneralError => -1,
            ExitCode::NoCommand => -2,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(value: ExitCode) -> Self {
        value.code()
    }
}

/// Whether a bound command holds options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// No options have been bound yet.
    Unbound,
    /// Options have been bound, and the command is ready to execute.
    Bound,
}

/// The business logic of a command, executed against its bound options.
///
/// Wrap in a [`BoundCommand`] to bind options and execute.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::{BoundCommand, Command, ExitCode, Parameters};
/// # use bindarg::{capture_values, BindOptions, Binding, InvalidCapture, Nargs, Scalar};
/// # #[derive(Default)]
/// # struct Options { name: String }
/// # fn assign_name(target: &mut Options, values: &[String]) -> Result<(), InvalidCapture> {
/// #     capture_values(Scalar::new(&mut target.name), values)
/// # }
/// # impl BindOptions for Options {
/// #     fn bindings() -> &'static [Binding<Self>] {
/// #         static BINDINGS: &[Binding<Options>] = &[Binding::new("name", true, Nargs::Precisely(1), None, assign_name)];
/// #         BINDINGS
/// #     }
/// # }
///
/// struct Greet;
///
/// impl Command for Greet {
///     type Options = Options;
///
///     fn execute_options(&self, options: &Options) -> i32 {
///         println!("Hello, {}!", options.name);
///         Self::success()
///     }
/// }
///
/// let mut command = BoundCommand::new(Greet);
/// assert_eq!(command.execute(), ExitCode::NoCommand.code());
///
/// command.bind_parameters(&Parameters::parse("-name world")).unwrap();
/// assert_eq!(command.execute(), 0);
/// ```
pub trait Command {
    /// The options this command binds.
    type Options: BindOptions;

    /// Run the business logic against `options`, returning an exit code.
    fn execute_options(&self, options: &Self::Options) -> i32;

    /// The success exit code (`0`).
    fn success() -> i32
    where
        Self: Sized,
    {
        ExitCode::Success.code()
    }

    /// The general failure exit code (`-1`).
    fn fail() -> i32
    where
        Self: Sized,
    {
        ExitCode::GeneralError.code()
    }
}

/// The options slot shared by the sync and async bound commands.
#[derive(Debug)]
pub(crate) struct OptionsSlot<T> {
    options: Option<T>,
}

impl<T: BindOptions> OptionsSlot<T> {
    pub(crate) fn new() -> Self {
        Self { options: None }
    }

    /// Bind fresh options, replacing any previous ones.
    /// On failure, the previous options (if any) are kept.
    pub(crate) fn bind(&mut self, parameters: &Parameters) -> Result<(), BindError> {
        let options = T::bind(parameters)?;

        #[cfg(feature = "tracing_debug")]
        {
            if self.options.is_some() {
                debug!("Re-binding {}.", std::any::type_name::<T>());
            }
        }

        self.options.replace(options);
        Ok(())
    }

    pub(crate) fn options(&self) -> Option<&T> {
        self.options.as_ref()
    }

    pub(crate) fn state(&self) -> CommandState {
        if self.options.is_some() {
            CommandState::Bound
        } else {
            CommandState::Unbound
        }
    }
}

/// A [`Command`] together with its (initially unbound) options.
pub struct BoundCommand<C: Command> {
    command: C,
    slot: OptionsSlot<C::Options>,
}

impl<C: Command> BoundCommand<C> {
    /// Wrap `command`, in the [`CommandState::Unbound`] state.
    pub fn new(command: C) -> Self {
        Self {
            command,
            slot: OptionsSlot::new(),
        }
    }

    /// Bind the command's options from `parameters`.
    ///
    /// On success the command is [`CommandState::Bound`], replacing any previously bound options.
    /// On failure the error is returned as is, and the command keeps its previous state.
    pub fn bind_parameters(&mut self, parameters: &Parameters) -> Result<(), BindError> {
        self.slot.bind(parameters)
    }

    /// Execute the command against its bound options.
    ///
    /// Returns [`ExitCode::NoCommand`] (without running the business logic) when unbound.
    pub fn execute(&self) -> i32 {
        match self.slot.options() {
            Some(options) => self.command.execute_options(options),
            None => ExitCode::NoCommand.code(),
        }
    }

    /// The bound options, if any.
    pub fn options(&self) -> Option<&C::Options> {
        self.slot.options()
    }

    /// The current state.
    pub fn state(&self) -> CommandState {
        self.slot.state()
    }

    /// The wrapped command.
    pub fn command(&self) -> &C {
        &self.command
    }
}
