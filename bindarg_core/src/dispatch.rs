use std::env;

use crate::command::{BoundCommand, Command, ExitCode};
use crate::parameters::Parameters;
use crate::text::substring_after_last;

#[cfg(feature = "async")]
use crate::command::{AsyncCommand, BoundAsyncCommand};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

mod interface;
mod usage;

pub(crate) use interface::*;
pub use usage::Usage;

/// Binds and executes commands on behalf of a program.
///
/// When binding fails, the error and the program's usage message are printed and [`ExitCode::GeneralError`] is returned.
///
/// ### Example
/// ```no_run
/// # use bindarg_core as bindarg;
/// use bindarg::{BoundCommand, Command, Dispatcher, Parameters};
/// # use bindarg::{BindOptions, Binding};
/// # #[derive(Default)]
/// # struct Options;
/// # impl BindOptions for Options {
/// #     fn bindings() -> &'static [Binding<Self>] {
/// #         &[]
/// #     }
/// # }
/// # struct Greet;
/// # impl Command for Greet {
/// #     type Options = Options;
/// #     fn execute_options(&self, _options: &Options) -> i32 {
/// #         Self::success()
/// #     }
/// # }
///
/// let mut command = BoundCommand::new(Greet);
/// let exit_code = Dispatcher::from_env().run(&mut command, &Parameters::from_env());
/// std::process::exit(exit_code);
/// ```
pub struct Dispatcher {
    program: String,
    user_interface: Box<dyn UserInterface>,
}

impl Dispatcher {
    /// Create a dispatcher for `program`, which prints to the console.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_interface(program, Box::new(ConsoleInterface::default()))
    }

    /// Create a dispatcher named after the executable of the current process.
    pub fn from_env() -> Self {
        let argv0 = env::args().next().unwrap_or_default();
        Self::new(substring_after_last(&argv0, &['/', '\\']))
    }

    pub(crate) fn with_interface(
        program: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            user_interface,
        }
    }

    /// The program name shown in the usage message.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Bind `command` from `parameters`, then execute it.
    ///
    /// Returns the command's exit code, or [`ExitCode::GeneralError`] when binding fails.
    pub fn run<C: Command>(self, command: &mut BoundCommand<C>, parameters: &Parameters) -> i32 {
        match command.bind_parameters(parameters) {
            Ok(()) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dispatching {}.", self.program);
                }

                command.execute()
            }
            Err(error) => {
                self.user_interface.print_error(error);
                Usage::of::<C::Options>(&self.program).print(&*self.user_interface);
                ExitCode::GeneralError.code()
            }
        }
    }

    /// Bind `command` from `parameters`, then execute it to completion.
    ///
    /// Returns the command's exit code, or [`ExitCode::GeneralError`] when binding fails.
    #[cfg(feature = "async")]
    pub async fn run_async<C: AsyncCommand>(
        self,
        command: &mut BoundAsyncCommand<C>,
        parameters: &Parameters,
    ) -> i32 {
        match command.bind_parameters(parameters) {
            Ok(()) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dispatching {}.", self.program);
                }

                command.execute().await
            }
            Err(error) => {
                self.user_interface.print_error(error);
                Usage::of::<C::Options>(&self.program).print(&*self.user_interface);
                ExitCode::GeneralError.code()
            }
        }
    }
}
