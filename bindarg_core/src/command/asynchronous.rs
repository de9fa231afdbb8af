use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::api::BindOptions;
use crate::binder::BindError;
use crate::command::{CommandState, ExitCode, OptionsSlot};
use crate::parameters::Parameters;

/// The asynchronous business logic of a command, executed against its bound options.
///
/// Wrap in a [`BoundAsyncCommand`] to bind options and execute.
/// The business logic is expected to observe the [`CancellationToken`] it is handed.
#[async_trait]
pub trait AsyncCommand: Send + Sync {
    /// The options this command binds.
    type Options: BindOptions + Send + Sync;

    /// Run the business logic against `options`, returning an exit code.
    async fn execute_options(
        &self,
        options: &Self::Options,
        cancellation: CancellationToken,
    ) -> i32;

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

/// An [`AsyncCommand`] together with its (initially unbound) options.
pub struct BoundAsyncCommand<C: AsyncCommand> {
    command: C,
    slot: OptionsSlot<C::Options>,
}

impl<C: AsyncCommand> BoundAsyncCommand<C> {
    /// Wrap `command`, in the [`CommandState::Unbound`] state.
    pub fn new(command: C) -> Self {
        Self {
            command,
            slot: OptionsSlot::new(),
        }
    }

    /// Bind the command's options from `parameters`.
    ///
    /// Behaves as [`crate::BoundCommand::bind_parameters`].
    pub fn bind_parameters(&mut self, parameters: &Parameters) -> Result<(), BindError> {
        self.slot.bind(parameters)
    }

    /// Execute the command against its bound options, with a token that is never cancelled.
    pub async fn execute(&self) -> i32 {
        self.execute_with(CancellationToken::new()).await
    }

    /// Execute the command against its bound options, handing it `cancellation`.
    ///
    /// Returns [`ExitCode::NoCommand`] (without running the business logic) when unbound.
    pub async fn execute_with(&self, cancellation: CancellationToken) -> i32 {
        match self.slot.options() {
            Some(options) => self.command.execute_options(options, cancellation).await,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test::FakeOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeAsyncCommand {
        executions: AtomicUsize,
    }

    #[async_trait]
    impl AsyncCommand for FakeAsyncCommand {
        type Options = FakeOptions;

        async fn execute_options(
            &self,
            options: &FakeOptions,
            cancellation: CancellationToken,
        ) -> i32 {
            self.executions.fetch_add(1, Ordering::SeqCst);

            if cancellation.is_cancelled() || options.input == "fail" {
                Self::fail()
            } else {
                Self::success()
            }
        }
    }

    #[test]
    fn success() {
        assert_eq!(FakeAsyncCommand::success(), 0);
    }

    #[test]
    fn fail() {
        assert_eq!(FakeAsyncCommand::fail(), -1);
    }

    #[tokio::test]
    async fn command_unbound() {
        // Setup
        let command = BoundAsyncCommand::new(FakeAsyncCommand::default());

        // Execute
        let exit_code = command.execute().await;

        // Verify
        assert_eq!(exit_code, ExitCode::NoCommand.code());
        assert_eq!(command.state(), CommandState::Unbound);
        assert_eq!(command.command().executions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn command_executes() {
        // Setup
        let parameters = Parameters::from_command_line("foo.exe -one two");
        let mut command = BoundAsyncCommand::new(FakeAsyncCommand::default());

        // Execute
        command.bind_parameters(&parameters).unwrap();
        let exit_code = command.execute().await;

        // Verify
        assert_eq!(exit_code, 0);
        assert_eq!(command.state(), CommandState::Bound);
        assert_eq!(command.options().unwrap().input, "two");
        assert_eq!(command.command().executions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn command_does_not_bind_when_required_parameter_is_missing() {
        // Setup
        let parameters = Parameters::from_command_line("foo.exe -three two");
        let mut command = BoundAsyncCommand::new(FakeAsyncCommand::default());

        // Execute
        let error = command.bind_parameters(&parameters).unwrap_err();

        // Verify
        assert_matches!(error, BindError::RequiredParameterMissing { flag } if flag == "one");
        assert_eq!(command.execute().await, ExitCode::NoCommand.code());
        assert_eq!(command.command().executions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn command_observes_cancellation() {
        // Setup
        let mut command = BoundAsyncCommand::new(FakeAsyncCommand::default());
        command
            .bind_parameters(&Parameters::parse("-one two"))
            .unwrap();
        let cancellation = CancellationToken::new();
        cancellation.cancel();

        // Execute
        let exit_code = command.execute_with(cancellation).await;

        // Verify
        assert_eq!(exit_code, -1);
        assert_eq!(command.command().executions.load(Ordering::SeqCst), 1);
    }
}
