use thiserror::Error;

use crate::api::{BindOptions, InvalidCapture};
use crate::parameters::Parameters;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Why [`Parameters`] could not be bound onto an options type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A required flag was not specified.
    #[error("Required parameter '-{flag}' is missing.")]
    RequiredParameterMissing {
        /// The missing flag.
        flag: String,
    },

    /// The values of a flag could not be captured into its field.
    #[error("Invalid value for parameter '-{flag}': {source}")]
    InvalidValue {
        /// The offending flag.
        flag: String,
        /// What went wrong.
        source: InvalidCapture,
    },
}

impl BindError {
    /// The flag which failed to bind.
    pub fn flag(&self) -> &str {
        match self {
            BindError::RequiredParameterMissing { flag } => flag,
            BindError::InvalidValue { flag, .. } => flag,
        }
    }
}

/// Binds [`Parameters`] onto options types.
pub struct ParameterBinder;

impl ParameterBinder {
    /// Bind a fresh `T` from `parameters`.
    ///
    /// Each binding of `T` is visited in declaration order:
    /// * When its flag was specified (matched case-insensitively), the values are captured into the field.
    /// * When its flag is missing and required, binding fails with [`BindError::RequiredParameterMissing`].
    /// * Otherwise, the field keeps its default.
    ///
    /// The first failure (in declaration order) is returned, and no partially bound `T` is exposed.
    /// Flags that no binding refers to are ignored.
    ///
    /// ### Example
    /// ```
    /// # use bindarg_core as bindarg;
    /// use bindarg::{BindError, BindOptions, ParameterBinder, Parameters};
    /// # use bindarg::{capture_values, Binding, InvalidCapture, Nargs, Scalar};
    /// # #[derive(Debug, Default)]
    /// # struct Options { input: String }
    /// # fn assign_input(target: &mut Options, values: &[String]) -> Result<(), InvalidCapture> {
    /// #     capture_values(Scalar::new(&mut target.input), values)
    /// # }
    /// # impl BindOptions for Options {
    /// #     fn bindings() -> &'static [Binding<Self>] {
    /// #         static BINDINGS: &[Binding<Options>] = &[Binding::new("one", true, Nargs::Precisely(1), None, assign_input)];
    /// #         BINDINGS
    /// #     }
    /// # }
    ///
    /// let options: Options = ParameterBinder::bind(&Parameters::from_command_line("foo.exe -ONE two")).unwrap();
    /// assert_eq!(options.input, "two");
    ///
    /// let error = ParameterBinder::bind::<Options>(&Parameters::from_command_line("foo.exe -three two")).unwrap_err();
    /// assert_eq!(error, BindError::RequiredParameterMissing { flag: "one".to_string() });
    /// ```
    pub fn bind<T: BindOptions>(parameters: &Parameters) -> Result<T, BindError> {
        let mut target = T::default();
        let bindings = T::bindings();

        for binding in bindings {
            match parameters.get(binding.flag()) {
                Some(values) => {
                    binding
                        .assign(&mut target, values)
                        .map_err(|source| BindError::InvalidValue {
                            flag: binding.flag().to_string(),
                            source,
                        })?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Bound '-{}' with {values:?}.", binding.flag());
                    }
                }
                None => {
                    if binding.is_required() {
                        return Err(BindError::RequiredParameterMissing {
                            flag: binding.flag().to_string(),
                        });
                    }
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            for (name, _) in parameters.iter() {
                if !bindings
                    .iter()
                    .any(|binding| binding.flag().to_lowercase() == name.to_lowercase())
                {
                    debug!(
                        "Ignoring '-{name}', which {t} does not bind.",
                        t = std::any::type_name::<T>()
                    );
                }
            }
        }

        Ok(target)
    }
}
