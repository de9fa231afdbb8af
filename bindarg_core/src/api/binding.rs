use crate::api::capture::InvalidCapture;
use crate::binder::{BindError, ParameterBinder};
use crate::model::Nargs;
use crate::parameters::Parameters;

/// Assigns the values of a flag onto its field of `T`.
pub type Assign<T> = fn(&mut T, &[String]) -> Result<(), InvalidCapture>;

/// The binding of one flag onto one field of an options type `T`.
///
/// Options types describe their fields with a `static` table of bindings (see [`BindOptions`]).
/// This is typically generated via `#[derive(BindOptions)]`, but may be written out by hand.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::{capture_values, BindOptions, Binding, Nargs, Parameters, Scalar};
///
/// #[derive(Default)]
/// struct Options {
///     input: String,
/// }
///
/// fn assign_input(target: &mut Options, values: &[String]) -> Result<(), bindarg::InvalidCapture> {
///     capture_values(Scalar::new(&mut target.input), values)
/// }
///
/// impl BindOptions for Options {
///     fn bindings() -> &'static [Binding<Self>] {
///         static BINDINGS: &[Binding<Options>] = &[
///             Binding::new("one", true, Nargs::Precisely(1), None, assign_input),
///         ];
///         BINDINGS
///     }
/// }
///
/// let options = Options::bind(&Parameters::parse("-one two")).unwrap();
/// assert_eq!(options.input, "two");
/// ```
pub struct Binding<T> {
    flag: &'static str,
    required: bool,
    nargs: Nargs,
    help: Option<&'static str>,
    assign: Assign<T>,
}

impl<T> Binding<T> {
    /// Create a binding of `flag` onto the field written by `assign`.
    ///
    /// `nargs` and `help` document the flag in the usage message.
    pub const fn new(
        flag: &'static str,
        required: bool,
        nargs: Nargs,
        help: Option<&'static str>,
        assign: Assign<T>,
    ) -> Self {
        Self {
            flag,
            required,
            nargs,
            help,
            assign,
        }
    }

    /// The flag name, without its `-` marker.
    pub fn flag(&self) -> &'static str {
        self.flag
    }

    /// Whether binding fails when the flag is not specified.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The number of values the flag accepts.
    pub fn nargs(&self) -> Nargs {
        self.nargs
    }

    /// The description of the flag.
    pub fn help(&self) -> Option<&'static str> {
        self.help
    }

    pub(crate) fn assign(&self, target: &mut T, values: &[String]) -> Result<(), InvalidCapture> {
        (self.assign)(target, values)
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let required = if self.required { ", required" } else { "" };
        let help = if let Some(h) = &self.help {
            format!(", {h}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Binding[{t}, -{flag}, {nargs}{required}{help}]",
            t = std::any::type_name::<T>(),
            flag = self.flag,
            nargs = self.nargs,
        )
    }
}

/// An options type whose fields are bound from [`Parameters`].
///
/// Implement via `#[derive(BindOptions)]`.
pub trait BindOptions: Default + Sized + 'static {
    /// The bindings of this type, in field declaration order.
    fn bindings() -> &'static [Binding<Self>];

    /// Bind a fresh instance from `parameters` (see [`ParameterBinder::bind`]).
    fn bind(parameters: &Parameters) -> Result<Self, BindError> {
        ParameterBinder::bind(parameters)
    }
}
